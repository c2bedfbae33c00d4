//! Hand-authored reports for well-known mainnet contracts

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::{AgeCategory, Balance, ContractAddress, ContractReport};

#[derive(Debug, Clone)]
pub struct KnownContract {
    pub name: &'static str,
    pub contract_type: &'static str,
    pub verified: bool,
    pub proxy: bool,
    pub compiler: &'static str,
    pub license: &'static str,
    /// (year, month, day)
    pub created: (i32, u32, u32),
    pub deployer: &'static str,
    pub tx_count: u64,
    pub balance: &'static str,
    pub risk_score: u8,
}

impl KnownContract {
    /// Build the report, echoing the caller's address casing
    pub fn to_report(&self, address: &ContractAddress) -> Option<ContractReport> {
        let (y, m, d) = self.created;
        
        Some(ContractReport {
            address: address.clone(),
            name: self.name.to_string(),
            contract_type: self.contract_type.to_string(),
            compiler: self.compiler.to_string(),
            license: self.license.to_string(),
            verified: self.verified,
            proxy: self.proxy,
            created: NaiveDate::from_ymd_opt(y, m, d)?,
            deployer: ContractAddress::parse(self.deployer)?,
            tx_count: self.tx_count,
            balance: self.balance.parse().unwrap_or_else(|_| Balance::zero_eth()),
            risk_score: self.risk_score,
            warnings: Vec::new(),
            age_category: AgeCategory::Old,
        })
    }
}

/// Keyed by lower-case address
static KNOWN_CONTRACTS: Lazy<HashMap<&'static str, KnownContract>> = Lazy::new(|| {
    let mut map = HashMap::new();
    
    map.insert(
        "0xdac17f958d2ee523a2206206994597c13d831ec7", // USDT
        KnownContract {
            name: "TetherToken",
            contract_type: "ERC-20",
            verified: true,
            proxy: false,
            compiler: "v0.4.18",
            license: "MIT",
            created: (2017, 11, 28),
            deployer: "0x36928500bc1dcd7af6a2b4008875cc336b927d57",
            tx_count: 185_432_156,
            balance: "0 ETH",
            risk_score: 8,
        },
    );
    
    map.insert(
        "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", // USDC
        KnownContract {
            name: "FiatTokenV2_1",
            contract_type: "ERC-20 (Proxy)",
            verified: true,
            proxy: true,
            compiler: "v0.6.12",
            license: "MIT",
            created: (2018, 8, 3),
            deployer: "0x95ba4cf87d6723ad9c0db21737d862be80e93911",
            tx_count: 142_891_432,
            balance: "0 ETH",
            risk_score: 5,
        },
    );
    
    map
});

/// Exact match on the lower-cased address
pub fn lookup(address: &ContractAddress) -> Option<&'static KnownContract> {
    KNOWN_CONTRACTS.get(address.to_lowercase().as_str())
}

pub fn known_addresses() -> Vec<&'static str> {
    let mut addresses: Vec<_> = KNOWN_CONTRACTS.keys().copied().collect();
    addresses.sort_unstable();
    addresses
}
