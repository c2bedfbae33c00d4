use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::address::ContractAddress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    New,
    Medium,
    Old,
}

impl AgeCategory {
    pub fn from_age_days(days: u32) -> Self {
        if days < 30 {
            AgeCategory::New
        } else if days < 180 {
            AgeCategory::Medium
        } else {
            AgeCategory::Old
        }
    }
    
    pub fn badge(&self) -> &'static str {
        match self {
            AgeCategory::New => "result-badge--new",
            AgeCategory::Medium => "result-badge--medium",
            AgeCategory::Old => "result-badge--old",
        }
    }
}

/// A decimal amount with its unit, e.g. `3.1416 ETH`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub amount: String,
    pub unit: String,
}

impl Balance {
    pub fn new(amount: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            unit: unit.into(),
        }
    }
    
    pub fn zero_eth() -> Self {
        Self::new("0", "ETH")
    }
}

impl FromStr for Balance {
    type Err = String;
    
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let amount = parts.next().ok_or_else(|| "empty balance".to_string())?;
        let unit = parts.next().unwrap_or("ETH");
        
        if parts.next().is_some() || amount.parse::<f64>().is_err() {
            return Err(format!("malformed balance: {}", s));
        }
        
        Ok(Self::new(amount, unit))
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// Resolved analysis of one contract
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractReport {
    pub address: ContractAddress,
    pub name: String,
    pub contract_type: String,
    pub compiler: String,
    pub license: String,
    pub verified: bool,
    pub proxy: bool,
    pub created: NaiveDate,
    pub deployer: ContractAddress,
    pub tx_count: u64,
    pub balance: Balance,
    pub risk_score: u8,
    pub warnings: Vec<String>,
    pub age_category: AgeCategory,
}

impl ContractReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

impl fmt::Display for ContractReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Address:  {}", self.address)?;
        writeln!(f, "Name:     {} ({})", self.name, self.contract_type)?;
        writeln!(f, "Verified: {}", self.verified)?;
        writeln!(f, "Created:  {}", self.created)?;
        writeln!(f, "Risk:     {}/100", self.risk_score)?;
        
        for warning in &self.warnings {
            writeln!(f, "  ⚠️  {}", warning)?;
        }
        
        Ok(())
    }
}
