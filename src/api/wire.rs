//! JSON shapes exchanged with the analysis API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::*;
use crate::utils::{ArgusError, Result};

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub address: &'a str,
    pub network: &'static str,
}

impl<'a> AnalyzeRequest<'a> {
    pub fn ethereum(address: &'a ContractAddress) -> Self {
        Self {
            address: address.as_str(),
            network: "ethereum",
        }
    }
}

/// Transaction counts arrive either as numbers or pre-grouped strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TxCount {
    Number(u64),
    Text(String),
}

impl Default for TxCount {
    fn default() -> Self {
        TxCount::Number(0)
    }
}

impl TxCount {
    fn value(&self) -> Result<u64> {
        match self {
            TxCount::Number(n) => Ok(*n),
            TxCount::Text(s) => s
                .chars()
                .filter(|c| *c != ',' && !c.is_whitespace())
                .collect::<String>()
                .parse()
                .map_err(|_| ArgusError::ResolutionFailed(format!("bad txCount '{}'", s))),
        }
    }
}

/// Response body of `POST /v1/contract/analyze`.
///
/// Mirrors the field names the demo data uses. Display strings are optional
/// and fall back to the same placeholders the renderer would show.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub compiler: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub proxy: bool,
    pub created: NaiveDate,
    pub deployer: ContractAddress,
    #[serde(default)]
    pub tx_count: TxCount,
    #[serde(default)]
    pub balance: Option<String>,
    pub risk_score: u8,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub age_category: Option<AgeCategory>,
}

impl AnalysisResponse {
    pub fn into_report(self, address: &ContractAddress, today: NaiveDate) -> Result<ContractReport> {
        if self.risk_score > 100 {
            return Err(ArgusError::ResolutionFailed(format!(
                "riskScore {} out of range",
                self.risk_score
            )));
        }
        
        let balance = match self.balance.as_deref() {
            Some(raw) => raw.parse::<Balance>().map_err(ArgusError::ResolutionFailed)?,
            None => Balance::zero_eth(),
        };
        
        let age_category = self.age_category.unwrap_or_else(|| {
            let days = (today - self.created).num_days().max(0);
            AgeCategory::from_age_days(days.min(u32::MAX as i64) as u32)
        });
        
        Ok(ContractReport {
            address: address.clone(),
            name: self.name.unwrap_or_else(|| "Unknown".to_string()),
            contract_type: self.contract_type.unwrap_or_else(|| "Contract".to_string()),
            compiler: self.compiler.unwrap_or_else(|| "Unknown".to_string()),
            license: self.license.unwrap_or_else(|| "Unknown".to_string()),
            verified: self.verified,
            proxy: self.proxy,
            created: self.created,
            deployer: self.deployer,
            tx_count: self.tx_count.value()?,
            balance,
            risk_score: self.risk_score,
            warnings: self.warnings,
            age_category,
        })
    }
}
