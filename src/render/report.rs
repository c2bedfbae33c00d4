use chrono::NaiveDate;
use serde::Serialize;
use url::Url;

use super::format::{age_text, explorer_url, format_address, format_date, group_thousands};
use crate::models::{ContractReport, RiskClass, RiskLevel};

/// Map a score onto its risk band
pub fn classify_score(score: u8) -> RiskClass {
    RiskClass::from(RiskLevel::from_score(score))
}

/// Display-ready strings for every field of the results panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedReport {
    pub address: String,
    pub score: u8,
    pub risk: RiskClass,
    pub name: String,
    pub contract_type: String,
    pub compiler: String,
    pub license: String,
    pub verified_text: &'static str,
    pub verified_badge: &'static str,
    pub proxy_text: &'static str,
    pub created_text: String,
    pub age_text: String,
    pub age_badge: &'static str,
    pub deployer_short: String,
    pub deployer_full: String,
    pub tx_count_text: String,
    pub balance_text: String,
    pub last_activity: &'static str,
    pub warnings: Vec<String>,
    pub explorer_url: String,
}

impl RenderedReport {
    /// The warnings card is only shown when there is something in it
    pub fn warnings_visible(&self) -> bool {
        !self.warnings.is_empty()
    }
}

pub fn render_report(report: &ContractReport, today: NaiveDate, explorer_base: &Url) -> RenderedReport {
    let address = report.address.as_str();
    
    let (verified_text, verified_badge) = if report.verified {
        ("Verified ✓", "result-badge--verified")
    } else {
        ("Not Verified", "result-badge--unverified")
    };
    
    RenderedReport {
        address: address.to_string(),
        score: report.risk_score,
        risk: classify_score(report.risk_score),
        name: or_placeholder(&report.name, "Unknown"),
        contract_type: or_placeholder(&report.contract_type, "Contract"),
        compiler: or_placeholder(&report.compiler, "Unknown"),
        license: or_placeholder(&report.license, "Unknown"),
        verified_text,
        verified_badge,
        proxy_text: if report.proxy { "Yes (Upgradeable)" } else { "No" },
        created_text: format_date(report.created),
        age_text: age_text(report.created, today),
        age_badge: report.age_category.badge(),
        deployer_short: format_address(report.deployer.as_str()),
        deployer_full: report.deployer.to_string(),
        tx_count_text: group_thousands(report.tx_count),
        balance_text: report.balance.to_string(),
        last_activity: "Recently",
        warnings: report.warnings.clone(),
        explorer_url: explorer_url(explorer_base, address),
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
