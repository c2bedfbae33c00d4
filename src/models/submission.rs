use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use super::address::ContractAddress;

/// A suspicious-address report as entered in the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSubmission {
    pub address: ContractAddress,
    pub description: Option<String>,
    pub email: Option<String>,
}

impl ReportSubmission {
    pub fn new(address: ContractAddress) -> Self {
        Self {
            address,
            description: None,
            email: None,
        }
    }
    
    /// Blank descriptions are treated as absent
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }
    
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }
    
    /// Request body sent to the report endpoint
    pub fn payload(&self, timestamp: DateTime<Utc>) -> ReportPayload<'_> {
        ReportPayload {
            address: self.address.as_str(),
            description: self.description.as_deref(),
            reporter_email: self.email.as_deref(),
            source: "website",
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReportPayload<'a> {
    pub address: &'a str,
    pub description: Option<&'a str>,
    pub reporter_email: Option<&'a str>,
    pub source: &'static str,
    pub timestamp: String,
}
