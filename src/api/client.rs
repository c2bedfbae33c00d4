use async_trait::async_trait;
use chrono::Utc;
use std::time::Duration;
use url::Url;

use super::wire::{AnalysisResponse, AnalyzeRequest};
use crate::config::ArgusConfig;
use crate::core::{ContractResolver, ReportSink};
use crate::models::{ContractAddress, ContractReport, ReportSubmission};
use crate::utils::{ArgusError, Result};

/// HTTP client for the Argus analysis and reporting endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    analyze_url: Url,
    report_url: Url,
}

impl ApiClient {
    /// Create a new client
    pub fn new(config: &ArgusConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ArgusError::Config(format!("HTTP client: {}", e)))?;
        
        Ok(Self {
            http,
            analyze_url: config.analyze_url()?,
            report_url: config.report_url.clone(),
        })
    }
    
    pub fn analyze_url(&self) -> &Url {
        &self.analyze_url
    }
    
    pub fn report_url(&self) -> &Url {
        &self.report_url
    }
    
    /// POST a JSON body, treating every non-2xx status as failure
    async fn post<B: serde::Serialize + ?Sized>(&self, url: &Url, body: &B) -> Result<reqwest::Response> {
        tracing::debug!("POST {}", url);
        
        let response = self.http.post(url.clone()).json(body).send().await?;
        let status = response.status();
        
        if !status.is_success() {
            tracing::warn!("{} answered {}", url, status);
            return Err(ArgusError::ResolutionFailed(format!("API request failed ({})", status)));
        }
        
        Ok(response)
    }
    
    /// Analyze one contract on Ethereum mainnet
    pub async fn analyze(&self, address: &ContractAddress) -> Result<ContractReport> {
        let response = self.post(&self.analyze_url, &AnalyzeRequest::ethereum(address)).await?;
        let body: AnalysisResponse = response.json().await?;
        
        body.into_report(address, Utc::now().date_naive())
    }
    
    /// Send a suspicious-address report
    pub async fn submit_report(&self, submission: &ReportSubmission) -> Result<()> {
        let payload = submission.payload(Utc::now());
        self.post(&self.report_url, &payload).await?;
        
        tracing::info!("📢 Report submitted: {}", submission.address);
        Ok(())
    }
}

#[async_trait]
impl ContractResolver for ApiClient {
    fn name(&self) -> &'static str {
        "live"
    }
    
    async fn resolve(&self, address: &ContractAddress) -> Result<ContractReport> {
        self.analyze(address).await
    }
}

#[async_trait]
impl ReportSink for ApiClient {
    fn name(&self) -> &'static str {
        "live"
    }
    
    async fn submit(&self, submission: &ReportSubmission) -> Result<()> {
        self.submit_report(submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_endpoints_from_config() {
        let client = ApiClient::new(&ArgusConfig::default()).expect("client builds");
        
        assert_eq!(client.analyze_url().as_str(), "https://api.argusshield.io/v1/contract/analyze");
        assert_eq!(client.report_url().as_str(), "https://api.argusshield.io/v1/report");
    }
}
