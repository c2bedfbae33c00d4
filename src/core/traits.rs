use async_trait::async_trait;
use crate::models::{ContractAddress, ContractReport, ReportSubmission};
use crate::utils::Result;

/// Core abstraction: anything that can produce a report for a contract
#[async_trait]
pub trait ContractResolver: Send + Sync {
    /// Unique identifier for this resolver
    fn name(&self) -> &'static str;
    
    /// Resolve one address into a full report
    async fn resolve(&self, address: &ContractAddress) -> Result<ContractReport>;
}

/// Destination for suspicious-address reports
#[async_trait]
pub trait ReportSink: Send + Sync {
    fn name(&self) -> &'static str;
    
    /// Deliver a report once. Any failure is final for this submission.
    async fn submit(&self, submission: &ReportSubmission) -> Result<()>;
}
