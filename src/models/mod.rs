pub mod address;
pub mod contract;
pub mod risk;
pub mod submission;

pub use address::ContractAddress;
pub use contract::{AgeCategory, Balance, ContractReport};
pub use risk::{ColorBand, RiskClass, RiskLevel};
pub use submission::{ReportPayload, ReportSubmission};
