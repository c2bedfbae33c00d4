pub mod api;
pub mod config;
pub mod core;
pub mod models;
pub mod render;
pub mod resolvers;
pub mod utils;
pub mod validation;
pub mod view;

pub use crate::core::{AddressReporter, ContractResolver, ContractScanner, ReportSink, ScanOutcome};
pub use config::{ArgusConfig, Mode};
pub use models::{ContractAddress, ContractReport, ReportSubmission, RiskLevel};
pub use render::{classify_score, format_address};
pub use utils::{ArgusError, Result};
