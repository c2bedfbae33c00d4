pub mod traits;
pub mod scanner;
pub mod reporter;

pub use traits::{ContractResolver, ReportSink};
pub use scanner::{ContractScanner, ScanOutcome};
pub use reporter::AddressReporter;
