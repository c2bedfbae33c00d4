//! Data resolvers: where contract reports and report submissions go
//!
//! Demo mode fabricates results locally; live mode talks to the API.
//! The mode is fixed by configuration when the resolvers are built.

pub mod demo;
pub mod known;

pub use demo::{DemoReportSink, DemoResolver, SyntheticProfile};

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::config::{ArgusConfig, Mode};
use crate::core::{ContractResolver, ReportSink};
use crate::utils::Result;

/// Resolver and sink pair for one configuration
pub struct Resolvers {
    pub contracts: Arc<dyn ContractResolver>,
    pub reports: Arc<dyn ReportSink>,
}

impl Resolvers {
    /// Build both halves. `seed` pins the demo generator.
    pub fn from_config(config: &ArgusConfig, seed: Option<u64>) -> Result<Self> {
        match config.mode {
            Mode::Live => {
                let client = Arc::new(ApiClient::new(config)?);
                tracing::info!("📡 Live mode: {}", client.analyze_url());
                
                Ok(Self {
                    contracts: client.clone(),
                    reports: client,
                })
            }
            Mode::Demo => {
                let rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                tracing::info!("📡 Demo mode: results are synthetic");
                
                Ok(Self {
                    contracts: Arc::new(DemoResolver::new(rng).with_delay(config.analyze_delay)),
                    reports: Arc::new(DemoReportSink::new().with_delay(config.submit_delay)),
                })
            }
        }
    }
}
