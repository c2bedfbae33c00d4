//! Runtime configuration
//!
//! Defaults describe the hosted API and demo mode. `from_env` overrides them
//! from `ARGUS_*` variables; the binary loads a `.env` file first.

use std::time::Duration;
use url::Url;

use crate::resolvers::demo::{ANALYZE_DELAY, SUBMIT_DELAY};
use crate::utils::{ArgusError, Result};

pub const DEFAULT_API_BASE: &str = "https://api.argusshield.io";
pub const DEFAULT_REPORT_URL: &str = "https://api.argusshield.io/v1/report";
pub const DEFAULT_EXPLORER_BASE: &str = "https://etherscan.io";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Talk to the remote API
    Live,
    /// Fabricate results locally
    #[default]
    Demo,
}

impl std::str::FromStr for Mode {
    type Err = ArgusError;
    
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Mode::Live),
            "demo" => Ok(Mode::Demo),
            other => Err(ArgusError::Config(format!("unknown mode '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArgusConfig {
    pub mode: Mode,
    /// Base for `/v1/contract/analyze`
    pub api_base: Url,
    pub report_url: Url,
    /// Block explorer used for inspection links
    pub explorer_base: Url,
    pub analyze_delay: Duration,
    pub submit_delay: Duration,
    pub timeout_secs: u64,
}

impl Default for ArgusConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Demo,
            api_base: parse_default(DEFAULT_API_BASE),
            report_url: parse_default(DEFAULT_REPORT_URL),
            explorer_base: parse_default(DEFAULT_EXPLORER_BASE),
            analyze_delay: ANALYZE_DELAY,
            submit_delay: SUBMIT_DELAY,
            timeout_secs: 30,
        }
    }
}

fn parse_default(s: &str) -> Url {
    Url::parse(s).expect("Invalid built-in URL")
}

fn parse_url(var: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| ArgusError::Config(format!("{}: {}", var, e)))
}

impl ArgusConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ARGUS_MODE` (`live` or `demo`, default: `demo`)
    /// - `ARGUS_API_BASE` (default: `https://api.argusshield.io`)
    /// - `ARGUS_REPORT_URL` (default: `https://api.argusshield.io/v1/report`)
    /// - `ARGUS_EXPLORER_BASE` (default: `https://etherscan.io`)
    /// - `ARGUS_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
    
    /// Same as [`ArgusConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        
        if let Some(mode) = lookup("ARGUS_MODE") {
            config.mode = mode.parse()?;
        }
        if let Some(base) = lookup("ARGUS_API_BASE") {
            config.api_base = parse_url("ARGUS_API_BASE", &base)?;
        }
        if let Some(report) = lookup("ARGUS_REPORT_URL") {
            config.report_url = parse_url("ARGUS_REPORT_URL", &report)?;
        }
        if let Some(explorer) = lookup("ARGUS_EXPLORER_BASE") {
            config.explorer_base = parse_url("ARGUS_EXPLORER_BASE", &explorer)?;
        }
        if let Some(timeout) = lookup("ARGUS_TIMEOUT_SECS") {
            config.timeout_secs = timeout
                .parse()
                .map_err(|_| ArgusError::Config(format!("ARGUS_TIMEOUT_SECS: '{}' is not a number", timeout)))?;
        }
        
        Ok(config)
    }
    
    /// Endpoint for contract analysis. Appended to any path the base already has.
    pub fn analyze_url(&self) -> Result<Url> {
        let endpoint = format!("{}/v1/contract/analyze", self.api_base.as_str().trim_end_matches('/'));
        Url::parse(&endpoint).map_err(|e| ArgusError::Config(format!("analyze endpoint: {}", e)))
    }
}
