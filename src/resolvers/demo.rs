use async_trait::async_trait;
use chrono::{Days, NaiveDate, Utc};
use ethers::types::{Address, U256};
use ethers::utils::format_ether;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use super::known;
use crate::core::{ContractResolver, ReportSink};
use crate::models::*;
use crate::utils::Result;

pub const BASE_SCORE: u8 = 20;
pub const UNVERIFIED_PENALTY: u8 = 35;
pub const YOUNG_PENALTY: u8 = 25;
pub const VERY_YOUNG_PENALTY: u8 = 20;

const YOUNG_DAYS: u32 = 30;
const VERY_YOUNG_DAYS: u32 = 7;
const MAX_AGE_DAYS: u32 = 1000;

pub const WARN_UNVERIFIED: &str = "No verified source code on Etherscan";
pub const WARN_VERY_YOUNG: &str = "Less than a week old. Be extra careful.";
pub const WARN_BUSY_DEPLOYER: &str = "Deployer has created a lot of contracts recently";

/// Default simulated latency for contract analysis
pub const ANALYZE_DELAY: Duration = Duration::from_millis(1500);
/// Default simulated latency for report submission
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Score from the two signals the demo generator knows about.
///
/// Adding a day of age or gaining verification never raises the score.
pub fn risk_score(verified: bool, age_days: u32) -> u8 {
    let mut score = BASE_SCORE as u32;
    
    if !verified {
        score += UNVERIFIED_PENALTY as u32;
    }
    if age_days < YOUNG_DAYS {
        score += YOUNG_PENALTY as u32;
    }
    if age_days < VERY_YOUNG_DAYS {
        score += VERY_YOUNG_PENALTY as u32;
    }
    
    score.min(100) as u8
}

/// The random draws behind one synthetic report
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticProfile {
    pub verified: bool,
    pub age_days: u32,
    pub busy_deployer: bool,
    pub proxy: bool,
    pub deployer: Address,
    pub tx_count: u64,
    pub balance_wei: U256,
}

impl SyntheticProfile {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            verified: rng.gen_bool(0.6),
            age_days: rng.gen_range(0..MAX_AGE_DAYS),
            busy_deployer: rng.gen_bool(0.3),
            proxy: rng.gen_bool(0.2),
            deployer: Address::from(rng.gen::<[u8; 20]>()),
            tx_count: rng.gen_range(0..10_000),
            // Up to 10 ETH
            balance_wei: U256::from(rng.gen_range(0..10_000_000_000_000_000_000u64)),
        }
    }
    
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        
        if !self.verified {
            warnings.push(WARN_UNVERIFIED.to_string());
        }
        if self.age_days < YOUNG_DAYS {
            warnings.push(format!("Only {} days old", self.age_days));
        }
        if self.age_days < VERY_YOUNG_DAYS {
            warnings.push(WARN_VERY_YOUNG.to_string());
        }
        if self.busy_deployer {
            warnings.push(WARN_BUSY_DEPLOYER.to_string());
        }
        
        warnings
    }
    
    fn balance(&self) -> Balance {
        let amount = format_ether(self.balance_wei)
            .parse::<f64>()
            .map(|eth| format!("{:.4}", eth))
            .unwrap_or_else(|_| "0.0000".to_string());
        
        Balance::new(amount, "ETH")
    }
    
    pub fn into_report(self, address: &ContractAddress, today: NaiveDate) -> ContractReport {
        let verified = self.verified;
        let pick = |yes: &str, no: &str| (if verified { yes } else { no }).to_string();
        
        ContractReport {
            address: address.clone(),
            name: pick("UnknownContract", "Unknown"),
            contract_type: "Contract".to_string(),
            compiler: pick("v0.8.19", "Unknown"),
            license: pick("None", "Unknown"),
            verified,
            proxy: self.proxy,
            created: today - Days::new(self.age_days as u64),
            deployer: ContractAddress::from(self.deployer),
            tx_count: self.tx_count,
            balance: self.balance(),
            risk_score: risk_score(verified, self.age_days),
            warnings: self.warnings(),
            age_category: AgeCategory::from_age_days(self.age_days),
        }
    }
}

/// Offline resolver that fabricates plausible reports
pub struct DemoResolver {
    rng: Mutex<StdRng>,
    delay: Duration,
    today: Option<NaiveDate>,
}

impl DemoResolver {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            delay: ANALYZE_DELAY,
            today: None,
        }
    }
    
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
    
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
    
    /// Pin the calendar used to back-date synthetic contracts
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
    
    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }
    
    fn sample_profile(&self) -> SyntheticProfile {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        SyntheticProfile::sample(&mut *rng)
    }
}

impl Default for DemoResolver {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

#[async_trait]
impl ContractResolver for DemoResolver {
    fn name(&self) -> &'static str {
        "demo"
    }
    
    async fn resolve(&self, address: &ContractAddress) -> Result<ContractReport> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        
        if let Some(report) = known::lookup(address).and_then(|k| k.to_report(address)) {
            tracing::debug!("Known demo contract {} ({})", address, report.name);
            return Ok(report);
        }
        
        let profile = self.sample_profile();
        tracing::debug!(
            "Synthetic profile for {}: verified={} age={}d",
            address,
            profile.verified,
            profile.age_days
        );
        
        Ok(profile.into_report(address, self.today()))
    }
}

/// Report sink that accepts everything after a short pause
pub struct DemoReportSink {
    delay: Duration,
}

impl DemoReportSink {
    pub fn new() -> Self {
        Self { delay: SUBMIT_DELAY }
    }
    
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for DemoReportSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportSink for DemoReportSink {
    fn name(&self) -> &'static str {
        "demo"
    }
    
    async fn submit(&self, submission: &ReportSubmission) -> Result<()> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        
        tracing::info!(
            "📢 Report submitted (demo): {} by {}",
            submission.address,
            submission.email.as_deref().unwrap_or("anonymous")
        );
        
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn addr(s: &str) -> ContractAddress {
        ContractAddress::parse(s).unwrap()
    }
    
    fn profile(verified: bool, age_days: u32) -> SyntheticProfile {
        SyntheticProfile {
            verified,
            age_days,
            busy_deployer: false,
            proxy: false,
            deployer: Address::zero(),
            tx_count: 42,
            balance_wei: U256::exp10(18),
        }
    }
    
    #[test]
    fn test_score_penalties() {
        assert_eq!(risk_score(true, 500), 20);
        assert_eq!(risk_score(false, 500), 55);
        assert_eq!(risk_score(true, 10), 45);
        assert_eq!(risk_score(true, 3), 65);
        assert_eq!(risk_score(false, 3), 100);
    }
    
    #[test]
    fn test_score_is_monotone() {
        for age in 0..MAX_AGE_DAYS {
            assert!(risk_score(false, age) >= risk_score(true, age));
            assert!(risk_score(false, age) >= risk_score(false, age + 1));
            assert!(risk_score(true, age) >= risk_score(true, age + 1));
        }
    }
    
    #[test]
    fn test_unverified_three_day_old_contract() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let report = profile(false, 3)
            .into_report(&addr("0x1111111111111111111111111111111111111111"), today);
        
        assert_eq!(report.risk_score, 100);
        assert_eq!(report.warnings, vec![
            WARN_UNVERIFIED.to_string(),
            "Only 3 days old".to_string(),
            WARN_VERY_YOUNG.to_string(),
        ]);
        assert_eq!(report.age_category, AgeCategory::New);
        assert_eq!(report.created, NaiveDate::from_ymd_opt(2024, 6, 7).unwrap());
        assert_eq!(report.name, "Unknown");
        assert_eq!(report.compiler, "Unknown");
    }
    
    #[test]
    fn test_verified_old_contract_has_no_warnings() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let report = profile(true, 400)
            .into_report(&addr("0x1111111111111111111111111111111111111111"), today);
        
        assert_eq!(report.risk_score, BASE_SCORE);
        assert!(report.warnings.is_empty());
        assert_eq!(report.age_category, AgeCategory::Old);
        assert_eq!(report.name, "UnknownContract");
        assert_eq!(report.balance, Balance::new("1.0000", "ETH"));
        assert_eq!(report.deployer.as_str(), "0x0000000000000000000000000000000000000000");
    }
    
    #[test]
    fn test_busy_deployer_warning_is_last() {
        let mut p = profile(false, 100);
        p.busy_deployer = true;
        assert_eq!(p.warnings(), vec![WARN_UNVERIFIED.to_string(), WARN_BUSY_DEPLOYER.to_string()]);
    }
    
    #[test]
    fn test_sampled_profiles_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = SyntheticProfile::sample(&mut rng);
            assert!(p.age_days < MAX_AGE_DAYS);
            assert!(p.tx_count < 10_000);
            assert!(p.balance_wei < U256::exp10(19));
        }
    }
    
    #[tokio::test]
    async fn test_same_seed_same_report() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let a = DemoResolver::seeded(99).with_delay(Duration::ZERO).with_today(today);
        let b = DemoResolver::seeded(99).with_delay(Duration::ZERO).with_today(today);
        let target = addr("0x2222222222222222222222222222222222222222");
        
        assert_eq!(a.resolve(&target).await.unwrap(), b.resolve(&target).await.unwrap());
    }
    
    #[tokio::test]
    async fn test_known_contract_keeps_caller_casing() {
        let resolver = DemoResolver::seeded(1).with_delay(Duration::ZERO);
        let mixed = addr("0xdAC17F958D2ee523a2206206994597C13D831ec7");
        
        let report = resolver.resolve(&mixed).await.unwrap();
        assert_eq!(report.address, mixed);
        assert_eq!(report.name, "TetherToken");
        assert_eq!(report.risk_score, 8);
        assert!(report.warnings.is_empty());
    }
    
    #[tokio::test(start_paused = true)]
    async fn test_demo_latency_is_simulated() {
        let resolver = DemoResolver::seeded(1);
        let start = tokio::time::Instant::now();
        
        resolver
            .resolve(&addr("0x3333333333333333333333333333333333333333"))
            .await
            .unwrap();
        
        assert!(start.elapsed() >= ANALYZE_DELAY);
    }
}
