use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Band a 0-100 score. Each upper bound belongs to the lower band.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=20 => RiskLevel::Low,
            21..=50 => RiskLevel::Medium,
            51..=80 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
    
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
            RiskLevel::Critical => "Critical Risk",
        }
    }
    
    pub fn color_band(&self) -> ColorBand {
        match self {
            RiskLevel::Low => ColorBand::Green,
            RiskLevel::Medium => ColorBand::Yellow,
            RiskLevel::High => ColorBand::Orange,
            RiskLevel::Critical => ColorBand::Red,
        }
    }
    
    /// Slug used for styling hooks (`score-label--{category}`)
    pub fn category(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
    
    pub fn emoji(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "🔴",
            RiskLevel::High => "🟠",
            RiskLevel::Medium => "🟡",
            RiskLevel::Low => "🟢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorBand {
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorBand {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorBand::Green => "#22c55e",
            ColorBand::Yellow => "#eab308",
            ColorBand::Orange => "#f97316",
            ColorBand::Red => "#f43f5e",
        }
    }
}

/// Everything the score card needs to know about a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskClass {
    pub level: RiskLevel,
    pub label: &'static str,
    pub color_band: ColorBand,
    pub category: &'static str,
}

impl From<RiskLevel> for RiskClass {
    fn from(level: RiskLevel) -> Self {
        Self {
            level,
            label: level.label(),
            color_band: level.color_band(),
            category: level.category(),
        }
    }
}
