//! Risk assessment value types.
//!
//! A [`RiskAssessment`] is a pure derived view of one [`PatientRecord`]:
//! four category scores clamped to fixed ceilings, an overall [`RiskTier`]
//! computed from the clamped maximum, and the ordered list of factors that
//! contributed. It has no setters and cannot be deserialized, so the tier
//! always agrees with the scores.
//!
//! [`PatientRecord`]: crate::PatientRecord

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// One of the four scored complication categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    /// Peri-operative mortality.
    Mortality,
    /// Surgical site / post-operative infection.
    Infection,
    /// Bleeding complications.
    Bleeding,
    /// Unplanned readmission.
    Readmission,
}

impl RiskCategory {
    /// All categories in reporting order.
    pub const ALL: [RiskCategory; 4] = [
        RiskCategory::Mortality,
        RiskCategory::Infection,
        RiskCategory::Bleeding,
        RiskCategory::Readmission,
    ];

    /// Starting score before any rule fires.
    pub fn base(self) -> f64 {
        CategoryScores::BASELINE.get(self)
    }

    /// Maximum reportable score.
    pub fn ceiling(self) -> f64 {
        CategoryScores::CEILING.get(self)
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mortality => "mortality",
            Self::Infection => "infection",
            Self::Bleeding => "bleeding",
            Self::Readmission => "readmission",
        };
        f.write_str(s)
    }
}

/// A score (or score delta) for each category, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    /// Mortality.
    pub mortality: f64,
    /// Infection.
    pub infection: f64,
    /// Bleeding.
    pub bleeding: f64,
    /// Readmission.
    pub readmission: f64,
}

impl CategoryScores {
    /// No contribution to any category.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Scores every assessment starts from.
    pub const BASELINE: Self = Self::new(2.5, 8.0, 5.5, 12.0);

    /// Per-category caps applied after all rules have fired.
    pub const CEILING: Self = Self::new(25.0, 30.0, 25.0, 35.0);

    /// Create scores in `mortality, infection, bleeding, readmission` order.
    pub const fn new(mortality: f64, infection: f64, bleeding: f64, readmission: f64) -> Self {
        Self {
            mortality,
            infection,
            bleeding,
            readmission,
        }
    }

    /// Score for one category.
    pub fn get(&self, category: RiskCategory) -> f64 {
        match category {
            RiskCategory::Mortality => self.mortality,
            RiskCategory::Infection => self.infection,
            RiskCategory::Bleeding => self.bleeding,
            RiskCategory::Readmission => self.readmission,
        }
    }

    /// Cap every category at [`Self::CEILING`] (and at zero from below).
    #[must_use]
    pub fn clamped(self) -> Self {
        let cap = Self::CEILING;
        Self::new(
            self.mortality.clamp(0.0, cap.mortality),
            self.infection.clamp(0.0, cap.infection),
            self.bleeding.clamp(0.0, cap.bleeding),
            self.readmission.clamp(0.0, cap.readmission),
        )
    }

    /// Largest of the four scores.
    pub fn max(&self) -> f64 {
        self.mortality
            .max(self.infection)
            .max(self.bleeding)
            .max(self.readmission)
    }

    /// Whether every category is finite.
    pub fn is_finite(&self) -> bool {
        RiskCategory::ALL.iter().all(|c| self.get(*c).is_finite())
    }

    /// Whether no category is negative.
    pub fn is_non_negative(&self) -> bool {
        RiskCategory::ALL.iter().all(|c| self.get(*c) >= 0.0)
    }
}

impl Add for CategoryScores {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.mortality + rhs.mortality,
            self.infection + rhs.infection,
            self.bleeding + rhs.bleeding,
            self.readmission + rhs.readmission,
        )
    }
}

/// Aggregated risk tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Maximum category score ≤ 8.
    Low,
    /// Maximum category score in (8, 15].
    Moderate,
    /// Maximum category score > 15.
    High,
}

impl RiskTier {
    /// Scores strictly above this are [`RiskTier::High`].
    pub const HIGH_THRESHOLD: f64 = 15.0;
    /// Scores strictly above this (and not High) are [`RiskTier::Moderate`].
    pub const MODERATE_THRESHOLD: f64 = 8.0;

    /// Classify the maximum clamped category score.
    pub fn from_max_score(score: f64) -> Self {
        if score > Self::HIGH_THRESHOLD {
            Self::High
        } else if score > Self::MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One explained contribution to an assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    /// Short factor name, e.g. `"Advanced Age"`.
    pub factor: String,
    /// Relative weight in `[0, 1]`.
    pub impact: f64,
    /// Human-readable explanation.
    pub explanation: String,
}

/// Pre-operative risk profile for one patient.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    mortality_risk: f64,
    infection_risk: f64,
    bleeding_risk: f64,
    readmission_risk: f64,
    overall_risk: RiskTier,
    risk_factors: Vec<RiskFactor>,
}

impl RiskAssessment {
    /// Build an assessment from raw accumulated scores.
    ///
    /// Scores are clamped to [`CategoryScores::CEILING`] first and the tier is
    /// derived from the clamped maximum, so no category above its cap can push
    /// the tier further than the cap allows.
    pub fn from_scores(scores: CategoryScores, risk_factors: Vec<RiskFactor>) -> Self {
        let clamped = scores.clamped();
        Self {
            mortality_risk: clamped.mortality,
            infection_risk: clamped.infection,
            bleeding_risk: clamped.bleeding,
            readmission_risk: clamped.readmission,
            overall_risk: RiskTier::from_max_score(clamped.max()),
            risk_factors,
        }
    }

    /// Clamped mortality score.
    pub fn mortality_risk(&self) -> f64 {
        self.mortality_risk
    }

    /// Clamped infection score.
    pub fn infection_risk(&self) -> f64 {
        self.infection_risk
    }

    /// Clamped bleeding score.
    pub fn bleeding_risk(&self) -> f64 {
        self.bleeding_risk
    }

    /// Clamped readmission score.
    pub fn readmission_risk(&self) -> f64 {
        self.readmission_risk
    }

    /// Derived tier.
    pub fn overall_risk(&self) -> RiskTier {
        self.overall_risk
    }

    /// Contributing factors in rule evaluation order.
    pub fn risk_factors(&self) -> &[RiskFactor] {
        &self.risk_factors
    }

    /// All four clamped scores.
    pub fn scores(&self) -> CategoryScores {
        CategoryScores::new(
            self.mortality_risk,
            self.infection_risk,
            self.bleeding_risk,
            self.readmission_risk,
        )
    }

    /// Clamped score for one category.
    pub fn score(&self, category: RiskCategory) -> f64 {
        self.scores().get(category)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
