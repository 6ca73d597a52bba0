use serde::{Deserialize, Serialize};

/// Three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// News-sentiment assessment for one company. Produced once per company;
/// never absent — parse failures substitute the all-neutral fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub overall: Sentiment,
    pub environmental: Sentiment,
    pub social: Sentiment,
    pub governance: Sentiment,
    pub key_issues: Vec<String>,
}

impl SentimentResult {
    /// Schema-valid substitute used when a sentiment response cannot be
    /// parsed: all dimensions neutral, no issues.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            overall: Sentiment::Neutral,
            environmental: Sentiment::Neutral,
            social: Sentiment::Neutral,
            governance: Sentiment::Neutral,
            key_issues: Vec::new(),
        }
    }
}

/// ESG pillar a metric belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Environmental,
    Social,
    Governance,
}

/// One quantified ESG data point with provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub category: Category,
    /// Stable identifier, e.g. `carbon_emissions_scope1`.
    pub metric: String,
    /// Numeric value as text; interpretation depends on `unit`.
    pub value: String,
    pub unit: String,
    pub year: String,
    /// Extraction confidence in `[0, 1]`.
    pub confidence: f32,
}

/// Composite assessment for one company: four 0–100 scores plus a free-text
/// rationale. Exactly one per company; parse failures substitute the
/// mid-range fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub environmental_score: u8,
    pub social_score: u8,
    pub governance_score: u8,
    pub overall_score: u8,
    #[serde(default)]
    pub explanation: String,
}

impl ScoreResult {
    /// Minimal default substituted when a scoring response cannot be parsed.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            environmental_score: 50,
            social_score: 50,
            governance_score: 50,
            overall_score: 50,
            explanation: String::new(),
        }
    }
}
