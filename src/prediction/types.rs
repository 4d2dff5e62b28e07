use serde::{Deserialize, Serialize};

/// Severity of a risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Urgency of a preventive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Impact tier of a predicted failure, combining probability with
/// deployment environment criticality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Impact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(s)
    }
}

/// Broad area a risk factor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorCategory {
    Code,
    Environment,
    Dependencies,
    Performance,
}

/// Broad area a preventive action belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    Code,
    Infrastructure,
    Testing,
    Monitoring,
}

/// Machine-readable tag identifying which analysis rule derived a factor.
///
/// Action recommendation dispatches on this tag rather than matching
/// substrings of display names, so catalog wording can change without
/// breaking the kind-to-action mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorKind {
    TestFailures,
    DependencyLoad,
    LowCoverage,
    SlowBuild,
}

/// A weighted, categorized condition contributing to failure likelihood.
///
/// Instantiated from a catalog template with the weight computed for one
/// specific pipeline run; all other fields come from the template unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    pub id: String,
    pub name: String,
    pub severity: Severity,
    /// Run-specific contribution in [0, 1]
    pub weight: f64,
    pub description: String,
    pub category: FactorCategory,
    pub kind: FactorKind,
}

/// A recommended remediation tied to a risk-factor kind.
///
/// Emitted verbatim from the catalog; never mutated per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreventiveAction {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Rough human effort estimate (e.g., "2-4 hours")
    pub estimated_time: String,
    pub category: ActionCategory,
    pub automated: bool,
}

/// The full risk assessment for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub pipeline_id: String,
    /// Estimated failure likelihood, capped at 0.95
    pub failure_probability: f64,
    /// Reliability of the probability estimate, in [0.1, 1.0]
    pub confidence: f64,
    /// Triggered factors in fixed evaluation order
    pub risk_factors: Vec<RiskFactor>,
    /// One action per triggered factor, duplicates allowed
    pub preventive_actions: Vec<PreventiveAction>,
    pub estimated_impact: Impact,
}
