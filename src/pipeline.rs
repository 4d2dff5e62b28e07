use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Execution state of a CI/CD pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineStatus {
    Success,
    Failed,
    Running,
    Pending,
}

impl std::fmt::Display for PipelineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::Running => "running",
            Self::Pending => "pending",
        };
        f.write_str(s)
    }
}

/// A snapshot of one CI/CD pipeline execution with its metrics.
///
/// Supplied by an external metrics collector as pipeline state changes.
/// The prediction engine treats every snapshot as read-only input; field
/// names in the serialized form are part of the external contract and must
/// not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineRun {
    /// Collector-assigned pipeline identifier (e.g., "pipeline-3")
    pub id: String,
    /// Human-readable pipeline name
    pub name: String,
    /// Repository the pipeline builds
    pub repository: String,
    /// Git branch that triggered the run
    pub branch: String,
    /// Current execution state
    pub status: PipelineStatus,
    /// When the run started
    pub start_time: DateTime<Utc>,
    /// When the run finished, if it has
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    /// Elapsed run time in minutes
    pub duration_minutes: f64,
    /// Test cases that passed in this run
    pub tests_passed: u32,
    /// Test cases that failed in this run
    pub tests_failed: u32,
    /// Static-analysis quality score
    pub code_quality_score: f64,
    /// Test coverage percentage (0-100)
    pub coverage_percent: f64,
    /// Build artifact size in megabytes
    #[serde(rename = "buildSizeMB")]
    pub build_size_mb: f64,
    /// Number of resolved dependencies
    pub dependency_count: u32,
    /// Commits included in this run
    pub commit_count: u32,
    /// Author of the triggering commit
    pub author: String,
    /// Deployment environment (free-form, e.g., "production")
    pub environment: String,
    /// Failures recorded for this pipeline before this run
    pub previous_failure_count: u32,
    /// Historical baseline duration in minutes
    pub average_duration_minutes: f64,
    /// Historical failure rate (0-1)
    pub historical_failure_rate: f64,
}
