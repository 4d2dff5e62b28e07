use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pipeline::PipelineRun;
use crate::prediction::PredictionResult;

/// One pipeline snapshot paired with its risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPipeline {
    pub pipeline: PipelineRun,
    pub prediction: PredictionResult,
}

/// Top-level document produced by one scoring invocation.
///
/// Aggregates follow what alerting surfaces key on: high-risk pipelines are
/// those above 0.7 failure probability.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub generated_at: DateTime<Utc>,
    pub total_pipelines: usize,
    pub high_risk_pipelines: usize,
    pub average_failure_probability: f64,
    pub predictions: Vec<ScoredPipeline>,
}

impl RiskReport {
    /// Assembles a report from scored pipelines, computing the aggregates.
    pub fn new(predictions: Vec<ScoredPipeline>) -> Self {
        let total_pipelines = predictions.len();
        let high_risk_pipelines = predictions
            .iter()
            .filter(|s| s.prediction.failure_probability > 0.7)
            .count();

        let probability_sum: f64 = predictions
            .iter()
            .map(|s| s.prediction.failure_probability)
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let average_failure_probability = if total_pipelines > 0 {
            probability_sum / total_pipelines as f64
        } else {
            0.0
        };

        Self {
            generated_at: Utc::now(),
            total_pipelines,
            high_risk_pipelines,
            average_failure_probability,
            predictions,
        }
    }
}
