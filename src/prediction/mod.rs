//! The failure-risk scoring engine.
//!
//! A pure, synchronous transformation from one pipeline snapshot to one
//! risk assessment. Nothing here performs I/O or holds state across calls,
//! so predictions for different pipelines can run in parallel without
//! coordination.

mod actions;
mod catalog;
mod confidence;
mod impact;
mod probability;
mod risk;
mod types;
mod validate;

pub use types::{
    ActionCategory, FactorCategory, FactorKind, Impact, PredictionResult, PreventiveAction,
    Priority, RiskFactor, Severity,
};

use crate::error::Result;
use crate::pipeline::PipelineRun;

/// Assesses the failure risk of a single pipeline run.
///
/// Derives risk factors, estimates failure probability and confidence,
/// recommends preventive actions, and classifies the impact tier, in that
/// fixed order. Identical inputs always produce identical results.
///
/// # Arguments
///
/// * `run` - One pipeline snapshot from the metrics collector
///
/// # Errors
///
/// Returns a validation error for ill-formed metrics (non-finite values,
/// percentages or rates outside their documented ranges, negative
/// durations). Well-formed input never fails.
pub fn predict_failure(run: &PipelineRun) -> Result<PredictionResult> {
    validate::validate_run(run)?;

    let risk_factors = risk::analyze_risk_factors(run);
    let failure_probability = probability::estimate_failure_probability(run, &risk_factors);
    let confidence = confidence::estimate_confidence(run);
    let preventive_actions = actions::recommend_actions(&risk_factors);
    let estimated_impact = impact::classify_impact(failure_probability, &run.environment);

    Ok(PredictionResult {
        pipeline_id: run.id.clone(),
        failure_probability,
        confidence,
        risk_factors,
        preventive_actions,
        estimated_impact,
    })
}


#[cfg(test)]
mod tests {
    use super::test_support::baseline_run;
    use super::*;

    fn mobile_app_run() -> PipelineRun {
        PipelineRun {
            id: "pipeline-3".to_string(),
            tests_failed: 8,
            tests_passed: 45,
            dependency_count: 289,
            coverage_percent: 58.0,
            duration_minutes: 5.0,
            average_duration_minutes: 15.8,
            previous_failure_count: 8,
            historical_failure_rate: 0.45,
            environment: "development".to_string(),
            ..baseline_run()
        }
    }

    #[test]
    fn mobile_app_scenario_end_to_end() {
        let result = predict_failure(&mobile_app_run()).unwrap();

        assert_eq!(result.pipeline_id, "pipeline-3");

        let kinds: Vec<FactorKind> = result.risk_factors.iter().map(|f| f.kind).collect();
        assert_eq!(
            kinds,
            vec![
                FactorKind::TestFailures,
                FactorKind::DependencyLoad,
                FactorKind::LowCoverage,
            ]
        );

        assert!((result.failure_probability - 0.837_522).abs() < 1e-6);
        assert!((result.confidence - 0.424).abs() < 1e-12);
        assert_eq!(result.estimated_impact, Impact::Medium);

        let action_ids: Vec<&str> = result
            .preventive_actions
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(action_ids, vec!["pa-1", "pa-2", "pa-3"]);
    }

    #[test]
    fn clean_run_has_no_factors_and_no_actions() {
        let result = predict_failure(&baseline_run()).unwrap();

        assert!(result.risk_factors.is_empty());
        assert!(result.preventive_actions.is_empty());

        let expected = (0.12_f64 * (1.0 + 0.05 * 2.0)).min(0.95);
        assert!((result.failure_probability - expected).abs() < 1e-12);
    }

    #[test]
    fn identical_input_gives_bit_identical_output() {
        let run = mobile_app_run();

        let a = predict_failure(&run).unwrap();
        let b = predict_failure(&run).unwrap();

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
        assert_eq!(a.failure_probability.to_bits(), b.failure_probability.to_bits());
        assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
    }

    #[test]
    fn production_pipeline_is_at_worst_medium() {
        let run = PipelineRun {
            environment: "production".to_string(),
            historical_failure_rate: 0.01,
            previous_failure_count: 0,
            ..baseline_run()
        };

        let result = predict_failure(&run).unwrap();
        assert!(result.failure_probability < 0.1);
        assert_eq!(result.estimated_impact, Impact::Medium);
    }

    #[test]
    fn high_risk_production_pipeline_is_high_impact() {
        let run = PipelineRun {
            environment: "production".to_string(),
            tests_failed: 10,
            coverage_percent: 30.0,
            previous_failure_count: 12,
            historical_failure_rate: 0.5,
            ..baseline_run()
        };

        let result = predict_failure(&run).unwrap();
        assert!(result.failure_probability > 0.7);
        assert_eq!(result.estimated_impact, Impact::High);
    }

    #[test]
    fn bounds_hold_across_a_metric_sweep() {
        for tests_failed in [0_u32, 1, 8, 200] {
            for previous in [0_u32, 8, 60] {
                for rate in [0.0, 0.45, 1.0] {
                    let run = PipelineRun {
                        tests_failed,
                        previous_failure_count: previous,
                        historical_failure_rate: rate,
                        ..baseline_run()
                    };

                    let result = predict_failure(&run).unwrap();
                    assert!((0.0..=0.95).contains(&result.failure_probability));
                    assert!((0.1..=1.0).contains(&result.confidence));
                    assert_eq!(result.risk_factors.len(), result.preventive_actions.len());
                }
            }
        }
    }

    #[test]
    fn invalid_input_surfaces_a_validation_error() {
        let run = PipelineRun {
            coverage_percent: 300.0,
            ..baseline_run()
        };

        assert!(predict_failure(&run).is_err());
    }
}
