use super::catalog;
use super::types::RiskFactor;
use crate::pipeline::PipelineRun;

/// Derives weighted risk factors from a pipeline run.
///
/// Rules are evaluated in a fixed order (test failures, dependency load,
/// coverage, build duration) and the output preserves that order, so two
/// runs triggering the same subset always produce factors in the same
/// sequence. Each triggered rule clones its catalog template and overrides
/// only the weight.
pub fn analyze_risk_factors(run: &PipelineRun) -> Vec<RiskFactor> {
    let mut factors = Vec::new();

    if run.tests_failed > 0 {
        let weight = (f64::from(run.tests_failed) * 0.1).min(1.0);
        factors.push(catalog::TEST_FAILURE_FACTOR.with_weight(weight));
    }

    if run.dependency_count > 200 {
        let weight = (f64::from(run.dependency_count - 200) * 0.002).min(1.0);
        factors.push(catalog::DEPENDENCY_FACTOR.with_weight(weight));
    }

    if run.coverage_percent < 70.0 {
        let weight = ((70.0 - run.coverage_percent) * 0.01).max(0.0);
        factors.push(catalog::COVERAGE_FACTOR.with_weight(weight));
    }

    // A zero baseline means no meaningful ratio; the rule stays silent
    // instead of dividing by zero.
    if run.average_duration_minutes > 0.0
        && run.duration_minutes > run.average_duration_minutes * 1.5
    {
        let weight = (run.duration_minutes / run.average_duration_minutes - 1.0).min(1.0);
        factors.push(catalog::PERFORMANCE_FACTOR.with_weight(weight));
    }

    factors
}
