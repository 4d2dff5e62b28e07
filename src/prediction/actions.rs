use super::catalog::{self, PreventiveActionTemplate};
use super::types::{FactorKind, PreventiveAction, RiskFactor};

/// Maps each triggered risk factor to its catalog action.
///
/// Output order follows the factor order, one action per factor; a run
/// triggering both test-failure and coverage factors gets two separate
/// testing actions, deliberately without de-duplication.
pub fn recommend_actions(risk_factors: &[RiskFactor]) -> Vec<PreventiveAction> {
    risk_factors
        .iter()
        .map(|factor| action_for(factor.kind).to_action())
        .collect()
}

fn action_for(kind: FactorKind) -> &'static PreventiveActionTemplate {
    match kind {
        FactorKind::TestFailures => &catalog::FIX_FAILING_TESTS,
        FactorKind::DependencyLoad => &catalog::OPTIMIZE_DEPENDENCIES,
        FactorKind::LowCoverage => &catalog::INCREASE_TEST_COVERAGE,
        FactorKind::SlowBuild => &catalog::SETUP_PERFORMANCE_MONITORING,
    }
}
