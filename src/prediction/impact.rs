use super::types::Impact;

/// Environment string that marks a deployment as business-critical.
const PRODUCTION_ENVIRONMENT: &str = "production";

/// Buckets a failure probability and deployment environment into an impact
/// tier.
///
/// Production pipelines are never classified Low: even at negligible
/// probability they land at Medium.
pub fn classify_impact(probability: f64, environment: &str) -> Impact {
    let production = environment == PRODUCTION_ENVIRONMENT;

    if probability > 0.7 && production {
        Impact::High
    } else if probability > 0.5 || production {
        Impact::Medium
    } else {
        Impact::Low
    }
}
