use super::types::RiskFactor;
use crate::pipeline::PipelineRun;

/// Reported probabilities never exceed this ceiling; the engine does not
/// claim near-certainty.
const PROBABILITY_CAP: f64 = 0.95;

/// Combines the historical failure rate with derived risk load and recent
/// failure history into one failure probability in [0, 0.95].
///
/// An empty factor sequence is valid and leaves the risk multiplier at 1.
pub fn estimate_failure_probability(run: &PipelineRun, risk_factors: &[RiskFactor]) -> f64 {
    let risk_weight_sum: f64 = risk_factors.iter().map(|f| f.weight).sum();
    let risk_multiplier = 1.0 + risk_weight_sum * 0.3;

    let recent_failure_multiplier = 1.0 + f64::from(run.previous_failure_count) * 0.05;

    let probability = run.historical_failure_rate * risk_multiplier * recent_failure_multiplier;
    probability.clamp(0.0, PROBABILITY_CAP)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::prediction::risk::analyze_risk_factors;
    use crate::prediction::test_support::baseline_run;
    use crate::pipeline::PipelineRun;

    #[test]
    fn empty_factors_reduce_to_history_only() {
        let run = PipelineRun {
            historical_failure_rate: 0.2,
            previous_failure_count: 4,
            ..baseline_run()
        };

        let probability = estimate_failure_probability(&run, &[]);
        // 0.2 * 1.0 * (1 + 0.05 * 4)
        assert!((probability - 0.24).abs() < 1e-12);
    }

    #[test]
    fn clean_run_matches_closed_form() {
        let run = PipelineRun {
            historical_failure_rate: 0.3,
            previous_failure_count: 6,
            ..baseline_run()
        };

        let factors = analyze_risk_factors(&run);
        assert!(factors.is_empty());

        let probability = estimate_failure_probability(&run, &factors);
        let expected = (0.3_f64 * (1.0 + 0.05 * 6.0)).min(0.95);
        assert!((probability - expected).abs() < 1e-12);
    }

    #[test]
    fn caps_at_0_95() {
        let run = PipelineRun {
            historical_failure_rate: 0.9,
            previous_failure_count: 40,
            ..baseline_run()
        };

        let probability = estimate_failure_probability(&run, &[]);
        assert!((probability - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_failure_rate_yields_zero() {
        let run = PipelineRun {
            historical_failure_rate: 0.0,
            previous_failure_count: 12,
            ..baseline_run()
        };

        let probability = estimate_failure_probability(&run, &[]);
        assert_eq!(probability, 0.0);
    }

    #[test]
    fn mobile_app_scenario_is_unclamped() {
        let run = PipelineRun {
            tests_failed: 8,
            dependency_count: 289,
            coverage_percent: 58.0,
            duration_minutes: 5.0,
            average_duration_minutes: 15.8,
            previous_failure_count: 8,
            historical_failure_rate: 0.45,
            ..baseline_run()
        };

        let factors = analyze_risk_factors(&run);
        assert_eq!(factors.len(), 3);

        let risk_weight_sum: f64 = factors.iter().map(|f| f.weight).sum();
        assert!((risk_weight_sum - 1.098).abs() < 1e-12);

        let probability = estimate_failure_probability(&run, &factors);
        // 0.45 * 1.3294 * 1.4
        assert!((probability - 0.837_522).abs() < 1e-6);
        assert!(probability < 0.95);
    }

    #[test]
    fn always_within_bounds() {
        let extremes = [
            (0.0_f64, 0_u32),
            (1.0, 0),
            (1.0, 1000),
            (0.5, 50),
        ];

        for (rate, previous) in extremes {
            let run = PipelineRun {
                historical_failure_rate: rate,
                previous_failure_count: previous,
                tests_failed: 100,
                dependency_count: 900,
                coverage_percent: 0.0,
                duration_minutes: 100.0,
                average_duration_minutes: 10.0,
                ..baseline_run()
            };

            let factors = analyze_risk_factors(&run);
            let probability = estimate_failure_probability(&run, &factors);
            assert!((0.0..=0.95).contains(&probability), "out of range: {probability}");
        }
    }
}
