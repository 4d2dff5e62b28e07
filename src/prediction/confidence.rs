use crate::pipeline::PipelineRun;

/// Estimates how trustworthy the failure probability is, from the volume of
/// historical evidence and the presence of test results.
///
/// History contributes min(previous failures + 10, 50) / 50; runs with no
/// test results at all have their data quality halved. The result always
/// lies in [0.1, 1.0].
pub fn estimate_confidence(run: &PipelineRun) -> f64 {
    let history_weight = f64::from(run.previous_failure_count.saturating_add(10).min(50)) / 50.0;

    let data_quality = if run.tests_passed > 0 || run.tests_failed > 0 {
        1.0
    } else {
        0.5
    };

    history_weight * data_quality * 0.9 + 0.1
}
