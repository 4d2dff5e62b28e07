use crate::error::{PipeSageError, Result};
use crate::pipeline::PipelineRun;

/// Rejects pipeline snapshots whose metrics cannot be scored.
///
/// Counts are unsigned, so negative counts are unrepresentable; the checks
/// here cover the float fields: non-finite values, out-of-range percentages
/// and rates, and negative durations or sizes. A zero average duration is
/// accepted, the slow-build rule simply stays silent for it.
pub fn validate_run(run: &PipelineRun) -> Result<()> {
    let finite_fields = [
        ("durationMinutes", run.duration_minutes),
        ("codeQualityScore", run.code_quality_score),
        ("coveragePercent", run.coverage_percent),
        ("buildSizeMB", run.build_size_mb),
        ("averageDurationMinutes", run.average_duration_minutes),
        ("historicalFailureRate", run.historical_failure_rate),
    ];

    for (field, value) in finite_fields {
        if !value.is_finite() {
            return Err(invalid(run, field, value, "must be a finite number"));
        }
    }

    if run.duration_minutes < 0.0 {
        return Err(invalid(
            run,
            "durationMinutes",
            run.duration_minutes,
            "must not be negative",
        ));
    }

    if !(0.0..=100.0).contains(&run.coverage_percent) {
        return Err(invalid(
            run,
            "coveragePercent",
            run.coverage_percent,
            "must be within 0-100",
        ));
    }

    if run.build_size_mb < 0.0 {
        return Err(invalid(
            run,
            "buildSizeMB",
            run.build_size_mb,
            "must not be negative",
        ));
    }

    if run.average_duration_minutes < 0.0 {
        return Err(invalid(
            run,
            "averageDurationMinutes",
            run.average_duration_minutes,
            "must not be negative",
        ));
    }

    if !(0.0..=1.0).contains(&run.historical_failure_rate) {
        return Err(invalid(
            run,
            "historicalFailureRate",
            run.historical_failure_rate,
            "must be within 0-1",
        ));
    }

    Ok(())
}

fn invalid(run: &PipelineRun, field: &str, value: f64, requirement: &str) -> PipeSageError {
    PipeSageError::Validation(format!(
        "pipeline '{}': {field} = {value} {requirement}",
        run.id
    ))
}
