use chrono::{Duration, Utc};

use crate::pipeline::{PipelineRun, PipelineStatus};

/// Built-in demo snapshots for the `demo` subcommand.
///
/// Four pipelines spanning the interesting cases: a healthy production
/// build, a borderline staging run, a failing development run that trips
/// three risk factors, and a pending production migration with no test
/// results yet.
pub fn sample_pipelines() -> Vec<PipelineRun> {
    let now = Utc::now();

    vec![
        PipelineRun {
            id: "pipeline-1".to_string(),
            name: "Frontend Build".to_string(),
            repository: "web-app".to_string(),
            branch: "main".to_string(),
            status: PipelineStatus::Running,
            start_time: now - Duration::minutes(5),
            end_time: None,
            duration_minutes: 5.0,
            tests_passed: 124,
            tests_failed: 0,
            code_quality_score: 8.5,
            coverage_percent: 87.0,
            build_size_mb: 2.4,
            dependency_count: 156,
            commit_count: 3,
            author: "Sarah Chen".to_string(),
            environment: "production".to_string(),
            previous_failure_count: 2,
            average_duration_minutes: 7.2,
            historical_failure_rate: 0.12,
        },
        PipelineRun {
            id: "pipeline-2".to_string(),
            name: "Backend API".to_string(),
            repository: "api-service".to_string(),
            branch: "develop".to_string(),
            status: PipelineStatus::Success,
            start_time: now - Duration::minutes(15),
            end_time: Some(now - Duration::minutes(3)),
            duration_minutes: 12.0,
            tests_passed: 89,
            tests_failed: 1,
            code_quality_score: 7.8,
            coverage_percent: 74.0,
            build_size_mb: 1.8,
            dependency_count: 203,
            commit_count: 7,
            author: "Mike Johnson".to_string(),
            environment: "staging".to_string(),
            previous_failure_count: 5,
            average_duration_minutes: 10.5,
            historical_failure_rate: 0.28,
        },
        PipelineRun {
            id: "pipeline-3".to_string(),
            name: "Mobile App".to_string(),
            repository: "mobile-app".to_string(),
            branch: "feature/auth".to_string(),
            status: PipelineStatus::Failed,
            start_time: now - Duration::minutes(25),
            end_time: Some(now - Duration::minutes(20)),
            duration_minutes: 5.0,
            tests_passed: 45,
            tests_failed: 8,
            code_quality_score: 6.2,
            coverage_percent: 58.0,
            build_size_mb: 3.2,
            dependency_count: 289,
            commit_count: 12,
            author: "Alex Rodriguez".to_string(),
            environment: "development".to_string(),
            previous_failure_count: 8,
            average_duration_minutes: 15.8,
            historical_failure_rate: 0.45,
        },
        PipelineRun {
            id: "pipeline-4".to_string(),
            name: "Database Migration".to_string(),
            repository: "db-scripts".to_string(),
            branch: "main".to_string(),
            status: PipelineStatus::Pending,
            start_time: now - Duration::minutes(2),
            end_time: None,
            duration_minutes: 0.0,
            tests_passed: 0,
            tests_failed: 0,
            code_quality_score: 9.1,
            coverage_percent: 95.0,
            build_size_mb: 0.3,
            dependency_count: 24,
            commit_count: 1,
            author: "David Kim".to_string(),
            environment: "production".to_string(),
            previous_failure_count: 1,
            average_duration_minutes: 3.2,
            historical_failure_rate: 0.08,
        },
    ]
}
