//! Constant templates for risk factors and preventive actions.
//!
//! Every prediction clones its factors and actions from these tables; the
//! tables themselves are never mutated, so concurrent predictions share them
//! freely.

use super::types::{
    ActionCategory, FactorCategory, FactorKind, PreventiveAction, Priority, RiskFactor, Severity,
};

/// Template for a derivable risk factor.
///
/// Carries everything except the weight, which is computed per run during
/// analysis.
pub struct RiskFactorTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub category: FactorCategory,
    pub kind: FactorKind,
}

impl RiskFactorTemplate {
    /// Instantiates the template with a run-specific weight.
    pub fn with_weight(&self, weight: f64) -> RiskFactor {
        RiskFactor {
            id: self.id.to_string(),
            name: self.name.to_string(),
            severity: self.severity,
            weight,
            description: self.description.to_string(),
            category: self.category,
            kind: self.kind,
        }
    }
}

/// Template for a recommended preventive action.
pub struct PreventiveActionTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub estimated_time: &'static str,
    pub category: ActionCategory,
    pub automated: bool,
}

impl PreventiveActionTemplate {
    /// Instantiates the template as an owned action record.
    pub fn to_action(&self) -> PreventiveAction {
        PreventiveAction {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            priority: self.priority,
            estimated_time: self.estimated_time.to_string(),
            category: self.category,
            automated: self.automated,
        }
    }
}

pub const TEST_FAILURE_FACTOR: RiskFactorTemplate = RiskFactorTemplate {
    id: "rf-1",
    name: "High Test Failure Rate",
    severity: Severity::High,
    description: "Multiple test failures detected in recent builds",
    category: FactorCategory::Code,
    kind: FactorKind::TestFailures,
};

pub const DEPENDENCY_FACTOR: RiskFactorTemplate = RiskFactorTemplate {
    id: "rf-2",
    name: "Large Number of Dependencies",
    severity: Severity::Medium,
    description: "High dependency count increases failure risk",
    category: FactorCategory::Dependencies,
    kind: FactorKind::DependencyLoad,
};

pub const COVERAGE_FACTOR: RiskFactorTemplate = RiskFactorTemplate {
    id: "rf-3",
    name: "Low Code Coverage",
    severity: Severity::Medium,
    description: "Insufficient test coverage may hide issues",
    category: FactorCategory::Code,
    kind: FactorKind::LowCoverage,
};

pub const PERFORMANCE_FACTOR: RiskFactorTemplate = RiskFactorTemplate {
    id: "rf-4",
    name: "Performance Degradation",
    severity: Severity::High,
    description: "Build duration significantly exceeds average",
    category: FactorCategory::Performance,
    kind: FactorKind::SlowBuild,
};

pub const FIX_FAILING_TESTS: PreventiveActionTemplate = PreventiveActionTemplate {
    id: "pa-1",
    title: "Fix Failing Tests",
    description: "Address the failing test cases before the next deployment",
    priority: Priority::High,
    estimated_time: "2-4 hours",
    category: ActionCategory::Testing,
    automated: false,
};

pub const OPTIMIZE_DEPENDENCIES: PreventiveActionTemplate = PreventiveActionTemplate {
    id: "pa-2",
    title: "Optimize Dependencies",
    description: "Review and remove unused dependencies to reduce build complexity",
    priority: Priority::Medium,
    estimated_time: "1-2 hours",
    category: ActionCategory::Code,
    automated: true,
};

pub const INCREASE_TEST_COVERAGE: PreventiveActionTemplate = PreventiveActionTemplate {
    id: "pa-3",
    title: "Increase Test Coverage",
    description: "Add unit tests for critical paths to reach 80% coverage",
    priority: Priority::Medium,
    estimated_time: "4-6 hours",
    category: ActionCategory::Testing,
    automated: false,
};

pub const SETUP_PERFORMANCE_MONITORING: PreventiveActionTemplate = PreventiveActionTemplate {
    id: "pa-4",
    title: "Setup Performance Monitoring",
    description: "Configure build performance alerts for early detection",
    priority: Priority::Low,
    estimated_time: "30 minutes",
    category: ActionCategory::Monitoring,
    automated: true,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_templates_have_distinct_ids_and_kinds() {
        let templates = [
            &TEST_FAILURE_FACTOR,
            &DEPENDENCY_FACTOR,
            &COVERAGE_FACTOR,
            &PERFORMANCE_FACTOR,
        ];

        let mut ids: Vec<&str> = templates.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), templates.len());

        let mut kinds: Vec<FactorKind> = templates.iter().map(|t| t.kind).collect();
        kinds.sort_by_key(|k| format!("{k:?}"));
        kinds.dedup();
        assert_eq!(kinds.len(), templates.len());
    }

    #[test]
    fn with_weight_overrides_only_the_weight() {
        let factor = TEST_FAILURE_FACTOR.with_weight(0.3);
        assert_eq!(factor.id, "rf-1");
        assert_eq!(factor.name, "High Test Failure Rate");
        assert_eq!(factor.severity, Severity::High);
        assert_eq!(factor.category, FactorCategory::Code);
        assert_eq!(factor.kind, FactorKind::TestFailures);
        assert!((factor.weight - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn to_action_copies_all_template_fields() {
        let action = OPTIMIZE_DEPENDENCIES.to_action();
        assert_eq!(action.id, "pa-2");
        assert_eq!(action.title, "Optimize Dependencies");
        assert_eq!(action.priority, Priority::Medium);
        assert_eq!(action.estimated_time, "1-2 hours");
        assert_eq!(action.category, ActionCategory::Code);
        assert!(action.automated);
    }
}
