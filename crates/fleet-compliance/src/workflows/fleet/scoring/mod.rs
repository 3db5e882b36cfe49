mod policy;
mod rules;

pub use policy::classify;
pub use rules::{ANY_DEVICE_TYPE, OVER_PROVISIONED_MARKER};

use super::domain::{
    Assignment, ComplianceResult, ComplianceStatus, Device, Employee, MatchResult, Profile,
};
use std::collections::HashMap;
use tracing::info;

pub const NO_DEVICE_ISSUE: &str = "No device assigned";
pub const NO_PROFILE_ISSUE: &str = "No profile assigned";

/// Score one employee. Deterministic: identical inputs give identical results.
pub fn evaluate(
    employee: &Employee,
    profile: Option<&Profile>,
    device: Option<&Device>,
) -> ComplianceResult {
    let (status, score, issues) = match (device, profile) {
        (None, _) => (
            ComplianceStatus::NoDevice,
            0,
            vec![NO_DEVICE_ISSUE.to_string()],
        ),
        (Some(_), None) => (
            ComplianceStatus::NoProfile,
            0,
            vec![NO_PROFILE_ISSUE.to_string()],
        ),
        (Some(device), Some(profile)) => {
            let (score, issues) = rules::score_device(&profile.baseline, device);
            (classify(score, &issues), score, issues)
        }
    };

    ComplianceResult {
        employee: employee.clone(),
        profile: profile.cloned(),
        device: device.cloned(),
        status,
        score,
        issues,
    }
}

/// Join each match with its employee's assignment and score it.
///
/// Assignments are paired positionally when both collections come from the
/// same employee list; otherwise by employee id (first assignment wins). A
/// match with no assignment is scored without a profile.
pub fn score_compliance(
    assignments: &[Assignment],
    matches: &[MatchResult],
) -> Vec<ComplianceResult> {
    let mut by_id: HashMap<&str, &Assignment> = HashMap::with_capacity(assignments.len());
    for assignment in assignments {
        by_id
            .entry(assignment.employee.id.as_str())
            .or_insert(assignment);
    }

    let results: Vec<ComplianceResult> = matches
        .iter()
        .enumerate()
        .map(|(index, matched)| {
            let assignment = assignments
                .get(index)
                .filter(|assignment| assignment.employee.id == matched.employee.id)
                .or_else(|| by_id.get(matched.employee.id.as_str()).copied());

            evaluate(
                &matched.employee,
                assignment.map(|assignment| &assignment.profile),
                matched.device.as_ref(),
            )
        })
        .collect();

    let needs_attention = results
        .iter()
        .filter(|result| result.status != ComplianceStatus::Compliant)
        .count();
    info!(scored = results.len(), needs_attention, "compliance scoring complete");

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_boundaries_are_strict() {
        assert_eq!(classify(69, &[]), ComplianceStatus::NeedsUpgrade);
        assert_eq!(classify(70, &[]), ComplianceStatus::MinorIssues);
        assert_eq!(classify(84, &[]), ComplianceStatus::MinorIssues);
        assert_eq!(classify(85, &[]), ComplianceStatus::Compliant);
        assert_eq!(classify(100, &[]), ComplianceStatus::Compliant);
    }

    #[test]
    fn over_provisioned_requires_marker_and_healthy_score() {
        let issues = vec![format!("RAM {OVER_PROVISIONED_MARKER} baseline")];
        assert_eq!(classify(90, &issues), ComplianceStatus::OverProvisioned);
        assert_eq!(classify(84, &issues), ComplianceStatus::MinorIssues);
        assert_eq!(
            classify(90, &["Device type mismatch".to_string()]),
            ComplianceStatus::Compliant
        );
    }

    #[test]
    fn missing_device_wins_over_missing_profile() {
        let result = evaluate(&Employee::default(), None, None);
        assert_eq!(result.status, ComplianceStatus::NoDevice);
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec![NO_DEVICE_ISSUE.to_string()]);
    }

    #[test]
    fn device_without_profile_is_no_profile() {
        let device = Device {
            id: "D1".to_string(),
            ..Device::default()
        };
        let result = evaluate(&Employee::default(), None, Some(&device));
        assert_eq!(result.status, ComplianceStatus::NoProfile);
        assert_eq!(result.score, 0);
    }
}
