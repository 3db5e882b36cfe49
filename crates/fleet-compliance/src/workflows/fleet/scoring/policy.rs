use super::super::domain::ComplianceStatus;
use super::rules::OVER_PROVISIONED_MARKER;

pub(crate) const NEEDS_UPGRADE_BELOW: u8 = 70;
pub(crate) const MINOR_ISSUES_BELOW: u8 = 85;

/// Status for a scored device. Over-provisioning is only reported when the
/// score is otherwise high enough to be considered healthy.
pub fn classify(score: u8, issues: &[String]) -> ComplianceStatus {
    if score < NEEDS_UPGRADE_BELOW {
        ComplianceStatus::NeedsUpgrade
    } else if score < MINOR_ISSUES_BELOW {
        ComplianceStatus::MinorIssues
    } else if issues
        .iter()
        .any(|issue| issue.contains(OVER_PROVISIONED_MARKER))
    {
        ComplianceStatus::OverProvisioned
    } else {
        ComplianceStatus::Compliant
    }
}
