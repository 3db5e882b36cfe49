use super::domain::{ComplianceResult, ComplianceStatus, Employee};
use super::keywords::mentions_any;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Issue keywords that turn an upgrade into a full replacement.
const REPLACEMENT_KEYWORDS: &[&str] = &["cpu", "age", "obsolete"];
const REPLACEMENT_ISSUE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationType {
    Replacement,
    MinorFix,
    Downgrade,
    Maintain,
    Assign,
    ProfileReview,
}

impl RecommendationType {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Replacement => "Replacement",
            Self::MinorFix => "Minor Fix",
            Self::Downgrade => "Downgrade",
            Self::Maintain => "Maintain",
            Self::Assign => "Assign",
            Self::ProfileReview => "Profile Review",
        }
    }

    /// Remediation kind for a scored employee; `None` for compliant devices.
    pub fn for_result(result: &ComplianceResult) -> Option<Self> {
        match result.status {
            ComplianceStatus::Compliant => None,
            ComplianceStatus::NeedsUpgrade => {
                let replace = result.issues.len() >= REPLACEMENT_ISSUE_COUNT
                    || result
                        .issues
                        .iter()
                        .any(|issue| mentions_any(issue, REPLACEMENT_KEYWORDS));
                Some(if replace {
                    Self::Replacement
                } else {
                    Self::MinorFix
                })
            }
            ComplianceStatus::OverProvisioned => Some(Self::Downgrade),
            ComplianceStatus::MinorIssues => Some(Self::Maintain),
            ComplianceStatus::NoDevice => Some(Self::Assign),
            ComplianceStatus::NoProfile => Some(Self::ProfileReview),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// Flat cost estimates in whole currency units. Amounts are unsigned; the
/// recommendation type decides the sign, so savings are emitted negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostSchedule {
    pub replacement: u32,
    pub storage_fix: u32,
    pub minor_fix: u32,
    pub downgrade_savings: u32,
    pub new_device: u32,
}

impl Default for CostSchedule {
    fn default() -> Self {
        Self {
            replacement: 1500,
            storage_fix: 300,
            minor_fix: 150,
            downgrade_savings: 800,
            new_device: 1200,
        }
    }
}

/// One proposed remediation. `estimated_cost` is positive for spend and
/// negative for savings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub employee: Employee,
    #[serde(rename = "type")]
    pub recommendation_type: RecommendationType,
    pub priority: Priority,
    pub action: String,
    pub reasoning: String,
    pub estimated_cost: i64,
    pub timeline: String,
    pub impact: String,
}

/// Stateless mapper from compliance results to recommendations.
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    costs: CostSchedule,
}

impl RecommendationEngine {
    pub fn new(costs: CostSchedule) -> Self {
        Self { costs }
    }

    pub fn costs(&self) -> &CostSchedule {
        &self.costs
    }

    pub fn recommend(&self, result: &ComplianceResult) -> Option<Recommendation> {
        let recommendation_type = RecommendationType::for_result(result)?;
        let profile_name = result
            .profile
            .as_ref()
            .map(|profile| profile.name.as_str())
            .unwrap_or("role");
        let issues = result.issues.join("; ");

        let (priority, action, reasoning, estimated_cost, timeline, impact) =
            match recommendation_type {
                RecommendationType::Replacement => (
                    Priority::High,
                    format!("Replace device with a model that meets the {profile_name} baseline"),
                    issues,
                    i64::from(self.costs.replacement),
                    "30 days",
                    "Removes a hardware bottleneck for the role",
                ),
                RecommendationType::MinorFix => {
                    let storage = result
                        .issues
                        .iter()
                        .any(|issue| mentions_any(issue, &["storage"]));
                    let (action, cost) = if storage {
                        (
                            format!("Upgrade storage to the {profile_name} baseline"),
                            i64::from(self.costs.storage_fix),
                        )
                    } else {
                        (
                            format!(
                                "Apply a component upgrade to reach the {profile_name} baseline"
                            ),
                            i64::from(self.costs.minor_fix),
                        )
                    };
                    (
                        Priority::Medium,
                        action,
                        issues,
                        cost,
                        "7-14 days",
                        "Closes the baseline gap without a full replacement",
                    )
                }
                RecommendationType::Downgrade => (
                    Priority::Low,
                    "Reassign device to a higher-demand role and issue a baseline-spec device"
                        .to_string(),
                    "Device capacity significantly exceeds what the profile requires.".to_string(),
                    -i64::from(self.costs.downgrade_savings),
                    "60 days",
                    "Recovers budget tied up in over-provisioned hardware",
                ),
                RecommendationType::Maintain => (
                    Priority::Low,
                    "Keep current device and review at the next refresh cycle".to_string(),
                    "Device is close to the profile baseline; remaining gaps are minor."
                        .to_string(),
                    0,
                    "12 months",
                    "No immediate spend required",
                ),
                RecommendationType::Assign => (
                    Priority::High,
                    format!("Assign a device that meets the {profile_name} baseline"),
                    "No device in the inventory could be linked to this employee.".to_string(),
                    i64::from(self.costs.new_device),
                    "14 days",
                    "Employee has no tracked device",
                ),
                RecommendationType::ProfileReview => (
                    Priority::Medium,
                    "Assign a job-role profile before evaluating hardware".to_string(),
                    "No profile could be resolved for this employee.".to_string(),
                    0,
                    "7 days",
                    "Compliance cannot be assessed until a profile exists",
                ),
            };

        Some(Recommendation {
            employee: result.employee.clone(),
            recommendation_type,
            priority,
            action,
            reasoning,
            estimated_cost,
            timeline: timeline.to_string(),
            impact: impact.to_string(),
        })
    }

    /// At most one recommendation per result, in input order; compliant results yield none.
    pub fn generate(&self, results: &[ComplianceResult]) -> Vec<Recommendation> {
        let recommendations: Vec<Recommendation> = results
            .iter()
            .filter_map(|result| self.recommend(result))
            .collect();

        info!(
            results = results.len(),
            recommendations = recommendations.len(),
            "recommendations generated"
        );

        recommendations
    }
}

/// Recommendations priced with the default cost schedule.
pub fn generate_recommendations(results: &[ComplianceResult]) -> Vec<Recommendation> {
    RecommendationEngine::default().generate(results)
}
