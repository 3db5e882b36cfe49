use super::super::domain::{ComplianceResult, ComplianceStatus};
use super::super::keywords::mentions_any;
use super::super::recommendations::{Recommendation, RecommendationType};
use super::views::{
    ComplianceBuckets, CostSummary, MinorFixBuckets, RecommendationCounts, StatusCountEntry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinorFixCategory {
    HddToSsd,
    RamUpgrade,
    DiskCleanup,
    DeviceReset,
    OsUpdate,
}

impl MinorFixCategory {
    /// Evaluation order; the first category with a matching keyword wins.
    pub const fn ordered() -> [Self; 5] {
        [
            Self::HddToSsd,
            Self::RamUpgrade,
            Self::DiskCleanup,
            Self::DeviceReset,
            Self::OsUpdate,
        ]
    }

    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::HddToSsd => &["storage", "hdd"],
            Self::RamUpgrade => &["ram", "memory"],
            Self::DiskCleanup => &["disk space", "cleanup"],
            Self::DeviceReset => &["performance", "slow"],
            Self::OsUpdate => &["os", "operating system"],
        }
    }

    pub fn for_issues(issues: &[String]) -> Option<Self> {
        Self::ordered().into_iter().find(|category| {
            issues
                .iter()
                .any(|issue| mentions_any(issue, category.keywords()))
        })
    }
}

impl MinorFixBuckets {
    fn push(&mut self, result: ComplianceResult) {
        let bucket = match MinorFixCategory::for_issues(&result.issues) {
            Some(MinorFixCategory::HddToSsd) => &mut self.hdd_to_ssd,
            Some(MinorFixCategory::RamUpgrade) => &mut self.ram_upgrade,
            Some(MinorFixCategory::DiskCleanup) => &mut self.disk_cleanup,
            Some(MinorFixCategory::DeviceReset) => &mut self.device_reset,
            Some(MinorFixCategory::OsUpdate) => &mut self.os_update,
            None => &mut self.unclassified,
        };
        bucket.push(result);
    }
}

impl RecommendationCounts {
    fn record(&mut self, recommendation_type: RecommendationType) {
        match recommendation_type {
            RecommendationType::Replacement => self.replacements += 1,
            RecommendationType::MinorFix => self.minor_fixes += 1,
            RecommendationType::Downgrade => self.downgrades += 1,
            RecommendationType::Assign => self.assignments += 1,
            RecommendationType::Maintain => self.maintains += 1,
            RecommendationType::ProfileReview => self.profile_reviews += 1,
        }
    }
}

/// Aggregate counts and totals from recommendations and bucket the results
/// by remediation kind for drill-down.
pub fn summarize(recommendations: &[Recommendation], results: &[ComplianceResult]) -> CostSummary {
    let mut counts = RecommendationCounts::default();
    let mut upgrades = 0i64;
    let mut downgrades = 0i64;

    for recommendation in recommendations {
        counts.record(recommendation.recommendation_type);
        if recommendation.estimated_cost > 0 {
            upgrades += recommendation.estimated_cost;
        } else {
            downgrades += recommendation.estimated_cost.abs();
        }
    }

    let status_counts = ComplianceStatus::ordered()
        .into_iter()
        .map(|status| StatusCountEntry {
            status,
            status_label: status.label(),
            count: results
                .iter()
                .filter(|result| result.status == status)
                .count(),
        })
        .collect();

    let mut buckets = ComplianceBuckets::default();
    for result in results {
        match RecommendationType::for_result(result) {
            Some(RecommendationType::Replacement) => buckets.needs_replacement.push(result.clone()),
            Some(RecommendationType::MinorFix) => buckets.needs_minor_fixes.push(result.clone()),
            Some(RecommendationType::Downgrade) => buckets.over_provisioned.push(result.clone()),
            Some(RecommendationType::Assign) => buckets.no_device.push(result.clone()),
            Some(RecommendationType::Maintain)
            | Some(RecommendationType::ProfileReview)
            | None => {}
        }
    }

    CostSummary {
        status_counts,
        counts,
        upgrades,
        downgrades,
        net: downgrades - upgrades,
        buckets,
    }
}
