use super::super::domain::{ComplianceResult, ComplianceStatus};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountEntry {
    pub status: ComplianceStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecommendationCounts {
    pub replacements: usize,
    pub minor_fixes: usize,
    pub downgrades: usize,
    pub assignments: usize,
    pub maintains: usize,
    pub profile_reviews: usize,
}

/// Minor-fix drill-down, keyed by the first issue keyword that matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MinorFixBuckets {
    pub hdd_to_ssd: Vec<ComplianceResult>,
    pub ram_upgrade: Vec<ComplianceResult>,
    pub disk_cleanup: Vec<ComplianceResult>,
    pub device_reset: Vec<ComplianceResult>,
    pub os_update: Vec<ComplianceResult>,
    pub unclassified: Vec<ComplianceResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceBuckets {
    pub needs_replacement: Vec<ComplianceResult>,
    pub needs_minor_fixes: MinorFixBuckets,
    pub over_provisioned: Vec<ComplianceResult>,
    pub no_device: Vec<ComplianceResult>,
}

/// Roll-up of one pipeline run. Rebuilt from scratch on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CostSummary {
    pub status_counts: Vec<StatusCountEntry>,
    pub counts: RecommendationCounts,
    /// Sum of positive estimated costs.
    pub upgrades: i64,
    /// Sum of the absolute value of negative estimated costs.
    pub downgrades: i64,
    /// `downgrades - upgrades`; positive means overall savings.
    pub net: i64,
    pub buckets: ComplianceBuckets,
}
