//! Device fleet compliance: profile assignment, device matching, baseline
//! scoring, remediation recommendations and the cost roll-up.

pub mod domain;
mod keywords;
pub mod matching;
pub mod pipeline;
pub mod profiles;
pub mod recommendations;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Assignment, Baseline, ComplianceResult, ComplianceStatus, Device, Employee, MatchResult,
    MatchStrategy, Profile,
};
pub use matching::{match_devices, match_employee, partition_devices, unmatched_devices};
pub use pipeline::FleetAnalysis;
pub use profiles::{assign_profiles, CatalogError, IndustryTable, ProfileCatalog};
pub use recommendations::{
    generate_recommendations, CostSchedule, Priority, Recommendation, RecommendationEngine,
    RecommendationType,
};
pub use report::{summarize, CostSummary, MinorFixCategory};
pub use router::fleet_router;
pub use scoring::{classify, evaluate, score_compliance};
pub use service::{AnalysisRequest, FleetService};
