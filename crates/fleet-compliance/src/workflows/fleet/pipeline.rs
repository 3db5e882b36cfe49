use serde::Serialize;
use tracing::info;

use super::domain::{Assignment, ComplianceResult, Device, Employee, MatchResult};
use super::matching::partition_devices;
use super::profiles::{assign_profiles, ProfileCatalog};
use super::recommendations::{Recommendation, RecommendationEngine};
use super::report::{summarize, CostSummary};
use super::scoring::score_compliance;

/// Every intermediate and final output of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetAnalysis {
    /// Key of the industry table that was actually used.
    pub industry: String,
    pub assignments: Vec<Assignment>,
    pub matches: Vec<MatchResult>,
    pub compliance: Vec<ComplianceResult>,
    pub recommendations: Vec<Recommendation>,
    pub summary: CostSummary,
    pub unmatched_devices: Vec<Device>,
}

impl FleetAnalysis {
    /// Run the full pipeline with the default cost schedule.
    pub fn run(
        employees: &[Employee],
        devices: &[Device],
        industry: &str,
        catalog: &ProfileCatalog,
    ) -> Self {
        Self::run_with(
            employees,
            devices,
            industry,
            catalog,
            &RecommendationEngine::default(),
        )
    }

    pub fn run_with(
        employees: &[Employee],
        devices: &[Device],
        industry: &str,
        catalog: &ProfileCatalog,
        engine: &RecommendationEngine,
    ) -> Self {
        let table_key = catalog.table_for(industry).key().to_string();

        let assignments = assign_profiles(employees, industry, catalog);
        let (matches, unmatched_devices) = partition_devices(employees, devices);
        let compliance = score_compliance(&assignments, &matches);
        let recommendations = engine.generate(&compliance);
        let summary = summarize(&recommendations, &compliance);

        info!(
            industry = %table_key,
            employees = employees.len(),
            devices = devices.len(),
            unmatched_devices = unmatched_devices.len(),
            net = summary.net,
            "fleet analysis complete"
        );

        Self {
            industry: table_key,
            assignments,
            matches,
            compliance,
            recommendations,
            summary,
            unmatched_devices,
        }
    }
}
