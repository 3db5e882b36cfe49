use std::io::Cursor;

use fleet_compliance::workflows::fleet::{
    ComplianceStatus, FleetAnalysis, MatchStrategy, ProfileCatalog, RecommendationType,
};
use fleet_compliance::workflows::inventory::InventoryImporter;

const ROSTER: &str = "\
Staff ID,Name,Department,Position
H1,Amara Okafor,Emergency,Attending Physician
H2,Ben Turner,Radiology,MRI Technologist
H3,Chloe Martin,Admissions,Scheduler
H4,Diego Alvarez,ICU,Registered Nurse
";

const INVENTORY: &str = "\
Serial,Computer Name,Owner,Staff ID,Type,RAM,Storage,OS
HX-100,ER-AMARA,,,Laptop,16GB,512GB,Windows 11
HX-200,RAD-WS-04,Ben Turner,,Desktop,128GB,2048GB,Windows 11
HX-300,FRONT-DESK-2,,H3,Desktop,8GB,128GB,Windows 10
HX-400,CART-17,,,Tablet,4GB,64GB,iPadOS
";

fn healthcare_analysis() -> FleetAnalysis {
    let employees =
        InventoryImporter::employees_from_reader(Cursor::new(ROSTER)).expect("roster parses");
    let devices =
        InventoryImporter::devices_from_reader(Cursor::new(INVENTORY)).expect("inventory parses");

    FleetAnalysis::run(&employees, &devices, "Hospital", &ProfileCatalog::standard())
}

#[test]
fn healthcare_exports_resolve_profiles_and_devices() {
    let analysis = healthcare_analysis();

    assert_eq!(analysis.industry, "healthcare");
    let profiles: Vec<&str> = analysis
        .assignments
        .iter()
        .map(|assignment| assignment.profile.id.as_str())
        .collect();
    assert_eq!(
        profiles,
        vec!["physician", "imaging-specialist", "front-desk", "clinical-staff"]
    );

    let strategies: Vec<Option<MatchStrategy>> = analysis
        .matches
        .iter()
        .map(|result| result.matched_by)
        .collect();
    assert_eq!(
        strategies,
        vec![
            Some(MatchStrategy::ComputerName),
            Some(MatchStrategy::OwnerName),
            Some(MatchStrategy::OwnerId),
            None,
        ]
    );

    let unmatched: Vec<&str> = analysis
        .unmatched_devices
        .iter()
        .map(|device| device.id.as_str())
        .collect();
    assert_eq!(unmatched, vec!["HX-400"]);
}

#[test]
fn every_flagged_employee_has_one_priced_recommendation() {
    let analysis = healthcare_analysis();

    let flagged = analysis
        .compliance
        .iter()
        .filter(|result| result.status != ComplianceStatus::Compliant)
        .count();
    assert_eq!(analysis.recommendations.len(), flagged);

    let nurse = analysis
        .recommendations
        .iter()
        .find(|recommendation| recommendation.employee.id == "H4")
        .expect("nurse has a recommendation");
    assert_eq!(nurse.recommendation_type, RecommendationType::Assign);
    assert_eq!(nurse.estimated_cost, 1200);

    let summary = &analysis.summary;
    let priced: i64 = analysis
        .recommendations
        .iter()
        .map(|recommendation| recommendation.estimated_cost)
        .sum();
    assert_eq!(summary.net, -priced);
    assert_eq!(summary.buckets.no_device.len(), 1);
}

#[test]
fn analysis_serializes_with_wire_names() {
    let value = serde_json::to_value(healthcare_analysis()).expect("serializes");

    assert_eq!(value["matches"][0]["matched_by"], "computer_name");
    assert!(value["compliance"]
        .as_array()
        .expect("compliance array")
        .iter()
        .all(|result| result["status"].is_string()));
    assert_eq!(value["summary"]["status_counts"][0]["status"], "compliant");
}
