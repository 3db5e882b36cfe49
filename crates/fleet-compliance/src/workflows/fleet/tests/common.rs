use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::AnalysisConfig;
use crate::workflows::fleet::domain::{
    Baseline, ComplianceResult, ComplianceStatus, Device, Employee, Profile,
};
use crate::workflows::fleet::profiles::ProfileCatalog;
use crate::workflows::fleet::service::FleetService;

pub(super) fn employee(id: &str, name: &str, department: &str, role: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        department: department.to_string(),
        role: role.to_string(),
        ..Employee::default()
    }
}

pub(super) fn device(id: &str, ram: &str, storage: &str) -> Device {
    Device {
        id: id.to_string(),
        ram: ram.to_string(),
        storage: storage.to_string(),
        ..Device::default()
    }
}

pub(super) fn named_device(id: &str, computer_name: &str) -> Device {
    Device {
        computer_name: Some(computer_name.to_string()),
        ..device(id, "16GB", "256GB")
    }
}

pub(super) fn owned_device(id: &str, owner_name: &str) -> Device {
    Device {
        owner_name: Some(owner_name.to_string()),
        ..device(id, "16GB", "256GB")
    }
}

pub(super) fn profile(device_type: &str, min_ram: &str, min_storage: &str) -> Profile {
    Profile {
        id: "power-user".to_string(),
        name: "Power User".to_string(),
        department: "Engineering".to_string(),
        level: "Senior".to_string(),
        industry: "general".to_string(),
        baseline: Baseline {
            device_type: device_type.to_string(),
            min_ram: min_ram.to_string(),
            min_cpu: "Intel Core i7".to_string(),
            min_storage: min_storage.to_string(),
            special_requirements: String::new(),
        },
    }
}

pub(super) fn power_user() -> Profile {
    profile("Desktop or Laptop", "16GB", "256GB")
}

pub(super) fn result_with(status: ComplianceStatus, issues: &[&str]) -> ComplianceResult {
    ComplianceResult {
        employee: employee("E1", "John Smith", "Engineering", "Senior Developer"),
        profile: Some(power_user()),
        device: Some(device("SN-1", "16GB", "256GB")),
        status,
        score: 0,
        issues: issues.iter().map(|issue| issue.to_string()).collect(),
    }
}

pub(super) fn build_service() -> Arc<FleetService> {
    Arc::new(FleetService::new(
        Arc::new(ProfileCatalog::standard()),
        &AnalysisConfig::default(),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("body is json")
}
