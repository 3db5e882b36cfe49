use super::super::domain::{Baseline, Device};

/// Baseline device type that accepts any form factor.
pub const ANY_DEVICE_TYPE: &str = "desktop or laptop";

/// Phrase carried by the over-provisioning issue; `policy::classify` keys on it.
pub const OVER_PROVISIONED_MARKER: &str = "significantly over";

pub(crate) const FULL_SCORE: u8 = 100;
pub(crate) const RAM_SHORTFALL_PENALTY: u8 = 30;
pub(crate) const RAM_SURPLUS_PENALTY: u8 = 10;
pub(crate) const DEVICE_TYPE_PENALTY: u8 = 25;
pub(crate) const STORAGE_SHORTFALL_PENALTY: u8 = 20;

/// Apply every deduction to a matched device. Issues are returned in check order.
pub(crate) fn score_device(baseline: &Baseline, device: &Device) -> (u8, Vec<String>) {
    let mut score = FULL_SCORE;
    let mut issues = Vec::new();

    let ram = device.ram_gb() as u64;
    let required_ram = baseline.min_ram_gb() as u64;
    if ram < required_ram {
        issues.push(format!(
            "RAM below baseline ({ram}GB installed, {required_ram}GB required)"
        ));
        score = score.saturating_sub(RAM_SHORTFALL_PENALTY);
    } else if ram > required_ram * 2 {
        issues.push(format!(
            "RAM {OVER_PROVISIONED_MARKER} baseline ({ram}GB installed, {required_ram}GB required)"
        ));
        score = score.saturating_sub(RAM_SURPLUS_PENALTY);
    }

    if device_type_mismatch(&baseline.device_type, &device.device_type) {
        issues.push(format!(
            "Device type mismatch (profile requires {}, found {})",
            baseline.device_type, device.device_type
        ));
        score = score.saturating_sub(DEVICE_TYPE_PENALTY);
    }

    let storage = device.storage_gb();
    let required_storage = baseline.min_storage_gb();
    if storage < required_storage {
        issues.push(format!(
            "Storage below baseline ({storage}GB installed, {required_storage}GB required)"
        ));
        score = score.saturating_sub(STORAGE_SHORTFALL_PENALTY);
    }

    (score, issues)
}

/// Loose form-factor check: the baseline text must contain the device's type.
fn device_type_mismatch(required: &str, actual: &str) -> bool {
    let required = required.trim().to_lowercase();
    if required == ANY_DEVICE_TYPE {
        return false;
    }

    !required.contains(actual.trim().to_lowercase().as_str())
}
