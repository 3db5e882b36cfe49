//! Identity resolution between employees and inventory devices.
//!
//! Device exports rarely carry a clean foreign key to the HR system, so each
//! employee walks an ordered cascade of strategies (most specific first) and
//! the first strategy that yields a device settles the match. Two employees
//! may resolve to the same device; no uniqueness is enforced.

use super::domain::{Device, Employee, MatchResult, MatchStrategy};
use tracing::{debug, info};

impl MatchStrategy {
    /// Scan `devices` in order and return the first one this strategy accepts.
    pub fn find<'a>(self, employee: &Employee, devices: &'a [Device]) -> Option<&'a Device> {
        self.position(employee, devices).and_then(|index| devices.get(index))
    }

    /// Index into `devices` of the first device this strategy accepts.
    pub fn position(self, employee: &Employee, devices: &[Device]) -> Option<usize> {
        match self {
            MatchStrategy::ComputerName => {
                let first_name = employee.derived_first_name()?;
                devices.iter().position(|device| {
                    device
                        .computer_name
                        .as_deref()
                        .map(|name| name.to_lowercase().contains(&first_name))
                        .unwrap_or(false)
                })
            }
            MatchStrategy::SerialNumber => {
                let hint = present(employee.device_serial.as_deref())?;
                devices
                    .iter()
                    .position(|device| device.serial.as_deref() == Some(hint))
            }
            MatchStrategy::OwnerId => {
                let id = present(Some(employee.id.as_str()))?;
                devices
                    .iter()
                    .position(|device| device.owner_ids.iter().any(|owner_id| owner_id == id))
            }
            MatchStrategy::OwnerName => {
                let name = non_empty(Some(employee.name.as_str()))?;
                devices
                    .iter()
                    .position(|device| owner_name_equals(device, name))
                    .or_else(|| {
                        devices
                            .iter()
                            .position(|device| owner_name_overlaps(device, name))
                    })
            }
        }
    }
}

/// Resolve one employee against the full device collection.
pub fn match_employee<'a>(
    employee: &Employee,
    devices: &'a [Device],
) -> Option<(MatchStrategy, &'a Device)> {
    locate(employee, devices)
        .and_then(|(strategy, index)| devices.get(index).map(|device| (strategy, device)))
}

fn locate(employee: &Employee, devices: &[Device]) -> Option<(MatchStrategy, usize)> {
    MatchStrategy::ordered().into_iter().find_map(|strategy| {
        strategy
            .position(employee, devices)
            .map(|index| (strategy, index))
    })
}

/// Match every employee and split the inventory into claimed and unclaimed
/// rows. Claims are tracked by row position, so rows sharing a serial are
/// reported independently.
pub fn partition_devices(
    employees: &[Employee],
    devices: &[Device],
) -> (Vec<MatchResult>, Vec<Device>) {
    let mut claimed = vec![false; devices.len()];

    let results: Vec<MatchResult> = employees
        .iter()
        .map(|employee| match locate(employee, devices) {
            Some((strategy, index)) => {
                let device = &devices[index];
                claimed[index] = true;
                debug!(
                    employee_id = %employee.id,
                    device_id = %device.id,
                    strategy = strategy.label(),
                    "matched device"
                );
                MatchResult {
                    employee: employee.clone(),
                    device: Some(device.clone()),
                    matched_by: Some(strategy),
                }
            }
            None => MatchResult {
                employee: employee.clone(),
                device: None,
                matched_by: None,
            },
        })
        .collect();

    let unmatched: Vec<Device> = devices
        .iter()
        .zip(&claimed)
        .filter(|(_, claimed)| !**claimed)
        .map(|(device, _)| device.clone())
        .collect();

    let matched = results.iter().filter(|result| result.device.is_some()).count();
    info!(
        employees = employees.len(),
        devices = devices.len(),
        matched,
        unmatched = unmatched.len(),
        "device matching complete"
    );

    (results, unmatched)
}

/// One `MatchResult` per employee, in input order.
pub fn match_devices(employees: &[Employee], devices: &[Device]) -> Vec<MatchResult> {
    partition_devices(employees, devices).0
}

/// Devices that no employee resolved to, in inventory order.
pub fn unmatched_devices(employees: &[Employee], devices: &[Device]) -> Vec<Device> {
    partition_devices(employees, devices).1
}

/// Identifier hints are compared verbatim; whitespace-only values count as absent.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

fn owner_name(device: &Device) -> Option<String> {
    non_empty(device.owner_name.as_deref()).map(str::to_lowercase)
}

fn owner_name_equals(device: &Device, employee_name: &str) -> bool {
    owner_name(device)
        .map(|owner| owner == employee_name.to_lowercase())
        .unwrap_or(false)
}

/// Every employee-name token must contain, or be contained in, some owner token.
fn owner_name_overlaps(device: &Device, employee_name: &str) -> bool {
    let Some(owner) = owner_name(device) else {
        return false;
    };
    let owner_tokens: Vec<&str> = owner.split_whitespace().collect();
    let employee_name = employee_name.to_lowercase();

    employee_name.split_whitespace().all(|token| {
        owner_tokens
            .iter()
            .any(|candidate| candidate.contains(token) || token.contains(candidate))
    })
}
