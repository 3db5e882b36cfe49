use super::common::*;

use crate::workflows::fleet::domain::{Device, MatchStrategy};
use crate::workflows::fleet::matching::{
    match_devices, match_employee, partition_devices, unmatched_devices,
};

#[test]
fn computer_name_beats_owner_id() {
    let employee = employee("E1", "John Smith", "Engineering", "Developer");
    let by_id = Device {
        owner_ids: vec!["E1".to_string()],
        ..device("SN-ID", "16GB", "256GB")
    };
    let by_name = Device {
        owner_ids: vec!["E1".to_string()],
        ..named_device("SN-NAME", "JOHN-LTP")
    };
    let devices = vec![by_id, by_name];

    let (strategy, matched) = match_employee(&employee, &devices).expect("device matched");
    assert_eq!(strategy, MatchStrategy::ComputerName);
    assert_eq!(matched.id, "SN-NAME");
}

#[test]
fn serial_hint_must_match_exactly() {
    let mut employee = employee("E2", "Ana Ruiz", "Finance", "Analyst");
    employee.device_serial = Some("SN-200".to_string());
    let devices = vec![
        Device {
            serial: Some("SN-2000".to_string()),
            ..device("SN-2000", "16GB", "256GB")
        },
        Device {
            serial: Some("SN-200".to_string()),
            ..device("SN-200", "16GB", "256GB")
        },
    ];

    let (strategy, matched) = match_employee(&employee, &devices).expect("device matched");
    assert_eq!(strategy, MatchStrategy::SerialNumber);
    assert_eq!(matched.id, "SN-200");
}

#[test]
fn padded_serial_hint_is_not_trimmed() {
    let mut employee = employee("", "", "Finance", "Analyst");
    employee.device_serial = Some(" SN-200 ".to_string());
    let devices = vec![Device {
        serial: Some("SN-200".to_string()),
        ..device("SN-200", "16GB", "256GB")
    }];

    assert!(match_employee(&employee, &devices).is_none());
}

#[test]
fn owner_id_match_is_case_sensitive_and_verbatim() {
    let devices = vec![Device {
        owner_ids: vec!["e7".to_string()],
        ..device("SN-7", "16GB", "256GB")
    }];

    assert!(match_employee(&employee("E7", "", "", ""), &devices).is_none());
    assert!(match_employee(&employee(" e7", "", "", ""), &devices).is_none());
    let (strategy, _) =
        match_employee(&employee("e7", "", "", ""), &devices).expect("device matched");
    assert_eq!(strategy, MatchStrategy::OwnerId);
}

#[test]
fn blank_identifiers_never_match() {
    let employee = employee("  ", "", "Finance", "Analyst");
    let devices = vec![Device {
        owner_ids: vec![String::new()],
        owner_name: Some(String::new()),
        computer_name: Some(String::new()),
        ..device("SN-1", "16GB", "256GB")
    }];

    assert!(match_employee(&employee, &devices).is_none());
}

#[test]
fn exact_owner_name_wins_over_earlier_fuzzy_candidate() {
    let employee = employee("E3", "Lee Park", "Finance", "Analyst");
    let devices = vec![
        owned_device("SN-FUZZY", "Lee Parker"),
        owned_device("SN-EXACT", "lee park"),
    ];

    let (strategy, matched) = match_employee(&employee, &devices).expect("device matched");
    assert_eq!(strategy, MatchStrategy::OwnerName);
    assert_eq!(matched.id, "SN-EXACT");
}

#[test]
fn owner_name_tokens_overlap() {
    let employee = employee("E4", "Maria Lopez", "Finance", "Analyst");
    let devices = vec![owned_device("SN-1", "Lopez, Maria (Contractor)")];

    let (strategy, _) = match_employee(&employee, &devices).expect("device matched");
    assert_eq!(strategy, MatchStrategy::OwnerName);
}

#[test]
fn two_employees_can_claim_the_same_device() {
    let employees = vec![
        employee("E1", "Sam Jones", "Support", "Clerk"),
        employee("E2", "Sam Wu", "Support", "Clerk"),
    ];
    let devices = vec![named_device("SN-1", "SAM-DESK")];

    let results = match_devices(&employees, &devices);
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|result| result.device.as_ref().map(|device| device.id.as_str()) == Some("SN-1")));
}

#[test]
fn unmatched_devices_keep_inventory_order() {
    let employees = vec![employee("E1", "John Smith", "Engineering", "Developer")];
    let devices = vec![
        named_device("SN-A", "SPARE-01"),
        named_device("SN-B", "JOHN-LTP"),
        named_device("SN-C", "SPARE-02"),
    ];

    let spare: Vec<String> = unmatched_devices(&employees, &devices)
        .into_iter()
        .map(|device| device.id)
        .collect();
    assert_eq!(spare, vec!["SN-A".to_string(), "SN-C".to_string()]);
}

#[test]
fn rows_sharing_a_serial_are_claimed_independently() {
    let employees = vec![employee("E1", "John Smith", "Engineering", "Developer")];
    let devices = vec![
        named_device("SN-1", "JOHN-LT"),
        named_device("SN-1", "SPARE-PC"),
    ];

    let (matches, unmatched) = partition_devices(&employees, &devices);
    assert_eq!(
        matches[0]
            .device
            .as_ref()
            .and_then(|device| device.computer_name.as_deref()),
        Some("JOHN-LT")
    );
    assert_eq!(unmatched.len(), 1);
    assert_eq!(unmatched[0].id, "SN-1");
    assert_eq!(unmatched[0].computer_name.as_deref(), Some("SPARE-PC"));
}

#[test]
fn empty_inputs_yield_empty_results() {
    assert!(match_devices(&[], &[]).is_empty());

    let results = match_devices(&[employee("E1", "John Smith", "", "")], &[]);
    assert_eq!(results.len(), 1);
    assert!(results[0].device.is_none());
    assert!(results[0].matched_by.is_none());
}
