use super::RawRecord;
use crate::workflows::fleet::domain::{Device, Employee};

// Header spellings per canonical field, in priority order (normalized form).
const SERIAL: &[&str] = &["serial", "serialnumber", "serialno", "sn", "assetserial"];
const COMPUTER_NAME: &[&str] = &[
    "computername",
    "hostname",
    "devicename",
    "machinename",
    "assetname",
];
const OWNER_NAME: &[&str] = &[
    "assignedto",
    "owner",
    "ownername",
    "user",
    "username",
    "employee",
    "employeename",
    "assigneduser",
    "fullname",
];
const OWNER_ID: &[&str] = &[
    "employeeid",
    "empid",
    "userid",
    "ownerid",
    "assignedtoid",
    "staffid",
    "personid",
];
const DEVICE_TYPE: &[&str] = &["devicetype", "type", "formfactor", "category"];
const MODEL: &[&str] = &["model", "modelname", "devicemodel"];
const CPU: &[&str] = &["cpu", "processor", "cpumodel"];
const RAM: &[&str] = &["ram", "ramcapacity", "ramgb", "memory", "memorygb"];
const STORAGE: &[&str] = &[
    "storage",
    "storagecapacity",
    "storagegb",
    "disk",
    "disksize",
    "hdd",
    "ssd",
];
const OS: &[&str] = &["os", "operatingsystem", "osversion"];
const AGE: &[&str] = &["age", "deviceage", "ageyears"];

const EMPLOYEE_ID: &[&str] = &[
    "id",
    "employeeid",
    "empid",
    "employeenumber",
    "staffid",
    "personid",
];
const EMPLOYEE_NAME: &[&str] = &["name", "fullname", "employeename", "employee", "displayname"];
const FIRST_NAME: &[&str] = &["firstname", "givenname", "first"];
const LAST_NAME: &[&str] = &["lastname", "surname", "familyname", "last"];
const DEPARTMENT: &[&str] = &["department", "dept", "division", "team"];
const ROLE: &[&str] = &["role", "title", "jobtitle", "position"];
const DEVICE_SERIAL: &[&str] = &["deviceserial", "serial", "serialnumber", "assetserial"];
const LOCATION: &[&str] = &["location", "office", "site", "city"];

/// Canonical device for the record at `position` (zero-based). Devices
/// without a serial get a generated `device-<n>` identifier.
pub(crate) fn device_from_record(record: &RawRecord, position: usize) -> Device {
    let serial = first_of(record, SERIAL);
    let id = serial
        .clone()
        .unwrap_or_else(|| format!("device-{}", position + 1));

    Device {
        id,
        serial,
        computer_name: first_of(record, COMPUTER_NAME),
        owner_name: first_of(record, OWNER_NAME),
        owner_ids: all_of(record, OWNER_ID),
        device_type: text_of(record, DEVICE_TYPE),
        model: text_of(record, MODEL),
        cpu: text_of(record, CPU),
        ram: text_of(record, RAM),
        storage: text_of(record, STORAGE),
        os: text_of(record, OS),
        age: text_of(record, AGE),
    }
}

pub(crate) fn employee_from_record(record: &RawRecord) -> Employee {
    let first_name = first_of(record, FIRST_NAME);
    let last_name = first_of(record, LAST_NAME);
    let name = first_of(record, EMPLOYEE_NAME).unwrap_or_else(|| {
        [first_name.as_deref(), last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    });

    Employee {
        id: text_of(record, EMPLOYEE_ID),
        name,
        first_name,
        last_name,
        department: text_of(record, DEPARTMENT),
        role: text_of(record, ROLE),
        device_serial: first_of(record, DEVICE_SERIAL),
        location: first_of(record, LOCATION),
    }
}

fn first_of(record: &RawRecord, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|alias| record.get(alias))
        .map(str::to_string)
}

fn all_of(record: &RawRecord, aliases: &[&str]) -> Vec<String> {
    aliases
        .iter()
        .filter_map(|alias| record.get(alias))
        .map(str::to_string)
        .collect()
}

fn text_of(record: &RawRecord, aliases: &[&str]) -> String {
    first_of(record, aliases).unwrap_or_default()
}
