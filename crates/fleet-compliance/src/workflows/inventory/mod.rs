//! Inventory ingestion: turns loosely formatted HR and asset-management
//! exports into canonical [`Employee`] and [`Device`] records.

mod mapping;
mod normalizer;
mod parser;

use crate::workflows::fleet::domain::{Device, Employee};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum InventoryImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for InventoryImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InventoryImportError::Io(err) => write!(f, "failed to read inventory export: {}", err),
            InventoryImportError::Csv(err) => write!(f, "invalid inventory CSV data: {}", err),
        }
    }
}

impl std::error::Error for InventoryImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryImportError::Io(err) => Some(err),
            InventoryImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for InventoryImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for InventoryImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One exported row keyed by normalized column header. The first non-empty
/// value wins when two headers normalize to the same key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<String, serde_json::Value>")]
pub struct RawRecord {
    fields: BTreeMap<String, String>,
}

impl RawRecord {
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut record = Self::default();
        for (key, value) in pairs {
            record.insert(key.as_ref(), value.as_ref());
        }
        record
    }

    pub fn insert(&mut self, header: &str, value: &str) {
        let key = normalizer::normalize_header(header);
        let value = value.trim();
        if key.is_empty() || value.is_empty() {
            return;
        }
        self.fields
            .entry(key)
            .or_insert_with(|| value.to_string());
    }

    /// Non-empty value stored under an already-normalized key.
    pub fn get(&self, normalized_key: &str) -> Option<&str> {
        self.fields.get(normalized_key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve this row into a device; `position` numbers serial-less devices.
    pub fn to_device(&self, position: usize) -> Device {
        mapping::device_from_record(self, position)
    }

    pub fn to_employee(&self) -> Employee {
        mapping::employee_from_record(self)
    }
}

impl From<BTreeMap<String, serde_json::Value>> for RawRecord {
    fn from(map: BTreeMap<String, serde_json::Value>) -> Self {
        let mut record = Self::default();
        for (key, value) in map {
            let text = match value {
                serde_json::Value::Null => continue,
                serde_json::Value::String(text) => text,
                other => other.to_string(),
            };
            record.insert(&key, &text);
        }
        record
    }
}

/// Resolve raw rows into devices, numbering serial-less rows by position.
/// Blank rows are dropped before numbering.
pub fn devices_from_records(records: &[RawRecord]) -> Vec<Device> {
    records
        .iter()
        .filter(|record| !record.is_empty())
        .enumerate()
        .map(|(position, record)| record.to_device(position))
        .collect()
}

pub struct InventoryImporter;

impl InventoryImporter {
    pub fn devices_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Device>, InventoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::devices_from_reader(file)
    }

    pub fn devices_from_reader<R: Read>(reader: R) -> Result<Vec<Device>, InventoryImportError> {
        let records = Self::records_from_reader(reader)?;
        let devices = devices_from_records(&records);
        tracing::debug!(devices = devices.len(), "imported device inventory");
        Ok(devices)
    }

    /// Raw rows with normalized headers, for callers that merge several sources.
    pub fn records_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<RawRecord>, InventoryImportError> {
        Ok(parser::parse_records(reader)?)
    }

    pub fn employees_from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<Employee>, InventoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::employees_from_reader(file)
    }

    pub fn employees_from_reader<R: Read>(
        reader: R,
    ) -> Result<Vec<Employee>, InventoryImportError> {
        let employees: Vec<Employee> = parser::parse_records(reader)?
            .iter()
            .filter(|record| !record.is_empty())
            .map(RawRecord::to_employee)
            .collect();
        tracing::debug!(employees = employees.len(), "imported employee roster");
        Ok(employees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn devices_resolve_header_variants() {
        let csv = "\u{feff}Serial Number,Computer Name,Assigned To,Employee ID,\
                   Device Type,RAM Capacity,Storage\n\
                   SN-100,JOHN-LT,John Smith,E1,Laptop,16GB,512GB\n\
                   ,SHARED-PC,,,Desktop,8GB,256GB\n";
        let devices =
            InventoryImporter::devices_from_reader(Cursor::new(csv)).expect("devices parse");

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].id, "SN-100");
        assert_eq!(devices[0].computer_name.as_deref(), Some("JOHN-LT"));
        assert_eq!(devices[0].owner_name.as_deref(), Some("John Smith"));
        assert_eq!(devices[0].owner_ids, vec!["E1".to_string()]);
        assert_eq!(devices[0].ram_gb(), 16);
        assert_eq!(devices[1].id, "device-2");
        assert_eq!(devices[1].owner_name, None);
    }

    #[test]
    fn employees_skip_blank_rows() {
        let csv = "Employee ID,Name,Department,Title\nE1,Jane Doe,Finance,Analyst\n,,,\n";
        let employees =
            InventoryImporter::employees_from_reader(Cursor::new(csv)).expect("employees parse");

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, "E1");
        assert_eq!(employees[0].department, "Finance");
        assert_eq!(employees[0].role, "Analyst");
    }

    #[test]
    fn raw_record_accepts_json_values() {
        let record: RawRecord = serde_json::from_str(
            r#"{"Serial Number":"SN-7","RAM (GB)":32,"Owner":null,"user_id":" u7 "}"#,
        )
        .expect("record deserializes");

        assert_eq!(record.get("serialnumber"), Some("SN-7"));
        assert_eq!(record.get("ramgb"), Some("32"));
        assert_eq!(record.get("owner"), None);

        let device = record.to_device(0);
        assert_eq!(device.ram_gb(), 32);
        assert_eq!(device.owner_ids, vec!["u7".to_string()]);
    }

    #[test]
    fn first_non_empty_duplicate_header_wins() {
        let record = RawRecord::from_pairs([("RAM", ""), ("ram", "8GB"), ("R.A.M", "64GB")]);
        assert_eq!(record.get("ram"), Some("8GB"));
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = InventoryImporter::devices_from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            InventoryImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_csv_surfaces_csv_error() {
        let bytes: &[u8] = b"Serial,RAM\n\xff\xfe,16GB\n";
        let error = InventoryImporter::devices_from_reader(bytes).expect_err("expected csv error");

        match error {
            InventoryImportError::Csv(_) => {}
            other => panic!("expected csv error, got {other:?}"),
        }
    }
}
