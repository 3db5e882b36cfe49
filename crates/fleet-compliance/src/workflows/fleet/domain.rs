use serde::{Deserialize, Serialize};

/// Employee row as delivered by the HR export. Read-only input to the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, alias = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "deviceSerial", skip_serializing_if = "Option::is_none")]
    pub device_serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Employee {
    /// Lowercased first name, taken from `first_name` or the first token of `name`.
    pub fn derived_first_name(&self) -> Option<String> {
        let explicit = self
            .first_name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());

        explicit
            .or_else(|| self.name.split_whitespace().next())
            .map(str::to_lowercase)
    }
}

/// Canonical device record. Column spellings are resolved before this point
/// (see `workflows::inventory`), so matching and scoring only read these fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub computer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owner_ids: Vec<String>,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub cpu: String,
    #[serde(default)]
    pub ram: String,
    #[serde(default)]
    pub storage: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub age: String,
}

impl Device {
    pub fn ram_gb(&self) -> u32 {
        leading_integer(&self.ram)
    }

    pub fn storage_gb(&self) -> u32 {
        leading_integer(&self.storage)
    }
}

/// Minimum hardware specification for a profile. Quantities stay as entered
/// ("16GB") and are parsed leniently at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Baseline {
    pub device_type: String,
    pub min_ram: String,
    pub min_cpu: String,
    pub min_storage: String,
    #[serde(default)]
    pub special_requirements: String,
}

impl Baseline {
    pub fn min_ram_gb(&self) -> u32 {
        leading_integer(&self.min_ram)
    }

    pub fn min_storage_gb(&self) -> u32 {
        leading_integer(&self.min_storage)
    }
}

/// Named job-role category carrying one hardware baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub department: String,
    pub level: String,
    pub industry: String,
    pub baseline: Baseline,
}

/// The single profile chosen for an employee during one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee: Employee,
    pub profile: Profile,
}

/// Strategy of the identity cascade that linked a device, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    ComputerName,
    SerialNumber,
    OwnerId,
    OwnerName,
}

impl MatchStrategy {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ComputerName,
            Self::SerialNumber,
            Self::OwnerId,
            Self::OwnerName,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ComputerName => "Computer name",
            Self::SerialNumber => "Serial number",
            Self::OwnerId => "Owner ID",
            Self::OwnerName => "Owner name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub employee: Employee,
    pub device: Option<Device>,
    pub matched_by: Option<MatchStrategy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    MinorIssues,
    NeedsUpgrade,
    OverProvisioned,
    NoDevice,
    NoProfile,
}

impl ComplianceStatus {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Compliant,
            Self::MinorIssues,
            Self::NeedsUpgrade,
            Self::OverProvisioned,
            Self::NoDevice,
            Self::NoProfile,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Compliant",
            Self::MinorIssues => "Minor Issues",
            Self::NeedsUpgrade => "Needs Upgrade",
            Self::OverProvisioned => "Over-Provisioned",
            Self::NoDevice => "No Device",
            Self::NoProfile => "No Profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceResult {
    pub employee: Employee,
    pub profile: Option<Profile>,
    pub device: Option<Device>,
    pub status: ComplianceStatus,
    pub score: u8,
    pub issues: Vec<String>,
}

/// Leading-integer extraction used for every GB quantity: "16GB" -> 16,
/// " 8 " -> 8, "8.5" -> 8. Anything without leading digits is 0.
pub fn leading_integer(value: &str) -> u32 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return 0;
    }

    digits.parse::<u32>().unwrap_or(u32::MAX)
}
