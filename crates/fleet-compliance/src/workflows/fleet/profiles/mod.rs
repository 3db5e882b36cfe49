mod catalog;
mod rules;

pub use rules::{ProfileRule, RolePredicate};

use super::domain::{Assignment, Employee, Profile};
use serde::Serialize;
use tracing::debug;

/// Errors raised while building a profile table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("industry table '{0}' has no profiles")]
    EmptyTable(String),
    #[error("rule in industry table '{table}' references unknown profile '{profile_id}'")]
    UnknownProfile { table: String, profile_id: String },
}

/// Ordered profiles and rules for one industry. The first profile is the
/// fallback when no rule matches.
#[derive(Debug, Clone, Serialize)]
pub struct IndustryTable {
    key: String,
    aliases: Vec<String>,
    profiles: Vec<Profile>,
    rules: Vec<ProfileRule>,
}

impl IndustryTable {
    pub fn new(
        key: &str,
        aliases: &[&str],
        profiles: Vec<Profile>,
        rules: Vec<ProfileRule>,
    ) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::EmptyTable(key.to_string()));
        }

        if let Some(rule) = rules
            .iter()
            .find(|rule| !profiles.iter().any(|profile| profile.id == rule.profile_id))
        {
            return Err(CatalogError::UnknownProfile {
                table: key.to_string(),
                profile_id: rule.profile_id.clone(),
            });
        }

        Ok(Self {
            key: key.to_string(),
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
            profiles,
            rules,
        })
    }

    /// Shipped tables are checked by tests instead of at runtime.
    fn builtin(
        key: &str,
        aliases: &[&str],
        profiles: Vec<Profile>,
        rules: Vec<ProfileRule>,
    ) -> Self {
        Self {
            key: key.to_string(),
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
            profiles,
            rules,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn rules(&self) -> &[ProfileRule] {
        &self.rules
    }

    pub fn profile(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    fn answers_to(&self, industry: &str) -> bool {
        self.key.eq_ignore_ascii_case(industry)
            || self
                .aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(industry))
    }

    /// First rule whose predicate holds wins; otherwise the first profile.
    pub fn resolve(&self, department: &str, role: &str) -> &Profile {
        let department = department.to_lowercase();
        let role = role.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.when.matches(&department, &role))
            .and_then(|rule| self.profile(&rule.profile_id))
            .unwrap_or(&self.profiles[0])
    }
}

/// Static per-industry profile tables plus the generic default table.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileCatalog {
    default_table: IndustryTable,
    industries: Vec<IndustryTable>,
}

impl ProfileCatalog {
    pub fn new(default_table: IndustryTable, industries: Vec<IndustryTable>) -> Self {
        Self {
            default_table,
            industries,
        }
    }

    /// Catalog shipped with the service: a generic table plus retail,
    /// healthcare and financial services.
    pub fn standard() -> Self {
        catalog::standard()
    }

    pub fn default_table(&self) -> &IndustryTable {
        &self.default_table
    }

    pub fn industries(&self) -> &[IndustryTable] {
        &self.industries
    }

    /// Unknown or blank industry keys fall back to the default table.
    pub fn table_for(&self, industry: &str) -> &IndustryTable {
        let industry = industry.trim();
        self.industries
            .iter()
            .find(|table| table.answers_to(industry))
            .unwrap_or(&self.default_table)
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Assign exactly one profile to every employee, preserving input order.
pub fn assign_profiles(
    employees: &[Employee],
    industry: &str,
    catalog: &ProfileCatalog,
) -> Vec<Assignment> {
    let table = catalog.table_for(industry);
    debug!(industry, table = table.key(), "resolved profile table");

    employees
        .iter()
        .map(|employee| Assignment {
            employee: employee.clone(),
            profile: table.resolve(&employee.department, &employee.role).clone(),
        })
        .collect()
}
