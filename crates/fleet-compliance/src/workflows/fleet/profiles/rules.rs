use serde::{Deserialize, Serialize};

/// Substring test over the lowercased department and role text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RolePredicate {
    Department(String),
    Role(String),
    /// Department or role contains the needle.
    Either(String),
    AnyOf(Vec<RolePredicate>),
    AllOf(Vec<RolePredicate>),
}

impl RolePredicate {
    pub fn department(needle: &str) -> Self {
        Self::Department(needle.to_lowercase())
    }

    pub fn role(needle: &str) -> Self {
        Self::Role(needle.to_lowercase())
    }

    pub fn either(needle: &str) -> Self {
        Self::Either(needle.to_lowercase())
    }

    pub fn role_any(needles: &[&str]) -> Self {
        Self::AnyOf(needles.iter().map(|needle| Self::role(needle)).collect())
    }

    pub fn department_any(needles: &[&str]) -> Self {
        Self::AnyOf(needles.iter().map(|needle| Self::department(needle)).collect())
    }

    /// Both arguments must already be lowercase.
    pub(crate) fn matches(&self, department: &str, role: &str) -> bool {
        match self {
            RolePredicate::Department(needle) => department.contains(needle.as_str()),
            RolePredicate::Role(needle) => role.contains(needle.as_str()),
            RolePredicate::Either(needle) => {
                department.contains(needle.as_str()) || role.contains(needle.as_str())
            }
            RolePredicate::AnyOf(predicates) => predicates
                .iter()
                .any(|predicate| predicate.matches(department, role)),
            RolePredicate::AllOf(predicates) => predicates
                .iter()
                .all(|predicate| predicate.matches(department, role)),
        }
    }
}

/// One entry of an ordered rule table: when `when` holds, `profile_id` wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRule {
    pub profile_id: String,
    pub when: RolePredicate,
}

impl ProfileRule {
    pub fn new(profile_id: &str, when: RolePredicate) -> Self {
        Self {
            profile_id: profile_id.to_string(),
            when,
        }
    }
}
