//! Workplace device fleet analysis.
//!
//! Assigns job-role profiles to employees, links each employee to the device
//! believed to be theirs, scores that device against the profile baseline and
//! turns the result into costed remediation recommendations.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
