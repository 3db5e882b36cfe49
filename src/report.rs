use chrono::{Local, NaiveDate};
use clap::Args;
use fleet_compliance::config::AppConfig;
use fleet_compliance::error::AppError;
use fleet_compliance::telemetry;
use fleet_compliance::workflows::fleet::{FleetAnalysis, ProfileCatalog};
use fleet_compliance::workflows::inventory::InventoryImporter;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AnalyzeArgs {
    /// Employee roster CSV export
    #[arg(long)]
    pub(crate) employees: PathBuf,
    /// Device inventory CSV export
    #[arg(long)]
    pub(crate) devices: PathBuf,
    /// Industry profile table (defaults to FLEET_INDUSTRY, then "general")
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Print the full analysis as JSON instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_analysis(args: AnalyzeArgs) -> Result<(), AppError> {
    let AnalyzeArgs {
        employees,
        devices,
        industry,
        json,
    } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let employees = InventoryImporter::employees_from_path(&employees)?;
    let devices = InventoryImporter::devices_from_path(&devices)?;
    let industry = industry.unwrap_or(config.analysis.default_industry);

    let catalog = ProfileCatalog::standard();
    let analysis = FleetAnalysis::run(&employees, &devices, &industry, &catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print!("{}", format_report(&analysis, Local::now().date_naive()));
    }

    Ok(())
}

pub(crate) fn run_industries() -> Result<(), AppError> {
    let catalog = ProfileCatalog::standard();
    let tables = std::iter::once(catalog.default_table()).chain(catalog.industries());

    for table in tables {
        println!("{} (aliases: {})", table.key(), table.aliases().join(", "));
        for profile in table.profiles() {
            println!(
                "- {}: {} | {} RAM | {} storage",
                profile.name,
                profile.baseline.device_type,
                profile.baseline.min_ram,
                profile.baseline.min_storage
            );
        }
    }

    Ok(())
}

pub(crate) fn format_report(analysis: &FleetAnalysis, generated_on: NaiveDate) -> String {
    let summary = &analysis.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Fleet compliance report");
    let _ = writeln!(
        out,
        "Industry: {} | employees: {} | generated {}",
        analysis.industry,
        analysis.compliance.len(),
        generated_on
    );

    let _ = writeln!(out, "\nStatus breakdown");
    for entry in &summary.status_counts {
        let _ = writeln!(out, "- {}: {}", entry.status_label, entry.count);
    }

    if analysis.recommendations.is_empty() {
        let _ = writeln!(out, "\nRecommendations: none");
    } else {
        let _ = writeln!(out, "\nRecommendations");
        for recommendation in &analysis.recommendations {
            let employee = if recommendation.employee.name.is_empty() {
                recommendation.employee.id.as_str()
            } else {
                recommendation.employee.name.as_str()
            };
            let _ = writeln!(
                out,
                "- [{}] {} | {}: {} ({}, {:+})",
                recommendation.priority.label(),
                employee,
                recommendation.recommendation_type.label(),
                recommendation.action,
                recommendation.timeline,
                recommendation.estimated_cost
            );
        }
    }

    if !analysis.unmatched_devices.is_empty() {
        let _ = writeln!(out, "\nUnassigned devices");
        for device in &analysis.unmatched_devices {
            let label = device.computer_name.as_deref().unwrap_or(device.id.as_str());
            let _ = writeln!(out, "- {} ({})", label, device.id);
        }
    }

    let _ = writeln!(out, "\nCost summary");
    let _ = writeln!(out, "- Upgrades: {}", summary.upgrades);
    let _ = writeln!(out, "- Savings: {}", summary.downgrades);
    let _ = writeln!(out, "- Net: {:+}", summary.net);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_compliance::workflows::fleet::{Device, Employee};

    fn sample_analysis() -> FleetAnalysis {
        let employees = vec![
            Employee {
                id: "E1".to_string(),
                name: "John Smith".to_string(),
                department: "Engineering".to_string(),
                role: "Senior Developer".to_string(),
                ..Employee::default()
            },
            Employee {
                id: "E2".to_string(),
                department: "Sales".to_string(),
                ..Employee::default()
            },
        ];
        let devices = vec![
            Device {
                id: "SN-1".to_string(),
                computer_name: Some("John-LTP".to_string()),
                ram: "8".to_string(),
                storage: "128".to_string(),
                ..Device::default()
            },
            Device {
                id: "SN-2".to_string(),
                computer_name: Some("SPARE-01".to_string()),
                ..Device::default()
            },
        ];

        FleetAnalysis::run(&employees, &devices, "general", &ProfileCatalog::standard())
    }

    #[test]
    fn text_report_lists_recommendations_and_totals() {
        let generated_on = NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date");
        let report = format_report(&sample_analysis(), generated_on);

        assert!(report.contains("Industry: general | employees: 2 | generated 2025-09-24"));
        assert!(report.contains("- Needs Upgrade: 1"));
        assert!(report.contains("- No Device: 1"));
        assert!(report.contains("[Medium] John Smith | Minor Fix"));
        assert!(report.contains("[High] E2 | Assign"));
        assert!(report.contains("- SPARE-01 (SN-2)"));
        assert!(report.contains("- Upgrades: 1500"));
        assert!(report.contains("- Net: -1500"));
    }

    #[test]
    fn json_output_carries_every_section() {
        let value = serde_json::to_value(sample_analysis()).expect("serializes");

        for key in [
            "industry",
            "assignments",
            "matches",
            "compliance",
            "recommendations",
            "summary",
            "unmatched_devices",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
