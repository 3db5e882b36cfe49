use std::sync::Arc;

use serde::Deserialize;

use super::domain::Employee;
use super::pipeline::FleetAnalysis;
use super::profiles::ProfileCatalog;
use super::recommendations::RecommendationEngine;
use crate::config::AnalysisConfig;
use crate::workflows::inventory::{
    devices_from_records, InventoryImportError, InventoryImporter, RawRecord,
};

/// Analysis input accepted over HTTP. Structured rows and CSV text may be
/// mixed; structured rows come first.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub devices: Vec<RawRecord>,
    #[serde(default)]
    pub employees_csv: Option<String>,
    #[serde(default)]
    pub devices_csv: Option<String>,
}

/// Service holding the immutable catalog and pricing shared by every request.
pub struct FleetService {
    catalog: Arc<ProfileCatalog>,
    engine: RecommendationEngine,
    default_industry: String,
}

impl FleetService {
    pub fn new(catalog: Arc<ProfileCatalog>, config: &AnalysisConfig) -> Self {
        Self::with_engine(catalog, RecommendationEngine::default(), config)
    }

    pub fn with_engine(
        catalog: Arc<ProfileCatalog>,
        engine: RecommendationEngine,
        config: &AnalysisConfig,
    ) -> Self {
        Self {
            catalog,
            engine,
            default_industry: config.default_industry.clone(),
        }
    }

    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }

    pub fn default_industry(&self) -> &str {
        &self.default_industry
    }

    /// Resolve the request's rows and run the pipeline.
    pub fn analyze(&self, request: AnalysisRequest) -> Result<FleetAnalysis, InventoryImportError> {
        let AnalysisRequest {
            industry,
            mut employees,
            devices: mut device_rows,
            employees_csv,
            devices_csv,
        } = request;

        if let Some(csv) = employees_csv.as_deref() {
            employees.extend(InventoryImporter::employees_from_reader(csv.as_bytes())?);
        }
        if let Some(csv) = devices_csv.as_deref() {
            device_rows.extend(InventoryImporter::records_from_reader(csv.as_bytes())?);
        }
        let devices = devices_from_records(&device_rows);

        let industry = industry
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(self.default_industry.as_str());

        Ok(FleetAnalysis::run_with(
            &employees,
            &devices,
            industry,
            &self.catalog,
            &self.engine,
        ))
    }
}
