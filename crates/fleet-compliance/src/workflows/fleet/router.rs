use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::service::{AnalysisRequest, FleetService};

/// Router builder exposing the analysis endpoint and the catalog listing.
pub fn fleet_router(service: Arc<FleetService>) -> Router {
    Router::new()
        .route("/api/v1/fleet/analysis", post(analysis_handler))
        .route("/api/v1/fleet/industries", get(industries_handler))
        .with_state(service)
}

pub(crate) async fn analysis_handler(
    State(service): State<Arc<FleetService>>,
    axum::Json(request): axum::Json<AnalysisRequest>,
) -> Response {
    match service.analyze(request) {
        Ok(analysis) => (StatusCode::OK, axum::Json(analysis)).into_response(),
        Err(error) => {
            tracing::warn!(error = %error, "rejected fleet analysis input");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn industries_handler(State(service): State<Arc<FleetService>>) -> Response {
    let catalog = service.catalog();
    let tables: Vec<_> = std::iter::once(catalog.default_table())
        .chain(catalog.industries())
        .map(|table| {
            json!({
                "key": table.key(),
                "aliases": table.aliases(),
                "profiles": table
                    .profiles()
                    .iter()
                    .map(|profile| profile.id.as_str())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let payload = json!({
        "default_industry": service.default_industry(),
        "industries": tables,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
