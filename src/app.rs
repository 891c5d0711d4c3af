//! Dashboard HTTP API

use crate::aggregate;
use crate::app_state::{AppState, SharedAppState};
use crate::dataset::Dataset;
use crate::error::DashboardError;
use crate::layout::Layout;
use crate::metrics;
use crate::models;
use crate::validated_json::ValidatedJson;

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower::Layer;
use tower::ServiceBuilder;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;
use tracing::{event, Level};

impl IntoResponse for models::UpdateResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Returns a [axum::Router] for the dashboard API
///
/// The router is populated with all routes as well as the following middleware:
///
/// * a [tower_http::trace::TraceLayer] for tracing requests and responses and recording metrics
pub fn router(state: SharedAppState) -> Router {
    fn v1() -> Router<SharedAppState> {
        Router::new()
            .route("/layout", get(layout))
            .route("/outcomes", get(outcomes))
            .route("/payload-outcomes", get(payload_outcomes))
            .route("/update", post(update))
    }

    Router::new()
        .route("/", get(dashboard))
        .route("/metrics", get(metrics::metrics_handler))
        .nest("/v1", v1())
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .on_request(metrics::request_counter)
                    .on_response(metrics::record_response_metrics),
            ),
        )
        .with_state(state)
}

/// Dashboard service type alias
///
/// This type implements [tower::Service].
pub type Service = NormalizePath<Router>;

/// Returns a [crate::app::Service] for the dashboard API
///
/// The service is populated with all routes as well as the following middleware:
///
/// * a [tower_http::normalize_path::NormalizePathLayer] for trimming trailing slashes from
///   requests
///
/// # Arguments
///
/// * `dataset`: Launch records loaded at startup
pub fn service(dataset: Dataset) -> Service {
    let state = Arc::new(AppState::new(dataset));
    let router = router(state);
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Dashboard page
async fn dashboard(State(state): State<SharedAppState>) -> Result<Html<String>, DashboardError> {
    Ok(Html(state.layout.render_page()?))
}

/// Dashboard layout
async fn layout(State(state): State<SharedAppState>) -> Json<Layout> {
    Json(state.layout.clone())
}

/// Outcome aggregation rows
async fn outcomes(
    State(state): State<SharedAppState>,
    query: Result<Query<models::OutcomesQuery>, QueryRejection>,
) -> Result<Json<Vec<models::OutcomeSlice>>, DashboardError> {
    let Query(query) = query?;
    Ok(Json(aggregate::aggregate_outcomes(
        &state.dataset,
        &query.site,
    )))
}

/// Payload correlation rows
async fn payload_outcomes(
    State(state): State<SharedAppState>,
    query: Result<Query<models::PayloadOutcomesQuery>, QueryRejection>,
) -> Result<Json<Vec<models::PayloadPoint>>, DashboardError> {
    let Query(query) = query?;
    let range = models::PayloadRange::new(
        query.low.unwrap_or(state.dataset.min_payload()),
        query.high.unwrap_or(state.dataset.max_payload()),
    );
    Ok(Json(aggregate::correlate(&state.dataset, &query.site, range)))
}

/// Handler for input change events
///
/// Renders every output bound to a changed input.
async fn update(
    State(state): State<SharedAppState>,
    ValidatedJson(request): ValidatedJson<models::UpdateRequest>,
) -> Result<models::UpdateResponse, DashboardError> {
    event!(Level::INFO, "inputs changed: {:?}", request.changed);
    let outputs = state
        .dispatcher
        .dispatch(&state.dataset, &request.changed, &request.controls)?;
    Ok(models::UpdateResponse { outputs })
}
