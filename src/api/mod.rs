// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::rejection::JsonRejection,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ApiError,
    ledger::LedgerNetwork,
    models::{
        GenerateWidgetUrlRequest, LogDonationRequest, LogDonationResponse, WidgetUrlResponse,
    },
    state::AppState,
};

pub mod donations;
pub mod health;
pub mod widget;

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/generate-widget-url", post(widget::generate_widget_url))
        .route("/log-donation", post(donations::log_donation));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Unwrap a JSON body, mapping any rejection to a uniform 400.
pub(crate) fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        warn!(error = %rejection, "Rejected request body");
        ApiError::bad_request("Invalid JSON body")
    })
}

#[derive(OpenApi)]
#[openapi(
    paths(
        widget::generate_widget_url,
        donations::log_donation,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            GenerateWidgetUrlRequest,
            WidgetUrlResponse,
            LogDonationRequest,
            LogDonationResponse,
            LedgerNetwork,
            health::ReadyResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Donations", description = "On-ramp widget sessions and donation receipts"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
