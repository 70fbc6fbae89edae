// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! One-time donation widget URL endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::error;

use super::parse_body;
use crate::{
    error::ApiError,
    models::{GenerateWidgetUrlRequest, WidgetUrlResponse},
    state::AppState,
};

/// Generate a one-time on-ramp widget URL.
///
/// The partner access token is refreshed for every request. Only the widget
/// URL is returned; all other session data stays on the server.
#[utoipa::path(
    post,
    path = "/api/generate-widget-url",
    request_body = GenerateWidgetUrlRequest,
    tag = "Donations",
    responses(
        (status = 200, description = "Widget URL created", body = WidgetUrlResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "On-ramp provider failure")
    )
)]
pub async fn generate_widget_url(
    State(state): State<AppState>,
    payload: Result<Json<GenerateWidgetUrlRequest>, JsonRejection>,
) -> Result<Json<WidgetUrlResponse>, ApiError> {
    let request = parse_body(payload)?;

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(&missing));
    }
    if request.fiat_amount.is_some_and(|amount| amount < 0.0) {
        return Err(ApiError::bad_request("fiatAmount must be a positive number"));
    }

    let params = request
        .into_params()
        .ok_or_else(|| ApiError::bad_request("Invalid widget parameters"))?;

    let widget_url = state
        .donations
        .generate_widget_url(&params)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to generate widget URL");
            ApiError::internal("Failed to generate widget URL")
        })?;

    Ok(Json(WidgetUrlResponse { widget_url }))
}
