// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Donation receipt logging endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::error;

use super::parse_body;
use crate::{
    error::ApiError,
    models::{LogDonationRequest, LogDonationResponse},
    state::AppState,
};

const LOGGED_MESSAGE: &str = "Donation logged to HCS";

/// Record a completed donation on the consensus topic.
///
/// The returned sequence number is assigned by the ledger and serves as the
/// durable proof of the donation.
#[utoipa::path(
    post,
    path = "/api/log-donation",
    request_body = LogDonationRequest,
    tag = "Donations",
    responses(
        (status = 200, description = "Donation logged", body = LogDonationResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 500, description = "Ledger submission failure")
    )
)]
pub async fn log_donation(
    State(state): State<AppState>,
    payload: Result<Json<LogDonationRequest>, JsonRejection>,
) -> Result<Json<LogDonationResponse>, ApiError> {
    let request = parse_body(payload)?;

    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ApiError::missing_fields(&missing));
    }
    if request.usd_value.is_some_and(|value| value < 0.0) {
        return Err(ApiError::bad_request("usdValue must be a positive number"));
    }

    let record = request
        .into_record()
        .ok_or_else(|| ApiError::bad_request("Invalid donation record"))?;

    let receipt = state.donations.log_donation(&record).await.map_err(|e| {
        error!(error = %e, tx_id = %record.tx_id, "Failed to log donation");
        ApiError::internal("Failed to log donation to HCS")
    })?;

    Ok(Json(LogDonationResponse {
        success: true,
        message: LOGGED_MESSAGE.to_string(),
        sequence_number: receipt.sequence_number,
        transaction_id: receipt.transaction_id,
    }))
}
