// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Donation Server Facade
//!
//! The trusted side of the donation flow. It owns the on-ramp partner
//! credentials and the ledger operator client, and exposes three operations:
//!
//! - [`DonationServer::refresh_access_token`]
//! - [`DonationServer::generate_widget_url`]
//! - [`DonationServer::log_donation`]
//!
//! Upstream failures are logged here with full detail and replaced by a
//! [`DonationError`] whose message is safe to show to any caller.

use std::sync::Arc;

use tracing::{error, info};

use crate::{
    ledger::ConsensusLedger,
    models::{DonationReceipt, DonationRecord, WidgetParams},
    providers::transak::{AccessToken, TransakClient},
};

/// Caller-safe failures. Upstream detail only goes to the server log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DonationError {
    #[error("Could not refresh on-ramp access token")]
    TokenRefresh,

    #[error("Could not create donation session")]
    WidgetSession,

    #[error("Could not log donation")]
    LogDonation,
}

pub struct DonationServer {
    onramp: TransakClient,
    ledger: Arc<dyn ConsensusLedger>,
    topic_id: String,
}

impl DonationServer {
    pub fn new(
        onramp: TransakClient,
        ledger: Arc<dyn ConsensusLedger>,
        topic_id: impl Into<String>,
    ) -> Self {
        Self {
            onramp,
            ledger,
            topic_id: topic_id.into(),
        }
    }

    pub fn topic_id(&self) -> &str {
        &self.topic_id
    }

    /// Obtain a fresh on-ramp access token. Never reused across calls.
    pub async fn refresh_access_token(&self) -> Result<AccessToken, DonationError> {
        self.onramp.refresh_access_token().await.map_err(|e| {
            error!(error = %e, "Error refreshing on-ramp access token");
            DonationError::TokenRefresh
        })
    }

    /// Create a one-time widget session and return only its URL.
    ///
    /// Always refreshes the access token first; if that fails no session
    /// request is made.
    pub async fn generate_widget_url(&self, params: &WidgetParams) -> Result<String, DonationError> {
        let token = self.refresh_access_token().await?;

        let widget_url = self
            .onramp
            .create_widget_session(&token, params)
            .await
            .map_err(|e| {
                error!(error = %e, "Error generating on-ramp widget URL");
                DonationError::WidgetSession
            })?;

        info!(
            fiat_currency = %params.fiat_currency,
            wallet_address = %params.wallet_address,
            "Donation widget session created"
        );

        Ok(widget_url)
    }

    /// Append the donation to the consensus topic and return the receipt
    /// exactly as the ledger reported it.
    pub async fn log_donation(
        &self,
        record: &DonationRecord,
    ) -> Result<DonationReceipt, DonationError> {
        let message = record.to_message().map_err(|e| {
            error!(error = %e, "Error serializing donation record");
            DonationError::LogDonation
        })?;

        let submission = self
            .ledger
            .submit_topic_message(&self.topic_id, message)
            .await
            .map_err(|e| {
                error!(
                    topic_id = %self.topic_id,
                    tx_id = %record.tx_id,
                    error = %e,
                    "Error logging donation to consensus topic"
                );
                DonationError::LogDonation
            })?;

        info!(
            topic_id = %self.topic_id,
            sequence_number = submission.sequence_number,
            transaction_id = %submission.transaction_id,
            "Donation logged to consensus topic"
        );

        Ok(DonationReceipt {
            sequence_number: submission.sequence_number.to_string(),
            transaction_id: submission.transaction_id,
        })
    }
}
