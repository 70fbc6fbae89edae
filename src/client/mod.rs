// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Donation Client Facade
//!
//! The untrusted side of the donation flow. It holds no secrets: widget URLs
//! come from the server's `/api/generate-widget-url` endpoint, and balances
//! come from a credential-less ledger query client.
//!
//! Each operation is a single attempt; nothing is retried.

pub mod document;
pub mod identity;

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use url::Url;

use self::{
    document::{DocumentHost, IframeEmbed, WIDGET_ERROR_MESSAGE},
    identity::{IdentityError, IdentityWidget, IdentityWidgetConfig},
};
use crate::{
    ledger::{BalanceLedger, HederaLedger, LedgerError, LedgerNetwork},
    models::DONATION_CRYPTO_CURRENCY,
};

const WIDGET_URL_PATH: &str = "/api/generate-widget-url";
const ONBOARDING_MESSAGE: &str = "Creator onboarding initiated (simulated).";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("Request to server failed: {0}")]
    Request(String),

    #[error("Failed to get widget URL from server (status {0})")]
    ServerStatus(u16),

    #[error("Server response did not include a widgetUrl")]
    MissingWidgetUrl,

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// What the caller asked to donate.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationOptions {
    pub fiat_amount: f64,
    pub fiat_currency: String,
    /// The creator's recipient address.
    pub wallet_address: String,
}

/// Placeholder acknowledgement for creator onboarding.
///
/// No ledger account is derived from the identity session yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingAck {
    pub message: String,
}

/// Result of [`HboostClient::launch_donation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    /// The widget frame was injected.
    Embedded,
    /// No container with that id; nothing was requested or changed.
    ContainerMissing,
    /// The container now shows an error message.
    Failed,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetUrlRequestBody<'a> {
    fiat_amount: f64,
    fiat_currency: &'a str,
    crypto_currency_code: &'a str,
    wallet_address: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WidgetUrlResponseBody {
    widget_url: Option<String>,
}

pub struct HboostClient {
    server_url: Url,
    http: Client,
    ledger: Arc<dyn BalanceLedger>,
    identity: Option<Box<dyn IdentityWidget>>,
}

impl HboostClient {
    pub fn new(server_url: &str, ledger: Arc<dyn BalanceLedger>) -> Result<Self, ClientError> {
        let server_url =
            Url::parse(server_url).map_err(|e| ClientError::InvalidServerUrl(e.to_string()))?;

        Ok(Self {
            server_url,
            http: Client::new(),
            ledger,
            identity: None,
        })
    }

    /// Client backed by the public Hedera query client for `network`.
    pub fn for_network(network: LedgerNetwork, server_url: &str) -> Result<Self, ClientError> {
        let client = Self::new(server_url, Arc::new(HederaLedger::public(network)))?;
        info!(network = %network, "Donation client initialized");
        Ok(client)
    }

    /// Open the identity widget's connect flow for a creator.
    pub async fn onboard_creator(
        &mut self,
        mut widget: Box<dyn IdentityWidget>,
        client_id: &str,
        network: LedgerNetwork,
    ) -> Result<OnboardingAck, ClientError> {
        widget
            .init(IdentityWidgetConfig {
                client_id: client_id.to_string(),
                network: network.into(),
            })
            .await?;
        let provider = widget.connect().await?;
        info!(provider = ?provider, "Identity provider connected");

        self.identity = Some(widget);

        Ok(OnboardingAck {
            message: ONBOARDING_MESSAGE.to_string(),
        })
    }

    pub fn identity_connected(&self) -> bool {
        self.identity.is_some()
    }

    /// Fetch a widget URL from the server and embed it in `container_id`.
    ///
    /// Failures are shown inside the container instead of being returned.
    pub async fn launch_donation(
        &self,
        document: &mut dyn DocumentHost,
        container_id: &str,
        options: &DonationOptions,
    ) -> LaunchOutcome {
        let Some(container) = document.container_mut(container_id) else {
            error!(container_id = %container_id, "Container element not found");
            return LaunchOutcome::ContainerMissing;
        };

        match self.request_widget_url(options).await {
            Ok(widget_url) => {
                container.clear();
                container.append_frame(IframeEmbed::for_widget(widget_url));
                LaunchOutcome::Embedded
            }
            Err(e) => {
                error!(container_id = %container_id, error = %e, "Error launching donation");
                container.show_error(WIDGET_ERROR_MESSAGE);
                LaunchOutcome::Failed
            }
        }
    }

    /// Balance of `account_id` in display form (e.g. `"12.5 ℏ"`).
    pub async fn get_account_balance(&self, account_id: &str) -> Result<String, ClientError> {
        match self.ledger.account_balance(account_id).await {
            Ok(balance) => {
                info!(account_id = %account_id, balance = %balance.balance, "Account balance");
                Ok(balance.balance)
            }
            Err(e) => {
                error!(account_id = %account_id, error = %e, "Error getting account balance");
                Err(e.into())
            }
        }
    }

    async fn request_widget_url(&self, options: &DonationOptions) -> Result<String, ClientError> {
        let url = self
            .server_url
            .join(WIDGET_URL_PATH)
            .map_err(|e| ClientError::InvalidServerUrl(e.to_string()))?;

        let response = self
            .http
            .post(url)
            .json(&WidgetUrlRequestBody {
                fiat_amount: options.fiat_amount,
                fiat_currency: &options.fiat_currency,
                crypto_currency_code: DONATION_CRYPTO_CURRENCY,
                wallet_address: &options.wallet_address,
            })
            .send()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ClientError::ServerStatus(response.status().as_u16()));
        }

        let body: WidgetUrlResponseBody = response
            .json()
            .await
            .map_err(|e| ClientError::Request(format!("invalid response body: {e}")))?;

        body.widget_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ClientError::MissingWidgetUrl)
    }
}
