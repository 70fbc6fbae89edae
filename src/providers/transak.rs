// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transak partner API integration for the fiat on-ramp widget.
//!
//! Two calls are involved, always in this order:
//! 1. `refresh-token`: exchange API key + secret for a short-lived access token
//! 2. `auth/session`: create a one-time widget session using that token

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::{models::WidgetParams, secret::SecretString};

pub const DEFAULT_REFRESH_URL: &str =
    "https://api-stg.transak.com/partners/api/v2/refresh-token";
pub const DEFAULT_SESSION_URL: &str = "https://api-gateway-stg.transak.com/api/v2/auth/session";

const ACCESS_TOKEN_HEADER: &str = "access-token";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum TransakError {
    #[error("Transak request failed: {0}")]
    Request(String),

    #[error("Transak refresh-token returned {status}: {body}")]
    Refresh { status: u16, body: String },

    #[error("Transak session returned {status}: {body}")]
    Session { status: u16, body: String },
}

/// Partner credentials and endpoints.
#[derive(Debug)]
pub struct TransakConfig {
    pub api_key: String,
    pub api_secret: SecretString,
    /// Domain whitelisted with Transak as the widget referrer.
    pub referrer_domain: String,
    pub refresh_url: String,
    pub session_url: String,
}

/// Short-lived partner access token.
///
/// Obtained per call and never cached.
pub struct AccessToken(String);

impl AccessToken {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[derive(Debug)]
pub struct TransakClient {
    config: TransakConfig,
    http: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenRequest<'a> {
    api_key: &'a str,
    api_secret: &'a str,
}

impl TransakClient {
    pub fn new(config: TransakConfig) -> Result<Self, TransakError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TransakError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    /// Fetch a fresh partner access token.
    pub async fn refresh_access_token(&self) -> Result<AccessToken, TransakError> {
        let body = RefreshTokenRequest {
            api_key: &self.config.api_key,
            api_secret: self.config.api_secret.expose(),
        };

        let response = self
            .http
            .post(&self.config.refresh_url)
            .header("accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| TransakError::Request(format!("refresh-token failed: {e}")))?;

        let status = response.status();
        let payload = read_json(response).await;

        let token = payload
            .as_ref()
            .and_then(|value| value.pointer("/data/accessToken"))
            .and_then(Value::as_str)
            .filter(|token| !token.trim().is_empty());

        match token {
            Some(token) if status.is_success() => Ok(AccessToken(token.to_string())),
            _ => Err(TransakError::Refresh {
                status: status.as_u16(),
                body: describe_payload(payload.as_ref()),
            }),
        }
    }

    /// Create a one-time widget session and return only its URL.
    pub async fn create_widget_session(
        &self,
        token: &AccessToken,
        params: &WidgetParams,
    ) -> Result<String, TransakError> {
        let body = self.session_payload(params);

        debug!(
            fiat_currency = %params.fiat_currency,
            crypto_currency = %params.crypto_currency_code,
            "Creating Transak widget session"
        );

        let response = self
            .http
            .post(&self.config.session_url)
            .header("accept", "application/json")
            .header(ACCESS_TOKEN_HEADER, token.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| TransakError::Request(format!("session request failed: {e}")))?;

        let status = response.status();
        let payload = read_json(response).await;

        let widget_url = payload
            .as_ref()
            .and_then(|value| value.pointer("/data/widgetUrl"))
            .and_then(Value::as_str)
            .filter(|url| !url.trim().is_empty());

        match widget_url {
            Some(url) if status.is_success() => Ok(url.to_string()),
            _ => Err(TransakError::Session {
                status: status.as_u16(),
                body: describe_payload(payload.as_ref()),
            }),
        }
    }

    fn session_payload(&self, params: &WidgetParams) -> Value {
        json!({
            "widgetParams": {
                "apiKey": self.config.api_key,
                "referrerDomain": self.config.referrer_domain,
                "fiatAmount": params.fiat_amount,
                "fiatCurrency": params.fiat_currency,
                "cryptoCurrencyCode": params.crypto_currency_code,
                "walletAddress": params.wallet_address,
                "disableWalletAddressForm": true
            }
        })
    }
}

async fn read_json(response: Response) -> Option<Value> {
    let text = response.text().await.ok()?;
    serde_json::from_str(&text).ok()
}

fn describe_payload(payload: Option<&Value>) -> String {
    payload
        .map(Value::to_string)
        .unwrap_or_else(|| "<non-JSON body>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fake_transak, transak_config, FakeTransak};

    fn params() -> WidgetParams {
        WidgetParams::new(25.0, "USD", "0.0.4242")
    }

    #[test]
    fn session_payload_locks_wallet_address_and_sets_referrer() {
        let client = TransakClient::new(transak_config("http://127.0.0.1:1")).unwrap();
        let payload = client.session_payload(&params());
        let widget = &payload["widgetParams"];
        assert_eq!(widget["apiKey"], "pk_test");
        assert_eq!(widget["referrerDomain"], "donate.example.org");
        assert_eq!(widget["fiatAmount"], 25.0);
        assert_eq!(widget["fiatCurrency"], "USD");
        assert_eq!(widget["cryptoCurrencyCode"], "HBAR");
        assert_eq!(widget["walletAddress"], "0.0.4242");
        assert_eq!(widget["disableWalletAddressForm"], true);
        assert!(widget.get("apiSecret").is_none());
    }

    #[test]
    fn access_token_debug_is_redacted() {
        let token = AccessToken("eyJhbGciOi".to_string());
        assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
    }

    #[tokio::test]
    async fn refresh_sends_key_and_secret() {
        let fake = fake_transak(FakeTransak::default()).await;
        let client = TransakClient::new(transak_config(&fake.base_url)).unwrap();

        let token = client.refresh_access_token().await.expect("token");
        assert_eq!(token.as_str(), "token-1");

        let bodies = fake.refresh_bodies();
        assert_eq!(bodies.len(), 1);
        assert_eq!(bodies[0]["apiKey"], "pk_test");
        assert_eq!(bodies[0]["apiSecret"], "sk_test");
    }

    #[tokio::test]
    async fn refresh_without_token_field_is_an_error() {
        let fake = fake_transak(FakeTransak {
            refresh_body: Some(json!({ "data": {} })),
            ..FakeTransak::default()
        })
        .await;
        let client = TransakClient::new(transak_config(&fake.base_url)).unwrap();

        let err = client.refresh_access_token().await.unwrap_err();
        assert!(matches!(err, TransakError::Refresh { status: 200, .. }));
    }

    #[tokio::test]
    async fn refresh_non_success_status_is_an_error() {
        let fake = fake_transak(FakeTransak {
            refresh_status: 401,
            refresh_body: Some(json!({ "data": { "accessToken": "ignored" } })),
            ..FakeTransak::default()
        })
        .await;
        let client = TransakClient::new(transak_config(&fake.base_url)).unwrap();

        let err = client.refresh_access_token().await.unwrap_err();
        assert!(matches!(err, TransakError::Refresh { status: 401, .. }));
    }

    #[tokio::test]
    async fn session_sends_token_header_and_returns_url() {
        let fake = fake_transak(FakeTransak::default()).await;
        let client = TransakClient::new(transak_config(&fake.base_url)).unwrap();

        let token = AccessToken("token-xyz".to_string());
        let url = client
            .create_widget_session(&token, &params())
            .await
            .expect("widget url");

        assert_eq!(url, "https://example/session/abc");
        assert_eq!(fake.session_tokens(), vec!["token-xyz".to_string()]);
    }

    #[tokio::test]
    async fn session_without_widget_url_is_an_error() {
        let fake = fake_transak(FakeTransak {
            session_body: json!({ "data": { "sessionId": "s-1" } }),
            ..FakeTransak::default()
        })
        .await;
        let client = TransakClient::new(transak_config(&fake.base_url)).unwrap();

        let err = client
            .create_widget_session(&AccessToken("t".to_string()), &params())
            .await
            .unwrap_err();
        assert!(matches!(err, TransakError::Session { status: 200, .. }));
    }
}
