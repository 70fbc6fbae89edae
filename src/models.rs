// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the HTTP API, plus the request-scoped
//! values handed to the server facade. Wire names are camelCase to match the
//! browser client.
//!
//! ## Required fields
//!
//! Request bodies deserialize every field as optional so the handlers can
//! report *all* missing fields at once. A field counts as missing when it is
//! absent, `null`, an empty string, or a zero amount.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Crypto asset delivered by the on-ramp. Not caller-selectable.
pub const DONATION_CRYPTO_CURRENCY: &str = "HBAR";

// =============================================================================
// Widget Session Models
// =============================================================================

/// Parameters for one on-ramp widget session.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetParams {
    pub fiat_amount: f64,
    pub fiat_currency: String,
    pub crypto_currency_code: String,
    /// Recipient wallet; locked in the widget.
    pub wallet_address: String,
}

impl WidgetParams {
    pub fn new(
        fiat_amount: f64,
        fiat_currency: impl Into<String>,
        wallet_address: impl Into<String>,
    ) -> Self {
        Self {
            fiat_amount,
            fiat_currency: fiat_currency.into(),
            crypto_currency_code: DONATION_CRYPTO_CURRENCY.to_string(),
            wallet_address: wallet_address.into(),
        }
    }
}

/// Request to generate a one-time donation widget URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWidgetUrlRequest {
    /// Amount in fiat currency units.
    #[schema(example = 25.0)]
    pub fiat_amount: Option<f64>,
    /// ISO currency code (e.g. `USD`).
    #[schema(example = "USD")]
    pub fiat_currency: Option<String>,
    /// Recipient Hedera account.
    #[schema(example = "0.0.4242")]
    pub wallet_address: Option<String>,
}

impl GenerateWidgetUrlRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !amount_present(self.fiat_amount) {
            missing.push("fiatAmount");
        }
        if !text_present(self.fiat_currency.as_deref()) {
            missing.push("fiatCurrency");
        }
        if !text_present(self.wallet_address.as_deref()) {
            missing.push("walletAddress");
        }
        missing
    }

    /// Convert into widget parameters. Only valid once `missing_fields` is empty.
    pub fn into_params(self) -> Option<WidgetParams> {
        Some(WidgetParams::new(
            self.fiat_amount.filter(|amount| amount_present(Some(*amount)))?,
            self.fiat_currency?.trim(),
            self.wallet_address?.trim(),
        ))
    }
}

/// One-time widget URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WidgetUrlResponse {
    pub widget_url: String,
}

// =============================================================================
// Donation Log Models
// =============================================================================

/// A completed donation, as written to the consensus topic.
///
/// Field order is part of the message format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRecord {
    pub recipient: String,
    pub usd_value: f64,
    pub tx_id: String,
}

impl DonationRecord {
    /// Topic message payload.
    pub fn to_message(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Proof that a donation was ordered on the consensus topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    /// Topic sequence number assigned by the network.
    pub sequence_number: String,
    /// Ledger transaction id of the submission.
    pub transaction_id: String,
}

/// Request to log a completed donation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogDonationRequest {
    /// Recipient wallet that received the donation.
    #[schema(example = "0.0.4242")]
    pub recipient: Option<String>,
    /// Donation value in USD.
    #[schema(example = 25.0)]
    pub usd_value: Option<f64>,
    /// On-ramp order or ledger transaction reference.
    #[schema(example = "0.0.5005@1718000000.000000001")]
    pub tx_id: Option<String>,
}

impl LogDonationRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !text_present(self.recipient.as_deref()) {
            missing.push("recipient");
        }
        if !amount_present(self.usd_value) {
            missing.push("usdValue");
        }
        if !text_present(self.tx_id.as_deref()) {
            missing.push("txId");
        }
        missing
    }

    /// Convert into a donation record. Only valid once `missing_fields` is empty.
    pub fn into_record(self) -> Option<DonationRecord> {
        Some(DonationRecord {
            recipient: self.recipient?.trim().to_string(),
            usd_value: self.usd_value.filter(|value| amount_present(Some(*value)))?,
            tx_id: self.tx_id?.trim().to_string(),
        })
    }
}

/// Result of logging a donation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogDonationResponse {
    pub success: bool,
    pub message: String,
    /// Topic sequence number assigned by the network.
    pub sequence_number: String,
    /// Ledger transaction id of the submission.
    pub transaction_id: String,
}

fn text_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn amount_present(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0 && v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_request_reports_every_missing_field() {
        let request = GenerateWidgetUrlRequest::default();
        assert_eq!(
            request.missing_fields(),
            vec!["fiatAmount", "fiatCurrency", "walletAddress"]
        );
    }

    #[test]
    fn zero_amount_and_blank_strings_count_as_missing() {
        let request = GenerateWidgetUrlRequest {
            fiat_amount: Some(0.0),
            fiat_currency: Some("  ".into()),
            wallet_address: Some("0.0.1".into()),
        };
        assert_eq!(request.missing_fields(), vec!["fiatAmount", "fiatCurrency"]);
    }

    #[test]
    fn complete_widget_request_converts_with_fixed_crypto_code() {
        let request: GenerateWidgetUrlRequest = serde_json::from_str(
            r#"{"fiatAmount": 50, "fiatCurrency": "EUR", "walletAddress": "0.0.77", "cryptoCurrencyCode": "BTC"}"#,
        )
        .unwrap();
        assert!(request.missing_fields().is_empty());
        let params = request.into_params().unwrap();
        assert_eq!(params, WidgetParams::new(50.0, "EUR", "0.0.77"));
        assert_eq!(params.crypto_currency_code, "HBAR");
    }

    #[test]
    fn donation_request_reports_missing_fields() {
        let request: LogDonationRequest =
            serde_json::from_str(r#"{"recipient": "0.0.9", "usdValue": null}"#).unwrap();
        assert_eq!(request.missing_fields(), vec!["usdValue", "txId"]);
    }

    #[test]
    fn donation_record_message_uses_wire_names_in_order() {
        let record = DonationRecord {
            recipient: "0.0.9".into(),
            usd_value: 12.5,
            tx_id: "tx-1".into(),
        };
        let message = String::from_utf8(record.to_message().unwrap()).unwrap();
        assert_eq!(
            message,
            r#"{"recipient":"0.0.9","usdValue":12.5,"txId":"tx-1"}"#
        );
    }

    #[test]
    fn receipt_serializes_camel_case() {
        let receipt = DonationReceipt {
            sequence_number: "42".into(),
            transaction_id: "0.0.5@1.2".into(),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["sequenceNumber"], "42");
        assert_eq!(json["transactionId"], "0.0.5@1.2");
    }
}
