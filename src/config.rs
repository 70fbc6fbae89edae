// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Environment variable names, defaults, and the [`ServerConfig`] loaded once
//! at startup. The config is the only place the ledger operator key and the
//! on-ramp API secret are read from; both are held as [`SecretString`].
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HEDERA_NETWORK` | Ledger network (`mainnet` or `testnet`) | `testnet` |
//! | `HEDERA_ACCOUNT_ID` | Operator account paying for topic messages | Required |
//! | `HEDERA_PRIVATE_KEY` | Operator private key | Required |
//! | `HCS_TOPIC_ID` | Consensus topic receiving donation receipts | Required |
//! | `TRANSAK_API_KEY` | On-ramp partner API key | Required |
//! | `TRANSAK_API_SECRET` | On-ramp partner API secret | Required |
//! | `APP_DOMAIN` | Whitelisted referrer domain (falls back to `APP_URL`) | `localhost:3000` |
//! | `TRANSAK_REFRESH_URL` | Access-token refresh endpoint | Transak staging |
//! | `TRANSAK_SESSION_URL` | Widget session endpoint | Transak staging |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use crate::{
    ledger::LedgerNetwork,
    logging::LogFormat,
    providers::transak::{TransakConfig, DEFAULT_REFRESH_URL, DEFAULT_SESSION_URL},
    secret::SecretString,
};

pub const HEDERA_NETWORK_ENV: &str = "HEDERA_NETWORK";
pub const HEDERA_ACCOUNT_ID_ENV: &str = "HEDERA_ACCOUNT_ID";
pub const HEDERA_PRIVATE_KEY_ENV: &str = "HEDERA_PRIVATE_KEY";
pub const HCS_TOPIC_ID_ENV: &str = "HCS_TOPIC_ID";
pub const TRANSAK_API_KEY_ENV: &str = "TRANSAK_API_KEY";
pub const TRANSAK_API_SECRET_ENV: &str = "TRANSAK_API_SECRET";
pub const TRANSAK_REFRESH_URL_ENV: &str = "TRANSAK_REFRESH_URL";
pub const TRANSAK_SESSION_URL_ENV: &str = "TRANSAK_SESSION_URL";

/// Primary source for the referrer domain whitelisted with the on-ramp.
pub const APP_DOMAIN_ENV: &str = "APP_DOMAIN";
/// Fallback for [`APP_DOMAIN_ENV`], usually the public URL of the front-end.
pub const APP_URL_ENV: &str = "APP_URL";
pub const DEFAULT_APP_DOMAIN: &str = "localhost:3000";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Server-side configuration. Built once, never mutated.
#[derive(Debug)]
pub struct ServerConfig {
    pub network: LedgerNetwork,
    pub operator_account_id: String,
    pub operator_private_key: SecretString,
    pub topic_id: String,
    pub transak: TransakConfig,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    ///
    /// Values are trimmed; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let network = match var(HEDERA_NETWORK_ENV) {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: HEDERA_NETWORK_ENV,
                reason,
            })?,
            None => LedgerNetwork::Testnet,
        };

        let referrer_domain = var(APP_DOMAIN_ENV)
            .or_else(|| var(APP_URL_ENV))
            .unwrap_or_else(|| DEFAULT_APP_DOMAIN.to_string());

        let refresh_url = var(TRANSAK_REFRESH_URL_ENV)
            .unwrap_or_else(|| DEFAULT_REFRESH_URL.to_string());
        ensure_url(TRANSAK_REFRESH_URL_ENV, &refresh_url)?;
        let session_url = var(TRANSAK_SESSION_URL_ENV)
            .unwrap_or_else(|| DEFAULT_SESSION_URL.to_string());
        ensure_url(TRANSAK_SESSION_URL_ENV, &session_url)?;

        let transak = TransakConfig {
            api_key: required(TRANSAK_API_KEY_ENV)?,
            api_secret: SecretString::new(required(TRANSAK_API_SECRET_ENV)?),
            referrer_domain,
            refresh_url,
            session_url,
        };

        let host = var(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let bind_addr: SocketAddr =
            format!("{host}:{port}")
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                    var: HOST_ENV,
                    reason: e.to_string(),
                })?;

        let log_format = match var(LOG_FORMAT_ENV) {
            Some(raw) => raw.parse().map_err(|reason| ConfigError::Invalid {
                var: LOG_FORMAT_ENV,
                reason,
            })?,
            None => LogFormat::Pretty,
        };

        Ok(Self {
            network,
            operator_account_id: required(HEDERA_ACCOUNT_ID_ENV)?,
            operator_private_key: SecretString::new(required(HEDERA_PRIVATE_KEY_ENV)?),
            topic_id: required(HCS_TOPIC_ID_ENV)?,
            transak,
            bind_addr,
            log_format,
        })
    }
}

fn ensure_url(var: &'static str, value: &str) -> Result<(), ConfigError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        })
}
