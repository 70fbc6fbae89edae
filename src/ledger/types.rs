// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger types and network constants.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hedera network selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LedgerNetwork {
    Mainnet,
    #[default]
    Testnet,
}

impl LedgerNetwork {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for LedgerNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(format!(
                "unsupported network `{other}` (expected mainnet or testnet)"
            )),
        }
    }
}

/// Receipt data for a consensus-topic submission.
///
/// `sequence_number` is assigned by the network and is the durable proof
/// that the message was ordered on the topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSubmission {
    pub sequence_number: u64,
    pub transaction_id: String,
}

/// Account balance as reported by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AccountBalance {
    /// Account ID (`shard.realm.num`)
    pub account_id: String,
    /// Display form, e.g. `"12.5 ℏ"`
    pub balance: String,
    /// Raw amount in tinybars
    pub tinybars: i64,
}
