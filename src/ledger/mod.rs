// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hedera ledger integration.
//!
//! This module provides:
//! - Account balance queries (public, no operator required)
//! - Consensus-topic message submission signed by the operator
//!
//! The SDK sits behind [`ConsensusLedger`] and [`BalanceLedger`] so callers
//! can be exercised against in-process fakes.

pub mod client;
pub mod types;

use std::{future::Future, pin::Pin};

pub use client::{HederaLedger, LedgerError};
pub use types::*;

/// Boxed future returned by ledger operations.
pub type LedgerFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, LedgerError>> + Send + 'a>>;

/// Append-only, sequence-numbered message log.
pub trait ConsensusLedger: Send + Sync {
    /// Submit `message` to `topic_id` and wait for the network receipt.
    fn submit_topic_message<'a>(
        &'a self,
        topic_id: &'a str,
        message: Vec<u8>,
    ) -> LedgerFuture<'a, TopicSubmission>;
}

/// Read-only balance lookups.
pub trait BalanceLedger: Send + Sync {
    fn account_balance<'a>(&'a self, account_id: &'a str) -> LedgerFuture<'a, AccountBalance>;
}
