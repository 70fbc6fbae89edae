// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! hboost - Donation Gateway for Hedera
//!
//! Keeps the ledger operator key and the on-ramp partner secret on a trusted
//! server, and gives browsers only what they need: a one-time on-ramp widget
//! URL and a consensus-topic receipt for each completed donation.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `client` - Browser-side facade (onboarding, widget launch, balances)
//! - `donations` - Server-side facade holding the secrets
//! - `ledger` - Hedera balance queries and consensus-topic submission
//! - `providers` - Fiat on-ramp partner API (Transak)

pub mod api;
pub mod client;
pub mod config;
pub mod donations;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod providers;
pub mod secret;
pub mod state;

#[cfg(test)]
mod test_support;
