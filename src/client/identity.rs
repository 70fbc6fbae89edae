// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Identity/auth modal seam used for creator onboarding.

use std::{future::Future, pin::Pin};

use crate::ledger::LedgerNetwork;

pub type WidgetFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, IdentityError>> + Send + 'a>>;

/// Identity provider network, mirroring the ledger selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityNetwork {
    Mainnet,
    Testnet,
}

impl From<LedgerNetwork> for IdentityNetwork {
    fn from(network: LedgerNetwork) -> Self {
        match network {
            LedgerNetwork::Mainnet => Self::Mainnet,
            LedgerNetwork::Testnet => Self::Testnet,
        }
    }
}

/// Widget configuration passed to [`IdentityWidget::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityWidgetConfig {
    pub client_id: String,
    pub network: IdentityNetwork,
}

/// Opaque handle returned by the provider's connect flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderHandle(pub String);

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Identity widget initialization failed: {0}")]
    Init(String),

    #[error("Identity widget connect failed: {0}")]
    Connect(String),
}

/// A modal auth widget (init once, then open the connect flow).
pub trait IdentityWidget: Send {
    fn init(&mut self, config: IdentityWidgetConfig) -> WidgetFuture<'_, ()>;

    fn connect(&mut self) -> WidgetFuture<'_, ProviderHandle>;
}
