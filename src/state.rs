// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::{donations::DonationServer, ledger::LedgerNetwork};

#[derive(Clone)]
pub struct AppState {
    pub donations: Arc<DonationServer>,
    pub network: LedgerNetwork,
}

impl AppState {
    pub fn new(donations: DonationServer, network: LedgerNetwork) -> Self {
        Self {
            donations: Arc::new(donations),
            network,
        }
    }
}
