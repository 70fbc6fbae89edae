// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared fakes for unit tests: a local Transak stand-in served by axum and
//! an in-memory ledger.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::{
    donations::DonationServer,
    ledger::{
        AccountBalance, BalanceLedger, ConsensusLedger, LedgerError, LedgerFuture, TopicSubmission,
    },
    providers::transak::{TransakClient, TransakConfig},
    secret::SecretString,
};

pub const TEST_TOPIC_ID: &str = "0.0.2002";

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}")
}

// =============================================================================
// Fake on-ramp provider
// =============================================================================

/// Canned responses for the fake provider.
///
/// With `refresh_body: None` the refresh endpoint hands out `token-1`,
/// `token-2`, ... in call order.
#[derive(Debug, Clone)]
pub struct FakeTransak {
    pub refresh_status: u16,
    pub refresh_body: Option<Value>,
    pub session_status: u16,
    pub session_body: Value,
}

impl Default for FakeTransak {
    fn default() -> Self {
        Self {
            refresh_status: 200,
            refresh_body: None,
            session_status: 200,
            session_body: json!({ "data": { "widgetUrl": "https://example/session/abc" } }),
        }
    }
}

struct FakeTransakState {
    behaviour: FakeTransak,
    refresh_bodies: Mutex<Vec<Value>>,
    session_tokens: Mutex<Vec<String>>,
    session_bodies: Mutex<Vec<Value>>,
}

pub struct FakeTransakHandle {
    pub base_url: String,
    state: Arc<FakeTransakState>,
}

impl FakeTransakHandle {
    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_bodies.lock().unwrap().len()
    }

    pub fn session_calls(&self) -> usize {
        self.state.session_bodies.lock().unwrap().len()
    }

    pub fn refresh_bodies(&self) -> Vec<Value> {
        self.state.refresh_bodies.lock().unwrap().clone()
    }

    pub fn session_bodies(&self) -> Vec<Value> {
        self.state.session_bodies.lock().unwrap().clone()
    }

    pub fn session_tokens(&self) -> Vec<String> {
        self.state.session_tokens.lock().unwrap().clone()
    }
}

pub async fn fake_transak(behaviour: FakeTransak) -> FakeTransakHandle {
    let state = Arc::new(FakeTransakState {
        behaviour,
        refresh_bodies: Mutex::new(Vec::new()),
        session_tokens: Mutex::new(Vec::new()),
        session_bodies: Mutex::new(Vec::new()),
    });

    let app = Router::new()
        .route("/refresh-token", post(fake_refresh))
        .route("/session", post(fake_session))
        .with_state(state.clone());

    FakeTransakHandle {
        base_url: serve(app).await,
        state,
    }
}

async fn fake_refresh(
    State(state): State<Arc<FakeTransakState>>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let call = {
        let mut bodies = state.refresh_bodies.lock().unwrap();
        bodies.push(body);
        bodies.len()
    };
    let payload = state
        .behaviour
        .refresh_body
        .clone()
        .unwrap_or_else(|| json!({ "data": { "accessToken": format!("token-{call}") } }));
    let status = StatusCode::from_u16(state.behaviour.refresh_status).unwrap();
    (status, Json(payload))
}

async fn fake_session(
    State(state): State<Arc<FakeTransakState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let token = headers
        .get("access-token")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.session_tokens.lock().unwrap().push(token);
    state.session_bodies.lock().unwrap().push(body);

    let status = StatusCode::from_u16(state.behaviour.session_status).unwrap();
    (status, Json(state.behaviour.session_body.clone()))
}

pub fn transak_config(base_url: &str) -> TransakConfig {
    TransakConfig {
        api_key: "pk_test".to_string(),
        api_secret: SecretString::new("sk_test"),
        referrer_domain: "donate.example.org".to_string(),
        refresh_url: format!("{base_url}/refresh-token"),
        session_url: format!("{base_url}/session"),
    }
}

// =============================================================================
// Fake ledger
// =============================================================================

/// In-memory ledger recording every submission as `(topic_id, message)`.
#[derive(Clone)]
pub struct FakeLedger {
    receipt: Option<TopicSubmission>,
    balance: Option<AccountBalance>,
    submissions: Arc<Mutex<Vec<(String, String)>>>,
    balance_queries: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeLedger {
    fn default() -> Self {
        Self::with_receipt(1, "0.0.1001@1718000000.000000000")
    }
}

impl FakeLedger {
    pub fn with_receipt(sequence_number: u64, transaction_id: &str) -> Self {
        Self {
            receipt: Some(TopicSubmission {
                sequence_number,
                transaction_id: transaction_id.to_string(),
            }),
            balance: None,
            submissions: Arc::new(Mutex::new(Vec::new())),
            balance_queries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            receipt: None,
            ..Self::default()
        }
    }

    pub fn with_balance(balance: AccountBalance) -> Self {
        Self {
            balance: Some(balance),
            ..Self::default()
        }
    }

    pub fn submissions(&self) -> Vec<(String, String)> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn balance_queries(&self) -> Vec<String> {
        self.balance_queries.lock().unwrap().clone()
    }
}

impl ConsensusLedger for FakeLedger {
    fn submit_topic_message<'a>(
        &'a self,
        topic_id: &'a str,
        message: Vec<u8>,
    ) -> LedgerFuture<'a, TopicSubmission> {
        Box::pin(async move {
            self.submissions.lock().unwrap().push((
                topic_id.to_string(),
                String::from_utf8(message).expect("utf-8 message"),
            ));
            self.receipt
                .clone()
                .ok_or_else(|| LedgerError::Submission("INVALID_TOPIC_ID".to_string()))
        })
    }
}

impl BalanceLedger for FakeLedger {
    fn account_balance<'a>(&'a self, account_id: &'a str) -> LedgerFuture<'a, AccountBalance> {
        Box::pin(async move {
            self.balance_queries
                .lock()
                .unwrap()
                .push(account_id.to_string());
            self.balance
                .clone()
                .ok_or_else(|| LedgerError::Query("INVALID_ACCOUNT_ID".to_string()))
        })
    }
}

pub fn donation_server(transak_base_url: &str, ledger: FakeLedger) -> DonationServer {
    let onramp = TransakClient::new(transak_config(transak_base_url)).expect("transak client");
    DonationServer::new(onramp, Arc::new(ledger), TEST_TOPIC_ID)
}
