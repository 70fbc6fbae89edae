// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Hedera client for balance queries and consensus-topic submissions.

use std::str::FromStr;

use hedera::{
    AccountBalanceQuery, AccountId, Client, PrivateKey, TopicId, TopicMessageSubmitTransaction,
};
use tracing::{debug, info};

use super::{
    types::{AccountBalance, LedgerNetwork, TopicSubmission},
    BalanceLedger, ConsensusLedger, LedgerFuture,
};
use crate::secret::SecretString;

/// Hedera network client.
///
/// Built without an operator it can only run free queries (balances).
/// Topic submissions need [`HederaLedger::with_operator`].
pub struct HederaLedger {
    /// Network the client talks to
    network: LedgerNetwork,
    /// SDK client (operator set when signing is required)
    client: Client,
}

impl HederaLedger {
    /// Create a query-only client. No credentials are involved.
    pub fn public(network: LedgerNetwork) -> Self {
        Self {
            network,
            client: sdk_client(network),
        }
    }

    /// Create a client whose transactions are paid for and signed by the
    /// operator account.
    pub fn with_operator(
        network: LedgerNetwork,
        account_id: &str,
        private_key: &SecretString,
    ) -> Result<Self, LedgerError> {
        let operator_id = parse_account_id(account_id)?;
        // The SDK error may echo key material; keep it out of the message.
        let operator_key =
            PrivateKey::from_str(private_key.expose()).map_err(|_| LedgerError::InvalidPrivateKey)?;

        let client = sdk_client(network);
        client.set_operator(operator_id, operator_key);

        info!(
            network = %network,
            operator = %account_id,
            "Ledger client initialized with operator"
        );

        Ok(Self { network, client })
    }

    pub fn network(&self) -> LedgerNetwork {
        self.network
    }
}

impl ConsensusLedger for HederaLedger {
    fn submit_topic_message<'a>(
        &'a self,
        topic_id: &'a str,
        message: Vec<u8>,
    ) -> LedgerFuture<'a, TopicSubmission> {
        Box::pin(async move {
            let topic = TopicId::from_str(topic_id.trim())
                .map_err(|e| LedgerError::InvalidTopicId(e.to_string()))?;

            debug!(topic_id = %topic_id, bytes = message.len(), "Submitting topic message");

            let response = TopicMessageSubmitTransaction::new()
                .topic_id(topic)
                .message(message)
                .execute(&self.client)
                .await
                .map_err(|e| LedgerError::Submission(e.to_string()))?;

            let receipt = response
                .get_receipt(&self.client)
                .await
                .map_err(|e| LedgerError::Receipt(e.to_string()))?;

            Ok(TopicSubmission {
                sequence_number: receipt.topic_sequence_number,
                transaction_id: response.transaction_id.to_string(),
            })
        })
    }
}

impl BalanceLedger for HederaLedger {
    fn account_balance<'a>(&'a self, account_id: &'a str) -> LedgerFuture<'a, AccountBalance> {
        Box::pin(async move {
            let id = parse_account_id(account_id)?;

            let balance = AccountBalanceQuery::new()
                .account_id(id)
                .execute(&self.client)
                .await
                .map_err(|e| LedgerError::Query(e.to_string()))?;

            Ok(AccountBalance {
                account_id: account_id.trim().to_string(),
                balance: balance.hbars.to_string(),
                tinybars: balance.hbars.to_tinybars(),
            })
        })
    }
}

fn sdk_client(network: LedgerNetwork) -> Client {
    match network {
        LedgerNetwork::Mainnet => Client::for_mainnet(),
        LedgerNetwork::Testnet => Client::for_testnet(),
    }
}

fn parse_account_id(raw: &str) -> Result<AccountId, LedgerError> {
    AccountId::from_str(raw.trim()).map_err(|e| LedgerError::InvalidAccountId(e.to_string()))
}

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),

    #[error("Invalid topic id: {0}")]
    InvalidTopicId(String),

    #[error("Invalid operator private key")]
    InvalidPrivateKey,

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Topic message submission failed: {0}")]
    Submission(String),

    #[error("Receipt retrieval failed: {0}")]
    Receipt(String),
}
