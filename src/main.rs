// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use hboost_server::{
    api::router,
    config::ServerConfig,
    donations::DonationServer,
    ledger::HederaLedger,
    logging::init_logging,
    providers::transak::TransakClient,
    state::AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_logging(config.log_format);

    let ledger = HederaLedger::with_operator(
        config.network,
        &config.operator_account_id,
        &config.operator_private_key,
    )?;
    let network = ledger.network();

    let ServerConfig {
        transak,
        topic_id,
        bind_addr,
        ..
    } = config;

    let onramp = TransakClient::new(transak)?;
    let donations = DonationServer::new(onramp, Arc::new(ledger), topic_id);
    let app = router(AppState::new(donations, network));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!(address = %bind_addr, network = %network, "hboost server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("hboost server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down..."),
        _ = terminate => info!("Received SIGTERM, shutting down..."),
    }
}
