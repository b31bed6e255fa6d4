// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use asset_transfer_server::{
    api::router,
    config::{AppConfig, LedgerBackend},
    contract::AccountContract,
    ledger::{Ledger, MemoryLedger, RedbLedger},
    logging,
    state::AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    logging::init_tracing(config.log_format);

    // The one ledger handle for the life of the process.
    let ledger: Arc<dyn Ledger> = match &config.ledger {
        LedgerBackend::Memory => {
            tracing::warn!("LEDGER_PATH not set, accounts will not survive a restart");
            Arc::new(MemoryLedger::new())
        }
        LedgerBackend::Redb(path) => Arc::new(RedbLedger::open(path)?),
    };

    tracing::info!(
        backend = ledger.backend(),
        submit_attempts = config.submit_attempts,
        amount_policy = ?config.amount_policy,
        "Ledger ready"
    );

    let state = AppState::new(
        ledger,
        AccountContract::new(config.amount_policy),
        config.submit_attempts,
    );
    let app = router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Asset transfer server listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
