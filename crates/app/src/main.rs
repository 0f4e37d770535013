use std::sync::Arc;

use ledger::{DEFAULT_INITIAL_BALANCE, JsonFileStore, Ledger, MoneyCents, SnapshotStore};
use server::ServerState;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "spesa={level},server={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    let store: Option<Arc<dyn SnapshotStore>> = settings
        .server
        .snapshot
        .as_deref()
        .map(|path| Arc::new(JsonFileStore::new(path)) as Arc<dyn SnapshotStore>);

    let ledger = match build_ledger(store.as_deref(), settings.server.initial_balance.as_deref()) {
        Ok(ledger) => ledger,
        Err(err) => {
            tracing::error!("failed to initialize ledger: {err}");
            return Ok(());
        }
    };

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Ok(());
        }
    };

    let state = ServerState::new(ledger, store);
    if let Err(err) = server::run_with_listener(state, listener).await {
        tracing::error!("server failed: {err}");
    }

    Ok(())
}

/// Restores the ledger from the snapshot store when one exists, otherwise
/// starts fresh with the configured (or default) balance.
fn build_ledger(
    store: Option<&dyn SnapshotStore>,
    initial_balance: Option<&str>,
) -> Result<Ledger, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(store) = store {
        if let Some(snapshot) = store.load()? {
            tracing::info!("restoring ledger from snapshot");
            return Ok(Ledger::from_snapshot(snapshot));
        }
    }

    let balance = match initial_balance {
        Some(raw) => raw.parse::<MoneyCents>()?,
        None => DEFAULT_INITIAL_BALANCE,
    };
    tracing::info!("starting fresh ledger with balance {balance}");
    Ok(Ledger::new(balance))
}
