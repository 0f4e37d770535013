use std::{sync::Arc, time::Instant};

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tokio::sync::RwLock;

use crate::{budget, expenses, exports, statistics, wallet};
use ledger::{Ledger, SnapshotStore};

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<RwLock<Ledger>>,
    store: Option<Arc<dyn SnapshotStore>>,
}

impl ServerState {
    #[must_use]
    pub fn new(ledger: Ledger, store: Option<Arc<dyn SnapshotStore>>) -> Self {
        Self {
            ledger: Arc::new(RwLock::new(ledger)),
            store,
        }
    }

    /// Saves a snapshot after a successful mutation.
    ///
    /// Called while still holding the write lock, so the saved snapshot is
    /// exactly the state the mutation produced. A failing save is logged
    /// and swallowed: the in-memory ledger stays authoritative and the next
    /// successful save catches up.
    pub(crate) fn persist(&self, ledger: &Ledger) {
        let Some(store) = &self.store else {
            return;
        };
        if let Err(err) = store.save(&ledger.snapshot()) {
            tracing::error!("failed to persist snapshot: {err}");
        }
    }
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{method} {path} {} in {}ms",
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/wallet", get(wallet::get))
        .route("/wallet/income", axum::routing::post(wallet::income))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route("/expenses/export", get(exports::expenses_csv))
        .route(
            "/expenses/{id}",
            get(expenses::get)
                .put(expenses::update)
                .delete(expenses::delete),
        )
        .route("/budget", get(budget::get).put(budget::update))
        .route("/summary", get(statistics::summary))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

pub async fn run(state: ServerState) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(state, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    state: ServerState,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(state, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
