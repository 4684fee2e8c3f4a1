use axum::{
    Json, Router,
    routing::get,
    routing::post,
};

use std::sync::Arc;

use crate::{expenses, settlement, trips};
use api_types::Status;
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    /// Base URL used to build invite links, without trailing slash.
    pub public_url: Arc<str>,
}

impl ServerState {
    pub fn new(engine: Engine, public_url: &str) -> Self {
        Self {
            engine: Arc::new(engine),
            public_url: Arc::from(public_url.trim_end_matches('/')),
        }
    }
}

async fn status() -> Json<Status> {
    Json(Status {
        status: "ok".to_string(),
        message: "Collie API".to_string(),
    })
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/trip", post(trips::trip_new))
        .route("/trip/{trip_id}", get(trips::get).put(trips::update))
        .route("/trip/{trip_id}/expense", post(expenses::expense_new))
        .route("/trip/{trip_id}/expenses", get(expenses::list))
        .route("/trip/{trip_id}/settle", get(settlement::settle))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    public_url: &str,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState::new(engine, public_url);

    axum::serve(listener, router(state)).await
}
