//! Backend entry-point: wires the HTTP surface against the remote article
//! store.

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use pressroom::inbound::http::health::HealthState;
use pressroom::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
