// src/main.rs
mod routes;
mod handlers;
mod models;
mod database;
mod search;
mod seed;
mod state;
mod config;
mod dtos; // expose DTO modules
mod error;

use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::fmt::init as tracing_init;
use tokio::net::TcpListener;
use dotenvy::dotenv;
use std::net::{SocketAddr, IpAddr};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_init();

    // Load environment variables
    dotenv().ok();
    let config = config::Config::from_env();

    // Create database pool for the product catalog
    let db_pool = database::create_pool(&config.database_url).await
        .expect("Failed to create database pool");
    database::init_schema(&db_pool).await
        .expect("Failed to initialize database schema");

    // Create search-engine client for the KYC index
    let search_client = search::create_client(&config.search)
        .expect("Failed to create search client");

    // Create application state
    let app_state = state::AppState::new(db_pool, search_client, config.search.index.clone());

    let app = Router::new()
        .merge(routes::create_router())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server (axum 0.8 style) with HOST/PORT config and graceful port selection
    let host: IpAddr = config.host.parse().unwrap_or_else(|_| "127.0.0.1".parse().unwrap());
    let base_port = config.port;

    // Try base_port..base_port+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = base_port.saturating_add(offset);
            let addr = SocketAddr::from((host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => { bound = Some((l, addr)); break; }
                Err(e) => {
                    if offset == 0 { tracing::warn!(%addr, error=%e, "Port in use, trying next"); }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server running on {}", addr);
                l
            }
            None => {
                tracing::error!("Failed to bind to any port starting at {} on {}", base_port, host);
                return;
            }
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error=%e, "Server error");
    }
}
