// src/state.rs
use std::sync::Arc;

use elasticsearch::Elasticsearch;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub search_client: Arc<Elasticsearch>,
    pub kyc_index: String,
}

impl AppState {
    pub fn new(db_pool: PgPool, search_client: Elasticsearch, kyc_index: String) -> Self {
        Self {
            db_pool,
            search_client: Arc::new(search_client),
            kyc_index,
        }
    }
}
