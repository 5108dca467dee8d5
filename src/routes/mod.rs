pub mod products;
pub mod kyc;

use axum::{routing::get, Router};
use crate::handlers::health::health_check;
use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(products::routes())
        .merge(kyc::routes())
        .route("/health", get(health_check))
}
