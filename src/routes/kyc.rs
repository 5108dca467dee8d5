use axum::{
    routing::{get, post},
    Router,
};
use crate::handlers::kyc::{create_kyc, create_kyc_index, init_kyc, search_kyc};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/kyc", post(create_kyc))
        .route("/kyc/index", post(create_kyc_index))
        .route("/kyc/init", get(init_kyc))
        .route("/kyc/{q}", get(search_kyc))
}
