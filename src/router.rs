use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::{
    controller::health::{livez, ping, readyz, root},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/ping", get(ping))
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .layer(CorsLayer::permissive())
}
