use std::{net::SocketAddr, sync::Arc};

use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::{Next, from_fn},
    response::Response,
    routing::post,
};
use tower_http::services::{ServeDir, ServeFile};
use trip_planner_lib::SUBMIT_TRIP_PATH;

use crate::server_state::ServerState;

pub mod config;
pub mod error;
pub mod routes;
pub mod server_state;

/// The submission endpoint plus the compiled frontend. Unknown paths get the
/// frontend's index page so the client router can take over.
pub fn app(state: Arc<ServerState>) -> Router {
    let dist = state.config.frontend_dist.clone();

    Router::new()
        .route(SUBMIT_TRIP_PATH, post(routes::submit_trip))
        .nest_service("/frontend/dist", ServeDir::new(&dist))
        .fallback_service(ServeFile::new(dist.join("index.html")))
        .with_state(state)
        .layer(from_fn(log_visits))
}

async fn log_visits(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path();

    // Every page load fetches the bundle exactly once, other assets vary
    if path.starts_with("/frontend/dist/") && path.ends_with(".js") {
        if let Some(ConnectInfo(addr)) = req.extensions().get::<ConnectInfo<SocketAddr>>() {
            tracing::debug!("Visit from: {}", addr.ip());
        }
    }

    next.run(req).await
}
