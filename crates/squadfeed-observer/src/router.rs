//! Axum router construction for the Observer API.
//!
//! Mounts the three read-only routes at their configured paths with CORS
//! middleware so dashboards on any origin can poll them.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use squadfeed_core::config::ObserverConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// How long browsers may cache a preflight response.
const CORS_MAX_AGE: Duration = Duration::from_secs(120);

/// Methods advertised to cross-origin callers.
const CORS_METHODS: [Method; 4] = [Method::GET, Method::PUT, Method::POST, Method::DELETE];

/// Build the complete Axum router for the Observer server.
///
/// The router includes:
/// - `GET {players_path}` -- all connected players
/// - `GET {leaders_path}` -- squad leaders
/// - `GET {killfeed_path}` -- recent wound events
///
/// Every response, not only preflights, carries the allowed methods and
/// max age so dashboards see the same CORS headers on plain `GET`s.
///
/// Any other path answers `404` with a JSON error body. The paths must
/// already have passed [`ObserverConfig::validate`]; Axum panics when
/// mounting a malformed or duplicate path.
pub fn build_router(state: Arc<AppState>, config: &ObserverConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(CORS_METHODS)
        .max_age(CORS_MAX_AGE);

    Router::new()
        .route(&config.players_path, get(handlers::list_players))
        .route(&config.leaders_path, get(handlers::list_leaders))
        .route(&config.killfeed_path, get(handlers::killfeed))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,PUT,POST,DELETE"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_MAX_AGE,
            HeaderValue::from_static("120"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
