//! REST API endpoint handlers for the Observer server.
//!
//! All handlers read from the shared [`AppState`] and are mounted at the
//! paths configured in [`ObserverConfig`](squadfeed_core::config::ObserverConfig).
//!
//! # Endpoints
//!
//! | Method | Path (default) | Description |
//! |--------|------|-------------|
//! | `GET` | `/players` | All connected players, roster order |
//! | `GET` | `/leaders` | Squad leaders, ascending squad id |
//! | `GET` | `/killfeed` | Recent wounds (`?lastn=N` or `?lasttime=MS`) |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use squadfeed_core::{KillfeedSelector, roster};
use squadfeed_types::PlayerView;

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET players
// ---------------------------------------------------------------------------

/// List every connected player in roster order.
pub async fn list_players(State(state): State<Arc<AppState>>) -> Json<Vec<PlayerView>> {
    let players = state.roster.read().await;
    Json(roster::players(&players))
}

// ---------------------------------------------------------------------------
// GET leaders
// ---------------------------------------------------------------------------

/// List squad leaders ordered by squad id.
pub async fn list_leaders(State(state): State<Arc<AppState>>) -> Json<Vec<PlayerView>> {
    let players = state.roster.read().await;
    Json(roster::leaders(&players))
}

// ---------------------------------------------------------------------------
// GET killfeed
// ---------------------------------------------------------------------------

/// Return recent wound events.
///
/// # Query Parameters
///
/// - `lasttime`: epoch-millisecond cursor. When usable, returns the events
///   after the first event at or past the cursor, and `lastn` is ignored.
/// - `lastn`: number of most recent events (default 10).
///
/// A parameter given more than once is ignored. When the cursor is newer
/// than every recorded event the response is `200` with an empty body,
/// which dashboards distinguish from an empty array.
pub async fn killfeed(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ObserverError> {
    let selector = KillfeedSelector::from_params(
        single_value(&pairs, "lasttime"),
        single_value(&pairs, "lastn"),
    );

    let events = {
        let feed = state.killfeed.read().await;
        selector.query(&feed)
    };

    let body = events
        .as_ref()
        .map(serde_json::to_vec)
        .transpose()?
        .unwrap_or_default();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Reject requests for unknown paths.
pub async fn not_found(uri: Uri) -> ObserverError {
    ObserverError::NotFound(uri.path().to_owned())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The value of `key` if it occurs exactly once in the query string.
fn single_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    let mut matches = pairs.iter().filter(|(k, _)| k == key);
    let (_, value) = matches.next()?;
    matches.next().is_none().then_some(value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn single_value_finds_unique_key() {
        let query = pairs(&[("lastn", "5"), ("other", "x")]);
        assert_eq!(single_value(&query, "lastn"), Some("5"));
        assert_eq!(single_value(&query, "lasttime"), None);
    }

    #[test]
    fn single_value_ignores_repeated_key() {
        let query = pairs(&[("lastn", "5"), ("lastn", "6")]);
        assert_eq!(single_value(&query, "lastn"), None);
    }
}
