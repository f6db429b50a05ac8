//! ETag helpers for game resources.
//!
//! The entity tag is derived from the game id and its stored version, so it
//! changes exactly when a move is persisted.

use actix_web::http::header::{HeaderMap, IF_NONE_MATCH};

/// Strong ETag for a game: `"game-{id}-v{version}"` (quotes included).
pub fn game_etag(id: &str, version: i32) -> String {
    format!(r#""game-{id}-v{version}""#)
}

/// Whether an `If-None-Match` header value matches `etag`.
///
/// Handles the `*` wildcard, comma-separated lists and weak (`W/`) tags.
pub fn if_none_match_matches(header_value: &str, etag: &str) -> bool {
    let header_value = header_value.trim();
    if header_value == "*" {
        return true;
    }
    header_value
        .split(',')
        .map(str::trim)
        .map(|candidate| candidate.strip_prefix("W/").unwrap_or(candidate))
        .any(|candidate| candidate == etag)
}

/// True when the request carries an `If-None-Match` matching `etag`.
pub fn not_modified(headers: &HeaderMap, etag: &str) -> bool {
    headers
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| if_none_match_matches(v, etag))
}
