//! Backend API Contract
//!
//! The `CuratorApi` trait is the console's only view of the backend. The
//! production implementation speaks HTTP (see `http.rs`); tests substitute
//! a scripted double. The pure helpers here are shared by both.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use thiserror::Error;

use crate::models::{
    AvailableIntegration, BlacklistState, EntitySnapshot, IntegrationEntry, TargetType,
    WhitelistState,
};

/// A failed backend call. `Display` is the text surfaced in the toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed, or a success body could not be decoded.
    #[error("{0}")]
    Transport(String),
    /// The backend rejected the call with a non-2xx status; the message is
    /// taken from the response body's `detail`/`message` field when present.
    #[error("{0}")]
    Rejected(String),
}

/// One async method per REST operation the console uses.
pub trait CuratorApi {
    async fn selected_integrations(&self) -> Result<Vec<IntegrationEntry>, ApiError>;
    async fn available_integrations(&self) -> Result<Vec<AvailableIntegration>, ApiError>;
    async fn select_integration(&self, entry_id: &str) -> Result<(), ApiError>;
    async fn deselect_integration(&self, entry_id: &str) -> Result<(), ApiError>;

    async fn fetch_blacklist(&self) -> Result<BlacklistState, ApiError>;
    async fn add_blacklist_entry(&self, target: TargetType, target_id: &str)
        -> Result<(), ApiError>;
    async fn remove_blacklist_entry(
        &self,
        target: TargetType,
        target_id: &str,
    ) -> Result<(), ApiError>;

    async fn fetch_whitelist(&self) -> Result<WhitelistState, ApiError>;
    async fn add_whitelist_entry(&self, entity_id: &str) -> Result<(), ApiError>;
    async fn remove_whitelist_entry(&self, entity_id: &str) -> Result<(), ApiError>;

    async fn fetch_entities(&self) -> Result<EntitySnapshot, ApiError>;
    async fn ingest_entities(&self) -> Result<EntitySnapshot, ApiError>;
}

/// Message to surface for a non-2xx response: the body's `detail` or
/// `message` string, else the trimmed raw body, else the status line.
pub fn rejection_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    let raw = body.trim();
    if !raw.is_empty() {
        return raw.to_string();
    }
    format!("HTTP {} {}", status, status_text)
}

/// Whether a declared content type carries a JSON body.
pub fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or("").trim();
    essence.eq_ignore_ascii_case("application/json")
        || essence.to_ascii_lowercase().ends_with("+json")
}

// Characters that may not appear raw in a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode an identifier for use as a single URL path segment.
pub fn encode_segment(raw: &str) -> Cow<'_, str> {
    utf8_percent_encode(raw, SEGMENT).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message_detail_field() {
        let message = rejection_message(503, "Service Unavailable", r#"{"detail":"HA unreachable"}"#);
        assert_eq!(message, "HA unreachable");
    }

    #[test]
    fn test_rejection_message_message_field() {
        let message = rejection_message(400, "Bad Request", r#"{"message":"unknown entry_id"}"#);
        assert_eq!(message, "unknown entry_id");
    }

    #[test]
    fn test_rejection_message_detail_wins_over_message() {
        let message =
            rejection_message(400, "Bad Request", r#"{"detail":"first","message":"second"}"#);
        assert_eq!(message, "first");
    }

    #[test]
    fn test_rejection_message_non_json_body() {
        let message = rejection_message(502, "Bad Gateway", "upstream exploded\n");
        assert_eq!(message, "upstream exploded");
    }

    #[test]
    fn test_rejection_message_json_without_known_fields() {
        // Valid JSON but no detail/message: fall through to the raw body.
        let message = rejection_message(500, "Internal Server Error", r#"{"error":"boom"}"#);
        assert_eq!(message, r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_rejection_message_empty_body_uses_status_line() {
        let message = rejection_message(404, "Not Found", "");
        assert_eq!(message, "HTTP 404 Not Found");
    }

    #[test]
    fn test_is_json() {
        assert!(is_json("application/json"));
        assert!(is_json("application/json; charset=utf-8"));
        assert!(is_json("Application/JSON"));
        assert!(is_json("application/problem+json"));
        assert!(!is_json("text/plain"));
        assert!(!is_json(""));
    }

    #[test]
    fn test_encode_segment_passthrough() {
        assert_eq!(encode_segment("sensor.kitchen_temp"), "sensor.kitchen_temp");
        assert_eq!(encode_segment("0123abcd-ef"), "0123abcd-ef");
    }

    #[test]
    fn test_encode_segment_escapes_separators() {
        assert_eq!(encode_segment("light/odd id"), "light%2Fodd%20id");
        assert_eq!(encode_segment("a?b#c"), "a%3Fb%23c");
    }
}
