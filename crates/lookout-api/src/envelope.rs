//! Response envelopes.
//!
//! Success: `{ "data": <payload> }`. Failure: `{ "errors": [{ "title", "description" }] }`.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    errors: Vec<ServerError>,
}

/// One entry of the server's error envelope.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerError {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Unwrap the payload of a 2xx response body.
pub(crate) fn decode_data<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<DataEnvelope<T>>(body)
        .map(|envelope| envelope.data)
        .map_err(|e| ApiError::decode(format!("invalid response: {e}")))
}

/// User-facing messages for a non-2xx response body.
///
/// - body is an error envelope → its titles, in order;
/// - body is not JSON (empty, HTML, plain text) → `[status_text]`;
/// - body is JSON of another shape → the decoding failure.
pub(crate) fn error_messages(body: &[u8], status_text: &str) -> Vec<String> {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) else {
        return vec![status_text.to_string()];
    };

    match serde_json::from_value::<ErrorEnvelope>(value) {
        Ok(envelope) if !envelope.errors.is_empty() => {
            envelope.errors.into_iter().map(|e| e.title).collect()
        }
        Ok(_) => vec![status_text.to_string()],
        Err(e) => vec![format!("unexpected error response: {e}")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_data_unwraps_payload() {
        let value: serde_json::Value = decode_data(br#"{"data":{"a":[1,2,3]}}"#).unwrap();
        assert_eq!(value, serde_json::json!({ "a": [1, 2, 3] }));
    }

    #[test]
    fn decode_data_rejects_missing_envelope() {
        let err = decode_data::<serde_json::Value>(br#"{"name":"Alice"}"#).unwrap_err();
        assert_eq!(err.kind(), crate::ApiErrorKind::Decode);
        assert_eq!(err.messages().len(), 1);
        assert!(err.messages()[0].contains("data"));
    }

    #[test]
    fn decode_data_rejects_non_json() {
        let err = decode_data::<serde_json::Value>(b"<html>").unwrap_err();
        assert_eq!(err.kind(), crate::ApiErrorKind::Decode);
    }

    #[test]
    fn error_titles_keep_server_order() {
        let body = br#"{"errors":[{"title":"a","description":"first"},{"title":"b"}]}"#;
        assert_eq!(error_messages(body, "Bad Request"), ["a", "b"]);
    }

    #[test]
    fn empty_body_uses_status_text() {
        assert_eq!(error_messages(b"", "Custom text"), ["Custom text"]);
    }

    #[test]
    fn plain_text_body_uses_status_text() {
        let body = b"The state passed by github is incorrect or expired\n";
        assert_eq!(
            error_messages(body, "Precondition Failed"),
            ["Precondition Failed"]
        );
    }

    #[test]
    fn empty_error_list_uses_status_text() {
        assert_eq!(error_messages(br#"{"errors":[]}"#, "Conflict"), ["Conflict"]);
    }

    #[test]
    fn unexpected_json_shape_reports_decoding_failure() {
        let messages = error_messages(br#"{"message":"nope"}"#, "Internal Server Error");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("unexpected error response"));
    }
}
