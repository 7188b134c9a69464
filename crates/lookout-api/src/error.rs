use std::fmt;

use thiserror::Error;

/// Which layer an [`ApiError`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never produced a response (DNS, connect, TLS, reset).
    Network,
    /// The server answered with a non-2xx status.
    Http { status: u16 },
    /// A 2xx response whose body is not a valid `{ data: ... }` envelope.
    Decode,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Http { status } => write!(f, "http {status}"),
            Self::Decode => f.write_str("decode"),
        }
    }
}

/// Failure of an API call, as shown to the user.
///
/// Always carries at least one message, so multi-field validation failures and
/// single transport errors are handled the same way downstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .messages.join(","))]
pub struct ApiError {
    kind: ApiErrorKind,
    messages: Vec<String>,
}

impl ApiError {
    /// Build an error; an empty `messages` list is replaced by a generic one.
    #[must_use]
    pub fn new(kind: ApiErrorKind, messages: Vec<String>) -> Self {
        let messages = if messages.is_empty() {
            vec![match kind {
                ApiErrorKind::Network => "request failed".to_string(),
                ApiErrorKind::Http { status } => format!("HTTP {status}"),
                ApiErrorKind::Decode => "invalid response".to_string(),
            }]
        } else {
            messages
        };
        Self { kind, messages }
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Network, vec![message.into()])
    }

    #[must_use]
    pub fn http(status: u16, messages: Vec<String>) -> Self {
        Self::new(ApiErrorKind::Http { status }, messages)
    }

    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Decode, vec![message.into()])
    }

    #[must_use]
    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self.kind {
            ApiErrorKind::Http { status } => Some(status),
            ApiErrorKind::Network | ApiErrorKind::Decode => None,
        }
    }

    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Http { status: 401 })
    }

    /// Messages joined the way the views display them.
    #[must_use]
    pub fn joined(&self) -> String {
        self.messages.join(",")
    }
}
