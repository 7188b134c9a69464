use lookout_api::ApiError;
use lookout_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; run `lookout-admin login`")]
    NotAuthenticated,

    /// The server rejected or could not complete the exchange.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("token store error: {0}")]
    TokenStore(#[from] StoreError),

    #[error("browser login failed: {0}")]
    BrowserFlowFailed(String),
}

impl AuthError {
    /// Messages to render in place of the requested view.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Api(error) => error.messages().to_vec(),
            other => vec![other.to_string()],
        }
    }
}
