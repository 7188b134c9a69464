use std::sync::Arc;

use lookout_core::CredentialStore;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

use crate::envelope::{decode_data, error_messages};
use crate::error::ApiError;

/// Method and optional JSON body of a single API call.
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl CallOptions {
    #[must_use]
    pub const fn get() -> Self {
        Self {
            method: Method::GET,
            body: None,
        }
    }

    #[must_use]
    pub const fn post() -> Self {
        Self {
            method: Method::POST,
            body: None,
        }
    }

    #[must_use]
    pub const fn put(body: serde_json::Value) -> Self {
        Self {
            method: Method::PUT,
            body: Some(body),
        }
    }
}

/// Authorized HTTP access to the lookout server.
///
/// Cheap to share behind an `Arc`; the underlying client keeps one cookie jar
/// for the whole process, which is how the OAuth `state` cookie set by `/login`
/// reaches `/api/callback`.
pub struct ApiGateway {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for ApiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiGateway")
            .field("base_url", &self.base_url)
            .field("store", &self.store.backend())
            .finish_non_exhaustive()
    }
}

impl ApiGateway {
    /// Create a gateway for `base_url`, reading the credential from `store`.
    ///
    /// Redirects are not followed: API endpoints never redirect, and
    /// [`Self::begin_login`] needs to see the redirect itself.
    ///
    /// # Errors
    ///
    /// Returns a network [`ApiError`] if the HTTP client cannot be built
    /// (e.g. no TLS backend available).
    pub fn new(base_url: &str, store: Arc<dyn CredentialStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("lookout-admin/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Server endpoint that starts the OAuth flow.
    #[must_use]
    pub fn login_url(&self) -> String {
        self.url("/login")
    }

    /// Credential store this gateway reads from and clears on 401.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Issue one request and unwrap the `{ data: T }` envelope.
    ///
    /// # Errors
    ///
    /// - [`ApiErrorKind::Network`](crate::ApiErrorKind::Network) when no response arrives;
    /// - [`ApiErrorKind::Http`](crate::ApiErrorKind::Http) for non-2xx statuses, with the
    ///   server's error titles or the status text;
    /// - [`ApiErrorKind::Decode`](crate::ApiErrorKind::Decode) for a 2xx without a valid envelope.
    ///
    /// A 401 clears the stored credential before the error is returned.
    pub async fn call<T: DeserializeOwned>(
        &self,
        path: &str,
        options: CallOptions,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let token = self
            .store
            .get()
            .map(lookout_core::Credential::into_inner)
            .unwrap_or_default();

        tracing::debug!(method = %options.method, %url, "api request");

        let mut request = self
            .http
            .request(options.method, &url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        self.read_response(response).await
    }

    /// Start the OAuth flow: request `/login` and return the provider URL it
    /// redirects to. The session cookie carrying the OAuth `state` stays in this
    /// gateway's cookie jar for the later callback exchange.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the server is unreachable or does not redirect.
    pub async fn begin_login(&self) -> Result<String, ApiError> {
        let url = self.login_url();
        tracing::debug!(%url, "starting oauth flow");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_redirection() {
            return Err(ApiError::http(
                status.as_u16(),
                vec![status_text(&response)],
            ));
        }

        response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| ApiError::decode("login redirect has no Location header"))
    }

    async fn read_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .bytes()
                .await
                .map_err(|e| ApiError::decode(format!("failed to read response: {e}")))?;
            return decode_data(&body);
        }

        if status == StatusCode::UNAUTHORIZED {
            self.forget_credential();
        }

        let status_text = status_text(&response);
        let body = match response.bytes().await {
            Ok(body) => body,
            Err(error) => {
                tracing::debug!(%error, "failed to read error response body");
                Default::default()
            }
        };

        let error = ApiError::http(status.as_u16(), error_messages(&body, &status_text));
        tracing::debug!(status = status.as_u16(), %error, "api request failed");
        Err(error)
    }

    fn forget_credential(&self) {
        tracing::info!("server rejected the session credential; logging out");
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear credential after 401");
        }
    }
}

/// Reason phrase sent by the server, or the canonical one for the status code.
fn status_text(response: &reqwest::Response) -> String {
    if let Some(reason) = response.extensions().get::<hyper::ext::ReasonPhrase>() {
        if let Ok(text) = std::str::from_utf8(reason.as_bytes()) {
            return text.to_string();
        }
    }

    let status = response.status();
    status
        .canonical_reason()
        .map_or_else(|| status.as_str().to_string(), str::to_string)
}
