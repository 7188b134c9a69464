use std::net::SocketAddr;
use std::time::{Duration, Instant};

use lookout_api::ApiGateway;

use crate::error::AuthError;
use crate::session::AuthSession;

/// Local listener the OAuth provider redirects the browser back to.
///
/// Bound before the flow starts so the redirect cannot arrive early.
pub struct CallbackListener {
    server: tiny_http::Server,
}

impl std::fmt::Debug for CallbackListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackListener")
            .field("addr", &self.local_addr())
            .finish()
    }
}

impl CallbackListener {
    /// Bind on `addr` (e.g. `127.0.0.1:3000`, `127.0.0.1:0` for any port).
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::BrowserFlowFailed`] if the address cannot be bound.
    pub fn bind(addr: &str) -> Result<Self, AuthError> {
        let server = tiny_http::Server::http(addr)
            .map_err(|e| AuthError::BrowserFlowFailed(format!("failed to bind {addr}: {e}")))?;
        Ok(Self { server })
    }

    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Wait for `/callback?<query>` and return the raw query string.
    ///
    /// `tiny_http::recv` blocks, so the wait runs on the blocking pool.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::BrowserFlowFailed`] on timeout, on a callback without
    /// a query, or if the listener fails.
    pub async fn wait(self, timeout: Duration) -> Result<String, AuthError> {
        tokio::task::spawn_blocking(move || wait_for_callback(&self.server, timeout))
            .await
            .map_err(|e| AuthError::BrowserFlowFailed(format!("spawn_blocking join: {e}")))?
    }
}

/// Run the interactive browser login.
///
/// 1. Bind the callback listener on `callback_addr`
/// 2. `GET /login` through the gateway; the OAuth state cookie lands in its jar
/// 3. Open the provider URL in the browser (or just print it)
/// 4. Wait for the provider's redirect to `/callback`
/// 5. Exchange the query through [`AuthSession::login`]
///
/// # Errors
///
/// Returns [`AuthError::BrowserFlowFailed`] for listener failures and timeouts,
/// [`AuthError::Api`] if the server refuses to start or complete the flow.
pub async fn login(
    gateway: &ApiGateway,
    session: &AuthSession,
    callback_addr: &str,
    timeout: Duration,
    open_browser: bool,
) -> Result<(), AuthError> {
    let listener = CallbackListener::bind(callback_addr)?;
    let provider_url = gateway.begin_login().await?;

    eprintln!("Opening browser to: {provider_url}");
    if open_browser {
        if let Err(error) = open::that(&provider_url) {
            eprintln!("Failed to open browser: {error}");
            eprintln!("Open the URL above manually, then return here.");
        }
    } else {
        eprintln!("Open the URL above in a browser, then return here.");
    }

    let query = listener.wait(timeout).await?;
    session.login(&query).await
}

/// Block until the listener receives `/callback` with a query string.
///
/// Requests for other paths (favicon, preflight) get a 204 and are ignored.
fn wait_for_callback(server: &tiny_http::Server, timeout: Duration) -> Result<String, AuthError> {
    let deadline = Instant::now() + timeout;
    let timed_out = || {
        AuthError::BrowserFlowFailed(format!(
            "browser callback timed out after {}s",
            timeout.as_secs()
        ))
    };

    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(timed_out());
        }

        let request = match server.recv_timeout(remaining) {
            Ok(Some(request)) => request,
            Ok(None) => return Err(timed_out()),
            Err(e) => return Err(AuthError::BrowserFlowFailed(format!("recv error: {e}"))),
        };

        let url = request.url().to_string();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));

        if path != "/callback" {
            tracing::debug!(%url, "ignoring non-callback request");
            let _ = request.respond(tiny_http::Response::empty(204));
            continue;
        }

        if query.is_empty() {
            let _ = request.respond(html_page(
                "Login failed",
                "The callback carried no parameters. Check the terminal.",
            ));
            return Err(AuthError::BrowserFlowFailed(
                "no query string in callback".into(),
            ));
        }

        let _ = request.respond(html_page(
            "Logged in",
            "You can close this tab and return to the terminal.",
        ));
        return Ok(query.to_string());
    }
}

fn html_page(title: &str, message: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    let response = tiny_http::Response::from_string(format!(
        "<html><body><h1>{title}</h1><p>{message}</p></body></html>"
    ));
    match tiny_http::Header::from_bytes("Content-Type", "text/html; charset=utf-8") {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn listener() -> (CallbackListener, String) {
        let listener = CallbackListener::bind("127.0.0.1:0").expect("bind");
        let base = format!("http://{}", listener.local_addr().expect("addr"));
        (listener, base)
    }

    #[tokio::test]
    async fn returns_callback_query_after_ignoring_other_requests() {
        let (listener, base) = listener();
        let waiting = tokio::spawn(listener.wait(Duration::from_secs(10)));

        let client = reqwest::Client::new();
        let favicon = client
            .get(format!("{base}/favicon.ico"))
            .send()
            .await
            .expect("favicon");
        assert_eq!(favicon.status().as_u16(), 204);

        let page = client
            .get(format!("{base}/callback?code=abc&state=s1"))
            .send()
            .await
            .expect("callback");
        assert!(page.text().await.unwrap().contains("Logged in"));

        let query = waiting.await.unwrap().unwrap();
        assert_eq!(query, "code=abc&state=s1");
    }

    #[tokio::test]
    async fn callback_without_query_fails() {
        let (listener, base) = listener();
        let waiting = tokio::spawn(listener.wait(Duration::from_secs(10)));

        let _ = reqwest::get(format!("{base}/callback")).await.expect("callback");

        let err = waiting.await.unwrap().unwrap_err();
        assert!(matches!(err, AuthError::BrowserFlowFailed(_)));
    }

    #[tokio::test]
    async fn times_out_without_callback() {
        let (listener, _base) = listener();
        let err = listener.wait(Duration::from_millis(50)).await.unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }
}
