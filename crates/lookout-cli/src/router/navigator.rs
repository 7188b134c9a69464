use crate::cli::GlobalFlags;
use crate::commands;
use crate::context::AppContext;
use crate::router::{Redirect, Route};
use crate::views::RenderedFailure;

/// Redirects followed before navigation gives up.
pub const MAX_REDIRECTS: usize = 4;

/// Outcome of visiting one route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visit {
    /// The page was printed.
    Shown,
    Redirect(Redirect),
}

/// Walks the route table from one path, following redirects.
///
/// Remembers the page a login redirect came from so the callback can return
/// there.
pub struct Navigator<'a> {
    ctx: &'a AppContext,
    flags: &'a GlobalFlags,
    return_to: Option<Route>,
}

impl<'a> Navigator<'a> {
    #[must_use]
    pub const fn new(ctx: &'a AppContext, flags: &'a GlobalFlags) -> Self {
        Self {
            ctx,
            flags,
            return_to: None,
        }
    }

    #[must_use]
    pub fn with_return_to(mut self, route: Option<Route>) -> Self {
        self.return_to = route;
        self
    }

    /// Show `route`, following redirects.
    ///
    /// A protected route that ends on the login page fails with
    /// [`RenderedFailure`] once the login page is printed.
    pub async fn open(&mut self, route: Route) -> anyhow::Result<()> {
        let started_protected = route.is_protected();
        let mut current = route;
        let mut hops = 0;

        loop {
            tracing::debug!(route = %current, "visiting");
            match self.visit(&current).await? {
                Visit::Shown => break,
                Visit::Redirect(redirect) => {
                    hops += 1;
                    if hops > MAX_REDIRECTS {
                        anyhow::bail!("too many redirects (last: {} -> {})", current, redirect.to);
                    }
                    if let Some(from) = redirect.from {
                        self.return_to = Some(from);
                    }
                    current = redirect.to;
                }
            }
        }

        if started_protected && current == Route::Login {
            return Err(RenderedFailure.into());
        }
        Ok(())
    }

    /// Continue from a redirect produced outside the route table.
    pub async fn follow(&mut self, redirect: Redirect) -> anyhow::Result<()> {
        if let Some(from) = redirect.from {
            self.return_to = Some(from);
        }
        self.open(redirect.to).await
    }

    async fn visit(&mut self, route: &Route) -> anyhow::Result<Visit> {
        let (ctx, flags) = (self.ctx, self.flags);
        match route {
            Route::Index => commands::orgs::page(ctx, flags).await,
            Route::Org { name } => commands::org::show::page(ctx, flags, name).await,
            Route::Login => commands::login::page(ctx, flags, self.return_to.as_ref()),
            Route::Logout => Ok(commands::logout::page(ctx)),
            Route::Callback { query } => {
                commands::callback::page(ctx, flags, query, self.return_to.take()).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lookout_config::LookoutConfig;
    use lookout_core::{CredentialStore, MemoryCredentialStore};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: true,
            verbose: false,
        }
    }

    async fn context(token: Option<&str>) -> (MockServer, Arc<MemoryCredentialStore>, AppContext) {
        let server = MockServer::start().await;
        let store = Arc::new(token.map_or_else(
            MemoryCredentialStore::new,
            MemoryCredentialStore::with_credential,
        ));
        let mut config = LookoutConfig::default();
        config.server.url = server.uri();
        let ctx = AppContext::with_store(config, store.clone()).expect("context");
        (server, store, ctx)
    }

    #[tokio::test]
    async fn protected_route_without_session_ends_on_login() {
        let (server, _store, ctx) = context(None).await;
        let flags = flags();

        let mut navigator = Navigator::new(&ctx, &flags);
        let err = navigator
            .open(Route::Org {
                name: "acme".into(),
            })
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<RenderedFailure>().is_some());
        assert_eq!(
            navigator.return_to,
            Some(Route::Org {
                name: "acme".into()
            })
        );
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn logout_clears_session_and_lands_on_login() {
        let (_server, store, ctx) = context(Some("tok")).await;
        let flags = flags();

        Navigator::new(&ctx, &flags)
            .open(Route::Logout)
            .await
            .expect("logout ends on the login page");
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn callback_returns_to_remembered_page() {
        let (server, store, ctx) = context(None).await;
        let flags = flags();
        Mock::given(method("POST"))
            .and(path("/api/callback"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "token": "tok" } })),
            )
            .mount(&server)
            .await;
        Mock::given(path("/api/me"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "data": { "name": "Alice" } })),
            )
            .mount(&server)
            .await;
        Mock::given(path("/api/org/acme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "id": 1, "name": "acme", "config": "k: v" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        Navigator::new(&ctx, &flags)
            .with_return_to(Some(Route::Org {
                name: "acme".into(),
            }))
            .open(Route::Callback {
                query: "code=abc&state=s1".into(),
            })
            .await
            .expect("callback then detail page");
        assert!(store.exists());
    }

    #[tokio::test]
    async fn failed_callback_renders_errors() {
        let (server, store, ctx) = context(None).await;
        let flags = flags();
        Mock::given(path("/api/callback"))
            .respond_with(ResponseTemplate::new(412))
            .mount(&server)
            .await;

        let err = Navigator::new(&ctx, &flags)
            .open(Route::Callback {
                query: "code=abc&state=bad".into(),
            })
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<RenderedFailure>().is_some());
        assert!(!store.exists());
    }
}
