//! Gate protected routes on the session's [`AuthStatus`].
//!
//! The guard is a plain function of the status provider and the view: nothing
//! is kept between renders. [`activate`] starts the check, [`render`] maps a
//! status to what the route shows, and [`guard`] composes both with a loading
//! spinner for command handlers.

use std::future::Future;
use std::sync::Arc;

use lookout_auth::AuthStatusProvider;
use lookout_core::{AuthStatus, User};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::progress::Progress;
use crate::router::Route;

/// Where an unauthenticated visitor is sent, and the page they asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: Route,
    pub from: Option<Route>,
}

impl Redirect {
    #[must_use]
    pub const fn to(route: Route) -> Self {
        Self {
            to: route,
            from: None,
        }
    }
}

/// What a guarded route shows for a given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<V> {
    Loading,
    Ready(V),
    Redirect(Redirect),
}

/// In-flight status check for one render.
///
/// Dropping the handle tears the render down: the check keeps running but its
/// result goes nowhere.
#[derive(Debug)]
pub struct GuardHandle {
    status: watch::Receiver<AuthStatus>,
    check: JoinHandle<bool>,
}

impl GuardHandle {
    /// Status as of now; `Unknown` until the check resolves.
    #[must_use]
    pub fn current(&self) -> AuthStatus {
        self.status.borrow().clone()
    }

    /// Wait for the check to resolve.
    pub async fn settled(&mut self) -> AuthStatus {
        match self.status.wait_for(AuthStatus::is_resolved).await {
            Ok(status) => status.clone(),
            Err(_) => {
                tracing::warn!("session check ended without a result");
                AuthStatus::Unauthenticated
            }
        }
    }

    /// Split into the status receiver and the check task, whose output tells
    /// whether the result reached a receiver.
    #[cfg(test)]
    #[must_use]
    pub fn into_parts(self) -> (watch::Receiver<AuthStatus>, JoinHandle<bool>) {
        (self.status, self.check)
    }
}

/// Start the status check for a guarded render.
pub fn activate<P>(provider: Arc<P>) -> GuardHandle
where
    P: AuthStatusProvider + 'static,
{
    let (tx, rx) = watch::channel(AuthStatus::Unknown);
    let check = tokio::spawn(async move {
        let status = provider.status().await;
        let delivered = tx.send(status).is_ok();
        if !delivered {
            tracing::debug!("guarded view torn down before the session check finished");
        }
        delivered
    });

    GuardHandle { status: rx, check }
}

/// Map a status to the guarded outcome for `destination`.
pub fn render<V>(
    status: &AuthStatus,
    destination: &Route,
    view: impl FnOnce(&User) -> V,
) -> Guarded<V> {
    match status {
        AuthStatus::Unknown => Guarded::Loading,
        AuthStatus::Authenticated(user) => Guarded::Ready(view(user)),
        AuthStatus::Unauthenticated => Guarded::Redirect(Redirect {
            to: Route::Login,
            from: Some(destination.clone()),
        }),
    }
}

/// Check the session and build the view for `destination` once authenticated.
///
/// Shows a spinner while the check is pending. Never returns `Loading`.
pub async fn guard<P, V, F, Fut>(provider: Arc<P>, destination: &Route, view: F) -> Guarded<V>
where
    P: AuthStatusProvider + 'static,
    F: FnOnce(User) -> Fut,
    Fut: Future<Output = V>,
{
    let mut handle = activate(provider);
    tracing::debug!(route = %destination, status = %handle.current(), "session check started");
    let status = {
        let _spinner = Progress::spinner("Checking session…");
        handle.settled().await
    };

    match render(&status, destination, User::clone) {
        Guarded::Ready(user) => Guarded::Ready(view(user).await),
        Guarded::Redirect(redirect) => Guarded::Redirect(redirect),
        Guarded::Loading => Guarded::Loading,
    }
}
