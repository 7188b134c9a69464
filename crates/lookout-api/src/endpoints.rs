//! Typed lookout API operations.

use std::future::Future;

use lookout_core::{AuthToken, OrgListItem, Organization, User};

use crate::error::ApiError;
use crate::gateway::{ApiGateway, CallOptions};

/// Operations the auth session needs.
pub trait SessionApi: Send + Sync {
    /// `GET /api/me`: identity behind the current credential.
    fn me(&self) -> impl Future<Output = Result<User, ApiError>> + Send;

    /// `POST /api/callback?<query>`: exchange the OAuth provider's callback
    /// query string for a session token. A leading `?` is optional.
    fn callback(&self, query: &str) -> impl Future<Output = Result<AuthToken, ApiError>> + Send;

    /// Server endpoint that starts the OAuth flow.
    fn login_url(&self) -> String;
}

/// Operations the organization views need.
pub trait OrganizationApi: Send + Sync {
    /// `GET /api/orgs`: organizations with the bot installed where the user is admin.
    fn orgs(&self) -> impl Future<Output = Result<Vec<OrgListItem>, ApiError>> + Send;

    /// `GET /api/org/:name`.
    fn org(&self, name: &str) -> impl Future<Output = Result<Organization, ApiError>> + Send;

    /// `PUT /api/org/:name` with `{ config }`; returns the stored organization.
    fn update_config(
        &self,
        name: &str,
        config: &str,
    ) -> impl Future<Output = Result<Organization, ApiError>> + Send;
}

fn callback_path(query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        "/api/callback".to_string()
    } else {
        format!("/api/callback?{query}")
    }
}

fn org_path(name: &str) -> String {
    format!("/api/org/{}", urlencoding::encode(name))
}

impl SessionApi for ApiGateway {
    async fn me(&self) -> Result<User, ApiError> {
        self.call("/api/me", CallOptions::get()).await
    }

    async fn callback(&self, query: &str) -> Result<AuthToken, ApiError> {
        self.call(&callback_path(query), CallOptions::post()).await
    }

    fn login_url(&self) -> String {
        Self::login_url(self)
    }
}

impl OrganizationApi for ApiGateway {
    async fn orgs(&self) -> Result<Vec<OrgListItem>, ApiError> {
        self.call("/api/orgs", CallOptions::get()).await
    }

    async fn org(&self, name: &str) -> Result<Organization, ApiError> {
        self.call(&org_path(name), CallOptions::get()).await
    }

    async fn update_config(&self, name: &str, config: &str) -> Result<Organization, ApiError> {
        self.call(
            &org_path(name),
            CallOptions::put(serde_json::json!({ "config": config })),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_path_accepts_leading_question_mark() {
        assert_eq!(
            callback_path("?code=abc&state=xyz"),
            "/api/callback?code=abc&state=xyz"
        );
        assert_eq!(
            callback_path("code=abc&state=xyz"),
            "/api/callback?code=abc&state=xyz"
        );
        assert_eq!(callback_path(""), "/api/callback");
    }

    #[test]
    fn org_path_encodes_name() {
        assert_eq!(org_path("acme"), "/api/org/acme");
        assert_eq!(org_path("my org"), "/api/org/my%20org");
    }
}
