//! Serde shape tests for the API payload types.

use lookout_core::{AuthStatus, AuthToken, OrgListItem, Organization, User};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn user_parses_from_me_payload() {
    let user: User = serde_json::from_value(json!({ "name": "Alice" })).unwrap();
    assert_eq!(
        user,
        User {
            name: "Alice".into()
        }
    );
}

#[test]
fn org_list_parses_and_links_to_detail() {
    let orgs: Vec<OrgListItem> = serde_json::from_value(json!([
        { "id": 1, "name": "acme" },
        { "id": 2, "name": "globex" }
    ]))
    .unwrap();

    assert_eq!(orgs.len(), 2);
    assert_eq!(orgs[0].path(), "/org/acme");
    assert_eq!(orgs[1].name, "globex");
}

#[test]
fn organization_keeps_config_verbatim() {
    let raw = "analyzers:\n  - name: style\n    disabled: true\n";
    let org: Organization =
        serde_json::from_value(json!({ "id": 1, "name": "acme", "config": raw })).unwrap();
    assert_eq!(org.config, raw);

    let back = serde_json::to_value(&org).unwrap();
    assert_eq!(back["config"], raw);
}

#[test]
fn organization_without_config_defaults_to_empty() {
    let org: Organization = serde_json::from_value(json!({ "id": 7, "name": "acme" })).unwrap();
    assert!(org.config.is_empty());
}

#[test]
fn auth_token_debug_hides_value() {
    let token: AuthToken = serde_json::from_value(json!({ "token": "jwt-abc" })).unwrap();
    assert_eq!(token.token, "jwt-abc");
    assert!(!format!("{token:?}").contains("jwt-abc"));
}

#[test]
fn auth_status_serializes_with_state_tag() {
    let status = AuthStatus::Authenticated(User {
        name: "Alice".into(),
    });
    assert_eq!(
        serde_json::to_value(&status).unwrap(),
        json!({ "state": "authenticated", "user": { "name": "Alice" } })
    );
    assert_eq!(
        serde_json::to_value(AuthStatus::Unauthenticated).unwrap(),
        json!({ "state": "unauthenticated" })
    );
}
