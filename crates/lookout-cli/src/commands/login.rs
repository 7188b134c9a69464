use lookout_auth::{AuthError, browser_flow};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::commands::{fail_with, parse_return_to};
use crate::context::AppContext;
use crate::output::{Page, output};
use crate::router::{Navigator, Route, Visit};

/// `/login`: where to log in, and how to come back.
#[derive(Debug, Serialize)]
struct LoginPage {
    login_url: String,
    return_to: Option<Route>,
}

impl Page for LoginPage {
    fn text(&self) -> anyhow::Result<String> {
        let mut command = String::from("lookout-admin login");
        if let Some(route) = self.return_to.as_ref().filter(|r| **r != Route::Index) {
            command.push_str(&format!(" --return-to {route}"));
        }
        Ok(format!(
            "Log in using GitHub: {}\nRun `{command}` to log in from this terminal.",
            self.login_url
        ))
    }
}

pub fn page(
    ctx: &AppContext,
    flags: &GlobalFlags,
    return_to: Option<&Route>,
) -> anyhow::Result<Visit> {
    output(
        &LoginPage {
            login_url: ctx.session.login_url(),
            return_to: return_to.cloned(),
        },
        flags.format,
    )?;
    Ok(Visit::Shown)
}

/// Interactive login, then open `--return-to` (default `/`).
pub async fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let return_to = parse_return_to(args.return_to.as_deref())?;
    let auth = &ctx.config.auth;

    let result = browser_flow::login(
        &ctx.gateway,
        &ctx.session,
        &auth.callback_addr,
        auth.login_timeout(),
        !args.no_browser,
    )
    .await;

    match result {
        Ok(()) => {}
        Err(error @ AuthError::Api(_)) => return Err(fail_with(&error.messages(), flags)),
        Err(error) => return Err(error.into()),
    }

    Navigator::new(ctx, flags)
        .open(return_to.unwrap_or(Route::Index))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_suggests_return_path() {
        let page = LoginPage {
            login_url: "http://127.0.0.1:8080/login".into(),
            return_to: Some(Route::Org {
                name: "acme".into(),
            }),
        };
        let text = page.text().unwrap();
        assert!(text.starts_with("Log in using GitHub: http://127.0.0.1:8080/login"));
        assert!(text.contains("lookout-admin login --return-to /org/acme"));
    }

    #[test]
    fn login_page_omits_default_return_path() {
        let page = LoginPage {
            login_url: "http://127.0.0.1:8080/login".into(),
            return_to: Some(Route::Index),
        };
        assert!(page.text().unwrap().contains("`lookout-admin login`"));
    }
}
