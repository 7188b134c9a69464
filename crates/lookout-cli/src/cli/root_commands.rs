use clap::{Args, Subcommand};

use crate::cli::subcommands::OrgCommands;

/// Top-level command tree. Each command opens one console route.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Open a console path (`/`, `/org/<name>`, `/login`, `/logout`, `/callback?...`).
    Open(OpenArgs),
    /// List organizations you administer (`/`).
    Orgs,
    /// Show or change one organization's settings (`/org/<name>`).
    Org {
        #[command(subcommand)]
        action: OrgCommands,
    },
    /// Log in through the browser.
    Login(LoginArgs),
    /// Finish a login with the query string the provider redirected to.
    Callback(CallbackArgs),
    /// Clear the stored session.
    Logout,
    /// Show current auth status.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Console path, e.g. `/org/acme`.
    pub path: String,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Print the login URL instead of opening a browser.
    #[arg(long)]
    pub no_browser: bool,
    /// Path to open after logging in (default `/`).
    #[arg(long, value_name = "PATH")]
    pub return_to: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CallbackArgs {
    /// Query string from the `/callback` URL, e.g. `code=...&state=...`.
    pub query: String,
    /// Path to open after logging in (default `/`).
    #[arg(long, value_name = "PATH")]
    pub return_to: Option<String>,
}
