use std::path::PathBuf;

use clap::{ArgGroup, Args, Subcommand};

/// Organization commands.
#[derive(Clone, Debug, Subcommand)]
pub enum OrgCommands {
    /// Show the organization's settings.
    Show(OrgNameArgs),
    /// Edit the settings in `$VISUAL`/`$EDITOR` and save them if changed.
    Edit(OrgNameArgs),
    /// Replace the settings from a file or stdin and save them.
    Set(OrgSetArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OrgNameArgs {
    /// Organization name.
    pub name: String,
}

#[derive(Clone, Debug, Args)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "stdin"])))]
pub struct OrgSetArgs {
    /// Organization name.
    pub name: String,
    /// Read the new configuration from this file.
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,
    /// Read the new configuration from stdin.
    #[arg(long)]
    pub stdin: bool,
}
