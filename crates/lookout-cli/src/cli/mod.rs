use clap::Parser;
use lookout_config::LookoutConfig;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lookout-admin` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lookout-admin",
    version,
    about = "lookout-admin - manage lookout organization settings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (default from `general.format`, else table)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base URL of the lookout server (overrides SERVER_URL and config files)
    #[arg(long, global = true, value_name = "URL")]
    pub server_url: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, config: &LookoutConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_config(&config.general.format).unwrap_or_else(|| {
                tracing::warn!(
                    format = %config.general.format,
                    "unknown general.format; using table"
                );
                OutputFormat::Table
            })
        });

        GlobalFlags {
            format,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use lookout_config::LookoutConfig;
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::OrgCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "lookout-admin",
            "--format",
            "json",
            "--verbose",
            "--server-url",
            "http://lookout.test",
            "orgs",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert_eq!(cli.server_url.as_deref(), Some("http://lookout.test"));
        assert!(matches!(cli.command, Commands::Orgs));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lookout-admin", "status", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Status));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lookout-admin", "--format", "xml", "orgs"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn format_falls_back_to_config_then_table() {
        let cli = Cli::try_parse_from(["lookout-admin", "orgs"]).expect("cli should parse");
        let mut config = LookoutConfig::default();
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Table);

        config.general.format = "JSON".into();
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Json);

        config.general.format = "yaml".into();
        assert_eq!(cli.global_flags(&config).format, OutputFormat::Table);
    }

    #[test]
    fn open_takes_a_path() {
        let cli = Cli::try_parse_from(["lookout-admin", "open", "/org/acme"])
            .expect("cli should parse");
        match cli.command {
            Commands::Open(args) => assert_eq!(args.path, "/org/acme"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn org_set_requires_exactly_one_source() {
        assert!(Cli::try_parse_from(["lookout-admin", "org", "set", "acme"]).is_err());
        assert!(
            Cli::try_parse_from([
                "lookout-admin",
                "org",
                "set",
                "acme",
                "--file",
                "c.yml",
                "--stdin"
            ])
            .is_err()
        );

        let cli = Cli::try_parse_from(["lookout-admin", "org", "set", "acme", "--stdin"])
            .expect("cli should parse");
        match cli.command {
            Commands::Org {
                action: OrgCommands::Set(args),
            } => {
                assert_eq!(args.name, "acme");
                assert!(args.stdin);
                assert!(args.file.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn login_flags_parse() {
        let cli = Cli::try_parse_from([
            "lookout-admin",
            "login",
            "--no-browser",
            "--return-to",
            "/org/acme",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Login(args) => {
                assert!(args.no_browser);
                assert_eq!(args.return_to.as_deref(), Some("/org/acme"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
