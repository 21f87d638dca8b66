use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tur` binary.
#[derive(Debug, Parser)]
#[command(name = "tur", version, about = "Turismo - tourism booking client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags, resolving the output format against
    /// the configured default.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .unwrap_or_else(|| OutputFormat::from_config(default_format)),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{AuthCommands, CatalogCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["tur", "--format", "raw", "--verbose", "capabilities"])
            .expect("cli should parse");
        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Capabilities));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tur", "auth", "status", "--quiet"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Auth {
                action: AuthCommands::Status
            }
        ));
    }

    #[test]
    fn format_falls_back_to_config_default() {
        let cli = Cli::try_parse_from(["tur", "capabilities"]).expect("cli should parse");
        assert_eq!(cli.global_flags("raw").format, OutputFormat::Raw);
        assert_eq!(cli.global_flags("yaml").format, OutputFormat::Json);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["tur", "--format", "xml", "capabilities"]).is_err());
    }

    #[test]
    fn catalog_subcommands_take_ids() {
        let cli = Cli::try_parse_from(["tur", "catalog", "hostel", "h-12"]).expect("cli should parse");
        match cli.command {
            Commands::Catalog {
                action: CatalogCommands::Hostel { id },
            } => assert_eq!(id, "h-12"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn register_rejects_unknown_role() {
        let parsed = Cli::try_parse_from([
            "tur", "auth", "register", "--name", "A", "--email", "a@b.c", "--password", "x",
            "--role", "guia",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn register_rejects_administrator_role() {
        let parsed = Cli::try_parse_from([
            "tur", "auth", "register", "--name", "A", "--email", "a@b.c", "--password", "x",
            "--role", "administrador",
        ]);
        assert!(parsed.is_err());
        let parsed = Cli::try_parse_from([
            "tur", "auth", "register", "--name", "A", "--email", "a@b.c", "--password", "x",
            "--role", "emprendedor",
        ]);
        assert!(parsed.is_ok());
    }

    #[test]
    fn pay_requires_exactly_one_item() {
        assert!(Cli::try_parse_from(["tur", "pay"]).is_err());
        assert!(
            Cli::try_parse_from(["tur", "pay", "--package", "p1", "--product", "x1"]).is_err()
        );
        assert!(Cli::try_parse_from(["tur", "pay", "--package", "p1"]).is_ok());
    }
}
