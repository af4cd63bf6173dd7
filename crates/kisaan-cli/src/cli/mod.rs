use clap::Parser;
use kisaan_core::enums::Language;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `kisaan` binary.
#[derive(Debug, Parser)]
#[command(
    name = "kisaan",
    version,
    about = "Kisaan Academy - courses, market prices, alerts and farm tools"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Session language: ur or en (defaults to config, then ur)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// API base URL (overrides KISAAN_API__BASE_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            lang: self.lang,
            api_url: self.api_url.clone(),
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use kisaan_core::enums::{Language, Tool};

    use super::subcommands::{CoursesCommands, MarketCommands, ToolsCommands};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["kisaan", "home"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.lang.is_none());
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "kisaan",
            "--format",
            "json",
            "--lang",
            "en",
            "--limit",
            "10",
            "--verbose",
            "home",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.lang, Some(Language::En));
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "kisaan",
            "courses",
            "list",
            "--category",
            "waste_management",
            "--format",
            "raw",
            "--api-url",
            "http://farm.example:8000",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert_eq!(cli.api_url.as_deref(), Some("http://farm.example:8000"));
        assert!(matches!(
            cli.command,
            Commands::Courses {
                action: CoursesCommands::List { ref category }
            } if category.as_deref() == Some("waste_management")
        ));
    }

    #[test]
    fn language_accepts_names_and_rejects_others() {
        let cli = Cli::try_parse_from(["kisaan", "--lang", "urdu", "nav"]).expect("cli should parse");
        assert_eq!(cli.lang, Some(Language::Ur));
        assert!(Cli::try_parse_from(["kisaan", "--lang", "fr", "nav"]).is_err());
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["kisaan", "--format", "xml", "home"]).is_err());
    }

    #[test]
    fn market_forecast_takes_crop_and_region() {
        let cli = Cli::try_parse_from(["kisaan", "market", "forecast", "wheat", "--region", "Punjab"])
            .expect("cli should parse");
        let Commands::Market {
            action: MarketCommands::Forecast { crop, region },
        } = cli.command
        else {
            panic!("expected market forecast");
        };
        assert_eq!(crop, "wheat");
        assert_eq!(region.as_deref(), Some("Punjab"));
    }

    #[test]
    fn tools_subcommands_map_to_calculators() {
        let cli = Cli::try_parse_from(["kisaan", "tools", "energy", "--area", "1", "--usage", "100"])
            .expect("cli should parse");
        let Commands::Tools { action } = cli.command else {
            panic!("expected tools");
        };
        assert_eq!(action.tool(), Tool::Energy);
        assert!(matches!(action, ToolsCommands::Energy { ref usage, .. } if usage == "100"));
    }

    #[test]
    fn chat_question_is_optional() {
        let cli = Cli::try_parse_from(["kisaan", "chat"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Chat(ref args) if args.question().is_none()));

        let cli = Cli::try_parse_from(["kisaan", "chat", "when", "to", "sow?"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Chat(ref args) if args.question().as_deref() == Some("when to sow?")
        ));
    }

    #[test]
    fn courses_get_requires_numeric_id() {
        assert!(Cli::try_parse_from(["kisaan", "courses", "get", "abc"]).is_err());
        assert!(Cli::try_parse_from(["kisaan", "courses", "get", "7"]).is_ok());
    }
}
