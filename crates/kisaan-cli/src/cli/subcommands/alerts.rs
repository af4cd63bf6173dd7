use clap::Subcommand;

/// Alert list commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AlertsCommands {
    /// Weather alerts.
    Weather {
        #[arg(long)]
        region: Option<String>,
    },
    /// Pest alerts.
    Pests {
        #[arg(long)]
        region: Option<String>,
    },
}
