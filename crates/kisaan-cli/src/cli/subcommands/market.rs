use clap::Subcommand;

/// Market intelligence commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MarketCommands {
    /// Latest prices, filtered locally.
    Prices {
        /// Crop name substring (case-insensitive).
        #[arg(long)]
        search: Option<String>,
        /// Exact region (case-insensitive, `all` for every region).
        #[arg(long)]
        region: Option<String>,
    },
    /// Regions and crops present in the price list.
    Regions,
    /// Price chart series.
    Chart {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
    /// Price forecast for one crop.
    Forecast {
        crop: String,
        #[arg(long)]
        region: Option<String>,
    },
}
