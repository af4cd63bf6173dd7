use clap::Subcommand;

/// Wiki commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WikiCommands {
    /// List articles.
    List {
        /// Category (`all` for every category).
        #[arg(long)]
        category: Option<String>,
        /// Title or content substring (case-insensitive).
        #[arg(long)]
        search: Option<String>,
    },
    /// Get one article by ID.
    Get { id: i64 },
}
