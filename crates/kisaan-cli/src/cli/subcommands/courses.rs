use clap::Subcommand;

/// Learning hub commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CoursesCommands {
    /// List courses, optionally filtered by category (`all` for every course).
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Categories present in the course list.
    Categories,
    /// Get one course by ID.
    Get { id: i64 },
}
