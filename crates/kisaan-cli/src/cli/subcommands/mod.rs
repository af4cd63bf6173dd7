mod alerts;
mod courses;
mod market;
mod tools;
mod user;
mod wiki;

pub use alerts::AlertsCommands;
pub use courses::CoursesCommands;
pub use market::MarketCommands;
pub use tools::ToolsCommands;
pub use user::UserCommands;
pub use wiki::WikiCommands;
