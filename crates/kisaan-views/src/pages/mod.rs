//! Page views.
//!
//! Each view is mounted with a [`SessionContext`](crate::SessionContext),
//! starts its fetches immediately, and aborts them when dropped.
//! Dependency changes go through setters that restart only the affected
//! loader.

pub mod agribot;
pub mod home;
pub mod learning;
pub mod market;
pub mod tools;
pub mod wiki;

pub use agribot::{ChatStatus, ChatView, PendingQuestion};
pub use home::HomeView;
pub use learning::LearningView;
pub use market::{ChartPoint, MarketView};
pub use tools::ToolsView;
pub use wiki::WikiView;
