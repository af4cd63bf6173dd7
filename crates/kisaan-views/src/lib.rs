//! # kisaan-views
//!
//! Page view state for the Kisaan Academy client.
//!
//! Every page that shows server data owns one or more [`Loader`]s. A loader
//! runs one fetch per dependency change and exposes the outcome as a
//! [`DataState`]. Pages receive the session language through an explicit
//! [`SessionContext`] built by the navigation [`Shell`].
//!
//! - [`pages::home`]: recent weather and pest alerts
//! - [`pages::learning`]: course list, category filter, course detail
//! - [`pages::market`]: price list, filters, chart series, forecasts
//! - [`pages::agribot`]: chat log and alert sidebar
//! - [`pages::wiki`]: article list, category, search, article detail
//! - [`pages::tools`]: farm calculators (no I/O)

pub mod alerts;
pub mod error;
pub mod loader;
pub mod pages;
pub mod shell;
pub mod state;

pub use error::ViewError;
pub use loader::Loader;
pub use shell::{NavLink, Page, SessionContext, Shell};
pub use state::{DataState, Payload};

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Normalize a category selector: blank and `all` mean no filter.
#[must_use]
pub fn category_filter(category: Option<&str>) -> Option<String> {
    category
        .map(str::trim)
        .filter(|c| !c.is_empty() && !c.eq_ignore_ascii_case(ALL_CATEGORIES))
        .map(str::to_string)
}

/// Distinct values, first seen first.
pub(crate) fn unique_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}
