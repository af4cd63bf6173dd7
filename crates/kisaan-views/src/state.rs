//! Outcome of one page fetch.

use serde::Serialize;

/// A fetch payload that can be empty.
pub trait Payload {
    fn is_empty(&self) -> bool;
}

impl<T> Payload for Vec<T> {
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

/// Data state of one page section.
///
/// `Loaded` always holds a non-empty payload: a successful empty response
/// is `Empty`. `Failed` keeps the reason for logs; renderers present it the
/// same way as `Empty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "lowercase")]
pub enum DataState<P> {
    Loading,
    Loaded(P),
    Empty,
    Failed(String),
}

impl<P> Default for DataState<P> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<P: Payload> DataState<P> {
    /// Build the state for a finished fetch.
    pub fn from_result<E: std::fmt::Display>(result: Result<P, E>) -> Self {
        match result {
            Ok(payload) if payload.is_empty() => Self::Empty,
            Ok(payload) => Self::Loaded(payload),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

impl<P> DataState<P> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// `Empty` and `Failed` both present as "no data".
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::Empty | Self::Failed(_))
    }

    #[must_use]
    pub const fn loaded(&self) -> Option<&P> {
        match self {
            Self::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Short name of the variant, for logs and table output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Empty => "empty",
            Self::Failed(_) => "failed",
        }
    }
}

impl<T> DataState<Vec<T>> {
    /// Loaded items, or an empty slice for every other state.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.loaded().map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_success_is_never_loaded() {
        let state = DataState::<Vec<i64>>::from_result(Ok::<_, String>(vec![]));
        assert_eq!(state, DataState::Empty);
        assert!(state.is_no_data());
        assert!(state.loaded().is_none());
    }

    #[test]
    fn non_empty_success_is_loaded() {
        let state = DataState::from_result(Ok::<_, String>(vec![1, 2]));
        assert_eq!(state.items(), &[1, 2]);
        assert_eq!(state.label(), "loaded");
    }

    #[test]
    fn failure_keeps_reason_but_reads_as_no_data() {
        let state = DataState::<Vec<i64>>::from_result(Err("API error (500): boom"));
        assert_eq!(state.failure(), Some("API error (500): boom"));
        assert!(state.is_no_data());
        assert!(state.items().is_empty());
    }

    #[test]
    fn serializes_with_state_tag() {
        let json = serde_json::to_value(DataState::Loaded(vec!["wheat"])).unwrap();
        assert_eq!(json, serde_json::json!({"state": "loaded", "data": ["wheat"]}));
        let json = serde_json::to_value(DataState::<Vec<i64>>::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"state": "empty"}));
    }
}
