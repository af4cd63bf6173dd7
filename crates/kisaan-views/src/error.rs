use thiserror::Error;

/// Errors raised by view state transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewError {
    #[error("unknown route '{0}'")]
    UnknownRoute(String),

    #[error("no {entity} with id {id} in the loaded list")]
    NotLoaded { entity: &'static str, id: i64 },
}
