pub mod alerts;
pub mod limit;
