//! Shared presentational components.
pub(crate) mod field;
pub(crate) mod loading;
