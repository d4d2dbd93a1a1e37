//! Browser-side service adapters.
pub(crate) mod transport;
