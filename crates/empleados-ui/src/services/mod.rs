//! Browser-side service implementations.

pub(crate) mod api;
