//! Shared test infrastructure.

pub(crate) mod helpers;

pub use context::TestContext;
