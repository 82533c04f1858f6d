//! Hook Handlers

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod rotate_signing_key;
pub(crate) mod update;
