//! Hooks

pub mod config;
pub mod data;
pub mod errors;
pub mod events;
pub mod records;
mod repository;
pub mod service;
pub mod signing;

pub use errors::HooksServiceError;
pub use service::*;
