//! Beacon Domain Concerns

pub mod hooks;
pub mod tenants;
