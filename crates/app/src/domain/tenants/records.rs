//! Tenant Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Tenant UUID
pub type TenantUuid = TypedUuid<TenantRecord>;

/// Owner of hooks and API tokens. Every hook query is scoped by its uuid.
#[derive(Debug, Clone)]
pub struct TenantRecord {
    pub uuid: TenantUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Set when the tenant is retired; its tokens stop authenticating.
    pub deleted_at: Option<Timestamp>,
}
