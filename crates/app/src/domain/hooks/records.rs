//! Hook Records

use jiff::Timestamp;

use crate::{
    domain::{
        hooks::{
            config::HookConfig,
            events::{HookEvent, HookEvents},
            signing::SigningKey,
        },
        tenants::records::TenantUuid,
    },
    uuids::TypedUuid,
};

/// Hook UUID
pub type HookUuid = TypedUuid<HookRecord>;

/// Stored webhook subscription.
#[derive(Debug, Clone)]
pub struct HookRecord {
    pub uuid: HookUuid,
    pub tenant_uuid: TenantUuid,
    pub name: String,

    /// Legacy single event, kept for clients that still read it.
    pub event: Option<HookEvent>,

    /// Canonical subscription list; never empty.
    pub events: HookEvents,

    pub config: HookConfig,
    pub signing_key: SigningKey,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
