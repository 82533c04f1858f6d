//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::domain::tenants::records::TenantUuid;

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    pub uuid: Uuid,

    /// Tenant that owns this API token.
    pub tenant_uuid: TenantUuid,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub tenant_uuid: TenantUuid,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub struct NewApiToken {
    pub uuid: Uuid,
    pub tenant_uuid: TenantUuid,

    /// SHA-256 of the raw token, hex encoded.
    pub token_hash: String,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
