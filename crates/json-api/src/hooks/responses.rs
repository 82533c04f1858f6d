//! Hook Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use beacon_app::domain::hooks::records::HookRecord;

use crate::hooks::requests::HookEventName;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HookResponse {
    /// The unique identifier of the hook
    pub id: Uuid,

    pub tenant_id: Uuid,

    pub name: String,

    /// Legacy single event, when the hook was created with one
    pub event: Option<HookEventName>,

    /// Events that trigger a delivery
    pub events: Vec<HookEventName>,

    #[salvo(schema(value_type = Object))]
    pub config: Map<String, Value>,

    /// Secret used to sign delivered payloads
    pub signing_key: String,

    pub enabled: bool,

    /// The date and time the hook was created
    pub created_at: String,

    /// The date and time the hook was last updated
    pub updated_at: String,
}

impl From<HookRecord> for HookResponse {
    fn from(hook: HookRecord) -> Self {
        HookResponse {
            id: hook.uuid.into(),
            tenant_id: hook.tenant_uuid.into(),
            event: hook.event.map(HookEventName::from),
            events: hook.events.iter().map(HookEventName::from).collect(),
            signing_key: hook.signing_key.expose().to_string(),
            created_at: hook.created_at.to_string(),
            updated_at: hook.updated_at.to_string(),
            name: hook.name,
            config: hook.config.into_map(),
            enabled: hook.enabled,
        }
    }
}
