//! Hook Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

use beacon_app::domain::hooks::{
    HooksServiceError,
    config::{HookConfig, HookConfigPatch},
    data::{HookUpdate, NewHook},
    events::{HookEvent, HookEvents},
};

/// Interaction that triggers a hook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) enum HookEventName {
    PostRegister,
    PostSignIn,
    PostResetPassword,
}

impl From<HookEventName> for HookEvent {
    fn from(event: HookEventName) -> Self {
        match event {
            HookEventName::PostRegister => HookEvent::PostRegister,
            HookEventName::PostSignIn => HookEvent::PostSignIn,
            HookEventName::PostResetPassword => HookEvent::PostResetPassword,
        }
    }
}

impl From<HookEvent> for HookEventName {
    fn from(event: HookEvent) -> Self {
        match event {
            HookEvent::PostRegister => HookEventName::PostRegister,
            HookEvent::PostSignIn => HookEventName::PostSignIn,
            HookEvent::PostResetPassword => HookEventName::PostResetPassword,
        }
    }
}

/// Reject `events: []` while parsing so it never reaches the service.
fn non_empty_events<'de, D>(deserializer: D) -> Result<Option<Vec<HookEventName>>, D::Error>
where
    D: Deserializer<'de>,
{
    let events = Option::<Vec<HookEventName>>::deserialize(deserializer)?;

    if events.as_ref().is_some_and(Vec::is_empty) {
        return Err(D::Error::custom("`events` must not be empty"));
    }

    Ok(events)
}

fn into_events(events: Option<Vec<HookEventName>>) -> Result<Option<HookEvents>, HooksServiceError> {
    events
        .map(|events| HookEvents::try_from(events.into_iter().map(HookEvent::from).collect::<Vec<_>>()))
        .transpose()
        .map_err(HooksServiceError::from)
}

/// Create Hook Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CreateHookRequest {
    /// Display name; defaults to `unnamed`
    #[serde(default)]
    pub name: Option<String>,

    /// Legacy single event
    #[serde(default)]
    pub event: Option<HookEventName>,

    /// Events that trigger a delivery
    #[serde(default, deserialize_with = "non_empty_events")]
    pub events: Option<Vec<HookEventName>>,

    /// Delivery configuration; must include a `url`
    #[salvo(schema(value_type = Object))]
    pub config: Map<String, Value>,
}

impl TryFrom<CreateHookRequest> for NewHook {
    type Error = HooksServiceError;

    fn try_from(request: CreateHookRequest) -> Result<Self, Self::Error> {
        Ok(NewHook {
            name: request.name,
            event: request.event.map(HookEvent::from),
            events: into_events(request.events)?,
            config: HookConfig::new(request.config)?,
        })
    }
}

/// Update Hook Request
///
/// Every field is optional. `config` is merged over the stored config.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct UpdateHookRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub event: Option<HookEventName>,

    #[serde(default, deserialize_with = "non_empty_events")]
    pub events: Option<Vec<HookEventName>>,

    /// Config keys to overwrite
    #[serde(default)]
    #[salvo(schema(value_type = Object))]
    pub config: Option<Map<String, Value>>,

    #[serde(default)]
    pub enabled: Option<bool>,
}

impl TryFrom<UpdateHookRequest> for HookUpdate {
    type Error = HooksServiceError;

    fn try_from(request: UpdateHookRequest) -> Result<Self, Self::Error> {
        Ok(HookUpdate {
            name: request.name,
            event: request.event.map(HookEvent::from),
            events: into_events(request.events)?,
            config: request.config.map(HookConfigPatch::new),
            enabled: request.enabled,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn create_request_rejects_server_assigned_fields() {
        for field in ["id", "signingKey", "enabled"] {
            let mut body = json!({ "events": ["PostRegister"], "config": { "url": "https://example.com" } });

            body[field] = json!("x");

            assert!(
                serde_json::from_value::<CreateHookRequest>(body).is_err(),
                "`{field}` should be rejected"
            );
        }
    }

    #[test]
    fn empty_events_are_a_shape_error() {
        let create = serde_json::from_value::<CreateHookRequest>(
            json!({ "events": [], "config": { "url": "https://example.com" } }),
        );
        let update = serde_json::from_value::<UpdateHookRequest>(json!({ "events": [] }));

        assert!(create.is_err(), "create with empty events");
        assert!(update.is_err(), "update with empty events");
    }

    #[test]
    fn create_request_converts_to_new_hook() -> TestResult {
        let request: CreateHookRequest = serde_json::from_value(json!({
            "name": "fooName",
            "events": ["PostRegister", "PostSignIn"],
            "config": { "url": "https://example.com" },
        }))?;

        let hook = NewHook::try_from(request)?;

        assert_eq!(hook.name.as_deref(), Some("fooName"), "name");
        assert_eq!(hook.event, None, "legacy event");
        assert_eq!(
            hook.events.map(Vec::from),
            Some(vec![HookEvent::PostRegister, HookEvent::PostSignIn]),
            "events"
        );
        assert_eq!(hook.config.url(), "https://example.com", "url");

        Ok(())
    }

    #[test]
    fn create_request_with_invalid_config_is_rejected() -> TestResult {
        let request: CreateHookRequest = serde_json::from_value(json!({
            "event": "PostRegister",
            "config": { "url": "mailto:someone@example.com" },
        }))?;

        assert!(
            matches!(NewHook::try_from(request), Err(HooksServiceError::InvalidConfig(_))),
            "mailto url should be invalid"
        );

        Ok(())
    }

    #[test]
    fn update_request_keeps_absent_fields_unset() -> TestResult {
        let request: UpdateHookRequest = serde_json::from_value(json!({ "enabled": false }))?;

        let update = HookUpdate::try_from(request)?;

        assert_eq!(
            update,
            HookUpdate {
                enabled: Some(false),
                ..HookUpdate::default()
            },
            "only enabled should be set"
        );

        Ok(())
    }
}
