//! Test Helpers

use serde_json::{Value, json};

use crate::domain::hooks::{
    config::{HookConfig, HookConfigPatch},
    data::NewHook,
    events::{HookEvent, HookEvents},
};

pub(crate) fn example_config() -> HookConfig {
    HookConfig::try_from(json!({ "url": "https://example.com" }))
        .expect("example config should be valid")
}

/// Named hook subscribed through `events`; an empty list leaves `events` unset.
pub(crate) fn new_hook(events: Vec<HookEvent>) -> NewHook {
    NewHook {
        name: Some("fooName".to_string()),
        event: None,
        events: HookEvents::try_from(events).ok(),
        config: example_config(),
    }
}

pub(crate) fn config_patch(value: Value) -> HookConfigPatch {
    serde_json::from_value(value).expect("config patch should be an object")
}
