//! Hook Data

use crate::domain::hooks::{
    config::{HookConfig, HookConfigPatch},
    events::{HookEvent, HookEvents},
};

/// Name given to hooks created without one.
pub const UNNAMED_HOOK: &str = "unnamed";

/// New Hook Data
///
/// Server-assigned fields (id, signing key, enabled flag) are not part of it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHook {
    pub name: Option<String>,
    pub event: Option<HookEvent>,
    pub events: Option<HookEvents>,
    pub config: HookConfig,
}

/// Partial Hook Update Data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HookUpdate {
    pub name: Option<String>,
    pub event: Option<HookEvent>,
    pub events: Option<HookEvents>,
    pub config: Option<HookConfigPatch>,
    pub enabled: Option<bool>,
}

/// Fully resolved values handed to the repository on insert.
#[derive(Debug, Clone)]
pub(crate) struct HookInsert {
    pub name: String,
    pub event: Option<HookEvent>,
    pub events: HookEvents,
    pub config: HookConfig,
}

/// Fully resolved values handed to the repository on update.
#[derive(Debug, Clone)]
pub(crate) struct HookChanges {
    pub name: String,
    pub event: Option<HookEvent>,
    pub events: HookEvents,
    pub config: HookConfig,
    pub enabled: bool,
}
