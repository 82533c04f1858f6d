//! Hook event kinds and the legacy `event` / `events` union.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Interaction that triggers a hook delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookEvent {
    PostRegister,
    PostSignIn,
    PostResetPassword,
}

impl HookEvent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PostRegister => "PostRegister",
            Self::PostSignIn => "PostSignIn",
            Self::PostResetPassword => "PostResetPassword",
        }
    }
}

impl fmt::Display for HookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown hook event `{0}`")]
pub struct UnknownHookEvent(pub String);

impl FromStr for HookEvent {
    type Err = UnknownHookEvent;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PostRegister" => Ok(Self::PostRegister),
            "PostSignIn" => Ok(Self::PostSignIn),
            "PostResetPassword" => Ok(Self::PostResetPassword),
            other => Err(UnknownHookEvent(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("a hook must subscribe to at least one event")]
pub struct EmptyHookEvents;

/// Ordered, non-empty list of events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookEvents(Vec<HookEvent>);

impl HookEvents {
    #[must_use]
    pub fn single(event: HookEvent) -> Self {
        Self(vec![event])
    }

    #[must_use]
    pub fn as_slice(&self) -> &[HookEvent] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = HookEvent> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<HookEvent>> for HookEvents {
    type Error = EmptyHookEvents;

    fn try_from(events: Vec<HookEvent>) -> Result<Self, Self::Error> {
        if events.is_empty() {
            return Err(EmptyHookEvents);
        }

        Ok(Self(events))
    }
}

impl From<HookEvents> for Vec<HookEvent> {
    fn from(events: HookEvents) -> Self {
        events.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`event` and `events` cannot both be provided")]
pub struct ConflictingEventFields;

/// The two request shapes a subscription may arrive in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSubscription {
    /// Old single-event payload.
    Legacy(HookEvent),

    /// Current list payload.
    List(HookEvents),
}

impl EventSubscription {
    /// Resolve the optional request fields into at most one subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ConflictingEventFields`] when both fields are present.
    pub fn resolve(
        event: Option<HookEvent>,
        events: Option<HookEvents>,
    ) -> Result<Option<Self>, ConflictingEventFields> {
        match (event, events) {
            (Some(_), Some(_)) => Err(ConflictingEventFields),
            (Some(event), None) => Ok(Some(Self::Legacy(event))),
            (None, Some(events)) => Ok(Some(Self::List(events))),
            (None, None) => Ok(None),
        }
    }

    /// Canonical list form.
    #[must_use]
    pub fn events(&self) -> HookEvents {
        match self {
            Self::Legacy(event) => HookEvents::single(*event),
            Self::List(events) => events.clone(),
        }
    }

    /// Value for the legacy `event` column.
    #[must_use]
    pub fn legacy_event(&self) -> Option<HookEvent> {
        match self {
            Self::Legacy(event) => Some(*event),
            Self::List(_) => None,
        }
    }
}
