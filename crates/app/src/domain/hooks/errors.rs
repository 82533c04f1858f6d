//! Hooks service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::hooks::{
    config::HookConfigError,
    events::{ConflictingEventFields, EmptyHookEvents},
};

#[derive(Debug, Error)]
pub enum HooksServiceError {
    #[error("hook already exists")]
    AlreadyExists,

    #[error("hook not found")]
    NotFound,

    #[error("`event` and `events` cannot both be provided")]
    ConflictingEventFields,

    #[error("a hook must define at least one event")]
    MissingEvents,

    #[error("hook name must not be empty")]
    EmptyName,

    #[error("invalid hook config")]
    InvalidConfig(#[from] HookConfigError),

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl HooksServiceError {
    /// Stable machine-readable code for domain rejections.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::ConflictingEventFields => Some("hook.conflict_event_fields"),
            Self::MissingEvents => Some("hook.missing_events"),
            Self::EmptyName => Some("hook.empty_name"),
            Self::InvalidConfig(_) => Some("hook.invalid_config"),
            _ => None,
        }
    }
}

impl From<ConflictingEventFields> for HooksServiceError {
    fn from(_: ConflictingEventFields) -> Self {
        Self::ConflictingEventFields
    }
}

impl From<EmptyHookEvents> for HooksServiceError {
    fn from(_: EmptyHookEvents) -> Self {
        Self::MissingEvents
    }
}

impl From<Error> for HooksServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
