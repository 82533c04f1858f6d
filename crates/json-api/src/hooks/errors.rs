//! Hook Errors

use salvo::http::StatusError;
use tracing::error;

use beacon_app::domain::hooks::HooksServiceError;

pub(crate) fn into_status_error(error: HooksServiceError) -> StatusError {
    match error {
        HooksServiceError::ConflictingEventFields | HooksServiceError::MissingEvents => {
            StatusError::unprocessable_entity()
                .brief(error.to_string())
                .detail(error.code().unwrap_or_default())
        }
        HooksServiceError::EmptyName | HooksServiceError::InvalidConfig(_) => {
            let brief = match &error {
                HooksServiceError::InvalidConfig(source) => source.to_string(),
                other => other.to_string(),
            };

            StatusError::bad_request()
                .brief(brief)
                .detail(error.code().unwrap_or_default())
        }
        HooksServiceError::NotFound => StatusError::not_found().brief("Hook not found"),
        HooksServiceError::AlreadyExists => StatusError::conflict().brief("Hook already exists"),
        HooksServiceError::InvalidReference
        | HooksServiceError::MissingRequiredData
        | HooksServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid hook payload")
        }
        HooksServiceError::Sql(source) => {
            error!("hook storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use beacon_app::domain::hooks::config::HookConfigError;

    use super::*;

    #[test]
    fn event_rules_map_to_422_with_code() {
        let conflict = into_status_error(HooksServiceError::ConflictingEventFields);
        let missing = into_status_error(HooksServiceError::MissingEvents);

        assert_eq!(conflict.code, StatusCode::UNPROCESSABLE_ENTITY, "conflict status");
        assert_eq!(
            conflict.detail.as_deref(),
            Some("hook.conflict_event_fields"),
            "conflict code"
        );
        assert_eq!(missing.code, StatusCode::UNPROCESSABLE_ENTITY, "missing status");
        assert_eq!(
            missing.detail.as_deref(),
            Some("hook.missing_events"),
            "missing code"
        );
    }

    #[test]
    fn validation_failures_map_to_400() {
        let empty_name = into_status_error(HooksServiceError::EmptyName);
        let config = into_status_error(HooksServiceError::InvalidConfig(HookConfigError::MissingUrl));
        let data = into_status_error(HooksServiceError::InvalidData);

        assert_eq!(empty_name.code, StatusCode::BAD_REQUEST, "empty name");
        assert_eq!(config.code, StatusCode::BAD_REQUEST, "invalid config");
        assert_eq!(
            config.detail.as_deref(),
            Some("hook.invalid_config"),
            "invalid config code"
        );
        assert_eq!(data.code, StatusCode::BAD_REQUEST, "invalid data");
    }

    #[test]
    fn missing_hook_maps_to_404() {
        assert_eq!(
            into_status_error(HooksServiceError::NotFound).code,
            StatusCode::NOT_FOUND,
            "not found"
        );
    }

    #[test]
    fn invalid_config_brief_names_the_broken_key() {
        let status = into_status_error(HooksServiceError::InvalidConfig(HookConfigError::InvalidRetries));

        assert!(status.brief.contains("retries"), "brief should mention retries");
    }
}
