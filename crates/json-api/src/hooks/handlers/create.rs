//! Create Hook Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use beacon_app::domain::hooks::data::NewHook;

use crate::{
    extensions::*,
    hooks::{errors::into_status_error, requests::CreateHookRequest, responses::HookResponse},
    state::State,
};

/// Create Hook Handler
///
/// The id and signing key are generated; the hook starts enabled.
#[endpoint(
    tags("hooks"),
    summary = "Create Hook",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Hook created"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Conflicting or missing events"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "hooks.create",
    skip(json, depot, res),
    fields(tenant_uuid = tracing::field::Empty, hook_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateHookRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));

    let new_hook = NewHook::try_from(json.into_inner()).map_err(into_status_error)?;

    let hook = state
        .hooks
        .create_hook(tenant, new_hook)
        .await
        .map_err(into_status_error)?;

    span.record("hook_uuid", tracing::field::display(hook.uuid));

    res.add_header(LOCATION, format!("/hooks/{}", hook.uuid), true)
        .or_500("failed to set location header")?;

    Ok(Json(hook.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use beacon_app::domain::hooks::{
        HooksServiceError, MockHooksService,
        events::{HookEvent, HookEvents},
        records::HookUuid,
    };

    use crate::{
        hooks::requests::HookEventName,
        test_helpers::{TEST_TENANT_UUID, hooks_service, make_hook},
    };

    use super::*;

    fn make_service(hooks: MockHooksService) -> Service {
        hooks_service(hooks, Router::with_path("hooks").post(handler))
    }

    #[tokio::test]
    async fn test_create_hook_success() -> TestResult {
        let uuid = HookUuid::new();

        let mut hooks = MockHooksService::new();

        hooks
            .expect_create_hook()
            .once()
            .withf(|tenant, new| {
                *tenant == TEST_TENANT_UUID
                    && new.name.as_deref() == Some("fooName")
                    && new.event.is_none()
                    && new.events == Some(HookEvents::single(HookEvent::PostRegister))
                    && new.config.url() == "https://example.com"
            })
            .return_once(move |_, _| Ok(make_hook(uuid)));

        let mut res = TestClient::post("http://example.com/hooks")
            .json(&json!({
                "name": "fooName",
                "events": ["PostRegister"],
                "config": { "url": "https://example.com" },
            }))
            .send(&make_service(hooks))
            .await;

        let body: HookResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(location, Some(format!("/hooks/{uuid}").as_str()), "location");
        assert_eq!(body.id, uuid.into_uuid(), "id");
        assert!(body.enabled, "new hooks are enabled");
        assert!(!body.signing_key.is_empty(), "signing key is returned");
        assert_eq!(body.events, vec![HookEventName::PostRegister], "events");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_hook_with_legacy_event() -> TestResult {
        let uuid = HookUuid::new();

        let mut hooks = MockHooksService::new();

        hooks
            .expect_create_hook()
            .once()
            .withf(|_, new| new.event == Some(HookEvent::PostRegister) && new.events.is_none())
            .return_once(move |_, _| {
                let mut hook = make_hook(uuid);

                hook.event = Some(HookEvent::PostRegister);

                Ok(hook)
            });

        let mut res = TestClient::post("http://example.com/hooks")
            .json(&json!({ "event": "PostRegister", "config": { "url": "https://example.com" } }))
            .send(&make_service(hooks))
            .await;

        let body: HookResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(body.event, Some(HookEventName::PostRegister), "event");
        assert_eq!(body.events, vec![HookEventName::PostRegister], "events");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_hook_conflicting_events_returns_422() -> TestResult {
        let mut hooks = MockHooksService::new();

        hooks
            .expect_create_hook()
            .once()
            .return_once(|_, _| Err(HooksServiceError::ConflictingEventFields));

        let res = TestClient::post("http://example.com/hooks")
            .json(&json!({
                "event": "PostRegister",
                "events": ["PostSignIn"],
                "config": { "url": "https://example.com" },
            }))
            .send(&make_service(hooks))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::UNPROCESSABLE_ENTITY),
            "status"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_hook_missing_events_returns_422() -> TestResult {
        let mut hooks = MockHooksService::new();

        hooks
            .expect_create_hook()
            .once()
            .return_once(|_, _| Err(HooksServiceError::MissingEvents));

        let res = TestClient::post("http://example.com/hooks")
            .json(&json!({ "config": { "url": "https://example.com" } }))
            .send(&make_service(hooks))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::UNPROCESSABLE_ENTITY),
            "status"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_hook_rejects_bad_shapes_with_400() -> TestResult {
        let bodies = [
            json!({ "events": [], "config": { "url": "https://example.com" } }),
            json!({ "events": ["PostSignOut"], "config": { "url": "https://example.com" } }),
            json!({ "events": ["PostRegister"], "signingKey": "mine", "config": { "url": "https://example.com" } }),
            json!({ "events": ["PostRegister"], "enabled": false, "config": { "url": "https://example.com" } }),
            json!({ "events": ["PostRegister"], "config": { "url": "ftp://example.com" } }),
            json!({ "events": ["PostRegister"] }),
        ];

        for body in bodies {
            let mut hooks = MockHooksService::new();

            hooks.expect_create_hook().never();

            let res = TestClient::post("http://example.com/hooks")
                .json(&body)
                .send(&make_service(hooks))
                .await;

            assert_eq!(
                res.status_code,
                Some(StatusCode::BAD_REQUEST),
                "body {body} should be rejected"
            );
        }

        Ok(())
    }
}
