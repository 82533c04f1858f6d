//! Get Hook Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    hooks::{errors::into_status_error, responses::HookResponse},
    state::State,
};

/// Get Hook Handler
#[endpoint(
    tags("hooks"),
    summary = "Get Hook",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Hook found"),
        (status_code = StatusCode::NOT_FOUND, description = "Hook not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    hook: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<HookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let hook = state
        .hooks
        .get_hook(tenant, hook.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(hook.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use beacon_app::domain::hooks::{HooksServiceError, MockHooksService, records::HookUuid};

    use crate::test_helpers::{TEST_SIGNING_KEY, TEST_TENANT_UUID, hooks_service, make_hook};

    use super::*;

    fn make_service(hooks: MockHooksService) -> Service {
        hooks_service(hooks, Router::with_path("hooks/{hook}").get(handler))
    }

    #[tokio::test]
    async fn test_get_hook_returns_camel_case_body() -> TestResult {
        let uuid = HookUuid::new();

        let mut hooks = MockHooksService::new();

        hooks
            .expect_get_hook()
            .once()
            .withf(move |tenant, hook| *tenant == TEST_TENANT_UUID && *hook == uuid)
            .return_once(move |_, _| Ok(make_hook(uuid)));

        let mut res = TestClient::get(format!("http://example.com/hooks/{uuid}"))
            .send(&make_service(hooks))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(body["id"], uuid.to_string(), "id");
        assert_eq!(body["signingKey"], TEST_SIGNING_KEY, "signing key");
        assert_eq!(body["events"], serde_json::json!(["PostRegister"]), "events");
        assert_eq!(body["config"]["url"], "https://example.com", "config");
        assert_eq!(body["enabled"], true, "enabled");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_hook_returns_404() -> TestResult {
        let mut hooks = MockHooksService::new();

        hooks
            .expect_get_hook()
            .once()
            .return_once(|_, _| Err(HooksServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/hooks/{}", HookUuid::new()))
            .send(&make_service(hooks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND), "status");

        Ok(())
    }

    #[tokio::test]
    async fn test_get_hook_invalid_uuid_returns_400() -> TestResult {
        let mut hooks = MockHooksService::new();

        hooks.expect_get_hook().never();

        let res = TestClient::get("http://example.com/hooks/123")
            .send(&make_service(hooks))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");

        Ok(())
    }
}
