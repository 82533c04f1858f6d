//! Hook Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    hooks::{errors::into_status_error, responses::HookResponse},
    state::State,
};

/// Hook Index Handler
///
/// Returns every hook owned by the tenant, oldest first.
#[endpoint(
    tags("hooks"),
    summary = "List Hooks",
    security(("bearer_auth" = []))
)]
#[tracing::instrument(
    name = "hooks.index",
    skip(depot),
    fields(tenant_uuid = tracing::field::Empty, hooks_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<HookResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));

    let hooks = state
        .hooks
        .list_hooks(tenant)
        .await
        .map_err(into_status_error)?;

    span.record("hooks_count", tracing::field::display(hooks.len()));

    Ok(Json(hooks.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use beacon_app::domain::hooks::{MockHooksService, records::HookUuid};

    use crate::test_helpers::{TEST_TENANT_UUID, hooks_service, make_hook};

    use super::*;

    fn make_service(hooks: MockHooksService) -> Service {
        hooks_service(hooks, Router::with_path("hooks").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut hooks = MockHooksService::new();

        hooks
            .expect_list_hooks()
            .once()
            .withf(|tenant| *tenant == TEST_TENANT_UUID)
            .return_once(|_| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/hooks")
            .send(&make_service(hooks))
            .await;

        let body: Vec<HookResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert!(body.is_empty(), "no hooks expected");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_preserves_service_order() -> TestResult {
        let first = HookUuid::new();
        let second = HookUuid::new();

        let mut hooks = MockHooksService::new();

        hooks
            .expect_list_hooks()
            .once()
            .return_once(move |_| Ok(vec![make_hook(first), make_hook(second)]));

        let body: Vec<HookResponse> = TestClient::get("http://example.com/hooks")
            .send(&make_service(hooks))
            .await
            .take_json()
            .await?;

        let ids: Vec<_> = body.iter().map(|hook| hook.id).collect();

        assert_eq!(ids, vec![first.into_uuid(), second.into_uuid()], "order");

        Ok(())
    }
}
