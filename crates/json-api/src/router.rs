//! App Router

use salvo::Router;

use crate::{auth, hooks};

/// Authenticated API routes.
pub(crate) fn app_router() -> Router {
    Router::new().hoop(auth::middleware::handler).push(
        Router::with_path("hooks")
            .get(hooks::index::handler)
            .post(hooks::create::handler)
            .push(
                Router::with_path("{hook}")
                    .get(hooks::get::handler)
                    .patch(hooks::update::handler)
                    .delete(hooks::delete::handler)
                    .push(
                        Router::with_path("signing-key").post(hooks::rotate_signing_key::handler),
                    ),
            ),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{affix_state::inject, prelude::*, test::TestClient};
    use testresult::TestResult;

    use beacon_app::{
        auth::{AuthServiceError, MockAuthService},
        domain::hooks::{MockHooksService, records::HookUuid},
    };

    use crate::{
        state::State,
        test_helpers::{TEST_TENANT_UUID, state_with_auth},
    };

    use super::*;

    fn make_service(auth: MockAuthService) -> Service {
        Service::new(
            Router::new()
                .hoop(inject(state_with_auth(auth)))
                .push(app_router()),
        )
    }

    #[tokio::test]
    async fn test_hook_routes_require_a_token() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer().never();

        let service = make_service(auth);
        let hook = HookUuid::new();

        for res in [
            TestClient::get("http://example.com/hooks").send(&service).await,
            TestClient::get(format!("http://example.com/hooks/{hook}"))
                .send(&service)
                .await,
            TestClient::post(format!("http://example.com/hooks/{hook}/signing-key"))
                .send(&service)
                .await,
            TestClient::delete(format!("http://example.com/hooks/{hook}"))
                .send(&service)
                .await,
        ] {
            assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED), "status");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_is_rejected_before_handlers() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "bk_unknown")
            .return_once(|_| Err(AuthServiceError::NotFound));

        let res = TestClient::get("http://example.com/hooks")
            .add_header("authorization", "Bearer bk_unknown", true)
            .send(&make_service(auth))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED), "status");

        Ok(())
    }

    #[tokio::test]
    async fn test_authenticated_request_reaches_hooks_service() -> TestResult {
        let mut auth = MockAuthService::new();

        auth.expect_authenticate_bearer()
            .once()
            .withf(|token| token == "bk_valid")
            .return_once(|_| Ok(TEST_TENANT_UUID));

        let mut hooks = MockHooksService::new();

        hooks
            .expect_list_hooks()
            .once()
            .withf(|tenant| *tenant == TEST_TENANT_UUID)
            .return_once(|_| Ok(vec![]));

        let state = Arc::new(State::new(Arc::new(hooks), Arc::new(auth)));
        let service = Service::new(Router::new().hoop(inject(state)).push(app_router()));

        let res = TestClient::get("http://example.com/hooks")
            .add_header("authorization", "Bearer bk_valid", true)
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");

        Ok(())
    }
}
