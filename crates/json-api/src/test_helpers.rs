//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};
use serde_json::json;
use uuid::Uuid;

use beacon_app::{
    auth::MockAuthService,
    domain::{
        hooks::{
            MockHooksService,
            config::HookConfig,
            events::{HookEvent, HookEvents},
            records::{HookRecord, HookUuid},
            signing::SigningKey,
        },
        tenants::records::TenantUuid,
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_TENANT_UUID: TenantUuid = TenantUuid::from_uuid(Uuid::nil());

pub(crate) const TEST_SIGNING_KEY: &str = "0123456789abcdefghijABCDEFGHIJkl";

#[salvo::handler]
pub(crate) async fn inject_tenant(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_tenant_uuid(TEST_TENANT_UUID);
    ctrl.call_next(req, depot, res).await;
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_hooks_mock() -> MockHooksService {
    let mut hooks = MockHooksService::new();

    hooks.expect_list_hooks().never();
    hooks.expect_get_hook().never();
    hooks.expect_create_hook().never();
    hooks.expect_rotate_signing_key().never();
    hooks.expect_update_hook().never();
    hooks.expect_delete_hook().never();

    hooks
}

pub(crate) fn state_with_hooks(hooks: MockHooksService) -> Arc<State> {
    Arc::new(State::new(Arc::new(hooks), Arc::new(strict_auth_mock())))
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(Arc::new(strict_hooks_mock()), Arc::new(auth)))
}

pub(crate) fn hooks_service(hooks: MockHooksService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_hooks(hooks)))
            .hoop(inject_tenant)
            .push(route),
    )
}

/// Stored hook subscribed to `PostRegister` and pointing at example.com.
pub(crate) fn make_hook(uuid: HookUuid) -> HookRecord {
    HookRecord {
        uuid,
        tenant_uuid: TEST_TENANT_UUID,
        name: "fooName".to_string(),
        event: None,
        events: HookEvents::single(HookEvent::PostRegister),
        config: HookConfig::try_from(json!({ "url": "https://example.com" }))
            .expect("fixture config is valid"),
        signing_key: SigningKey::from_stored(TEST_SIGNING_KEY.to_string()),
        enabled: true,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
