//! Rotate Hook Signing Key Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    hooks::{errors::into_status_error, responses::HookResponse},
    state::State,
};

/// Rotate Signing Key Handler
///
/// Issues a new signing key; every other field is left untouched.
#[endpoint(
    tags("hooks"),
    summary = "Rotate Hook Signing Key",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Signing key rotated"),
        (status_code = StatusCode::NOT_FOUND, description = "Hook not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "hooks.rotate_signing_key",
    skip(hook, depot),
    fields(tenant_uuid = tracing::field::Empty, hook_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    hook: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<HookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;
    let hook = hook.into_inner();

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));
    span.record("hook_uuid", tracing::field::display(hook));

    let hook = state
        .hooks
        .rotate_signing_key(tenant, hook.into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(hook.into()))
}
