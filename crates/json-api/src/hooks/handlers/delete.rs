//! Delete Hook Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, hooks::errors::into_status_error, state::State};

/// Delete Hook Handler
#[endpoint(
    tags("hooks"),
    summary = "Delete Hook",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Hook deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Hook not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "hooks.delete",
    skip(hook, depot),
    fields(tenant_uuid = tracing::field::Empty, hook_uuid = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    hook: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;
    let hook = hook.into_inner();

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));
    span.record("hook_uuid", tracing::field::display(hook));

    state
        .hooks
        .delete_hook(tenant, hook.into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
