//! Update Hook Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use beacon_app::domain::hooks::data::HookUpdate;

use crate::{
    extensions::*,
    hooks::{errors::into_status_error, requests::UpdateHookRequest, responses::HookResponse},
    state::State,
};

/// Update Hook Handler
///
/// Applies a partial update. `config` keys are merged over the stored config
/// and a `signingKey` inside it is ignored.
#[endpoint(
    tags("hooks"),
    summary = "Update Hook",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Hook updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Hook not found"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Conflicting events"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "hooks.update",
    skip(hook, json, depot),
    fields(
        tenant_uuid = tracing::field::Empty,
        hook_uuid = tracing::field::Empty,
        config_keys = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    hook: PathParam<Uuid>,
    json: JsonBody<UpdateHookRequest>,
    depot: &mut Depot,
) -> Result<Json<HookResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let tenant = depot.tenant_uuid_or_401()?;
    let request = json.into_inner();
    let hook = hook.into_inner();

    let span = tracing::Span::current();

    span.record("tenant_uuid", tracing::field::display(tenant));
    span.record("hook_uuid", tracing::field::display(hook));
    span.record(
        "config_keys",
        tracing::field::display(request.config.as_ref().map_or(0, |config| config.len())),
    );

    let update = HookUpdate::try_from(request).map_err(into_status_error)?;

    let hook = state
        .hooks
        .update_hook(tenant, hook.into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(hook.into()))
}
