//! Hooks Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use serde_json::{Map, Value};
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as, types::Json};

use crate::domain::{
    hooks::{
        config::HookConfig,
        data::{HookChanges, HookInsert},
        events::{HookEvent, HookEvents},
        records::{HookRecord, HookUuid},
        signing::SigningKey,
    },
    tenants::records::TenantUuid,
};

const FIND_ALL_HOOKS_SQL: &str = include_str!("sql/find_all_hooks.sql");
const FIND_HOOK_BY_ID_SQL: &str = include_str!("sql/find_hook_by_id.sql");
const FIND_HOOK_BY_ID_FOR_UPDATE_SQL: &str = include_str!("sql/find_hook_by_id_for_update.sql");
const INSERT_HOOK_SQL: &str = include_str!("sql/insert_hook.sql");
const UPDATE_HOOK_BY_ID_SQL: &str = include_str!("sql/update_hook_by_id.sql");
const UPDATE_SIGNING_KEY_SQL: &str = include_str!("sql/update_signing_key.sql");
const DELETE_HOOK_BY_ID_SQL: &str = include_str!("sql/delete_hook_by_id.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgHooksRepository;

impl PgHooksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_all_hooks(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
    ) -> Result<Vec<HookRecord>, sqlx::Error> {
        query_as::<Postgres, HookRecord>(FIND_ALL_HOOKS_SQL)
            .bind(tenant.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn find_hook_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<HookRecord, sqlx::Error> {
        query_as::<Postgres, HookRecord>(FIND_HOOK_BY_ID_SQL)
            .bind(tenant.into_uuid())
            .bind(hook.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    /// Same as [`Self::find_hook_by_id`] but locks the row until the transaction ends.
    pub(crate) async fn find_hook_by_id_for_update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<HookRecord, sqlx::Error> {
        query_as::<Postgres, HookRecord>(FIND_HOOK_BY_ID_FOR_UPDATE_SQL)
            .bind(tenant.into_uuid())
            .bind(hook.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn insert_hook(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        hook: HookUuid,
        insert: HookInsert,
        signing_key: &SigningKey,
    ) -> Result<HookRecord, sqlx::Error> {
        query_as::<Postgres, HookRecord>(INSERT_HOOK_SQL)
            .bind(hook.into_uuid())
            .bind(tenant.into_uuid())
            .bind(insert.name)
            .bind(insert.event.map(HookEvent::as_str))
            .bind(event_names(&insert.events))
            .bind(encode_config(&insert.config)?)
            .bind(signing_key.expose())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_hook_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        hook: HookUuid,
        changes: HookChanges,
    ) -> Result<HookRecord, sqlx::Error> {
        query_as::<Postgres, HookRecord>(UPDATE_HOOK_BY_ID_SQL)
            .bind(tenant.into_uuid())
            .bind(hook.into_uuid())
            .bind(changes.name)
            .bind(changes.event.map(HookEvent::as_str))
            .bind(event_names(&changes.events))
            .bind(encode_config(&changes.config)?)
            .bind(changes.enabled)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn update_signing_key(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        hook: HookUuid,
        signing_key: &SigningKey,
    ) -> Result<HookRecord, sqlx::Error> {
        query_as::<Postgres, HookRecord>(UPDATE_SIGNING_KEY_SQL)
            .bind(tenant.into_uuid())
            .bind(hook.into_uuid())
            .bind(signing_key.expose())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_hook_by_id(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_HOOK_BY_ID_SQL)
            .bind(tenant.into_uuid())
            .bind(hook.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

fn event_names(events: &HookEvents) -> Vec<String> {
    events.iter().map(|event| event.as_str().to_string()).collect()
}

fn encode_config(config: &HookConfig) -> Result<String, sqlx::Error> {
    serde_json::to_string(config.as_map()).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

fn decode_error<E>(column: &str, source: E) -> sqlx::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: Box::new(source),
    }
}

impl<'r> FromRow<'r, PgRow> for HookRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let event = row
            .try_get::<Option<String>, _>("event")?
            .map(|event| event.parse::<HookEvent>())
            .transpose()
            .map_err(|e| decode_error("event", e))?;

        let events = row
            .try_get::<Vec<String>, _>("events")?
            .iter()
            .map(|event| event.parse::<HookEvent>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| decode_error("events", e))?;

        let events = HookEvents::try_from(events).map_err(|e| decode_error("events", e))?;

        let Json(config) = row.try_get::<Json<Map<String, Value>>, _>("config")?;

        let config = HookConfig::new(config).map_err(|e| decode_error("config", e))?;

        Ok(Self {
            uuid: HookUuid::from_uuid(row.try_get("uuid")?),
            tenant_uuid: TenantUuid::from_uuid(row.try_get("tenant_uuid")?),
            name: row.try_get("name")?,
            event,
            events,
            config,
            signing_key: SigningKey::from_stored(row.try_get("signing_key")?),
            enabled: row.try_get("enabled")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
