//! Hooks service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        hooks::{
            data::{HookChanges, HookInsert, HookUpdate, NewHook, UNNAMED_HOOK},
            errors::HooksServiceError,
            events::EventSubscription,
            records::{HookRecord, HookUuid},
            repository::PgHooksRepository,
            signing::SigningKey,
        },
        tenants::records::TenantUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgHooksService {
    db: Db,
    repository: PgHooksRepository,
}

impl PgHooksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgHooksRepository::new(),
        }
    }
}

/// Validate a create request and resolve it into the values to persist.
fn prepare_insert(hook: NewHook) -> Result<HookInsert, HooksServiceError> {
    let subscription =
        EventSubscription::resolve(hook.event, hook.events)?.ok_or(HooksServiceError::MissingEvents)?;

    let name = hook
        .name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNNAMED_HOOK.to_string());

    Ok(HookInsert {
        name,
        event: subscription.legacy_event(),
        events: subscription.events(),
        config: hook.config,
    })
}

/// Checks on an update that need no stored state.
fn check_update(update: &HookUpdate) -> Result<Option<EventSubscription>, HooksServiceError> {
    if update.name.as_deref().is_some_and(str::is_empty) {
        return Err(HooksServiceError::EmptyName);
    }

    Ok(EventSubscription::resolve(
        update.event,
        update.events.clone(),
    )?)
}

/// Apply a checked update on top of the stored record.
fn apply_update(
    current: HookRecord,
    update: HookUpdate,
    subscription: Option<EventSubscription>,
) -> Result<HookChanges, HooksServiceError> {
    let config = match update.config {
        Some(patch) => current.config.merge(patch)?,
        None => current.config,
    };

    let (event, events) = match subscription {
        Some(subscription) => (subscription.legacy_event(), subscription.events()),
        None => (current.event, current.events),
    };

    Ok(HookChanges {
        name: update.name.unwrap_or(current.name),
        event,
        events,
        config,
        enabled: update.enabled.unwrap_or(current.enabled),
    })
}

#[async_trait]
impl HooksService for PgHooksService {
    async fn list_hooks(&self, tenant: TenantUuid) -> Result<Vec<HookRecord>, HooksServiceError> {
        let mut tx = self.db.begin().await?;

        let hooks = self.repository.find_all_hooks(&mut tx, tenant).await?;

        tx.commit().await?;

        Ok(hooks)
    }

    async fn get_hook(
        &self,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<HookRecord, HooksServiceError> {
        let mut tx = self.db.begin().await?;

        let hook = self.repository.find_hook_by_id(&mut tx, tenant, hook).await?;

        tx.commit().await?;

        Ok(hook)
    }

    async fn create_hook(
        &self,
        tenant: TenantUuid,
        hook: NewHook,
    ) -> Result<HookRecord, HooksServiceError> {
        let insert = prepare_insert(hook)?;
        let uuid = HookUuid::new();
        let signing_key = SigningKey::generate();

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .insert_hook(&mut tx, tenant, uuid, insert, &signing_key)
            .await?;

        tx.commit().await?;

        info!(tenant_uuid = %tenant, hook_uuid = %created.uuid, "created hook");

        Ok(created)
    }

    async fn rotate_signing_key(
        &self,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<HookRecord, HooksServiceError> {
        let mut tx = self.db.begin().await?;

        let current = self
            .repository
            .find_hook_by_id_for_update(&mut tx, tenant, hook)
            .await?;

        let signing_key = SigningKey::rotate_from(&current.signing_key);

        let rotated = self
            .repository
            .update_signing_key(&mut tx, tenant, hook, &signing_key)
            .await?;

        tx.commit().await?;

        info!(tenant_uuid = %tenant, hook_uuid = %hook, "rotated hook signing key");

        Ok(rotated)
    }

    async fn update_hook(
        &self,
        tenant: TenantUuid,
        hook: HookUuid,
        update: HookUpdate,
    ) -> Result<HookRecord, HooksServiceError> {
        let subscription = check_update(&update)?;

        let mut tx = self.db.begin().await?;

        let current = self
            .repository
            .find_hook_by_id_for_update(&mut tx, tenant, hook)
            .await?;

        let changes = apply_update(current, update, subscription)?;

        debug!(hook_uuid = %hook, enabled = changes.enabled, "applying hook update");

        let updated = self
            .repository
            .update_hook_by_id(&mut tx, tenant, hook, changes)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_hook(&self, tenant: TenantUuid, hook: HookUuid) -> Result<(), HooksServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self
            .repository
            .delete_hook_by_id(&mut tx, tenant, hook)
            .await?;

        if rows_affected == 0 {
            return Err(HooksServiceError::NotFound);
        }

        tx.commit().await?;

        info!(tenant_uuid = %tenant, hook_uuid = %hook, "deleted hook");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait HooksService: Send + Sync {
    /// Retrieves all hooks owned by the tenant.
    async fn list_hooks(&self, tenant: TenantUuid) -> Result<Vec<HookRecord>, HooksServiceError>;

    /// Retrieve a single hook.
    async fn get_hook(
        &self,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<HookRecord, HooksServiceError>;

    /// Creates a hook with a generated id and signing key.
    async fn create_hook(
        &self,
        tenant: TenantUuid,
        hook: NewHook,
    ) -> Result<HookRecord, HooksServiceError>;

    /// Replaces the hook's signing key, leaving every other field alone.
    async fn rotate_signing_key(
        &self,
        tenant: TenantUuid,
        hook: HookUuid,
    ) -> Result<HookRecord, HooksServiceError>;

    /// Applies a partial update; `config` is merged into the stored config.
    async fn update_hook(
        &self,
        tenant: TenantUuid,
        hook: HookUuid,
        update: HookUpdate,
    ) -> Result<HookRecord, HooksServiceError>;

    /// Deletes the hook.
    async fn delete_hook(&self, tenant: TenantUuid, hook: HookUuid) -> Result<(), HooksServiceError>;
}
