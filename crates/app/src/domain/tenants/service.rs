//! Tenants service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::domain::tenants::{
    data::NewTenant,
    errors::TenantsServiceError,
    records::{TenantRecord, TenantUuid},
    repository::PgTenantsRepository,
};

#[derive(Debug, Clone)]
pub struct PgTenantsService {
    repository: PgTenantsRepository,
}

impl PgTenantsService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgTenantsRepository::new(pool),
        }
    }
}

#[async_trait]
impl TenantsService for PgTenantsService {
    async fn create_tenant(&self, tenant: NewTenant) -> Result<TenantRecord, TenantsServiceError> {
        if tenant.name.trim().is_empty() {
            return Err(TenantsServiceError::InvalidData);
        }

        let created = self.repository.create_tenant(tenant).await?;

        info!(tenant_uuid = %created.uuid, "created tenant");

        Ok(created)
    }

    async fn get_tenant(&self, tenant: TenantUuid) -> Result<TenantRecord, TenantsServiceError> {
        Ok(self.repository.find_tenant_by_id(tenant).await?)
    }
}

#[automock]
#[async_trait]
pub trait TenantsService: Send + Sync {
    /// Creates a new tenant.
    async fn create_tenant(&self, tenant: NewTenant) -> Result<TenantRecord, TenantsServiceError>;

    /// Retrieve an active (not deleted) tenant.
    async fn get_tenant(&self, tenant: TenantUuid) -> Result<TenantRecord, TenantsServiceError>;
}
