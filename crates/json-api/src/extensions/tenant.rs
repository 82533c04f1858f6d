//! Authenticated tenant stored in the request depot.

use salvo::prelude::{Depot, StatusError};

use beacon_app::domain::tenants::records::TenantUuid;

const TENANT_UUID_DEPOT_KEY: &str = "tenant_uuid";

/// Read and write the tenant resolved by the auth middleware.
pub(crate) trait TenantDepotExt {
    fn insert_tenant_uuid(&mut self, tenant: TenantUuid);

    fn tenant_uuid_or_401(&self) -> Result<TenantUuid, StatusError>;
}

impl TenantDepotExt for Depot {
    fn insert_tenant_uuid(&mut self, tenant: TenantUuid) {
        self.insert(TENANT_UUID_DEPOT_KEY, tenant);
    }

    fn tenant_uuid_or_401(&self) -> Result<TenantUuid, StatusError> {
        self.get::<TenantUuid>(TENANT_UUID_DEPOT_KEY)
            .copied()
            .map_err(|_missing| StatusError::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn missing_tenant_is_unauthorized() {
        let depot = Depot::new();

        let result = depot.tenant_uuid_or_401();

        assert!(
            result.is_err_and(|error| error.code == StatusCode::UNAUTHORIZED),
            "expected 401 when no tenant was stored"
        );
    }

    #[test]
    fn stored_tenant_is_returned() {
        let tenant = TenantUuid::from_uuid(Uuid::nil());
        let mut depot = Depot::new();

        depot.insert_tenant_uuid(tenant);

        assert_eq!(depot.tenant_uuid_or_401().ok(), Some(tenant), "stored tenant");
    }
}
