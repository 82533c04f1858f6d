//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenMetadata, AuthServiceError, IssuedApiToken, NewApiToken, format_api_token,
        generate_api_token_secret, hash_api_token, parse_api_token,
        repository::PgAuthRepository,
    },
    domain::tenants::records::TenantUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token for the given tenant.
    ///
    /// Only the hash is stored; the raw token is returned once.
    ///
    /// # Errors
    ///
    /// Returns an error if database insertion fails.
    pub async fn issue_api_token(
        &self,
        tenant_uuid: TenantUuid,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let secret = generate_api_token_secret();
        let token = format_api_token(&secret);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: Uuid::now_v7(),
                tenant_uuid,
                token_hash: hash_api_token(&secret),
            })
            .await?;

        info!(%tenant_uuid, token_uuid = %metadata.uuid, "issued api token");

        Ok(IssuedApiToken { token, metadata })
    }

    /// List all tokens for the given tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        tenant_uuid: TenantUuid,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self
            .repository
            .list_api_tokens_by_tenant(tenant_uuid)
            .await?)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_api_token(token_uuid).await?;

        Ok(revoked.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<TenantUuid, AuthServiceError> {
        let secret = parse_api_token(bearer_token).map_err(|_invalid_token| AuthServiceError::NotFound)?;

        let token = self
            .repository
            .find_active_api_token_by_hash(&hash_api_token(&secret))
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        // Best-effort metadata update; auth success should not depend on this write.
        if let Err(error) = self.repository.touch_api_token_last_used(token.uuid).await {
            debug!(%error, token_uuid = %token.uuid, "failed to record token use");
        }

        Ok(token.tenant_uuid)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the tenant owning an active bearer token.
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<TenantUuid, AuthServiceError>;
}
