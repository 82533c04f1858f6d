use beacon_app::{
    auth::PgAuthService,
    domain::tenants::{PgTenantsService, TenantsService, records::TenantUuid},
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Tenant UUID that should own the token
    #[arg(long)]
    tenant_uuid: Uuid,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let tenant = PgTenantsService::new(pool.clone())
        .get_tenant(TenantUuid::from_uuid(args.tenant_uuid))
        .await
        .map_err(|error| format!("tenant {}: {error}", args.tenant_uuid))?;

    let service = PgAuthService::new(pool);

    let issued = service
        .issue_api_token(tenant.uuid)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("tenant: {} ({})", tenant.name, issued.metadata.tenant_uuid);
    println!("token_created_at: {}", issued.metadata.created_at);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
