use beacon_app::domain::tenants::{
    PgTenantsService, TenantsService, data::NewTenant, records::TenantUuid,
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateTenantArgs {
    /// Tenant display name
    #[arg(long)]
    name: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional tenant UUID; generated when omitted
    #[arg(long)]
    tenant_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateTenantArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let service = PgTenantsService::new(pool);
    let tenant_uuid = args
        .tenant_uuid
        .map_or_else(TenantUuid::new, TenantUuid::from_uuid);

    let tenant = service
        .create_tenant(NewTenant {
            uuid: tenant_uuid,
            name: args.name,
        })
        .await
        .map_err(|error| format!("failed to create tenant: {error}"))?;

    println!("tenant_uuid: {}", tenant.uuid);
    println!("tenant_name: {}", tenant.name);

    Ok(())
}
