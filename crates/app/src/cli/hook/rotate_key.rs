use beacon_app::{
    database::Db,
    domain::{
        hooks::{HooksService, PgHooksService, records::HookUuid},
        tenants::records::TenantUuid,
    },
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RotateKeyArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Tenant UUID that owns the hook
    #[arg(long)]
    tenant_uuid: Uuid,

    /// Hook UUID whose signing key should be replaced
    #[arg(long)]
    hook_uuid: Uuid,
}

pub(crate) async fn run(args: RotateKeyArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let hook = PgHooksService::new(Db::new(pool))
        .rotate_signing_key(
            TenantUuid::from_uuid(args.tenant_uuid),
            HookUuid::from_uuid(args.hook_uuid),
        )
        .await
        .map_err(|error| format!("failed to rotate signing key: {error}"))?;

    println!("hook_uuid: {}", hook.uuid);
    println!("signing_key: {}", hook.signing_key.expose());

    Ok(())
}
