use beacon_app::{
    database::Db,
    domain::{
        hooks::{HooksService, PgHooksService},
        tenants::records::TenantUuid,
    },
};
use clap::Args;
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct ListHooksArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Tenant UUID whose hooks should be listed
    #[arg(long)]
    tenant_uuid: Uuid,
}

pub(crate) async fn run(args: ListHooksArgs) -> Result<(), String> {
    let pool = crate::cli::connect(&args.database_url).await?;

    let hooks = PgHooksService::new(Db::new(pool))
        .list_hooks(TenantUuid::from_uuid(args.tenant_uuid))
        .await
        .map_err(|error| format!("failed to list hooks: {error}"))?;

    if hooks.is_empty() {
        println!("no hooks found for tenant {}", args.tenant_uuid);
        return Ok(());
    }

    for hook in hooks {
        let events: Vec<&str> = hook.events.iter().map(|event| event.as_str()).collect();

        println!("hook_uuid: {}", hook.uuid);
        println!("name: {}", hook.name);
        println!("events: {}", events.join(", "));
        println!("url: {}", hook.config.url());
        println!("enabled: {}", hook.enabled);
        println!("updated_at: {}", hook.updated_at);
        println!();
    }

    Ok(())
}
