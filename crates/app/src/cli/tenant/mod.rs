//! Tenant administration.

use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct TenantCommand {
    #[command(subcommand)]
    command: TenantSubcommand,
}

#[derive(Debug, Subcommand)]
enum TenantSubcommand {
    /// Register a tenant that can own hooks and API tokens
    Create(create::CreateTenantArgs),
}

pub(crate) async fn run(command: TenantCommand) -> Result<(), String> {
    let TenantSubcommand::Create(args) = command.command;

    create::run(args).await
}
