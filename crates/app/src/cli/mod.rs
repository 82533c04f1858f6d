use clap::{Parser, Subcommand};

mod db;
mod hook;
mod tenant;
mod token;

#[derive(Debug, Parser)]
#[command(name = "beacon-app", about = "Beacon operator CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Tenant(tenant::TenantCommand),
    Token(token::TokenCommand),
    Hook(hook::HookCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Tenant(command) => tenant::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Hook(command) => hook::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

async fn connect(database_url: &str) -> Result<sqlx::PgPool, String> {
    beacon_app::database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))
}
