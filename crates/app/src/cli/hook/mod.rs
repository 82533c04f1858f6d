//! Hook administration.

use clap::{Args, Subcommand};

mod list;
mod rotate_key;

#[derive(Debug, Args)]
pub(crate) struct HookCommand {
    #[command(subcommand)]
    command: HookSubcommand,
}

#[derive(Debug, Subcommand)]
enum HookSubcommand {
    /// List a tenant's hooks without their signing keys
    List(list::ListHooksArgs),

    /// Issue a new signing key for a hook
    RotateKey(rotate_key::RotateKeyArgs),
}

pub(crate) async fn run(command: HookCommand) -> Result<(), String> {
    match command.command {
        HookSubcommand::List(args) => list::run(args).await,
        HookSubcommand::RotateKey(args) => rotate_key::run(args).await,
    }
}
