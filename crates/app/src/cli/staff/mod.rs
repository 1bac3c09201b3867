use clap::{Args, Subcommand};

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct StaffCommand {
    #[command(subcommand)]
    command: StaffSubcommand,
}

#[derive(Debug, Subcommand)]
enum StaffSubcommand {
    /// Create an operator account
    Create(create::CreateStaffArgs),

    /// List operator accounts
    List(list::ListStaffArgs),
}

pub(crate) async fn run(command: StaffCommand) -> Result<(), String> {
    match command.command {
        StaffSubcommand::Create(args) => create::run(args).await,
        StaffSubcommand::List(args) => list::run(args).await,
    }
}
