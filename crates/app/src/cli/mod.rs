use clap::{Parser, Subcommand};

mod staff;
mod token;

#[derive(Debug, Parser)]
#[command(name = "frontdash-app", about = "FrontDash back-office CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Staff(staff::StaffCommand),
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Staff(command) => staff::run(command).await,
            Commands::Token(command) => token::run(command).await,
        }
    }
}
