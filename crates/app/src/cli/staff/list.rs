use clap::Args;
use frontdash_app::{
    database::{self, Db},
    domain::staff::{PgStaffService, StaffService},
};

#[derive(Debug, Args)]
pub(crate) struct ListStaffArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListStaffArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgStaffService::new(Db::new(pool));

    let staff = service
        .list_staff()
        .await
        .map_err(|error| format!("failed to list staff: {error}"))?;

    for member in staff {
        println!(
            "{} {} ({}) {}",
            member.uuid, member.username, member.role, member.name
        );
    }

    Ok(())
}
