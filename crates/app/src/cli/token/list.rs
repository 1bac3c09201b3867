use clap::Args;
use frontdash_app::{
    auth::{PgAuthService, TokenHasher},
    database,
    domain::staff::records::StaffUuid,
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// Staff UUID whose tokens to list
    #[arg(long)]
    staff_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    // Listing never digests anything; the key is not needed here.
    let service = PgAuthService::new(pool, TokenHasher::new(Vec::new()));

    let tokens = service
        .list_access_tokens(StaffUuid::from_uuid(args.staff_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    for token in tokens {
        let state = match (token.revoked_at, token.expires_at) {
            (Some(_), _) => "revoked",
            (None, Some(_)) => "expiring",
            (None, None) => "active",
        };

        println!("{} v{} {} created {}", token.uuid, token.version.as_i16(), state, token.created_at);
    }

    Ok(())
}
