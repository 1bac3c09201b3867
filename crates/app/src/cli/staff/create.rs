use clap::Args;
use frontdash_app::{
    database::{self, Db},
    domain::staff::{
        PgStaffService, StaffService,
        data::NewStaff,
        records::{StaffRole, StaffUuid},
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateStaffArgs {
    /// Operator display name
    #[arg(long)]
    name: String,

    /// Operator role: support, manager, or admin
    #[arg(long)]
    role: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Optional staff UUID; generated when omitted
    #[arg(long)]
    staff_uuid: Option<Uuid>,
}

pub(crate) async fn run(args: CreateStaffArgs) -> Result<(), String> {
    let role: StaffRole = args
        .role
        .parse()
        .map_err(|error| format!("invalid role: {error}"))?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgStaffService::new(Db::new(pool));
    let staff_uuid = args.staff_uuid.map_or_else(StaffUuid::new, StaffUuid::from_uuid);

    let staff = service
        .create_staff(NewStaff {
            uuid: staff_uuid,
            name: args.name,
            role,
        })
        .await
        .map_err(|error| format!("failed to create staff member: {error}"))?;

    println!("staff_uuid: {}", staff.uuid);
    println!("staff_name: {}", staff.name);
    println!("staff_username: {}", staff.username);
    println!("staff_role: {}", staff.role);

    Ok(())
}
