//! Create the initial staff account if it does not exist yet.
//!
//! Reads the same `DB_*` / `DATABASE_URL` variables as the server plus the
//! `SEED_*` overrides described on [`SeedConfig`].

use anyhow::{anyhow, Context};
use staffdesk_api::auth::password::hash_password;
use staffdesk_api::config::{db_config_from_env, SeedConfig};
use staffdesk_api::telemetry;
use staffdesk_db::models::staff::CreateStaff;
use staffdesk_db::repositories::StaffRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init("seed_admin=info,staffdesk_db=info");

    let db = db_config_from_env().context("Invalid database configuration")?;
    let seed = SeedConfig::from_env().context("Invalid seed configuration")?;

    let pool = staffdesk_db::create_pool(&db)
        .await
        .context("Failed to connect to database")?;

    if StaffRepo::find_by_username(&pool, &seed.username)
        .await?
        .is_some()
    {
        tracing::info!(username = %seed.username, "Staff user already exists, nothing to do");
        return Ok(());
    }

    let password_hash =
        hash_password(&seed.password).map_err(|e| anyhow!("Password hashing failed: {e}"))?;

    let staff = StaffRepo::create(
        &pool,
        &CreateStaff {
            username: seed.username,
            password_hash,
            name: seed.name,
            role: seed.role,
        },
    )
    .await
    .context("Failed to insert staff user")?;

    tracing::info!(
        id = staff.id,
        username = %staff.username,
        role = %staff.role,
        "Created staff user"
    );

    pool.close().await;
    Ok(())
}
