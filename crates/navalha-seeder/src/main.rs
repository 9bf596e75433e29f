//! Navalha Seeder CLI
//!
//! Wipes and repopulates the booking database with the demo dataset.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use navalha_persistence::{PgConfig, connect_pool};

#[derive(Parser, Debug)]
#[command(name = "navalha-seed")]
#[command(about = "Wipe and seed the Navalha booking database")]
struct Args {
    /// Postgres connection string; falls back to DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,

    /// Skip the destructive wipe and only insert rows
    #[arg(long)]
    keep_existing: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("navalha_seeder=info".parse()?),
        )
        .init();

    // .env.local wins over .env; neither overrides the real environment.
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let database_url = match args.database_url {
        Some(url) => url,
        None => std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?,
    };

    let pool = connect_pool(&PgConfig {
        url: database_url,
        max_connections: 5,
    })
    .await?;

    info!("Running migrations");
    sqlx::migrate!("../../migrations").run(&pool).await?;

    if args.keep_existing {
        info!("Keeping existing rows");
    } else {
        info!("Wiping existing data");
        navalha_seeder::wipe(&pool).await?;
    }

    let summary = navalha_seeder::seed(&pool).await?;

    info!(
        users = summary.users,
        services = summary.services,
        employees = summary.employees,
        employee_services = summary.employee_services,
        schedules = summary.schedules,
        products = summary.products,
        appointments = summary.appointments,
        appointment_products = summary.appointment_products,
        accounts = summary.accounts,
        showcase_photos = summary.showcase_photos,
        "Seed complete"
    );
    info!("Demo credentials: admin +5511977777001 / senha123");

    Ok(())
}
