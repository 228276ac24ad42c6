/// seed_clinic populates the database with deterministic sample data.
/// Required environment variables:
/// - DATABASE_URL
use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use clinic_service::entrypoint::Entrypoint;
use clinic_service::seed;
use rand::{SeedableRng, rngs::StdRng};
use sqlx::postgres::PgPoolOptions;

#[derive(clap::Parser, Debug)]
struct Args {
    /// Delete existing clinic data before seeding
    #[arg(long)]
    flush: bool,

    /// Seed for the deterministic sample generator
    #[arg(long, default_value_t = 123)]
    seed: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Entrypoint::default().init();

    let args = Args::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL not set")?;
    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("could not connect to db")?;

    clinic_db_client::run_migrations(&db).await?;

    if args.flush {
        println!("Deleting existing data...");
        seed::flush(&db).await?;
        println!("Deleted existing data.");
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let plan = seed::plan::generate_plan(&mut rng, Utc::now());
    let summary = seed::apply_plan(&db, &mut rng, plan).await?;

    summary.print();

    Ok(())
}
