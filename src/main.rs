use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::db::guarantees::seed_if_empty;
use crate::commands::{run, Command, USAGE};
use chrono::Utc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod db;
mod domain;
mod errors;
mod format;
mod snapshot;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = match Command::parse(&args) {
        Ok(cmd) => cmd,
        Err(e) => {
            error!("{e}");
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let cfg = Config::load();

    // 1️⃣ Create the database handle
    let db = Database::new(cfg.db_path.clone());

    // 2️⃣ Initialize database from schema.sql
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ First run gets the sample guarantees
    match seed_if_empty(&db) {
        Ok(0) => {}
        Ok(n) => info!("Seeded {n} sample guarantees"),
        Err(e) => {
            error!("Seeding failed: {e}");
            std::process::exit(1);
        }
    }

    // 4️⃣ Apply the command, then render every screen and the export
    let now = Utc::now().naive_utc();
    match run(cmd, &cfg, &db, now) {
        Ok(summary) => {
            for path in &summary.files {
                info!("Wrote {}", path.display());
            }
            info!(
                "{} of {} guarantees shown, {} reminders",
                summary.shown_in_list, summary.total_records, summary.reminders
            );
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
