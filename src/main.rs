use crate::config::{Cli, Command};
use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::Context;
use astra::{Request, Server};
use clap::Parser;
use std::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod import;
mod responses;
mod router;

#[cfg(test)]
mod tests;

fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real deployments set the environment directly.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Create the database handle and make sure the schema exists
    let db = cli.database();
    init_db(&db).with_context(|| {
        format!("initializing database at {}", db.path().display())
    })?;

    let outcome = match cli.command() {
        Command::Serve => serve(&cli, db.clone()),
        Command::Seed => {
            let inserted = import::seed::seed(&db).context("seeding database")?;
            println!("Successfully inserted {inserted} properties");
            Ok(())
        }
        Command::Import { file, replace } => {
            let rows = import::read_rows(&file)?;
            let report = import::import_rows(&db, &rows, replace)
                .with_context(|| format!("importing {}", file.display()))?;

            println!(
                "Imported {} properties, skipped {} rows",
                report.inserted,
                report.skipped.len()
            );
            for (row, reason) in &report.skipped {
                println!("  row {row}: {reason}");
            }
            Ok(())
        }
    };

    db.close();
    outcome
}

fn serve(cli: &Cli, db: Database) -> anyhow::Result<()> {
    info!(addr = %cli.bind, workers = cli.workers, "starting StayHunt API");

    let server = Server::bind(&cli.bind).max_workers(cli.workers);

    server
        .serve(move |req: Request, _info| {
            let started = Instant::now();
            let method = req.method().clone();
            let path = req.uri().path().to_string();

            let resp = match handle(req, &db) {
                Ok(resp) => resp,
                Err(err) => {
                    if err.status() >= 500 {
                        error!(%method, %path, error = %err, "request failed");
                    }
                    error_to_response(err)
                }
            };

            info!(
                %method,
                %path,
                status = resp.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request"
            );
            resp
        })
        .context("server ended with error")?;

    info!("server shut down cleanly");
    Ok(())
}
