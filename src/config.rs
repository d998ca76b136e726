// src/config.rs

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::db::connection::Database;

#[derive(Parser, Debug)]
#[command(author, version, about = "StayHunt property listing service", long_about = None)]
pub struct Cli {
    /// SQLite file holding the property catalogue
    #[arg(
        long,
        global = true,
        env = "STAYHUNT_DATABASE_PATH",
        default_value = "stayhunt.sqlite3"
    )]
    pub database_path: PathBuf,

    /// How long a statement may wait on a locked database before failing
    #[arg(
        long,
        global = true,
        env = "STAYHUNT_BUSY_TIMEOUT_MS",
        default_value_t = 5000
    )]
    pub busy_timeout_ms: u64,

    /// Address the HTTP API listens on
    #[arg(long, global = true, env = "STAYHUNT_BIND", default_value = "0.0.0.0:8001")]
    pub bind: SocketAddr,

    /// Request worker threads
    #[arg(long, global = true, env = "STAYHUNT_WORKERS", default_value_t = 8)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Replace the catalogue with the built-in sample listings
    Seed,
    /// Load listings from a sheet exported as a JSON array of rows
    Import {
        file: PathBuf,
        /// Delete existing listings first
        #[arg(long)]
        replace: bool,
    },
}

impl Cli {
    pub fn database(&self) -> Database {
        Database::new(&self.database_path)
            .with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
    }

    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}
