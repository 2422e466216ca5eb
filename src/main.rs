//! # Restaurant Simulation
//!
//! Runs one business day from a customer feed and prints every transition.
//!
//! ```bash
//! cargo run -- --feed customers.txt
//! RUST_LOG=debug cargo run -- --feed customers.txt --minute-ms 10
//! ```
//!
//! The process exits with 0 when every actor reached a terminal state and 1 when
//! any actor, or the session itself, failed.

use clap::Parser;
use restaurant_sim::config::SessionConfig;
use restaurant_sim::events::EventLog;
use restaurant_sim::feed::{read_customers, FeedError};
use restaurant_sim::lifecycle::{setup_tracing, RestaurantSession, SessionError, SessionReport};
use restaurant_sim::model::CustomerSpec;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info};

/// Simulates a restaurant day with customers, waiters and cooks
#[derive(Parser, Debug)]
#[command(name = "restaurant-sim")]
#[command(version)]
struct Cli {
    /// Customer feed: `id arrival party` triples ended by `-1`
    #[arg(short, long, default_value = "customers.txt")]
    feed: PathBuf,

    /// Number of waiters
    #[arg(long, default_value_t = 5)]
    waiters: usize,

    /// Number of cooks
    #[arg(long, default_value_t = 2)]
    cooks: usize,

    /// Number of tables
    #[arg(long, default_value_t = 10)]
    tables: usize,

    /// Real milliseconds per simulated minute
    #[arg(long, default_value_t = 100)]
    minute_ms: u64,
}

impl Cli {
    fn config(&self) -> SessionConfig {
        SessionConfig {
            tables: self.tables,
            waiters: self.waiters,
            cooks: self.cooks,
            minute: Duration::from_millis(self.minute_ms),
            ..SessionConfig::default()
        }
    }
}

fn load_feed(cli: &Cli) -> Result<Vec<CustomerSpec>, SessionError> {
    let file = File::open(&cli.feed).map_err(FeedError::from)?;
    Ok(read_customers(BufReader::new(file))?)
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();
    let cli = Cli::parse();

    let outcome: Result<SessionReport, SessionError> = async {
        let customers = load_feed(&cli)?;
        info!(feed = %cli.feed.display(), customers = customers.len(), "Feed loaded");
        let session = RestaurantSession::open(cli.config(), EventLog::new())?;
        session.run(customers).await
    }
    .await;

    match outcome {
        Ok(report) => {
            info!(
                served = report.served,
                left_late = report.left_late,
                left_no_table = report.left_no_table,
                exited = report.exited,
                closed_at = %report.closed_at,
                "Restaurant closed"
            );
            ExitCode::from(report.exit_code().clamp(0, 255) as u8)
        }
        Err(e) => {
            error!(error = %e, "Session failed");
            ExitCode::FAILURE
        }
    }
}
