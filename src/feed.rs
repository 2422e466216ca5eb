//! # Customer Feed
//!
//! Reads the arrival schedule: whitespace-separated integer triples
//! `customer_id arrival_minute party_size`, one customer per triple, ended by a
//! record whose id is `-1` (or by end of input).
//!
//! Records that cannot describe a real customer (id ≤ 0, negative arrival, party
//! outside 1..=4) are skipped with a warning and never reach the session.

use crate::model::{CustomerSpec, MAX_PARTY, MIN_PARTY};
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, warn};

/// Id that ends the feed.
pub const SENTINEL_ID: i64 = -1;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Failed to read customer feed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Customer feed line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Parses every valid customer up to the sentinel.
///
/// # Errors
///
/// [`FeedError::Io`] if reading fails, [`FeedError::Parse`] for a token that is
/// not an integer or a record cut short by the end of input.
pub fn read_customers(reader: impl BufRead) -> Result<Vec<CustomerSpec>, FeedError> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token.parse::<i64>().map_err(|_| FeedError::Parse {
                line: index + 1,
                reason: format!("expected an integer, found {:?}", token),
            })?;
            tokens.push((index + 1, value));
        }
    }

    let mut customers = Vec::new();
    for record in tokens.chunks(3) {
        let (line, id) = record[0];
        if id == SENTINEL_ID {
            debug!(line, "Sentinel reached");
            break;
        }
        let &[_, (_, arrival), (_, party)] = record else {
            return Err(FeedError::Parse {
                line,
                reason: "incomplete record at end of input".to_string(),
            });
        };
        match validate(id, arrival, party) {
            Some(customer) => customers.push(customer),
            None => warn!(
                line,
                id, arrival, party, "Invalid customer data, skipping record"
            ),
        }
    }

    debug!(count = customers.len(), "Customer feed parsed");
    Ok(customers)
}

fn validate(id: i64, arrival: i64, party: i64) -> Option<CustomerSpec> {
    let id = u32::try_from(id).ok().filter(|id| *id > 0)?;
    let arrival = u32::try_from(arrival).ok()?;
    let party = u32::try_from(party)
        .ok()
        .filter(|party| (MIN_PARTY..=MAX_PARTY).contains(party))?;
    Some(CustomerSpec::new(id, arrival, party))
}
