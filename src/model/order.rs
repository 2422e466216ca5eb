use crate::framework::CountingSignal;
use crate::model::CustomerId;
use serde::{Deserialize, Serialize};

/// Index into the waiter pool.
pub type WaiterId = usize;

/// Index into the cook pool.
pub type CookId = usize;

/// Sequence number the world hands out on every admission. Customer ids come from
/// the feed and may repeat; visits never do.
pub type VisitId = u64;

/// A seated customer's order, waiting in its waiter's inbound queue.
///
/// Carries the customer's rendezvous signal so the waiter can wake the customer
/// without any id-indexed registry.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub visit: VisitId,
    pub customer_id: CustomerId,
    pub party: u32,
    pub signal: CountingSignal,
}

/// A waiter's order forwarded to the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookTicket {
    pub waiter: WaiterId,
    pub visit: VisitId,
    pub customer_id: CustomerId,
    pub party: u32,
}

/// Waiters are lettered from `U`: U, V, W, X, Y, Z, A, B, ...
pub fn waiter_name(waiter: WaiterId) -> char {
    let offset = (usize::from(b'U' - b'A') + waiter) % 26;
    char::from(b'A' + offset as u8)
}

/// Cooks are lettered from `C`: C, D, E, ...
pub fn cook_name(cook: CookId) -> String {
    match u8::try_from(cook) {
        Ok(offset) if offset < 24 => char::from(b'C' + offset).to_string(),
        _ => format!("C{}", cook),
    }
}
