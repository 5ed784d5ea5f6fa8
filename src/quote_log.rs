//! Quote log
//!
//! Every successful quote is appended to the key-value store under a local
//! timestamp key. The log is a convenience record, not a system of record:
//! storage faults are swallowed and reported to the diagnostic channel only.

use jiff::Zoned;
use tracing::{error, info};

use crate::prices::QuotedPrice;
use crate::store::KeyValueStore;

/// Key layout: local date-time at second precision, short numeric format.
///
/// Two quotes logged within the same second share a key and the later one
/// wins; that collision is accepted.
const KEY_FORMAT: &str = "%-d/%-m/%Y, %H:%M:%S";

/// Appends a quote-log entry for a successful quote.
///
/// Never fails observably: if the store rejects the write, the fault is
/// reported via the diagnostic channel and the caller proceeds as normal.
pub fn log_quote<S>(store: &mut S, logged_at: &Zoned, quantity: i64, price: QuotedPrice)
where
    S: KeyValueStore,
{
    let key = logged_at.strftime(KEY_FORMAT).to_string();
    let value = format!("Quoted {quantity} photos at {price}");

    match store.set(&key, &value) {
        Ok(()) => info!(%key, "quote logged"),
        Err(fault) => error!(error = %fault, "failed to write quote log entry"),
    }
}
