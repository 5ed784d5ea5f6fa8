//! Quote simulation
//!
//! Composes the pure pricing engine with its one side effect: a successful
//! quote is appended to the quote log before the result is handed back to the
//! presentation layer. A failed quote is never logged.

use jiff::Zoned;

use crate::pricing::{QuoteError, quote_final_price};
use crate::prices::QuotedPrice;
use crate::quote_log::log_quote;
use crate::store::KeyValueStore;

/// Quotes a price and, on success, records it in the quote log.
///
/// # Errors
///
/// - [`QuoteError::InvalidQuantity`]: `quantity` is outside `0..=10000`.
/// - [`QuoteError::InvalidInstallments`]: `installments` is not 1, 3 or 6.
///
/// On either error the store is left untouched.
pub fn simulate_quote<S>(
    store: &mut S,
    quantity: i64,
    installments: i64,
) -> Result<QuotedPrice, QuoteError>
where
    S: KeyValueStore,
{
    let price = quote_final_price(quantity, installments)?;

    log_quote(store, &Zoned::now(), quantity, price);

    Ok(price)
}
