//! Quoted prices

use std::fmt;
use std::ops::Deref;

/// A successfully quoted price, in whole currency units.
///
/// The fractional part of the underlying computation has already been
/// truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct QuotedPrice {
    value: u64,
}

impl QuotedPrice {
    /// Creates a new quoted price.
    pub fn new(value: u64) -> Self {
        QuotedPrice { value }
    }
}

impl Deref for QuotedPrice {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Display for QuotedPrice {
    /// Renders the price with its fixed currency-symbol prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.value)
    }
}
