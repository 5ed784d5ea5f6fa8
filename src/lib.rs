//! Fotopack
//!
//! Fotopack is the computational core of a photo-pack storefront: a pure
//! pricing engine (tax, volume discounts, installment surcharges), a
//! timestamped quote log, and a catalog loader that caches the product list in
//! a pluggable key-value store.

pub mod catalog;
pub mod prelude;
pub mod prices;
pub mod pricing;
pub mod quote_log;
pub mod simulate;
pub mod store;
