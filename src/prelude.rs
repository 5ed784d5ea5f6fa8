//! Fotopack prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{
        CatalogError, CatalogSource, HttpCatalogSource, ProductRecord, load_catalog, product,
        products,
    },
    prices::QuotedPrice,
    pricing::{InstallmentPlan, QuoteError, Tier, quote_final_price},
    quote_log::log_quote,
    simulate::simulate_quote,
    store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError},
};
