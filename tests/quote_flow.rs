//! Integration test for the full storefront flow.
//!
//! Covers the two user journeys end to end against a file-backed store:
//!
//! 1. Simulate a quote: the engine prices the request and, on success only,
//!    appends a timestamped entry to the quote log.
//! 2. Reveal listings: the catalog loader populates the cache under 1-based
//!    position keys and the read side returns the records in catalog order.

use rust_decimal::Decimal;
use testresult::TestResult;

use fotopack::catalog::{MockCatalogSource, ProductRecord, load_catalog, product, products};
use fotopack::pricing::QuoteError;
use fotopack::simulate::simulate_quote;
use fotopack::store::{JsonFileStore, MemoryStore};

fn sample_catalog() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            name: "Mini".to_owned(),
            photo_quantity: 10,
            partial_price: Decimal::new(1_500, 2),
        },
        ProductRecord {
            name: "Classic".to_owned(),
            photo_quantity: 25,
            partial_price: Decimal::new(3_250, 2),
        },
        ProductRecord {
            name: "Studio".to_owned(),
            photo_quantity: 60,
            partial_price: Decimal::new(7_000, 2),
        },
    ]
}

#[test]
fn quote_writes_one_log_entry_with_rendered_price() -> TestResult {
    let mut store = MemoryStore::new();

    let price = simulate_quote(&mut store, 200, 3)?;

    assert_eq!(price.to_string(), "$23655");
    assert_eq!(store.len(), 1, "exactly one quote-log entry expected");

    Ok(())
}

#[test]
fn failed_quote_leaves_quote_log_unchanged() -> TestResult {
    let mut store = MemoryStore::new();

    simulate_quote(&mut store, 50, 1)?;
    let logged = store.len();

    assert_eq!(
        simulate_quote(&mut store, 50_000, 1),
        Err(QuoteError::InvalidQuantity)
    );
    assert_eq!(
        simulate_quote(&mut store, 50, 4),
        Err(QuoteError::InvalidInstallments)
    );

    assert_eq!(store.len(), logged, "failed quotes must not touch the store");

    Ok(())
}

#[tokio::test]
async fn catalog_load_then_read_preserves_order() -> TestResult {
    let mut source = MockCatalogSource::new();
    source
        .expect_fetch_catalog()
        .returning(|| Ok(sample_catalog()));

    let mut store = MemoryStore::new();

    load_catalog(&source, &mut store).await;

    let names: Vec<String> = products(&store)?
        .into_iter()
        .map(|record| record.name)
        .collect();

    assert_eq!(names, ["Mini", "Classic", "Studio"]);
    assert_eq!(product(&store, 3)?.map(|record| record.name), Some("Studio".to_owned()));
    assert_eq!(product(&store, 4)?, None);

    Ok(())
}

#[tokio::test]
async fn quote_log_and_catalog_share_the_store_across_reopen() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("storefront.json");

    {
        let mut store = JsonFileStore::open(&path)?;

        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_catalog()
            .returning(|| Ok(sample_catalog()));

        load_catalog(&source, &mut store).await;
        simulate_quote(&mut store, 1000, 6)?;
    }

    let reopened = JsonFileStore::open(&path)?;

    assert_eq!(products(&reopened)?.len(), 3);

    // The quote-log entry lives under a timestamp key, alongside the numeric
    // catalog keys, in the same persisted map.
    let raw = std::fs::read_to_string(&path)?;
    let entries: std::collections::BTreeMap<String, String> = serde_json::from_str(&raw)?;

    let quote_entries: Vec<String> = entries
        .into_iter()
        .filter(|(key, _)| key.parse::<usize>().is_err())
        .map(|(_, value)| value)
        .collect();

    assert_eq!(quote_entries, ["Quoted 1000 photos at $117975"]);

    Ok(())
}
