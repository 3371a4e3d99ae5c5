//! Integration tests for the dataset loader and cache using the frozen fixture.

use std::path::PathBuf;
use std::sync::Arc;

use stocksense_core::data::{generate, load_dataset, write_dataset, GeneratorConfig};
use stocksense_core::{analyze, DatasetCache, TrendWindow};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sales_small.csv")
}

#[test]
fn fixture_loads_with_products_in_order() {
    let table = load_dataset(&fixture_path()).unwrap().unwrap();
    assert_eq!(table.len(), 14);
    assert_eq!(table.products(), vec!["Laptop", "Mouse", "Monitor"]);
}

#[test]
fn fixture_laptop_week_forecast() {
    let cache = DatasetCache::new(fixture_path());
    let table = cache.get().unwrap().unwrap();
    let series = table.series_for("Laptop");
    assert_eq!(series.len(), 7);

    let analysis = analyze(&series, TrendWindow::new(7).unwrap(), 50);
    assert_eq!(analysis.summary.total_units, 70);
    assert_eq!(analysis.forecast.weekly_estimate(), Some(70.0));
    let advisory = analysis.advisory.unwrap();
    assert_eq!(advisory.shortfall, 20);
    assert!(!advisory.is_sufficient);
}

#[test]
fn fixture_mouse_has_too_little_history_for_week_window() {
    let table = load_dataset(&fixture_path()).unwrap().unwrap();
    let analysis = analyze(&table.series_for("Mouse"), TrendWindow::new(7).unwrap(), 50);
    assert!(!analysis.forecast.is_defined());
    assert!(analysis.advisory.is_none());

    // Shrinking the window brings the forecast back: mean(29,34,30) * 7 = 217.
    let analysis = analyze(&table.series_for("Mouse"), TrendWindow::new(3).unwrap(), 250);
    assert_eq!(analysis.forecast.weekly_estimate(), Some(217.0));
    assert!(analysis.advisory.unwrap().is_sufficient);
}

#[test]
fn cache_hands_out_one_table() {
    let cache = DatasetCache::new(fixture_path());
    let a = cache.get().unwrap().unwrap();
    let b = cache.get().unwrap().unwrap();
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn generated_dataset_roundtrips_through_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("satis_verisi_2024.csv");
    let config = GeneratorConfig {
        days: 30,
        ..GeneratorConfig::default()
    };
    let records = generate(&config);
    write_dataset(&path, &records).unwrap();

    let table = load_dataset(&path).unwrap().unwrap();
    assert_eq!(table.records(), records.as_slice());
    assert_eq!(table.products().len(), config.products.len());
    for product in table.products() {
        assert_eq!(table.series_for(product).len(), 30);
    }
}
