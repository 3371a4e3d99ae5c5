//! StockSense CLI: inspect the sales dataset and the weekly forecast from a shell.
//!
//! Commands:
//! - `products`: list the products in the dataset
//! - `summary`: total and mean daily sales for one product
//! - `forecast`: moving-average trend, next-week estimate and stock check
//! - `generate`: write a synthetic sample dataset

use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::json;
use stocksense_core::config::{DATASET_PATH, FORECAST_HORIZON_DAYS};
use stocksense_core::data::{generate, write_dataset, GeneratorConfig, MAX_DAYS};
use stocksense_core::{analyze, DatasetCache, SalesTable, Settings, TrendWindow};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stocksense",
    about = "StockSense CLI: sales trend, weekly demand forecast and stock check"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List distinct products in first-appearance order.
    Products,
    /// Print total and mean daily units sold for a product.
    Summary {
        /// Product name as it appears in the dataset.
        #[arg(long)]
        product: String,
    },
    /// Compute the moving-average trend, next-week estimate and stock advisory.
    Forecast {
        /// Product name as it appears in the dataset.
        #[arg(long)]
        product: String,

        /// Moving-average window in days (3-30). Defaults to the configured window.
        #[arg(long)]
        window: Option<usize>,

        /// Units currently in stock. Defaults to the configured stock.
        #[arg(long)]
        stock: Option<u64>,

        /// Print the result as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write a synthetic sales dataset to the dataset path.
    Generate {
        /// RNG seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of days starting 2024-01-01.
        #[arg(
            long,
            default_value_t = 366,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DAYS))
        )]
        days: u32,

        /// Overwrite an existing dataset.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (settings, settings_path) = Settings::discover().context("failed to load settings")?;
    init_logging(&settings.log_filter);
    if let Some(path) = &settings_path {
        info!(path = %path.display(), "settings loaded");
    }

    match cli.command {
        Commands::Products => run_products(),
        Commands::Summary { product } => run_summary(&product),
        Commands::Forecast {
            product,
            window,
            stock,
            json,
        } => {
            let window = match window {
                Some(w) => TrendWindow::new(w)?,
                None => settings.default_window,
            };
            let stock = stock.unwrap_or(settings.default_stock);
            run_forecast(&product, window, stock, json)
        }
        Commands::Generate { seed, days, force } => {
            run_generate(Path::new(DATASET_PATH), seed, days, force)
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_table() -> Result<std::sync::Arc<SalesTable>> {
    let cache = DatasetCache::at_default_path();
    match cache
        .get()
        .with_context(|| format!("failed to load {}", cache.path().display()))?
    {
        Some(table) => Ok(table),
        None => bail!(
            "sales dataset '{}' not found. Run `stocksense-cli generate` first.",
            cache.path().display()
        ),
    }
}

fn require_product(table: &SalesTable, product: &str) -> Result<()> {
    if !table.contains_product(product) {
        bail!(
            "unknown product '{product}'. Available: {}",
            table.products().join(", ")
        );
    }
    Ok(())
}

fn run_products() -> Result<()> {
    let table = load_table()?;
    for product in table.products() {
        println!("{product}");
    }
    Ok(())
}

fn run_summary(product: &str) -> Result<()> {
    let table = load_table()?;
    require_product(&table, product)?;

    let series = table.series_for(product);
    let summary = series.summary();

    println!("Product: {product}");
    println!("Total units sold: {}", summary.total_units);
    println!("Mean daily units: {}", format_mean(summary.mean_daily));
    if let Some((first, last)) = series.date_span() {
        println!("History: {} days ({first} to {last})", summary.days);
    }
    Ok(())
}

/// Mean daily units with one decimal, as the dashboard shows it.
fn format_mean(mean: Option<f64>) -> String {
    mean.map(|m| format!("{m:.1}")).unwrap_or_else(|| "-".to_string())
}

fn run_forecast(product: &str, window: TrendWindow, stock: u64, as_json: bool) -> Result<()> {
    let table = load_table()?;
    require_product(&table, product)?;

    let series = table.series_for(product);
    let analysis = analyze(&series, window, stock);

    if as_json {
        let report = json!({
            "product": analysis.product,
            "window": window.get(),
            "horizon_days": FORECAST_HORIZON_DAYS,
            "summary": analysis.summary,
            "last_trend": analysis.trend.last_value(),
            "forecast": analysis.forecast,
            "advisory": analysis.advisory,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Product: {product}  (window {window} days, stock {stock} units)");
    if let Some(last) = analysis.trend.last_value() {
        println!("Latest {window}-day moving average: {last:.2} units/day");
    }
    println!("{}", analysis.forecast.message(product));
    if let Some(advisory) = &analysis.advisory {
        println!("{}", advisory.message());
    }
    Ok(())
}

fn run_generate(path: &Path, seed: u64, days: u32, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists. Pass --force to overwrite it.",
            path.display()
        );
    }

    let config = GeneratorConfig {
        seed,
        days,
        ..GeneratorConfig::default()
    };
    let records = generate(&config);
    write_dataset(path, &records)
        .with_context(|| format!("failed to write {}", path.display()))?;

    let last_day = config
        .start
        .checked_add_days(chrono::Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(NaiveDate::MAX);
    println!(
        "Wrote {} rows for {} products ({} to {last_day}) to {}",
        records.len(),
        config.products.len(),
        config.start,
        path.display()
    );
    Ok(())
}
