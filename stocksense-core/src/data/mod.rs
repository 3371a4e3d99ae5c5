//! Sales history loading, product filtering and the load-once dataset cache.

pub mod cache;
pub mod loader;
pub mod synthetic;
pub mod table;

pub use cache::DatasetCache;
pub use loader::{load_dataset, parse_date, read_records, write_dataset, DataError};
pub use synthetic::{generate, GeneratorConfig, ProductProfile, MAX_DAYS};
pub use table::SalesTable;
