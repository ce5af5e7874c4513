//! AirAware Database Layer
//!
//! Read-only access to the air-quality SQLite database: locations,
//! monitoring sites, pollutants and the measurements taken at them.
//!
//! # Example
//!
//! ```rust,no_run
//! use airaware_db::{Database, MeasurementFilter, MeasurementQuery, MeasurementRepository, PoolSettings, RowLimit};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open("sqlite://data/air.db", &PoolSettings::default()).await?;
//!     let mut conn = db.acquire().await?;
//!
//!     let query = MeasurementQuery::new(MeasurementFilter::location("Oxford"), RowLimit::new(5));
//!     let rows = MeasurementRepository::new(&mut conn).find(&query).await?;
//!     println!("{} rows", rows.len());
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;
pub mod filter;
pub mod measurements;
pub mod query;
pub mod reference;
pub mod schema;

pub use database::{Database, PoolSettings};
pub use error::{DbError, Result};
pub use filter::{MeasurementFilter, RowLimit, SortOrder};
pub use measurements::MeasurementRepository;
pub use query::{BuiltQuery, MeasurementQuery};
pub use reference::ReferenceRepository;
pub use schema::{Location, MeasurementRow, Pollutant, SubLocation, SCHEMA_DDL};
