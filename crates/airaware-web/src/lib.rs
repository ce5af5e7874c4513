//! airaware-web: web front end for the AirAware air-quality database.
//! Provides:
//!   - Filtered browsing of measurements by location, site and pollutant
//!   - Faceted bar charts and a table view (rendered client-side by plotly.js)
//!   - CSV download and a JSON API over the same filtered rows

pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod params;
pub mod router;
pub mod state;
pub mod templates;
