//! Data models for the pollental application
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and metadata
//! - Pollen: Pollen types, severity categories and derived readings
//! - Series: The hourly series shape returned by the air quality API

pub mod location;
pub mod pollen;
pub mod series;

// Re-export all public types for convenient access
pub use location::Location;
pub use pollen::{Category, PollenReading, PollenType};
pub use series::{PollenResponse, PollenSeries};
