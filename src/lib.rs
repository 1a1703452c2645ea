//! `Pollental` - hourly pollen counts for Hvidovre
//!
//! This library fetches pollen concentrations from the Open-Meteo air
//! quality API, classifies each pollen type into a severity category and
//! renders the result as a sorted card list on a small web page.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod presenter;
pub mod render;
pub mod web;

// Re-export core types for public API
pub use api::PollenApiClient;
pub use config::PollentalConfig;
pub use error::PollentalError;
pub use models::{Category, Location, PollenReading, PollenResponse, PollenSeries, PollenType};
pub use presenter::{PresentError, Presentation};
pub use render::{HtmlPage, RenderSurface};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, PollentalError>;
