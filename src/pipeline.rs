//! One fetch-and-present pass.
//!
//! This is the explicit entry point the host invokes once per page view,
//! replacing the original page-load hook: fetch the series, align it to
//! the current hour and write the outcome into the render surface.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::api::PollenApiClient;
use crate::models::Location;
use crate::presenter::{self, PresentError};
use crate::render::RenderSurface;

pub const NO_POLLEN_NOTICE: &str = "No pollen in the air right now. Have a good day!";
pub const HOUR_NOT_COVERED_NOTICE: &str = "Could not find pollen counts for the current hour.";

/// Run the pipeline once: fetch, present, render.
///
/// Never fails; fetch and presentation problems end up in the surface's
/// error region or as a container notice, with the status line reset to
/// the bare location name.
pub async fn run_once<S: RenderSurface>(
    client: &PollenApiClient,
    location: &Location,
    now: DateTime<Utc>,
    surface: &mut S,
) {
    surface.set_status(&format!("Fetching data for {}...", location.name));

    let response = match client.fetch_pollen_data(location).await {
        Ok(response) => response,
        Err(err) => {
            warn!("Pollen fetch failed: {err}");
            surface.set_error(&format!(
                "Could not fetch pollen counts. Check the internet connection. ({err})"
            ));
            surface.set_status(&location.name);
            return;
        }
    };

    match presenter::present(&response.hourly, now) {
        Ok(presentation) => {
            info!(
                "Presenting {} readings for {}",
                presentation.readings.len(),
                presentation.hour
            );
            surface.set_status(&format!(
                "{} - showing counts for {}",
                location.name,
                presentation.hour.format("%H:00")
            ));
            if presentation.readings.is_empty() {
                surface.set_notice(NO_POLLEN_NOTICE);
            } else {
                for reading in &presentation.readings {
                    surface.push_card(reading);
                }
            }
        }
        Err(PresentError::HourNotCovered(hour)) => {
            warn!("Series does not cover {hour}");
            surface.set_status(&location.name);
            surface.set_notice(HOUR_NOT_COVERED_NOTICE);
        }
        Err(err @ PresentError::SeriesLengthMismatch(_)) => {
            warn!("Malformed series: {err}");
            surface.set_status(&location.name);
            surface.set_error(&format!("Pollen data was malformed. ({err})"));
        }
    }
}
