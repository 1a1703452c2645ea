//! Turns a fetched pollen series into the ordered reading list for the
//! current hour.
//!
//! The lookup compares parsed timestamps instead of raw strings, so a
//! formatting difference between client and server (with or without
//! seconds) does not produce a spurious not-found.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Category, PollenReading, PollenSeries, PollenType};

/// Timestamp shape used by Open-Meteo hourly series
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const TIME_FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Reasons a series cannot be presented
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentError {
    /// The series does not cover the requested hour
    #[error("no pollen counts available for {0}")]
    HourNotCovered(NaiveDateTime),

    /// A value array whose length does not match the time axis
    #[error("series for {0} does not match the length of its time axis")]
    SeriesLengthMismatch(&'static str),
}

/// Presented readings for one hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Presentation {
    /// Start of the hour the readings were taken from
    pub hour: NaiveDateTime,
    /// Readings with a concentration above zero, highest first
    pub readings: Vec<PollenReading>,
}

/// Truncate a timestamp to the start of the hour it falls in
#[must_use]
pub fn truncate_to_hour(now: DateTime<Utc>) -> NaiveDateTime {
    let now = now.naive_utc();
    now.date()
        .and_time(NaiveTime::from_hms_opt(now.hour(), 0, 0).unwrap_or_default())
}

fn parse_series_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, TIME_FORMAT_WITH_SECONDS))
        .ok()
}

/// Build the presentation for the hour `now` falls in.
///
/// Pollen types with a value of zero (or a null sample) are left out;
/// the rest are rounded, classified and sorted descending by rounded
/// value. The sort is stable, so equal values keep request order.
pub fn present(series: &PollenSeries, now: DateTime<Utc>) -> Result<Presentation, PresentError> {
    let hour = truncate_to_hour(now);

    let index = series
        .time
        .iter()
        .position(|raw| parse_series_time(raw).is_some_and(|parsed| parsed == hour))
        .ok_or(PresentError::HourNotCovered(hour))?;

    let mut readings = Vec::new();
    for pollen in PollenType::ALL {
        let values = series.values(pollen);
        if values.len() != series.time.len() {
            return Err(PresentError::SeriesLengthMismatch(pollen.api_name()));
        }
        let Some(value) = values.get(index).copied().flatten() else {
            continue;
        };
        if value > 0.0 {
            readings.push(PollenReading {
                display_name: pollen.display_name(),
                category: Category::from_concentration(value),
                value: value.round() as u32,
            });
        }
    }

    readings.sort_by(|a, b| b.value.cmp(&a.value));

    Ok(Presentation { hour, readings })
}
