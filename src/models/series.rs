//! Hourly pollen series as returned by the Open-Meteo air quality API

use serde::Deserialize;

use super::PollenType;

/// Air quality response from Open-Meteo, reduced to the fields we request
#[derive(Debug, Deserialize)]
pub struct PollenResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub hourly: PollenSeries,
}

/// Hourly pollen concentrations with one value array per pollen type,
/// index-aligned with `time`. Samples outside the model's coverage come
/// back as `null`.
#[derive(Debug, Deserialize)]
pub struct PollenSeries {
    pub time: Vec<String>,
    pub alder_pollen: Vec<Option<f32>>,
    pub birch_pollen: Vec<Option<f32>>,
    pub grass_pollen: Vec<Option<f32>>,
    pub mugwort_pollen: Vec<Option<f32>>,
    pub ragweed_pollen: Vec<Option<f32>>,
}

impl PollenSeries {
    /// Value array for one pollen type
    #[must_use]
    pub fn values(&self, pollen: PollenType) -> &[Option<f32>] {
        match pollen {
            PollenType::Alder => &self.alder_pollen,
            PollenType::Birch => &self.birch_pollen,
            PollenType::Grass => &self.grass_pollen,
            PollenType::Mugwort => &self.mugwort_pollen,
            PollenType::Ragweed => &self.ragweed_pollen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "latitude": 55.65,
            "longitude": 12.47,
            "hourly": {
                "time": ["2026-08-23T13:00", "2026-08-23T14:00"],
                "alder_pollen": [0.0, 0.1],
                "birch_pollen": [null, 2.4],
                "grass_pollen": [12.0, 55.3],
                "mugwort_pollen": [0.0, 0.0],
                "ragweed_pollen": [3.2, 3.0]
            }
        }"#;

        let response: PollenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.hourly.time.len(), 2);
        assert_eq!(response.hourly.values(PollenType::Birch)[0], None);
        assert_eq!(response.hourly.values(PollenType::Grass)[1], Some(55.3));
    }
}
