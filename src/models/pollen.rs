//! Pollen types, severity categories and derived readings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pollen types requested from the air quality API, in request order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollenType {
    Alder,
    Birch,
    Grass,
    Mugwort,
    Ragweed,
}

impl PollenType {
    /// All tracked pollen types, in the order they are requested.
    /// This order also decides tie order between equal readings.
    pub const ALL: [PollenType; 5] = [
        PollenType::Alder,
        PollenType::Birch,
        PollenType::Grass,
        PollenType::Mugwort,
        PollenType::Ragweed,
    ];

    /// Identifier used in the API request and response
    #[must_use]
    pub fn api_name(self) -> &'static str {
        match self {
            PollenType::Alder => "alder_pollen",
            PollenType::Birch => "birch_pollen",
            PollenType::Grass => "grass_pollen",
            PollenType::Mugwort => "mugwort_pollen",
            PollenType::Ragweed => "ragweed_pollen",
        }
    }

    /// Display name: the API identifier with the `_pollen` suffix dropped
    /// and the first letter capitalized
    #[must_use]
    pub fn display_name(self) -> String {
        let base = self.api_name().trim_end_matches("_pollen");
        let mut chars = base.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Four-level severity classification of a pollen concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// <= 1 grains/m³
    Low,
    /// 1-50 grains/m³
    Moderate,
    /// 50-200 grains/m³
    High,
    /// > 200 grains/m³
    VeryHigh,
}

impl Category {
    /// Classify a concentration in grains/m³.
    /// Boundary values belong to the lower category.
    #[must_use]
    pub fn from_concentration(value: f32) -> Self {
        if value <= 1.0 {
            Category::Low
        } else if value <= 50.0 {
            Category::Moderate
        } else if value <= 200.0 {
            Category::High
        } else {
            Category::VeryHigh
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Low => "Low",
            Category::Moderate => "Moderate",
            Category::High => "High",
            Category::VeryHigh => "Very High",
        }
    }

    /// Style tag for the card rendering (label lowercased, spaces to hyphens)
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Moderate => "moderate",
            Category::High => "high",
            Category::VeryHigh => "very-high",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One presented pollen reading for the current hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollenReading {
    /// Display name of the pollen type
    pub display_name: String,
    /// Severity category derived from the concentration
    pub category: Category,
    /// Concentration rounded to the nearest whole grain/m³
    pub value: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, Category::Low)]
    #[case(1.0, Category::Low)]
    #[case(1.1, Category::Moderate)]
    #[case(50.0, Category::Moderate)]
    #[case(50.1, Category::High)]
    #[case(200.0, Category::High)]
    #[case(200.1, Category::VeryHigh)]
    #[case(1500.0, Category::VeryHigh)]
    fn test_category_bands(#[case] value: f32, #[case] expected: Category) {
        assert_eq!(Category::from_concentration(value), expected);
    }

    #[test]
    fn test_category_is_monotonic() {
        let samples = [0.0, 0.5, 1.0, 1.5, 10.0, 50.0, 51.0, 150.0, 200.0, 201.0, 999.0];
        for pair in samples.windows(2) {
            assert!(
                Category::from_concentration(pair[0]) <= Category::from_concentration(pair[1]),
                "category must not decrease between {} and {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_display_name_derivation() {
        assert_eq!(PollenType::Mugwort.display_name(), "Mugwort");
        assert_eq!(PollenType::Alder.display_name(), "Alder");
        assert_eq!(PollenType::Ragweed.display_name(), "Ragweed");
    }

    #[test]
    fn test_css_class() {
        assert_eq!(Category::Low.css_class(), "low");
        assert_eq!(Category::VeryHigh.css_class(), "very-high");
    }

    #[test]
    fn test_request_order() {
        let names: Vec<&str> = PollenType::ALL.iter().map(|p| p.api_name()).collect();
        assert_eq!(
            names,
            [
                "alder_pollen",
                "birch_pollen",
                "grass_pollen",
                "mugwort_pollen",
                "ragweed_pollen"
            ]
        );
    }
}
