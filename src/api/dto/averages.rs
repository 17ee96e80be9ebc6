//! DTOs for per-country average clicks.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::CountryAverages;

/// Average daily clicks per country across the default group.
#[derive(Debug, Serialize)]
pub struct CountryAveragesResponse {
    pub facet: &'static str,
    pub unit: &'static str,
    pub units: u32,
    pub unit_reference: DateTime<Utc>,
    pub metrics: Vec<CountryAverageItem>,
}

/// Average daily clicks for a single country.
#[derive(Debug, Serialize)]
pub struct CountryAverageItem {
    pub country: String,
    pub average_clicks: u64,
}

impl CountryAveragesResponse {
    /// Builds the response body, highest averages first.
    pub fn new(averages: &CountryAverages, unit_reference: DateTime<Utc>) -> Self {
        Self {
            facet: "countries",
            unit: "day",
            units: averages.window_days,
            unit_reference,
            metrics: averages
                .ranked()
                .into_iter()
                .map(|(country, average_clicks)| CountryAverageItem {
                    country: country.to_string(),
                    average_clicks,
                })
                .collect(),
        }
    }
}
