//! Per-country click observations and their aggregation into daily averages.

use std::collections::BTreeMap;

/// Length of the observation window in days.
///
/// Used both as the `units` query parameter on the per-link countries
/// resource and as the divisor when turning totals into daily averages, so
/// the two can never disagree.
pub const CLICK_WINDOW_DAYS: u32 = 30;

/// Click count for one country on one link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryClicks {
    pub country: String,
    pub clicks: u64,
}

impl CountryClicks {
    pub fn new(country: impl Into<String>, clicks: u64) -> Self {
        Self {
            country: country.into(),
            clicks,
        }
    }
}

/// All country counts for exactly one link over the observation window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMetrics {
    /// Window length echoed by the remote service.
    pub window_days: u32,
    pub metrics: Vec<CountryClicks>,
}

impl ClickMetrics {
    pub fn new(metrics: Vec<CountryClicks>) -> Self {
        Self {
            window_days: CLICK_WINDOW_DAYS,
            metrics,
        }
    }
}

/// Running per-country click totals across every link of a group.
///
/// Merging is order-independent: the same observations fed in any order
/// produce the same totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTotals {
    totals: BTreeMap<String, u64>,
}

impl ClickTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every country count of one link to the running totals.
    ///
    /// Totals saturate at `u64::MAX` instead of overflowing.
    pub fn merge(&mut self, metrics: &ClickMetrics) {
        for observation in &metrics.metrics {
            let total = self
                .totals
                .entry(observation.country.clone())
                .or_insert(0);
            *total = total.saturating_add(observation.clicks);
        }
    }

    /// Total clicks recorded so far for `country`.
    pub fn get(&self, country: &str) -> Option<u64> {
        self.totals.get(country).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Converts the totals into daily averages over `window_days`.
    ///
    /// Integer division, the remainder is discarded: 40 clicks over 30 days
    /// averages to 1. A zero window yields zero for every country.
    pub fn into_averages(self, window_days: u32) -> CountryAverages {
        let averages = self
            .totals
            .into_iter()
            .map(|(country, total)| {
                let average = total.checked_div(u64::from(window_days)).unwrap_or(0);
                (country, average)
            })
            .collect();

        CountryAverages {
            window_days,
            averages,
        }
    }
}

/// Final per-country average daily clicks for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAverages {
    pub window_days: u32,
    averages: BTreeMap<String, u64>,
}

impl CountryAverages {
    /// An empty result, returned when the group has no links.
    pub fn empty(window_days: u32) -> Self {
        Self {
            window_days,
            averages: BTreeMap::new(),
        }
    }

    pub fn get(&self, country: &str) -> Option<u64> {
        self.averages.get(country).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.averages.len()
    }

    /// Iterates `(country, average)` pairs in country order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.averages.iter().map(|(country, avg)| (country.as_str(), *avg))
    }

    /// Pairs sorted by average descending, ties broken by country name.
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}
