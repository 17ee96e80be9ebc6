//! Core domain entities representing the click analytics data model.
//!
//! Entities are plain data structures created fresh for each aggregation run
//! and discarded once the response is produced.
//!
//! # Entity Types
//!
//! - [`UserInfo`] - The authenticated account and its default group
//! - [`Link`] / [`LinkPage`] - Shortened links and one page of a group listing
//! - [`CountryClicks`] / [`ClickMetrics`] - Per-country clicks for one link
//! - [`ClickTotals`] - Running totals merged across links
//! - [`CountryAverages`] - Final per-country average daily clicks

pub mod click_metrics;
pub mod link;
pub mod user_info;

pub use click_metrics::{
    CLICK_WINDOW_DAYS, ClickMetrics, ClickTotals, CountryAverages, CountryClicks,
};
pub use link::{Link, LinkPage};
pub use user_info::UserInfo;
