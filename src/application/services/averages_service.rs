//! Per-country average daily clicks across a user's default group.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::group_links::fetch_all_links;
use crate::domain::entities::{CLICK_WINDOW_DAYS, ClickTotals, CountryAverages};
use crate::domain::providers::{Credential, MetricsProvider, RemoteError};

/// Service that runs one aggregation per call.
///
/// Every remote fetch is awaited before the next one starts, and no state is
/// shared between calls, so concurrent requests with different credentials
/// never interfere.
pub struct ClickAveragesService {
    provider: Arc<dyn MetricsProvider>,
}

impl ClickAveragesService {
    /// Creates a new averages service on top of a metrics provider.
    pub fn new(provider: Arc<dyn MetricsProvider>) -> Self {
        Self { provider }
    }

    /// Computes per-country average daily clicks for the default group.
    ///
    /// # Steps
    ///
    /// 1. Fetch the identity to learn the default group GUID
    /// 2. Collect every link of that group, following pagination
    /// 3. Fetch each link's country clicks in order and merge them into totals
    /// 4. Divide every total by [`CLICK_WINDOW_DAYS`], truncating
    ///
    /// A group with no links yields an empty result and issues no per-link
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns the first [`RemoteError`] from any step unchanged. A single
    /// failing link aborts the whole computation; nothing partial is returned.
    pub async fn country_averages(
        &self,
        credential: &Credential,
    ) -> Result<CountryAverages, RemoteError> {
        let provider = self.provider.as_ref();

        let user = provider.fetch_user_info(credential).await.map_err(|e| {
            warn!("Failed to fetch user info: {}", e);
            e
        })?;
        debug!(group = %user.default_group_guid, "Resolved default group");

        let links = fetch_all_links(provider, credential, &user.default_group_guid)
            .await
            .map_err(|e| {
                warn!(group = %user.default_group_guid, "Failed to list group links: {}", e);
                e
            })?;

        if links.is_empty() {
            info!(group = %user.default_group_guid, "Group has no links");
            return Ok(CountryAverages::empty(CLICK_WINDOW_DAYS));
        }

        let mut totals = ClickTotals::new();
        for link in &links {
            let metrics = provider
                .fetch_clicks_by_country(credential, link)
                .await
                .map_err(|e| {
                    warn!(link = %link.id, "Failed to fetch clicks by country: {}", e);
                    e
                })?;
            debug!(link = %link.id, countries = metrics.metrics.len(), "Merging link clicks");
            totals.merge(&metrics);
        }

        let averages = totals.into_averages(CLICK_WINDOW_DAYS);
        info!(
            group = %user.default_group_guid,
            links = links.len(),
            countries = averages.len(),
            "Computed country averages"
        );

        Ok(averages)
    }
}
