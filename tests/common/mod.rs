#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use click_averages::domain::entities::{ClickMetrics, CountryClicks, Link, LinkPage, UserInfo};
use click_averages::domain::providers::{Credential, MetricsProvider, PageCursor, RemoteError};
use click_averages::state::AppState;

/// Scripted [`MetricsProvider`] that records every call it receives.
///
/// Pages are handed out in the order they were added; click metrics are
/// looked up by link id.
#[derive(Default)]
pub struct StubProvider {
    user: Option<Result<UserInfo, RemoteError>>,
    pages: Mutex<VecDeque<Result<LinkPage, RemoteError>>>,
    clicks: HashMap<String, Result<ClickMetrics, RemoteError>>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: Result<UserInfo, RemoteError>) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_page(self, page: Result<LinkPage, RemoteError>) -> Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn with_clicks(mut self, link_id: &str, clicks: Result<ClickMetrics, RemoteError>) -> Self {
        self.clicks.insert(link_id.to_string(), clicks);
        self
    }

    /// Calls received so far, e.g. `user`, `page:group:G1`, `clicks:bit.ly/a`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl MetricsProvider for StubProvider {
    async fn fetch_user_info(&self, _credential: &Credential) -> Result<UserInfo, RemoteError> {
        self.record("user".to_string());
        self.user
            .clone()
            .unwrap_or_else(|| Ok(UserInfo::new("G1", "petertest")))
    }

    async fn fetch_links_page(
        &self,
        _credential: &Credential,
        cursor: &PageCursor,
    ) -> Result<LinkPage, RemoteError> {
        self.record(match cursor {
            PageCursor::Group(guid) => format!("page:group:{}", guid),
            PageCursor::Continuation(next) => format!("page:next:{}", next),
        });
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(LinkPage::new(vec![], None)))
    }

    async fn fetch_clicks_by_country(
        &self,
        _credential: &Credential,
        link: &Link,
    ) -> Result<ClickMetrics, RemoteError> {
        self.record(format!("clicks:{}", link.id));
        self.clicks
            .get(&link.id)
            .cloned()
            .unwrap_or_else(|| Ok(ClickMetrics::new(vec![])))
    }
}

pub fn link(id: &str) -> Link {
    Link::new(format!("http://{}", id), id)
}

pub fn clicks(pairs: &[(&str, u64)]) -> ClickMetrics {
    ClickMetrics::new(
        pairs
            .iter()
            .map(|(country, clicks)| CountryClicks::new(*country, *clicks))
            .collect(),
    )
}

pub fn create_test_state(provider: Arc<StubProvider>) -> AppState {
    AppState::new(provider)
}
