//! Shortened link entities and a single page of group links.

/// A shortened link belonging to a group.
///
/// `id` is the identifier the remote API uses in per-link resource paths
/// (e.g. `bit.ly/3xYzAbc`), `short_url` is the full public short URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    pub short_url: String,
    pub id: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(short_url: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            short_url: short_url.into(),
            id: id.into(),
        }
    }
}

/// One page of links returned by the group listing.
///
/// `next` holds the fully-qualified locator of the following page. It is
/// `None` once the listing is exhausted; an empty cursor from the remote
/// service is normalised to `None` during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPage {
    pub links: Vec<Link>,
    pub next: Option<String>,
    /// Total number of links in the group as reported by the remote service.
    /// Informational only, pagination never relies on it.
    pub total: u64,
}

impl LinkPage {
    /// Creates a page with the given links and continuation cursor.
    pub fn new(links: Vec<Link>, next: Option<String>) -> Self {
        let total = links.len() as u64;
        Self { links, next, total }
    }

    /// Returns true if another page follows this one.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}
