//! Paginated retrieval of every link in a group.

use tracing::debug;

use crate::domain::entities::Link;
use crate::domain::providers::{Credential, MetricsProvider, PageCursor, RemoteError};

/// Collects all links of a group by following continuation cursors.
///
/// The first page is requested by group GUID; each following page is
/// requested against the previous page's `next` locator verbatim. The loop
/// ends when a page reports no continuation. There is no page cap: a remote
/// service that never stops returning cursors keeps the loop going.
///
/// # Errors
///
/// The first [`RemoteError`] on any page aborts the loop. No partial list is
/// returned.
pub async fn fetch_all_links(
    provider: &dyn MetricsProvider,
    credential: &Credential,
    group_guid: &str,
) -> Result<Vec<Link>, RemoteError> {
    let mut cursor = PageCursor::Group(group_guid.to_string());
    let mut links = Vec::new();
    let mut pages = 0usize;

    loop {
        let page = provider.fetch_links_page(credential, &cursor).await?;
        pages += 1;
        debug!(
            group = group_guid,
            page = pages,
            links = page.links.len(),
            total = page.total,
            "Fetched group links page"
        );

        links.extend(page.links);

        match page.next {
            Some(next) => cursor = PageCursor::Continuation(next),
            None => break,
        }
    }

    debug!(group = group_guid, pages, links = links.len(), "Group listing complete");
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::LinkPage;
    use crate::domain::providers::MockMetricsProvider;
    use mockall::Sequence;

    fn link(id: &str) -> Link {
        Link::new(format!("http://{}", id), id)
    }

    #[tokio::test]
    async fn test_single_page() {
        let mut mock = MockMetricsProvider::new();

        mock.expect_fetch_links_page()
            .withf(|_, cursor| *cursor == PageCursor::Group("ABC3DgEF".to_string()))
            .times(1)
            .returning(|_, _| {
                Ok(LinkPage::new(
                    vec![link("bit.ly/UFHISO"), link("nyti.ms/2GnOpXm")],
                    None,
                ))
            });

        let links = fetch_all_links(&mock, &Credential::new("t"), "ABC3DgEF")
            .await
            .unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].id, "bit.ly/UFHISO");
        assert_eq!(links[1].id, "nyti.ms/2GnOpXm");
    }

    #[tokio::test]
    async fn test_follows_continuation_verbatim() {
        let mut mock = MockMetricsProvider::new();
        let mut seq = Sequence::new();

        mock.expect_fetch_links_page()
            .withf(|_, cursor| *cursor == PageCursor::Group("G1".to_string()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(LinkPage::new(
                    vec![link("bit.ly/a"), link("bit.ly/b")],
                    Some("P2".to_string()),
                ))
            });
        mock.expect_fetch_links_page()
            .withf(|_, cursor| *cursor == PageCursor::Continuation("P2".to_string()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(LinkPage::new(vec![link("bit.ly/c")], None)));

        let links = fetch_all_links(&mock, &Credential::new("t"), "G1")
            .await
            .unwrap();

        let ids: Vec<_> = links.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["bit.ly/a", "bit.ly/b", "bit.ly/c"]);
    }

    #[tokio::test]
    async fn test_many_pages_accumulate() {
        let mut mock = MockMetricsProvider::new();
        let mut remaining = 3;

        mock.expect_fetch_links_page()
            .times(4)
            .returning(move |_, _| {
                if remaining > 0 {
                    remaining -= 1;
                    Ok(LinkPage::new(
                        vec![link("bit.ly/HGDGAX")],
                        Some("https://api-ssl.bitly.com/v4/groups/Bk1hmw/bitlinks?page=2".to_string()),
                    ))
                } else {
                    Ok(LinkPage::new(
                        vec![link("bit.ly/UFHISO"), link("nyti.ms/2GnOpXm")],
                        None,
                    ))
                }
            });

        let links = fetch_all_links(&mock, &Credential::new("t"), "Bk1hmw")
            .await
            .unwrap();

        assert_eq!(links.len(), 5);
    }

    #[tokio::test]
    async fn test_error_on_later_page_discards_links() {
        let mut mock = MockMetricsProvider::new();
        let mut seq = Sequence::new();

        mock.expect_fetch_links_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(LinkPage::new(vec![link("bit.ly/a")], Some("P2".to_string()))));
        mock.expect_fetch_links_page()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(RemoteError::Transport("connection reset".to_string())));

        let result = fetch_all_links(&mock, &Credential::new("t"), "G1").await;

        assert_eq!(
            result.unwrap_err(),
            RemoteError::Transport("connection reset".to_string())
        );
    }
}
