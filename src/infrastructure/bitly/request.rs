//! Construction of authenticated outbound requests.

use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, Method, Request};
use url::Url;

use crate::domain::providers::{Credential, RemoteError};

/// Builds requests against the remote API without sending them.
///
/// Targets are either paths relative to the base endpoint (`user`,
/// `groups/{guid}/bitlinks`) or fully-qualified locators handed back by a
/// previous page. Both receive the same bearer authorization.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    client: Client,
    base_url: Url,
}

impl RequestBuilder {
    /// Creates a builder that resolves relative targets against `base_url`.
    ///
    /// `base_url` should end with `/`, otherwise its last path segment is
    /// replaced on join.
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds a request for `target` with the given verb and credential.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::RequestConstruction`] if the verb is not a valid
    /// HTTP method token, the target does not parse, or it resolves to a
    /// scheme other than `http`/`https`.
    pub fn build(
        &self,
        target: &str,
        verb: &str,
        credential: &Credential,
    ) -> Result<Request, RemoteError> {
        let method = Method::from_bytes(verb.as_bytes())
            .map_err(|e| RemoteError::request_construction(target, e))?;

        let url = self.resolve(target)?;

        self.client
            .request(method, url)
            .bearer_auth(credential.token())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .build()
            .map_err(|e| RemoteError::request_construction(target, e))
    }

    /// Resolves a target to an absolute URL.
    ///
    /// Absolute targets are used verbatim; relative ones are joined onto the
    /// base endpoint.
    fn resolve(&self, target: &str) -> Result<Url, RemoteError> {
        let url = match Url::parse(target) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => self
                .base_url
                .join(target)
                .map_err(|e| RemoteError::request_construction(target, e))?,
            Err(e) => return Err(RemoteError::request_construction(target, e)),
        };

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(RemoteError::request_construction(
                target,
                format!("unsupported scheme '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::AUTHORIZATION;

    fn builder() -> RequestBuilder {
        RequestBuilder::new(
            Client::new(),
            Url::parse("https://api-ssl.bitly.com/v4/").unwrap(),
        )
    }

    #[test]
    fn test_relative_target_joins_base() {
        let req = builder()
            .build("groups/Bk1hmw/bitlinks", "GET", &Credential::new("tok"))
            .unwrap();

        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://api-ssl.bitly.com/v4/groups/Bk1hmw/bitlinks"
        );
    }

    #[test]
    fn test_absolute_target_used_verbatim() {
        let next = "https://api-ssl.bitly.com/v4/groups/Bk1hmw/bitlinks?page=2&size=50";
        let req = builder()
            .build(next, "GET", &Credential::new("tok"))
            .unwrap();

        assert_eq!(req.url().as_str(), next);
    }

    #[test]
    fn test_bearer_header_attached() {
        let b = builder();
        let relative = b.build("user", "GET", &Credential::new("abc")).unwrap();
        let absolute = b
            .build("http://next.com/page", "GET", &Credential::new("abc"))
            .unwrap();

        for req in [relative, absolute] {
            assert_eq!(req.headers()[AUTHORIZATION], "Bearer abc");
            assert_eq!(req.headers()[ACCEPT], "application/json");
        }
    }

    #[test]
    fn test_query_string_preserved() {
        let req = builder()
            .build(
                "bitlinks/bit.ly/HGDGAX/countries?unit=day&units=30",
                "GET",
                &Credential::new("tok"),
            )
            .unwrap();

        assert_eq!(req.url().path(), "/v4/bitlinks/bit.ly/HGDGAX/countries");
        assert_eq!(req.url().query(), Some("unit=day&units=30"));
    }

    #[test]
    fn test_invalid_verb() {
        let result = builder().build("user", "GE T", &Credential::new("tok"));

        assert!(matches!(
            result,
            Err(RemoteError::RequestConstruction { .. })
        ));
    }

    #[test]
    fn test_unsupported_scheme() {
        let result = builder().build("ftp://files.example.com/x", "GET", &Credential::new("tok"));

        assert!(matches!(
            result,
            Err(RemoteError::RequestConstruction { .. })
        ));
    }

    #[test]
    fn test_malformed_absolute_target() {
        let result = builder().build("http://[::1", "GET", &Credential::new("tok"));

        assert!(matches!(
            result,
            Err(RemoteError::RequestConstruction { .. })
        ));
    }
}
