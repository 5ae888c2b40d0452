//! HTTP client for the iTunes Search API.
//!
//! Builds a GET against `https://itunes.apple.com/search`, parses the JSON
//! response envelope, and projects each result object into a flat
//! [`SearchItem`]. The client holds only immutable configuration; concurrent
//! searches are independent and never deduplicated or cached.

pub mod connectivity;
pub mod error;
pub mod testing;
pub mod transport;
pub mod types;

pub use connectivity::{AssumeOnline, ConnectivityProbe};
pub use error::{Result, SearchError};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use types::{SearchItem, SearchQuery};

use std::sync::Arc;

use serde_json::Value;

const BASE_URL: &str = "https://itunes.apple.com/";

/// Path segment for the search endpoint, query separator included.
const SEARCH_API: &str = "search?";

const SUCCESS_CODE: u16 = 200;

pub struct ItunesClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    probe: Arc<dyn ConnectivityProbe>,
}

impl ItunesClient {
    /// Client against the production iTunes endpoint, assuming connectivity.
    pub fn new() -> Self {
        Self::with_parts(BASE_URL, Arc::new(HttpTransport::new()), Arc::new(AssumeOnline))
    }

    /// Client with explicit base URL, transport, and connectivity probe.
    /// Tests wire in `testing::MockTransport` and `testing::FixedProbe` here.
    pub fn with_parts(
        base_url: &str,
        transport: Arc<dyn Transport>,
        probe: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        Self {
            base_url: base_url.to_string(),
            transport,
            probe,
        }
    }

    /// Run one search. Resolves exactly once: `Ok` with zero or more items,
    /// or the first failure hit along the connectivity → URL → transport →
    /// status → decode chain. An empty `results` list is success, not an
    /// error.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<SearchItem>> {
        if !self.probe.is_reachable() {
            return Err(SearchError::Offline);
        }

        let url = self.search_url(query)?;
        tracing::debug!(%url, "Issuing iTunes search request");

        let resp = self
            .transport
            .get(url.as_str(), &[("Content-Type", "application/json")])
            .await?;

        if resp.status != SUCCESS_CODE {
            tracing::warn!(status = resp.status, "iTunes search returned non-success status");
            return Err(SearchError::Status { status: resp.status });
        }

        let items = parse_items(&resp.body)?;
        tracing::debug!(count = items.len(), "Parsed iTunes search results");
        Ok(items)
    }

    /// Compose the search URL: fixed base plus `search?`, then the present
    /// parameters joined by `&` with no leading separator on the first.
    /// Parameter values arrive already whitespace-stripped.
    fn search_url(&self, query: &SearchQuery) -> Result<reqwest::Url> {
        let mut url = format!("{}{}", self.base_url, SEARCH_API);
        for (i, (key, value)) in query.pairs().iter().enumerate() {
            if i > 0 {
                url.push('&');
            }
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }

        reqwest::Url::parse(&url).map_err(|_| SearchError::InvalidUrl(url))
    }
}

impl Default for ItunesClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode the response body and project the `results` array. A body that is
/// not a JSON object is rejected; a missing or wrong-typed `results` field
/// yields an empty list.
fn parse_items(body: &[u8]) -> Result<Vec<SearchItem>> {
    let json: Value = serde_json::from_slice(body)?;
    let envelope = json.as_object().ok_or(SearchError::UnexpectedShape)?;

    let items = match envelope.get("results").and_then(Value::as_array) {
        Some(results) => results.iter().map(SearchItem::from_result).collect(),
        None => Vec::new(),
    };
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url_for(query: &SearchQuery) -> String {
        let client = ItunesClient::new();
        client.search_url(query).unwrap().to_string()
    }

    #[test]
    fn url_with_both_parameters_has_two_segments_and_no_leading_separator() {
        let url = url_for(&SearchQuery::new(Some("hello"), Some("song")));
        assert_eq!(url, "https://itunes.apple.com/search?term=hello&entity=song");
    }

    #[test]
    fn url_with_one_parameter_has_no_separator() {
        let url = url_for(&SearchQuery::new(Some("hello"), None));
        assert_eq!(url, "https://itunes.apple.com/search?term=hello");
    }

    #[test]
    fn url_strips_whitespace_inside_values() {
        let url = url_for(&SearchQuery::new(Some(" jack  johnson "), Some("musicVideo")));
        assert_eq!(
            url,
            "https://itunes.apple.com/search?term=jackjohnson&entity=musicVideo"
        );
    }

    #[test]
    fn unparseable_base_yields_invalid_url_with_the_composed_string() {
        let client = ItunesClient::with_parts(
            "not a url/",
            Arc::new(testing::MockTransport::new()),
            Arc::new(AssumeOnline),
        );
        let err = client.search_url(&SearchQuery::new(Some("x"), None)).unwrap_err();
        match err {
            SearchError::InvalidUrl(url) => assert_eq!(url, "not a url/search?term=x"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn parse_items_reads_the_results_array() {
        let body = br#"{"results":[{"artistName":"A"},{"artistName":"B"}]}"#;
        let items = parse_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title.as_deref(), Some("B"));
    }

    #[test]
    fn parse_items_treats_missing_results_as_empty() {
        assert!(parse_items(br#"{"resultCount":0}"#).unwrap().is_empty());
    }

    #[test]
    fn parse_items_treats_wrong_typed_results_as_empty() {
        assert!(parse_items(br#"{"results":"oops"}"#).unwrap().is_empty());
    }

    #[test]
    fn parse_items_rejects_non_object_top_level() {
        let err = parse_items(br#"[1,2,3]"#).unwrap_err();
        assert!(matches!(err, SearchError::UnexpectedShape));
    }

    #[test]
    fn parse_items_reports_decoder_message_for_invalid_json() {
        let err = parse_items(b"not json at all").unwrap_err();
        match err {
            SearchError::Decode(msg) => assert!(!msg.is_empty()),
            other => panic!("expected Decode, got {other:?}"),
        }
    }
}
