use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameter key for the free-text search term.
pub const PARAM_TERM: &str = "term";

/// Parameter key for the entity-type filter (e.g. "song", "album").
pub const PARAM_ENTITY: &str = "entity";

/// Search parameters, appended to the query string in declaration order
/// (`term` first, then `entity`). Absent parameters are skipped entirely.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub term: Option<String>,
    pub entity: Option<String>,
}

impl SearchQuery {
    pub fn new(term: Option<&str>, entity: Option<&str>) -> Self {
        Self {
            term: term.map(String::from),
            entity: entity.map(String::from),
        }
    }

    /// Present parameters as ordered (key, value) pairs, with all whitespace
    /// removed from values.
    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(term) = &self.term {
            pairs.push((PARAM_TERM, strip_whitespace(term)));
        }
        if let Some(entity) = &self.entity {
            pairs.push((PARAM_ENTITY, strip_whitespace(entity)));
        }
        pairs
    }
}

fn strip_whitespace(value: &str) -> String {
    value.split_whitespace().collect()
}

/// Flat projection of one result object from the response envelope. Fields
/// the backend omits stay `None`, never an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub artwork_url: Option<String>,
    pub preview_url: Option<String>,
}

impl SearchItem {
    /// Best-effort extraction: a missing or wrong-typed field stays `None`.
    /// `trackCensoredName` wins over `collectionCensoredName` for the
    /// description.
    pub(crate) fn from_result(result: &Value) -> Self {
        let field = |key: &str| result.get(key).and_then(Value::as_str).map(String::from);

        Self {
            title: field("artistName"),
            description: field("trackCensoredName").or_else(|| field("collectionCensoredName")),
            artwork_url: field("artworkUrl100"),
            preview_url: field("previewUrl"),
        }
    }
}
