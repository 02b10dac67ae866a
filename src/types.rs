//! Value types produced by the request-target parser.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Decoded query parameters in first-seen key order.
pub type QueryMap = IndexMap<String, QueryValue>;

// =============================================================================
// Query Value
// =============================================================================

/// Value of a query parameter.
///
/// A key holds a `Scalar` until it is seen a second time, at which point it is
/// upgraded to `Multi`. Serializes untagged: a string or an array of strings.
/// Deserializing rejects a list with fewer than two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, try_from = "RawQueryValue")]
pub enum QueryValue {
    /// Key appeared once.
    Scalar(String),
    /// Key appeared two or more times, values in order of appearance.
    Multi(Vec<String>),
}

impl QueryValue {
    /// Append a value for a repeated key.
    ///
    /// `Scalar(a)` becomes `Multi([a, value])`; `Multi` grows in place.
    pub(crate) fn push(&mut self, value: String) {
        match self {
            QueryValue::Scalar(first) => {
                let first = std::mem::take(first);
                *self = QueryValue::Multi(vec![first, value]);
            }
            QueryValue::Multi(values) => values.push(value),
        }
    }

    /// The value if the key appeared exactly once.
    #[inline]
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            QueryValue::Scalar(v) => Some(v),
            QueryValue::Multi(_) => None,
        }
    }

    /// First value seen for this key.
    #[inline]
    pub fn first(&self) -> &str {
        self.as_slice().first().map(String::as_str).unwrap_or_default()
    }

    /// Last value seen for this key.
    #[inline]
    pub fn last(&self) -> &str {
        self.as_slice().last().map(String::as_str).unwrap_or_default()
    }

    /// All values as a slice (one element for `Scalar`).
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        match self {
            QueryValue::Scalar(v) => std::slice::from_ref(v),
            QueryValue::Multi(values) => values,
        }
    }

    /// Number of occurrences of the key.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the key was repeated.
    #[inline]
    pub fn is_multi(&self) -> bool {
        matches!(self, QueryValue::Multi(_))
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            QueryValue::Scalar(v) => vec![v],
            QueryValue::Multi(values) => values,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Scalar(value.to_string())
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multi(values.into_iter().map(String::from).collect())
    }
}

/// Wire shape of a `QueryValue` before the list-length check.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQueryValue {
    Scalar(String),
    Multi(Vec<String>),
}

impl TryFrom<RawQueryValue> for QueryValue {
    type Error = String;

    fn try_from(raw: RawQueryValue) -> Result<Self, Self::Error> {
        match raw {
            RawQueryValue::Scalar(v) => Ok(QueryValue::Scalar(v)),
            RawQueryValue::Multi(values) if values.len() >= 2 => Ok(QueryValue::Multi(values)),
            RawQueryValue::Multi(values) => Err(format!(
                "repeated query value needs at least 2 entries, got {}",
                values.len()
            )),
        }
    }
}

// =============================================================================
// Parsed Target
// =============================================================================

/// Structured request-target: verbatim path plus decoded query parameters.
///
/// Deserializing rejects empty query keys and a path containing `?` or `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawParsedTarget")]
pub struct ParsedTarget {
    /// Everything before the first `?` (and before any `#`), not decoded.
    pub path: String,
    /// Decoded query parameters.
    pub query: QueryMap,
}

impl ParsedTarget {
    /// Parse the path-and-query of an `http::Uri`.
    ///
    /// A URI without path-and-query (e.g. authority form) parses as `""`.
    pub fn from_uri(uri: &http::Uri) -> Self {
        crate::target::parse(uri.path_and_query().map(|pq| pq.as_str()).unwrap_or(""))
    }

    /// Get the value stored for a key.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.query.get(key)
    }

    /// First value for a key.
    #[inline]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(QueryValue::first)
    }

    /// All values for a key (empty slice when absent).
    #[inline]
    pub fn get_all(&self, key: &str) -> &[String] {
        self.query.get(key).map(QueryValue::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

#[derive(Deserialize)]
struct RawParsedTarget {
    path: String,
    query: QueryMap,
}

impl TryFrom<RawParsedTarget> for ParsedTarget {
    type Error = String;

    fn try_from(raw: RawParsedTarget) -> Result<Self, Self::Error> {
        if raw.path.contains(['?', '#']) {
            return Err(format!("path '{}' contains a query or fragment delimiter", raw.path));
        }
        if raw.query.contains_key("") {
            return Err("query keys must not be empty".to_string());
        }

        Ok(ParsedTarget {
            path: raw.path,
            query: raw.query,
        })
    }
}
