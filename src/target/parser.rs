//! Request-target splitting and query accumulation.

use indexmap::map::Entry;
use tracing::trace;

use super::decode::{decode_component, DecodeMode};
use crate::types::{ParsedTarget, QueryMap, QueryValue};

/// Split a raw request-target into path and raw query string.
///
/// Everything from the first `#` on is discarded. The path is everything
/// before the first `?`; the query is everything after it, including any
/// further `?` characters.
#[inline]
pub fn split_target(raw: &str) -> (&str, Option<&str>) {
    let raw = match raw.find('#') {
        Some(pos) => &raw[..pos],
        None => raw,
    };

    match raw.find('?') {
        Some(pos) => (&raw[..pos], Some(&raw[pos + 1..])),
        None => (raw, None),
    }
}

/// Parse a raw query string (without the leading `?`) into a `QueryMap`.
pub fn parse_query_string(query: &str, mode: DecodeMode) -> QueryMap {
    let pair_count = query.matches('&').count() + 1;
    let mut params = QueryMap::with_capacity(pair_count.min(16));

    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }

        let (key, value) = match pair.find('=') {
            Some(pos) => (&pair[..pos], &pair[pos + 1..]),
            None => (pair, ""),
        };

        let key = decode_component(key, mode);
        if key.is_empty() {
            trace!(pair, "dropping query pair with empty key");
            continue;
        }

        let value = decode_component(value, mode);
        match params.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(QueryValue::Scalar(value));
            }
        }
    }

    params
}

/// Parse a raw request-target.
pub fn parse_target(raw: &str, mode: DecodeMode) -> ParsedTarget {
    let (path, query) = split_target(raw);

    ParsedTarget {
        path: path.to_string(),
        query: query
            .map(|q| parse_query_string(q, mode))
            .unwrap_or_default(),
    }
}
