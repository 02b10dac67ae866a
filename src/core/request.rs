//! HTTP request abstraction handed to routers.

use http::header::HeaderName;
use http::{HeaderMap, Method, Uri};

use crate::target::TargetParser;
use crate::types::ParsedTarget;

/// Incoming request head as seen by a router.
///
/// Note: Clone is intentionally not derived to prevent expensive copies.
#[derive(Debug)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    version: http::Version,
}

impl Request {
    /// Create a new request.
    #[inline]
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        Self {
            method,
            uri,
            headers,
            version: http::Version::HTTP_11,
        }
    }

    /// Get the HTTP method.
    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Get the raw (undecoded) request path.
    #[inline]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Get the raw query string.
    #[inline]
    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Get the full URI.
    #[inline]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Get the headers.
    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get a header value by string name (case-insensitive).
    #[inline]
    pub fn header(&self, name: &str) -> Option<&str> {
        HeaderName::from_bytes(name.as_bytes())
            .ok()
            .and_then(|n| self.headers.get(n))
            .and_then(|v| v.to_str().ok())
    }

    /// Get the HTTP version.
    #[inline]
    pub fn version(&self) -> http::Version {
        self.version
    }

    /// Parse the request-target with the default parser.
    #[inline]
    pub fn target(&self) -> ParsedTarget {
        ParsedTarget::from_uri(&self.uri)
    }

    /// Parse the request-target with a configured parser.
    #[inline]
    pub fn target_with(&self, parser: &TargetParser) -> ParsedTarget {
        parser.parse(self.uri.path_and_query().map(|pq| pq.as_str()).unwrap_or(""))
    }
}

impl<B> From<http::Request<B>> for Request {
    fn from(req: http::Request<B>) -> Self {
        let (parts, _body) = req.into_parts();
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            version: parts.version,
        }
    }
}
