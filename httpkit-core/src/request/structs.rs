use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Timeout applied to freshly constructed descriptors.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Request methods supported by the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    /// Wire token for the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Cache directive attached to a request.
///
/// The native transports keep no HTTP cache of their own, so only the
/// variants that concern intermediary caches carry a wire directive; see
/// [`CachePolicy::cache_control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Follow the protocol's own caching rules.
    ProtocolDefault,
    /// Skip locally cached data but allow intermediary caches.
    IgnoreLocalCache,
    /// Bypass local and intermediary caches entirely.
    #[default]
    IgnoreLocalAndRemoteCache,
    /// Prefer cached data regardless of age, loading only on a miss.
    ReturnCacheElseLoad,
    /// Serve from cache only; never touch the network.
    ReturnCacheOnly,
}

impl CachePolicy {
    /// `Cache-Control` directive a transport should put on the wire, if the
    /// policy concerns anything beyond the client's own cache.
    pub fn cache_control(&self) -> Option<&'static str> {
        match self {
            CachePolicy::ProtocolDefault | CachePolicy::IgnoreLocalCache => None,
            CachePolicy::IgnoreLocalAndRemoteCache => Some("no-cache, no-store"),
            CachePolicy::ReturnCacheElseLoad => Some("max-stale"),
            CachePolicy::ReturnCacheOnly => Some("only-if-cached"),
        }
    }
}

/// Mutable request descriptor, consumed by a transport as a snapshot at send
/// time.
///
/// Headers are a list of pairs rather than a map: configuring the same name
/// twice keeps both entries, matching HTTP's repeated-header semantics.
#[derive(Debug, Clone)]
pub struct RequestParts {
    pub url: Url,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub timeout: Duration,
    pub cache_policy: CachePolicy,
    pub body: Option<Vec<u8>>,
}

impl RequestParts {
    /// Descriptor for `url` with the standard defaults: POST, cache bypass,
    /// 10 second timeout, no headers, no body.
    pub fn new(url: Url) -> Self {
        RequestParts {
            url,
            method: HttpMethod::Post,
            headers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            cache_policy: CachePolicy::default(),
            body: None,
        }
    }
}

/// Transport-level response metadata.
///
/// Carries whatever the transport could observe; a failed exchange may have
/// none of it.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub url: Option<Url>,
}

/// Completion envelope a transport hands back, exactly once per exchange.
///
/// `error` set means the exchange failed below the HTTP layer; any response
/// with a status line is reported with `error` unset, whatever the status.
#[derive(Debug)]
pub struct TransportResponse {
    pub body: Option<Vec<u8>>,
    pub head: Option<ResponseHead>,
    pub error: Option<Error>,
}
