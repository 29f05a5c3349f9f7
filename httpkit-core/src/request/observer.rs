use serde_json::{Map, Value};

use crate::error::Error;
use crate::request::structs::ResponseHead;

/// Receives the outcome of a sent request.
///
/// Exactly one of the two methods fires per completed send, on whatever
/// thread the transport completes on. The request holds its observer
/// non-owningly; an observer dropped before completion simply misses the
/// notification.
pub trait ResponseObserver: Send + Sync {
    /// The exchange completed without a transport-level error.
    ///
    /// `data` is the response body decoded to a mapping, or `None` when the
    /// response had no body or the body was not a decodable mapping.
    fn success(&self, data: Option<Map<String, Value>>, response: Option<&ResponseHead>);

    /// The exchange failed at the transport level. `error` is the
    /// transport's error, untranslated.
    fn failure(&self, error: Error, response: Option<&ResponseHead>);
}
