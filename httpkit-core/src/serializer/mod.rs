mod json;

pub use json::JsonSerializer;

use serde_json::Value;

use crate::error::Result;

/// Converts structured values to wire bytes and back.
///
/// Implementations are pure and synchronous: no I/O, no state carried
/// between calls. [`HttpRequest`](crate::HttpRequest) uses the same
/// serializer for the outgoing body and for decoding the response, so a
/// request can be switched to another wire format (CBOR, XML, ...) by
/// injecting a different implementation.
///
/// # Implementing the trait
///
/// ```ignore
/// use httpkit_core::{BodySerializer, Error, Result};
/// use serde_json::Value;
///
/// struct CborSerializer;
///
/// impl BodySerializer for CborSerializer {
///     fn encode(&self, value: &Value) -> Result<Vec<u8>> {
///         // Reject values the format cannot carry, then convert.
///         todo!()
///     }
///
///     fn decode(&self, bytes: &[u8]) -> Result<Value> {
///         // Map malformed input to Error::Decoding.
///         todo!()
///     }
/// }
/// ```
pub trait BodySerializer: Send + Sync {
    /// Serialized byte form of `value`.
    ///
    /// Fails with [`Error::Encoding`](crate::Error::Encoding) when the value
    /// has no representation in the wire format. Representability is checked
    /// before conversion is attempted.
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;

    /// Structured value represented by `bytes`.
    ///
    /// Fails with [`Error::Decoding`](crate::Error::Decoding) on empty,
    /// truncated, or otherwise malformed input.
    fn decode(&self, bytes: &[u8]) -> Result<Value>;
}
