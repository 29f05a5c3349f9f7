#![allow(clippy::module_inception)]

mod error;
mod request;
mod serializer;

pub use error::{Error, Result};
pub use request::{
    CachePolicy, HttpMethod, HttpRequest, OnComplete, RequestParts, Requestable, ResponseHead,
    ResponseObserver, Transport, TransportResponse, DEFAULT_TIMEOUT,
};
pub use serializer::{BodySerializer, JsonSerializer};
