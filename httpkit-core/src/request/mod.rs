mod observer;
mod request;
mod structs;
mod transport;

pub use observer::ResponseObserver;
pub use request::{HttpRequest, Requestable};
pub use structs::{
    CachePolicy, HttpMethod, RequestParts, ResponseHead, TransportResponse, DEFAULT_TIMEOUT,
};
pub use transport::{OnComplete, Transport};
