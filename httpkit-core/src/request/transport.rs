use crate::request::structs::{RequestParts, TransportResponse};

/// Completion callback a transport invokes exactly once per exchange.
pub type OnComplete = Box<dyn FnOnce(TransportResponse) + Send + 'static>;

/// Minimal transport seam that can be implemented with any HTTP library.
///
/// The request component never performs I/O itself: it hands the descriptor
/// snapshot to a `Transport` and waits for the completion callback. An
/// implementation may run the exchange on any thread or scheduling context
/// it likes, but it must invoke `on_complete` exactly once per `perform`
/// call, eventually, whatever happens to the connection.
///
/// Connection-level failures (DNS, refused connection, timeout, broken TLS)
/// go into the envelope's `error` field. A response with a status line is
/// not a failure at this layer, whatever the status code says.
///
/// # Implementing the trait
///
/// ```ignore
/// use httpkit_core::{OnComplete, RequestParts, Transport, TransportResponse};
///
/// struct MyTransport {
///     // Your HTTP client here
/// }
///
/// impl Transport for MyTransport {
///     fn perform(&self, request: RequestParts, on_complete: OnComplete) {
///         // Run the exchange somewhere, then hand back the envelope.
///         on_complete(TransportResponse {
///             body: None,
///             head: None,
///             error: None,
///         });
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Start the exchange described by `request` and return immediately.
    fn perform(&self, request: RequestParts, on_complete: OnComplete);
}
