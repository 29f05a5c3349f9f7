use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use serde_json::{Map, Value};
use url::Url;

use crate::error::Result;
use crate::request::observer::ResponseObserver;
use crate::request::structs::{CachePolicy, HttpMethod, RequestParts, TransportResponse};
use crate::request::transport::Transport;
use crate::serializer::{BodySerializer, JsonSerializer};

type ObserverSlot = Mutex<Option<Weak<dyn ResponseObserver>>>;

/// Object-safe surface for callers that hold a request behind an
/// abstraction: attach an observer, send.
pub trait Requestable {
    fn set_observer(&self, observer: Option<&Arc<dyn ResponseObserver>>);
    fn send(&self);
}

/// A single configurable HTTP exchange.
///
/// The request owns a mutable descriptor that configuration calls edit in
/// place. `send` hands a snapshot of the descriptor to the injected
/// [`Transport`] and returns immediately; when the transport completes, the
/// response body is decoded through the injected [`BodySerializer`] and the
/// outcome is delivered to the current observer.
pub struct HttpRequest<T, S>
where
    T: Transport,
    S: BodySerializer + 'static,
{
    parts: RequestParts,
    transport: T,
    serializer: Arc<S>,
    observer: Arc<ObserverSlot>,
}

impl<T: Transport> HttpRequest<T, JsonSerializer> {
    /// Request carrying JSON bodies, the usual wire format.
    pub fn json(url: Url, transport: T) -> Self {
        Self::new(url, transport, JsonSerializer)
    }
}

impl<T, S> HttpRequest<T, S>
where
    T: Transport,
    S: BodySerializer + 'static,
{
    /// Request for `url` with the descriptor defaults: POST, cache bypass,
    /// 10 second timeout, no headers, no body.
    pub fn new(url: Url, transport: T, serializer: S) -> Self {
        HttpRequest {
            parts: RequestParts::new(url),
            transport,
            serializer: Arc::new(serializer),
            observer: Arc::new(Mutex::new(None)),
        }
    }

    /// Descriptor in its current state.
    pub fn parts(&self) -> &RequestParts {
        &self.parts
    }

    pub fn set_cache_policy(&mut self, policy: CachePolicy) {
        self.parts.cache_policy = policy;
    }

    pub fn set_method(&mut self, method: HttpMethod) {
        self.parts.method = method;
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.parts.timeout = timeout;
    }

    /// Merge `headers` into the descriptor.
    ///
    /// Entries are appended, never replaced: configuring a name twice keeps
    /// both values. `None` is a no-op.
    pub fn set_headers(&mut self, headers: Option<&HashMap<String, String>>) {
        let Some(headers) = headers else {
            return;
        };
        for (name, value) in headers {
            self.parts.headers.push((name.clone(), value.clone()));
        }
    }

    /// Encode `parameters` through the serializer and store the bytes as the
    /// request body.
    ///
    /// `None` is a no-op. On encode failure the error is returned
    /// synchronously and the body keeps its previous value; nothing is sent.
    pub fn set_parameters(&mut self, parameters: Option<&Map<String, Value>>) -> Result<()> {
        let Some(parameters) = parameters else {
            return Ok(());
        };
        let body = self.serializer.encode(&Value::Object(parameters.clone()))?;
        self.parts.body = Some(body);
        Ok(())
    }

    /// Replace or clear the observer. The reference is held non-owningly and
    /// may be swapped at any point before the completion fires; the last
    /// value wins.
    pub fn set_observer(&self, observer: Option<&Arc<dyn ResponseObserver>>) {
        *self.observer.lock().expect("poisoned") = observer.map(Arc::downgrade);
    }

    /// Hand a snapshot of the descriptor to the transport and return
    /// immediately.
    ///
    /// The transport's completion fires exactly once, on an arbitrary
    /// thread, and delivers exactly one of `success`/`failure` to whichever
    /// observer is registered at that moment. A transport-level error goes
    /// to `failure` untranslated. Otherwise the body is decoded and passed
    /// to `success`; note the sharp edge that an undecodable or non-mapping
    /// body is delivered as `success(None, ...)`, not as a failure.
    pub fn send(&self) {
        let serializer = Arc::clone(&self.serializer);
        let observer = Arc::clone(&self.observer);
        self.transport.perform(
            self.parts.clone(),
            Box::new(move |response| complete(serializer.as_ref(), &observer, response)),
        );
    }
}

impl<T, S> Requestable for HttpRequest<T, S>
where
    T: Transport,
    S: BodySerializer + 'static,
{
    fn set_observer(&self, observer: Option<&Arc<dyn ResponseObserver>>) {
        HttpRequest::set_observer(self, observer);
    }

    fn send(&self) {
        HttpRequest::send(self);
    }
}

fn complete<S: BodySerializer>(serializer: &S, slot: &ObserverSlot, response: TransportResponse) {
    let observer = slot
        .lock()
        .expect("poisoned")
        .as_ref()
        .and_then(Weak::upgrade);
    let Some(observer) = observer else {
        log::debug!("observer gone before completion, dropping the result");
        return;
    };

    let TransportResponse { body, head, error } = response;
    if let Some(error) = error {
        observer.failure(error, head.as_ref());
        return;
    }
    observer.success(decode_body(serializer, body.as_deref()), head.as_ref());
}

fn decode_body<S: BodySerializer>(
    serializer: &S,
    body: Option<&[u8]>,
) -> Option<Map<String, Value>> {
    let body = body?;
    match serializer.decode(body) {
        Ok(Value::Object(map)) => Some(map),
        Ok(_) => {
            log::warn!("response body is not a mapping, treating as no data");
            None
        }
        Err(e) => {
            log::warn!("unable to decode response body: {e}");
            None
        }
    }
}
