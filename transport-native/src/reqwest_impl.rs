use httpkit_core::{
    Error, HttpMethod, OnComplete, RequestParts, ResponseHead, Transport, TransportResponse,
};
use tokio::runtime::Handle;

/// Async transport backed by a shared `reqwest` client.
///
/// `perform` spawns the exchange onto the supplied tokio runtime handle and
/// returns immediately; the completion fires from the runtime's workers.
///
/// # Example
///
/// ```ignore
/// use httpkit_core::HttpRequest;
/// use transport_native::ReqwestTransport;
/// use url::Url;
///
/// #[tokio::main]
/// async fn main() {
///     let url = Url::parse("https://api.example.com/session").unwrap();
///     let request = HttpRequest::json(url, ReqwestTransport::new());
/// }
/// ```
pub struct ReqwestTransport {
    client: reqwest::Client,
    handle: Handle,
}

impl ReqwestTransport {
    /// Transport on the current tokio runtime.
    ///
    /// # Panics
    /// Panics when called outside a tokio runtime context; use
    /// [`ReqwestTransport::with_client`] to pass a handle explicitly.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new(), Handle::current())
    }

    /// Transport reusing a caller-configured client and runtime handle.
    /// Per-request timeouts from the descriptor still apply.
    pub fn with_client(client: reqwest::Client, handle: Handle) -> Self {
        ReqwestTransport { client, handle }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ReqwestTransport {
    fn perform(&self, request: RequestParts, on_complete: OnComplete) {
        let client = self.client.clone();
        self.handle.spawn(async move {
            on_complete(exchange(&client, request).await);
        });
    }
}

async fn exchange(client: &reqwest::Client, request: RequestParts) -> TransportResponse {
    log::debug!("{} {}", request.method.as_str(), request.url);

    let method = match request.method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
    };
    let mut builder = client
        .request(method, request.url.as_str())
        .timeout(request.timeout);
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    if let Some(directive) = request.cache_policy.cache_control() {
        builder = builder.header("Cache-Control", directive);
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = match builder.send().await {
        Ok(response) => response,
        Err(error) => {
            return TransportResponse {
                body: None,
                head: None,
                error: Some(Error::Transport(Box::new(error))),
            }
        }
    };

    let head = ResponseHead {
        status: response.status().as_u16(),
        headers: response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect(),
        url: Some(response.url().clone()),
    };

    match response.bytes().await {
        Ok(bytes) => TransportResponse {
            body: Some(bytes.to_vec()),
            head: Some(head),
            error: None,
        },
        Err(error) => TransportResponse {
            body: None,
            head: Some(head),
            error: Some(Error::Transport(Box::new(error))),
        },
    }
}
