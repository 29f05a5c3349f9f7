use std::io::Read;

use httpkit_core::{Error, OnComplete, RequestParts, ResponseHead, Transport, TransportResponse};
use url::Url;

use crate::thread_pool::ThreadPool;

const DEFAULT_WORKERS: usize = 4;

/// Blocking transport backed by a shared `ureq` agent.
///
/// Exchanges run on a small in-crate worker pool, so `perform` returns
/// immediately and the completion fires from a worker thread. The agent is
/// shared across exchanges and keeps its connection pool.
///
/// # Example
///
/// ```ignore
/// use httpkit_core::HttpRequest;
/// use transport_native::UreqTransport;
/// use url::Url;
///
/// let url = Url::parse("https://api.example.com/session")?;
/// let request = HttpRequest::json(url, UreqTransport::new());
/// ```
pub struct UreqTransport {
    agent: ureq::Agent,
    pool: ThreadPool,
}

impl UreqTransport {
    /// Transport with a default agent and worker pool.
    pub fn new() -> Self {
        Self::with_agent(ureq::AgentBuilder::new().build())
    }

    /// Transport reusing a caller-configured agent (proxy, TLS, connection
    /// pooling). Per-request timeouts from the descriptor still apply.
    pub fn with_agent(agent: ureq::Agent) -> Self {
        UreqTransport {
            agent,
            pool: ThreadPool::new(DEFAULT_WORKERS),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn perform(&self, request: RequestParts, on_complete: OnComplete) {
        let agent = self.agent.clone();
        self.pool
            .execute(move || on_complete(exchange(&agent, request)));
    }
}

fn exchange(agent: &ureq::Agent, request: RequestParts) -> TransportResponse {
    log::debug!("{} {}", request.method.as_str(), request.url);

    let mut call = agent
        .request(request.method.as_str(), request.url.as_str())
        .timeout(request.timeout);
    for (name, value) in &request.headers {
        call = call.set(name, value);
    }
    if let Some(directive) = request.cache_policy.cache_control() {
        call = call.set("Cache-Control", directive);
    }

    let result = match &request.body {
        Some(body) => call.send_bytes(body),
        None => call.call(),
    };

    // Anything with a status line made it through the transport layer;
    // status interpretation is the caller's concern.
    let response = match result {
        Ok(response) => response,
        Err(ureq::Error::Status(_, response)) => response,
        Err(error) => {
            return TransportResponse {
                body: None,
                head: None,
                error: Some(Error::Transport(Box::new(error))),
            }
        }
    };

    let head = head_of(&response);
    let mut body = Vec::new();
    match response.into_reader().read_to_end(&mut body) {
        Ok(_) => TransportResponse {
            body: Some(body),
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

fn head_of(response: &ureq::Response) -> ResponseHead {
    let headers = response
        .headers_names()
        .into_iter()
        .filter_map(|name| {
            let value = response.header(&name)?.to_string();
            Some((name, value))
        })
        .collect();
    ResponseHead {
        status: response.status(),
        headers,
        url: Url::parse(response.get_url()).ok(),
    }
}
