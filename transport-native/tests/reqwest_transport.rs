#![cfg(feature = "reqwest-client")]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

use httpkit_core::{HttpMethod, RequestParts, Transport, TransportResponse};
use transport_native::ReqwestTransport;
use url::Url;

/// Read one full HTTP request (head plus `Content-Length` body) off the
/// stream.
fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut seen = Vec::new();
    let mut buf = [0u8; 4096];
    loop {
        let Ok(n) = stream.read(&mut buf) else { break };
        if n == 0 {
            break;
        }
        seen.extend_from_slice(&buf[..n]);
        if let Some(pos) = seen.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&seen[..pos]).to_ascii_lowercase();
            let expected = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if seen.len() >= pos + 4 + expected {
                break;
            }
        }
    }
    seen
}

/// Serve exactly one canned response.
fn spawn_server(response: String) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let _ = read_request(&mut stream);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    addr
}

async fn perform(transport: &ReqwestTransport, parts: RequestParts) -> TransportResponse {
    let (tx, rx) = tokio::sync::oneshot::channel();
    transport.perform(
        parts,
        Box::new(move |response| {
            let _ = tx.send(response);
        }),
    );
    tokio::time::timeout(Duration::from_secs(5), rx)
        .await
        .unwrap()
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn round_trips_a_get_exchange() {
    let addr = spawn_server(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 11\r\nConnection: close\r\n\r\n{\"ok\":true}"
            .to_string(),
    );
    let transport = ReqwestTransport::new();
    let mut parts = RequestParts::new(Url::parse(&format!("http://{addr}/probe")).unwrap());
    parts.method = HttpMethod::Get;

    let response = perform(&transport, parts).await;

    assert!(response.error.is_none());
    let head = response.head.unwrap();
    assert_eq!(head.status, 200);
    let body: serde_json::Value = serde_json::from_slice(&response.body.unwrap()).unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn error_statuses_are_normal_envelopes() {
    let addr = spawn_server(
        "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string(),
    );
    let transport = ReqwestTransport::new();
    let mut parts = RequestParts::new(Url::parse(&format!("http://{addr}/probe")).unwrap());
    parts.method = HttpMethod::Get;

    let response = perform(&transport, parts).await;

    assert!(response.error.is_none());
    assert_eq!(response.head.unwrap().status, 503);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn unreachable_host_reports_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
        // listener dropped: nothing is listening on this port anymore
    };
    let transport = ReqwestTransport::new();
    let parts = RequestParts::new(Url::parse(&format!("http://{addr}/")).unwrap());

    let response = perform(&transport, parts).await;

    assert!(response.error.is_some());
    assert!(response.head.is_none());
}
