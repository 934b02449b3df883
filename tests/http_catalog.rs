// tests/http_catalog.rs
//
// The live page source against a throwaway local server.
//
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use cv_imprints::catalog::{CellAnchorExtractor, HttpCatalog, PageSource};
use cv_imprints::config::options::ReconcileOptions;
use cv_imprints::core::net::FetchError;
use cv_imprints::reconcile;

/// Serve one canned response per entry, one connection each, then close
/// the listener. Request lines are sent back over the channel.
fn serve(responses: Vec<(u16, String)>) -> (SocketAddr, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (code, body) in responses {
            let Ok((stream, _)) = listener.accept() else { return };
            let mut reader = BufReader::new(stream);

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            // drain headers
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            let _ = tx.send(request_line.trim_end().to_string());

            let reason = if code == 200 { "OK" } else { "Internal Server Error" };
            let resp = format!(
                "HTTP/1.1 {code} {reason}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = reader.into_inner();
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
    });

    (addr, rx)
}

fn opts_for(addr: SocketAddr) -> ReconcileOptions {
    ReconcileOptions {
        base_url: format!("http://{addr}/publishers/"),
        connect_timeout: Duration::from_secs(2),
        read_timeout: Duration::from_secs(2),
        pause_ms: 0,
        ..ReconcileOptions::default()
    }
}

/// An address nothing listens on.
fn closed_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

fn listing(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("<tr><td><a href=\"/p/\">{n}</a></td></tr>\n"))
        .collect()
}

#[test]
fn requests_page_sorted_alphabetically() {
    let (addr, requests) = serve(vec![(200, listing(&["Marvel"]))]);
    let mut src = HttpCatalog::new(&opts_for(addr));

    let body = src.fetch_page(1).unwrap();
    assert!(body.contains("Marvel"));
    assert_eq!(
        requests.recv_timeout(Duration::from_secs(5)).unwrap(),
        "GET /publishers/?page=1&sort=alphabetical HTTP/1.1"
    );
}

#[test]
fn non_success_status_is_a_status_error() {
    let (addr, _requests) = serve(vec![(500, String::from("oops"))]);
    let mut src = HttpCatalog::new(&opts_for(addr));

    match src.fetch_page(4) {
        Err(FetchError::Status { page, code }) => {
            assert_eq!(page, 4);
            assert_eq!(code, 500);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[test]
fn refused_connection_is_a_transport_error() {
    let mut src = HttpCatalog::new(&opts_for(closed_addr()));

    match src.fetch_page(2) {
        Err(FetchError::Transport { page, .. }) => assert_eq!(page, 2),
        other => panic!("expected a transport error, got {other:?}"),
    }
}

#[test]
fn gather_stops_when_the_server_goes_away() {
    // Page 1 is served, then the listener closes and page 2 is refused.
    let (addr, requests) = serve(vec![(200, listing(&["A", "B"]))]);
    let mut src = HttpCatalog::new(&opts_for(addr));

    let got = reconcile::gather(&mut src, &CellAnchorExtractor, &opts_for(addr), None);
    assert_eq!(got.names.len(), 2);
    assert_eq!(got.pages_requested, 2);
    assert_eq!(got.failed_page, Some(2));
    assert_eq!(
        requests.recv_timeout(Duration::from_secs(5)).unwrap(),
        "GET /publishers/?page=1&sort=alphabetical HTTP/1.1"
    );
}
