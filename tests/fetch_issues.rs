//! Integration tests for the issues fetch against a local HTTP server.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use fivecalls_cli::{FiveCallsClient, FiveCallsError, IssueQuery, Location};

const VALID_BODY: &str = r#"{
    "splitDistrict": false,
    "invalidAddress": false,
    "normalizedLocation": "Brooklyn, NY",
    "issues": [
        {"id": 1, "name": "First", "slug": "first", "reason": "r", "script": "s"},
        {"id": 2, "name": "Second", "slug": "second", "reason": "r", "script": "s"},
        {"id": 3, "name": "Third", "slug": "third", "reason": "r", "script": "s", "inactive": true}
    ]
}"#;

struct TestServer {
    client: FiveCallsClient,
    requests: Arc<Mutex<Vec<String>>>,
    join: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.join.abort();
    }
}

async fn start_server(status: StatusCode, body: &'static str) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&requests);

    let join = tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let io = TokioIo::new(stream);
            let seen = Arc::clone(&seen);
            let svc = service_fn(move |req: Request<Incoming>| {
                seen.lock().expect("lock").push(req.uri().to_string());
                async move {
                    Ok::<_, Infallible>(
                        Response::builder()
                            .status(status)
                            .header("Content-Type", "application/json; charset=utf-8")
                            .body(Full::new(Bytes::from_static(body.as_bytes())))
                            .expect("response"),
                    )
                }
            });
            tokio::spawn(async move {
                let _ = http1::Builder::new().serve_connection(io, svc).await;
            });
        }
    });

    let client =
        FiveCallsClient::with_endpoint(&format!("http://{addr}")).expect("create client");
    TestServer {
        client,
        requests,
        join,
    }
}

#[tokio::test]
async fn fetches_and_decodes_issues() {
    let server = start_server(StatusCode::OK, VALID_BODY).await;

    let fetched = server
        .client
        .fetch_issues(&IssueQuery::Nearby(Some(Location::Address(
            "11201".to_string(),
        ))))
        .await
        .expect("fetch succeeds");

    assert_eq!(fetched.list.issues.len(), 3);
    assert_eq!(fetched.list.normalized_location, "Brooklyn, NY");
    assert_eq!(fetched.meta.status, 200);
    assert!(fetched.meta.headers.contains_key("content-type"));

    let requests = server.requests.lock().expect("lock");
    assert_eq!(requests.as_slice(), ["/issues/?address=11201"]);
}

#[tokio::test]
async fn all_query_requests_inactive_issues() {
    let server = start_server(StatusCode::OK, VALID_BODY).await;

    server
        .client
        .fetch_issues(&IssueQuery::All)
        .await
        .expect("fetch succeeds");

    let requests = server.requests.lock().expect("lock");
    assert_eq!(requests.as_slice(), ["/issues/?inactive=true"]);
}

#[tokio::test]
async fn nearby_without_location_sends_no_query() {
    let server = start_server(StatusCode::OK, VALID_BODY).await;

    server
        .client
        .fetch_issues(&IssueQuery::Nearby(None))
        .await
        .expect("fetch succeeds");

    let requests = server.requests.lock().expect("lock");
    assert_eq!(requests.as_slice(), ["/issues/"]);
}

#[tokio::test]
async fn server_error_is_reported_as_unexpected_status() {
    let server = start_server(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;

    let result = server.client.fetch_issues(&IssueQuery::All).await;

    assert!(matches!(
        result,
        Err(FiveCallsError::UnexpectedStatus { status: 500 })
    ));
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = start_server(StatusCode::OK, "{not json").await;

    let result = server.client.fetch_issues(&IssueQuery::All).await;

    assert!(matches!(result, Err(FiveCallsError::Decode { .. })));
}

#[tokio::test]
async fn empty_body_is_a_decode_error() {
    let server = start_server(StatusCode::OK, "").await;

    let result = server.client.fetch_issues(&IssueQuery::All).await;

    assert!(matches!(result, Err(FiveCallsError::Decode { .. })));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop the listener so the port refuses connections.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client =
        FiveCallsClient::with_endpoint(&format!("http://{addr}")).expect("create client");
    let result = client.fetch_issues(&IssueQuery::All).await;

    assert!(matches!(result, Err(FiveCallsError::Http(_))));
}
