use super::*;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one HTTP exchange on a random port. Returns the base URL
/// and a handle resolving to the raw request text.
async fn one_shot_server(status_line: &'static str, body: &'static str) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut raw = Vec::new();
        let mut buf = [0_u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            raw.extend_from_slice(&buf[..n]);
            if n == 0 || request_complete(&raw) {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&raw).into_owned()
    });
    (format!("http://{addr}/api"), handle)
}

fn request_complete(raw: &[u8]) -> bool {
    let text = String::from_utf8_lossy(raw);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text[..header_end]
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().unwrap_or(0))
        })
        .unwrap_or(0);
    raw.len() >= header_end + 4 + content_length
}

fn transport_for(base_url: &str) -> ReqwestTransport {
    let config = ClientConfig::default().with_base_url(base_url).unwrap();
    ReqwestTransport::new(&config).unwrap()
}

#[test]
fn new_trims_base_url() {
    let transport = transport_for("http://localhost:8080/api/");
    assert_eq!(transport.base_url(), "http://localhost:8080/api");
}

#[tokio::test]
async fn post_sends_body_bearer_and_path() {
    let (base, server) = one_shot_server("200 OK", r#"{"code":200,"data":{"score":90}}"#).await;
    let transport = transport_for(&base);
    let req = ApiRequest::post("/exams/e7/submit").json(&json!({ "answers": ["A"] })).unwrap();

    let out = transport.execute(&req, Some("abc")).await.unwrap();
    assert_eq!(out, json!({ "code": 200, "data": { "score": 90 } }));

    let raw = server.await.unwrap();
    assert!(raw.starts_with("POST /api/exams/e7/submit HTTP/1.1"));
    assert!(raw.to_ascii_lowercase().contains("authorization: bearer abc"));
    assert!(raw.ends_with(r#"{"answers":["A"]}"#));
}

#[tokio::test]
async fn get_omits_absent_query_values() {
    let (base, server) = one_shot_server("200 OK", "[]").await;
    let transport = transport_for(&base);
    let req = ApiRequest::get("/questions/history/s1")
        .query("courseId", None::<String>)
        .query("limit", Some(50));

    transport.execute(&req, None).await.unwrap();

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /api/questions/history/s1?limit=50 HTTP/1.1"));
    assert!(!raw.to_ascii_lowercase().contains("authorization"));
}

#[tokio::test]
async fn non_success_status_surfaces_body() {
    let (base, server) = one_shot_server("401 Unauthorized", r#"{"message":"expired"}"#).await;
    let transport = transport_for(&base);

    let err = transport.execute(&ApiRequest::get("/exams/1"), Some("old")).await.unwrap_err();
    server.await.unwrap();

    assert!(err.is_unauthorized());
    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("expired"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn connection_refused_is_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = transport_for(&format!("http://{addr}"));
    let err = transport.execute(&ApiRequest::get("/exams/1"), None).await.unwrap_err();
    assert!(matches!(err, ClientError::Request(_)));
}
