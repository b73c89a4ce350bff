use super::*;
use pretty_assertions::assert_eq as eq;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

async fn start() -> SocketAddr {
    let server = Server::bind("127.0.0.1", 0).await.unwrap();
    let addr = server.local_addr().unwrap();
    tokio::spawn(server.run());
    addr
}

async fn exchange(addr: SocketAddr, raw: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

fn split(response: &str) -> (&str, &str) {
    response.split_once("\r\n\r\n").unwrap()
}

#[tokio::test]
async fn analyze_over_http() {
    let addr = start().await;
    let body = r#"{"code": "edad = \"veinte\""}"#;
    let response = exchange(
        addr,
        &format!(
            "POST /analyze HTTP/1.1\r\nHost: {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            addr,
            body.len(),
            body
        ),
    )
    .await;
    let (head, content) = split(&response);
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Access-Control-Allow-Origin: *"));
    eq!(content, lexico_frontend::analyze("edad = \"veinte\""));
    assert!(content.contains("Line 1: variable 'edad' must be numeric, not string"));
}

#[tokio::test]
async fn concurrent_requests() {
    let addr = start().await;
    let requests = ["x = 5\nprint(y)", "if x > 5\n  print(x)", "@ = 1"].map(|code| {
        let body = format!(r#"{{"code": {:?}}}"#, code);
        let raw = format!(
            "POST /analyze HTTP/1.1\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        );
        tokio::spawn(async move { (code, exchange(addr, &raw).await) })
    });
    for handle in requests {
        let (code, response) = handle.await.unwrap();
        let (_, content) = split(&response);
        eq!(content, lexico_frontend::analyze(code));
    }
}

#[tokio::test]
async fn malformed_request() {
    let addr = start().await;
    let response = exchange(addr, "POST /analyze HTTP/1.1\r\nContent-Length: x\r\n\r\n").await;
    let (head, content) = split(&response);
    assert!(head.starts_with("HTTP/1.1 400 Bad Request\r\n"));
    eq!(content, "bad request");
}

#[tokio::test]
async fn preflight() {
    let addr = start().await;
    let response = exchange(addr, "OPTIONS /analyze HTTP/1.1\r\n\r\n").await;
    let (head, content) = split(&response);
    assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
    assert!(head.contains("Access-Control-Allow-Methods: POST, OPTIONS"));
    eq!(content, "");
}
