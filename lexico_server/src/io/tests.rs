use super::*;
use futures::StreamExt;
use pretty_assertions::assert_eq as eq;
use std::io::Cursor;
use tokio_util::codec::FramedRead;

fn post(path: &str, body: &str) -> String {
    format!(
        "POST {} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        path,
        body.len(),
        body
    )
}

#[tokio::test]
async fn framed_read_success() {
    let body = r#"{"code": "x = 1"}"#;
    let stream = Cursor::new(post("/analyze?v=1", body).into_bytes());
    let mut framed_read = FramedRead::new(stream, HttpCodec);
    eq!(
        framed_read.next().await.unwrap().unwrap(),
        HttpRequest {
            method: "POST".to_string(),
            path: "/analyze".to_string(),
            body: Bytes::from(body),
        }
    );
    assert!(framed_read.next().await.is_none());
}

#[test]
fn partial_frames() {
    let body = r#"{"code": "print(x)"}"#;
    let request = post("/analyze", body);
    let split = request.len() - 5;
    let mut codec = HttpCodec;
    let mut src = BytesMut::from(&request.as_bytes()[..20]);
    eq!(codec.decode(&mut src).unwrap(), None);
    src.extend_from_slice(&request.as_bytes()[20..split]);
    eq!(codec.decode(&mut src).unwrap(), None);
    src.extend_from_slice(&request.as_bytes()[split..]);
    let decoded = codec.decode(&mut src).unwrap().unwrap();
    eq!(decoded.body, Bytes::from(body));
    assert!(src.is_empty());
}

#[test]
fn missing_content_length() {
    let mut codec = HttpCodec;
    let mut src = BytesMut::from("OPTIONS /analyze HTTP/1.1\r\nHost: localhost\r\n\r\n");
    let decoded = codec.decode(&mut src).unwrap().unwrap();
    eq!(decoded.method, "OPTIONS");
    eq!(decoded.body, Bytes::new());
}

#[test]
fn invalid_content_length() {
    let mut codec = HttpCodec;
    let mut src = BytesMut::from("POST /analyze HTTP/1.1\r\nContent-Length: many\r\n\r\n");
    assert!(matches!(
        codec.decode(&mut src),
        Err(CodecError::InvalidContentLength)
    ));
}

#[test]
fn payload_too_large() {
    let mut codec = HttpCodec;
    let mut src = BytesMut::from(
        format!(
            "POST /analyze HTTP/1.1\r\nContent-Length: {}\r\n\r\n",
            MAX_BODY_LENGTH + 1
        )
        .as_str(),
    );
    assert!(matches!(
        codec.decode(&mut src),
        Err(CodecError::PayloadTooLarge(_))
    ));
}

#[test]
fn unfinished_head() {
    let mut codec = HttpCodec;
    let mut src = BytesMut::from("POST /analyze HTTP/1.1\r\nX-Padding: ");
    eq!(codec.decode(&mut src).unwrap(), None);
    src.extend_from_slice(&[b'a'; MAX_HEAD_LENGTH]);
    assert!(matches!(
        codec.decode(&mut src),
        Err(CodecError::HeadTooLarge(_))
    ));
}

#[test]
fn malformed_request_line() {
    let mut codec = HttpCodec;
    let mut src = BytesMut::from("NOT HTTP\r\n\r\n");
    assert!(matches!(
        codec.decode(&mut src),
        Err(CodecError::InvalidHttp(_))
    ));
}

#[test]
fn encode_response() {
    let mut codec = HttpCodec;
    let mut dst = BytesMut::new();
    codec
        .encode(HttpResponse::new(Status::NotFound, "not found"), &mut dst)
        .unwrap();
    eq!(
        std::str::from_utf8(&dst).unwrap(),
        "HTTP/1.1 404 Not Found\r\n\
        Access-Control-Allow-Origin: *\r\n\
        Access-Control-Allow-Headers: Content-Type\r\n\
        Access-Control-Allow-Methods: POST, OPTIONS\r\n\
        Content-Type: text/plain; charset=utf-8\r\n\
        Content-Length: 9\r\n\
        Connection: close\r\n\r\n\
        not found"
    );
}
