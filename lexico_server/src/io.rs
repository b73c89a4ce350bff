use crate::error::CodecError;
use bytes::{Bytes, BytesMut};
use std::fmt::Display;
use tokio_util::codec::{Decoder, Encoder};

#[cfg(test)]
mod tests;

const MAX_HEADERS: usize = 32;
pub(crate) const MAX_HEAD_LENGTH: usize = 16 * 1024;
pub(crate) const MAX_BODY_LENGTH: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Path without query string.
    pub path: String,
    pub body: Bytes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Ok,
    BadRequest,
    NotFound,
    MethodNotAllowed,
}

impl Status {
    pub const fn code(&self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
        }
    }

    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: Status,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(Status::Ok, body)
    }
}

/// Decodes one HTTP/1.1 request and encodes plain text responses.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCodec;

impl Decoder for HttpCodec {
    type Item = HttpRequest;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let mut headers = [httparse::EMPTY_HEADER; MAX_HEADERS];
        let mut request = httparse::Request::new(&mut headers);
        let head_length = match request.parse(src)? {
            httparse::Status::Complete(head_length) => head_length,
            httparse::Status::Partial if src.len() > MAX_HEAD_LENGTH => {
                return Err(CodecError::HeadTooLarge(src.len()))
            }
            httparse::Status::Partial => return Ok(None),
        };
        let content_length = match request
            .headers
            .iter()
            .find(|header| header.name.eq_ignore_ascii_case("Content-Length"))
        {
            Some(header) => std::str::from_utf8(header.value)
                .ok()
                .and_then(|value| value.trim().parse::<usize>().ok())
                .ok_or(CodecError::InvalidContentLength)?,
            None => 0,
        };
        if content_length > MAX_BODY_LENGTH {
            return Err(CodecError::PayloadTooLarge(content_length));
        }
        let method = request.method.unwrap_or_default().to_string();
        let path = request
            .path
            .unwrap_or_default()
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();

        let frame_length = head_length + content_length;
        if src.len() < frame_length {
            src.reserve(frame_length - src.len());
            return Ok(None);
        }
        let body = src.split_to(frame_length).split_off(head_length).freeze();
        log::debug!("Decoded: {} {} ({} bytes)", method, path, body.len());
        Ok(Some(HttpRequest { method, path, body }))
    }
}

impl Encoder<HttpResponse> for HttpCodec {
    type Error = CodecError;

    fn encode(&mut self, item: HttpResponse, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let head = format!(
            "HTTP/1.1 {}\r\n\
            Access-Control-Allow-Origin: *\r\n\
            Access-Control-Allow-Headers: Content-Type\r\n\
            Access-Control-Allow-Methods: POST, OPTIONS\r\n\
            Content-Type: text/plain; charset=utf-8\r\n\
            Content-Length: {}\r\n\
            Connection: close\r\n\r\n",
            item.status,
            item.body.len()
        );
        dst.reserve(head.len() + item.body.len());
        dst.extend_from_slice(head.as_bytes());
        dst.extend_from_slice(item.body.as_bytes());
        log::debug!("Encoded: {}", item.status);
        Ok(())
    }
}
