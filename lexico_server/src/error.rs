use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("cannot read or write connection")]
    Io(#[from] std::io::Error),
    #[error("invalid http request: {0}")]
    InvalidHttp(#[from] httparse::Error),
    #[error("invalid Content-Length header")]
    InvalidContentLength,
    #[error("request head of at least {0} bytes is too large")]
    HeadTooLarge(usize),
    #[error("request body of {0} bytes is too large")]
    PayloadTooLarge(usize),
}
