use crate::{
    handler,
    io::{HttpCodec, HttpResponse},
};
use color_eyre::eyre::{Context, Result};
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio_util::codec::Framed;

#[cfg(test)]
mod tests;

pub struct Server {
    listener: TcpListener,
}

impl Server {
    pub async fn bind(host: &str, port: u16) -> Result<Self> {
        let listener = TcpListener::bind((host, port))
            .await
            .wrap_err_with(|| format!("Cannot bind to {}:{}", host, port))?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .wrap_err("Cannot read local address")
    }

    /// Accepts connections until the listener fails.
    pub async fn run(self) -> Result<()> {
        log::info!("Listening on http://{}", self.local_addr()?);
        loop {
            let (stream, peer) = self
                .listener
                .accept()
                .await
                .wrap_err("Cannot accept connection")?;
            tokio::spawn(async move {
                if let Err(err) = serve(stream).await {
                    log::error!("Connection with {} failed: {:?}", peer, err);
                }
            });
        }
    }
}

/// Answers a single request and closes the connection.
async fn serve(stream: TcpStream) -> Result<()> {
    let mut framed = Framed::new(stream, HttpCodec);
    let response = match framed.next().await {
        Some(Ok(request)) => {
            log::info!("Received {} {}", request.method, request.path);
            handler::handle(&request)
        }
        Some(Err(err)) => {
            log::error!("Received malformed request: {}", err);
            handler::bad_request()
        }
        None => return Ok(()),
    };
    respond(&mut framed, response).await
}

async fn respond(framed: &mut Framed<TcpStream, HttpCodec>, response: HttpResponse) -> Result<()> {
    framed
        .send(response)
        .await
        .wrap_err("Cannot send response")?;
    framed
        .close()
        .await
        .wrap_err("Cannot close connection")
}
