use crate::core::{BackendSelector, Result};
use crate::utils::error::GreetError;
use crate::utils::task::spawn_and_log_error;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

/// Cycles through a fixed backend pool in configuration order.
#[derive(Debug)]
pub struct RoundRobin {
    backends: Vec<String>,
    cursor: usize,
}

impl RoundRobin {
    pub fn new(backends: Vec<String>) -> Self {
        Self {
            backends,
            cursor: 0,
        }
    }
}

impl BackendSelector for RoundRobin {
    fn next_backend(&mut self) -> Option<String> {
        if self.backends.is_empty() {
            return None;
        }

        let backend = self.backends[self.cursor].clone();
        self.cursor = (self.cursor + 1) % self.backends.len();

        Some(backend)
    }
}

pub struct Balancer<S: BackendSelector> {
    port: u16,
    selector: Arc<Mutex<S>>,
}

impl<S: BackendSelector + 'static> Balancer<S> {
    pub fn new(port: u16, selector: S) -> Self {
        Self {
            port,
            selector: Arc::new(Mutex::new(selector)),
        }
    }

    pub async fn bind(self) -> Result<BoundBalancer<S>> {
        let listener = TcpListener::bind(("0.0.0.0", self.port)).await?;

        tracing::debug!("balancer bound on {}", listener.local_addr()?);

        Ok(BoundBalancer {
            listener,
            selector: self.selector,
        })
    }
}

pub struct BoundBalancer<S: BackendSelector> {
    listener: TcpListener,
    selector: Arc<Mutex<S>>,
}

impl<S: BackendSelector + 'static> BoundBalancer<S> {
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts connections until the process is terminated. Each connection
    /// is relayed on its own task; a failed relay is logged and dropped.
    pub async fn serve(self) -> Result<()> {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            tracing::debug!("accepted connection from {peer}");

            spawn_and_log_error(relay(stream, self.selector.clone()));
        }
    }
}

/// Reads the request up to the end of the HTTP header block, forwards the
/// collected bytes to the next backend, and relays the full response back.
async fn relay<S: BackendSelector + 'static>(
    mut stream: TcpStream,
    selector: Arc<Mutex<S>>,
) -> Result<()> {
    let mut buf = [0u8; 1024];
    let mut request = Vec::new();

    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);

        if request.windows(4).any(|window| window == b"\r\n\r\n") {
            break;
        }
    }

    let backend = {
        let mut selector = selector.lock().await;
        selector.next_backend()
    }
    .ok_or(GreetError::NoBackendError)?;

    tracing::debug!("relaying {} request bytes to {backend}", request.len());

    let mut upstream = TcpStream::connect(&backend).await?;
    upstream.write_all(&request).await?;

    let mut response = Vec::new();
    upstream.read_to_end(&mut response).await?;
    upstream.shutdown().await?;

    stream.write_all(&response).await?;
    stream.shutdown().await?;

    Ok(())
}
