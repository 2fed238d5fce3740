use crate::core::{ConfigProvider, Greeting, Result};
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

pub struct GreeterServer<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> GreeterServer<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Binds the configured port on all interfaces. The greeting is derived
    /// from the configured port here and never changes afterwards.
    pub async fn bind(&self) -> Result<BoundServer> {
        let greeting = Greeting::new(self.config.port());
        let listener = TcpListener::bind(("0.0.0.0", self.config.port())).await?;

        tracing::debug!("listener bound on {}", listener.local_addr()?);

        Ok(BoundServer { listener, greeting })
    }
}

pub struct BoundServer {
    listener: TcpListener,
    greeting: Greeting,
}

impl BoundServer {
    pub fn greeting(&self) -> &Greeting {
        &self.greeting
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves until the process is terminated; returns only on a fatal
    /// listener error.
    pub async fn serve(self) -> Result<()> {
        axum::serve(self.listener, router(self.greeting)).await?;
        Ok(())
    }
}

/// Every method and path lands on the fallback handler, so no routing
/// table exists to dispatch on.
pub fn router(greeting: Greeting) -> Router {
    Router::new().fallback(greet).with_state(greeting)
}

async fn greet(method: Method, uri: Uri, State(greeting): State<Greeting>) -> impl IntoResponse {
    tracing::debug!("{} {}", method, uri.path());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
        greeting.body(),
    )
}
