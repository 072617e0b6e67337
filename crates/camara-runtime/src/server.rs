//! HTTP server implementation

use crate::handler::RequestHandler;
use crate::shutdown::ShutdownSignal;
use crate::RuntimeState;
use camara_config::Config;
use camara_core::{Error, Result};
use camara_router::Router;
use camara_upstream::UpstreamClient;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

/// HTTP server
///
/// Owns the route catalog, the upstream client and the listener
/// lifecycle. [`Server::serve`] runs the accept loop until the
/// shutdown signal fires, then drains in-flight requests.
#[derive(Debug)]
pub struct Server {
    config: Config,
    router: Arc<Router>,
    client: Arc<UpstreamClient>,
    handler: RequestHandler,
    state: Arc<RwLock<RuntimeState>>,
    shutdown: ShutdownSignal,
    request_count: Arc<AtomicUsize>,
}

impl Server {
    /// Create a server from a validated configuration
    pub fn new(config: Config) -> Result<Self> {
        let router = Arc::new(Router::new()?);
        let client = Arc::new(UpstreamClient::new(
            &config.upstream.base_url,
            config.upstream.request_timeout,
        )?);
        let request_count = Arc::new(AtomicUsize::new(0));

        let handler = RequestHandler::new(
            Arc::clone(&router),
            Arc::clone(&client),
            Arc::clone(&request_count),
        );

        tracing::info!(
            routes = router.len(),
            upstream = %client.base_url(),
            "Gateway components initialized"
        );

        Ok(Self {
            config,
            router,
            client,
            handler,
            state: Arc::new(RwLock::new(RuntimeState::Initializing)),
            shutdown: ShutdownSignal::new(),
            request_count,
        })
    }

    /// Get the current state
    pub async fn state(&self) -> RuntimeState {
        *self.state.read().await
    }

    /// Get the configured listen address
    pub fn listen_addr(&self) -> SocketAddr {
        self.config.server.listen
    }

    /// Get the route catalog
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Get the number of in-flight requests
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Get the shutdown signal
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.clone()
    }

    /// Bind the configured listen address
    ///
    /// Splitting bind from [`Server::serve`] lets callers bind port 0
    /// and read the assigned address before serving.
    pub async fn bind(&self) -> Result<TcpListener> {
        TcpListener::bind(self.listen_addr())
            .await
            .map_err(|e| Error::Runtime(format!("Failed to bind to {}: {e}", self.listen_addr())))
    }

    /// Bind and run the server until shutdown
    pub async fn run(&self) -> Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    /// Run the accept loop on an already-bound listener
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        {
            let mut state = self.state.write().await;
            *state = RuntimeState::Running;
        }

        let local_addr = listener
            .local_addr()
            .map_err(|e| Error::Runtime(format!("Failed to read local address: {e}")))?;

        tracing::info!(
            listen = %local_addr,
            routes = self.router.len(),
            upstream = %self.client.base_url(),
            "Gateway starting"
        );

        let mut shutdown_rx = self.shutdown.subscribe();

        loop {
            tokio::select! {
                result = listener.accept() => {
                    match result {
                        Ok((stream, addr)) => {
                            tracing::trace!("Accepted connection from {}", addr);

                            let handler = self.handler.clone();

                            tokio::spawn(async move {
                                let service = hyper::service::service_fn(move |req| {
                                    let handler = handler.clone();
                                    async move {
                                        handler.handle(req).await.or_else(|e| {
                                            tracing::error!("Request handler error: {}", e);
                                            let status = e.to_status_code();
                                            http::Response::builder()
                                                .status(status)
                                                .body(http_body_util::Full::new(bytes::Bytes::from(
                                                    format!("Error: {}", e),
                                                )))
                                                .map_err(|e| {
                                                    tracing::error!("Failed to build error response: {}", e);
                                                    e
                                                })
                                        })
                                    }
                                });

                                let io = hyper_util::rt::TokioIo::new(stream);
                                if let Err(e) = hyper::server::conn::http1::Builder::new()
                                    .serve_connection(io, service)
                                    .await
                                {
                                    tracing::error!("HTTP connection error: {}", e);
                                }
                            });
                        }
                        Err(e) => {
                            tracing::error!("Failed to accept connection: {}", e);
                        }
                    }
                }

                _ = shutdown_rx.recv() => {
                    tracing::info!("Shutdown signal received");
                    break;
                }
            }
        }

        {
            let mut state = self.state.write().await;
            *state = RuntimeState::ShuttingDown;
        }

        tracing::info!("Gateway shutting down gracefully");

        let shutdown_timeout = self.config.server.shutdown_timeout;
        let start = std::time::Instant::now();

        tracing::info!(
            timeout_secs = shutdown_timeout.as_secs(),
            "Waiting for in-flight requests to complete"
        );

        // Poll the in-flight counter until zero or timeout
        loop {
            let active = self.request_count.load(Ordering::Relaxed);

            if active == 0 {
                tracing::info!("All requests completed, shutting down cleanly");
                break;
            }

            if start.elapsed() >= shutdown_timeout {
                tracing::warn!(
                    active_requests = active,
                    "Shutdown timeout reached, forcing shutdown"
                );
                break;
            }

            tracing::debug!(
                active_requests = active,
                elapsed_ms = start.elapsed().as_millis(),
                "Waiting for active requests to complete"
            );

            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        {
            let mut state = self.state.write().await;
            *state = RuntimeState::Stopped;
        }

        tracing::info!(
            shutdown_duration_ms = start.elapsed().as_millis(),
            "Gateway stopped"
        );

        Ok(())
    }
}
