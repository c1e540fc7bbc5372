//! `SkybotServer` builder and server loop.
//!
//! This is the entry point for running a bot. It ties the layers
//! together: HTTP (axum) → protocol codec → [`Dispatcher`] → [`Bot`].

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::routing::post;
use axum::Router;
use skybot_protocol::{Codec, JsonCodec, ProtocolError, PROTOCOL_VERSION};
use tokio::net::TcpListener;
use tokio::sync::{Mutex, Notify};

use crate::handler::handle_request;
use crate::{Bot, Dispatcher, ServerConfig, SkybotError};

/// Shared server state passed to each request handler.
///
/// Wrapped in `Arc` so it can be cheaply cloned into every request.
/// The dispatcher sits behind a `Mutex`: the bot sees one request at a
/// time.
pub(crate) struct ServerState<B, C> {
    pub(crate) dispatcher: Mutex<Dispatcher<B, C>>,
    pub(crate) config: ServerConfig,
    shutdown: Arc<Notify>,
    fatal: Mutex<Option<ProtocolError>>,
}

impl<B, C> ServerState<B, C> {
    /// Records a fatal error and asks the server loop to stop.
    pub(crate) async fn fail(&self, err: ProtocolError) {
        let mut fatal = self.fatal.lock().await;
        if fatal.is_none() {
            *fatal = Some(err);
        }
        self.shutdown.notify_one();
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builder for configuring and starting a bot server.
///
/// # Example
///
/// ```rust,ignore
/// use skybot::prelude::*;
///
/// let server = SkybotServer::builder()
///     .bind("0.0.0.0:6370")
///     .build(MyBot::default())
///     .await?;
/// server.run().await
/// ```
#[derive(Debug, Clone, Default)]
pub struct SkybotServerBuilder {
    config: ServerConfig,
}

impl SkybotServerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_string();
        self
    }

    /// Sets the per-request deadline.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.config.request_timeout = timeout;
        self
    }

    /// Sets the largest accepted request body.
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.config.max_body_bytes = limit;
        self
    }

    /// Replaces the whole configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Binds the listener and wraps `bot` with the JSON codec.
    pub async fn build<B: Bot>(self, bot: B) -> Result<SkybotServer<B>, SkybotError> {
        self.build_with_codec(bot, JsonCodec).await
    }

    /// Binds the listener and wraps `bot` with a custom codec.
    pub async fn build_with_codec<B: Bot, C: Codec>(
        self,
        bot: B,
        codec: C,
    ) -> Result<SkybotServer<B, C>, SkybotError> {
        let addr = self.config.bind_addr.clone();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| SkybotError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| SkybotError::Bind { addr, source })?;

        let state = Arc::new(ServerState {
            dispatcher: Mutex::new(Dispatcher::with_codec(bot, codec)),
            config: self.config,
            shutdown: Arc::new(Notify::new()),
            fatal: Mutex::new(None),
        });

        Ok(SkybotServer {
            listener,
            local_addr,
            state,
        })
    }
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// A bound bot server.
///
/// Call [`run()`](Self::run) to start answering the host.
pub struct SkybotServer<B, C = JsonCodec> {
    listener: TcpListener,
    local_addr: SocketAddr,
    state: Arc<ServerState<B, C>>,
}

impl SkybotServer<(), JsonCodec> {
    /// Creates a new builder.
    pub fn builder() -> SkybotServerBuilder {
        SkybotServerBuilder::new()
    }
}

impl<B: Bot, C: Codec> SkybotServer<B, C> {
    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Returns a handle that stops the server from another task.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.state.shutdown))
    }

    /// Serves requests until shut down.
    ///
    /// Returns an error if serving fails, or if the host turned out to
    /// speak a different protocol version. In that case in-flight
    /// requests finish before this returns.
    pub async fn run(self) -> Result<(), SkybotError> {
        let app = Router::new()
            .route("/{route}", post(handle_request::<B, C>))
            .with_state(Arc::clone(&self.state));

        tracing::info!(
            addr = %self.local_addr,
            version = PROTOCOL_VERSION,
            "skybot server listening"
        );

        let shutdown = Arc::clone(&self.state.shutdown);
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move { shutdown.notified().await })
            .await
            .map_err(SkybotError::Serve)?;

        if let Some(err) = self.state.fatal.lock().await.take() {
            return Err(err.into());
        }

        tracing::info!("skybot server stopped");
        Ok(())
    }
}

/// Stops a running [`SkybotServer`].
#[derive(Debug, Clone)]
pub struct ShutdownHandle(Arc<Notify>);

impl ShutdownHandle {
    /// Asks the server to stop accepting connections.
    ///
    /// In-flight requests still finish, after which
    /// [`SkybotServer::run`] returns `Ok(())`. Calling this before `run`
    /// starts is remembered, so the server stops as soon as it starts.
    pub fn shutdown(&self) {
        self.0.notify_one();
    }
}
