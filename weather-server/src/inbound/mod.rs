/*!
   Module `inbound` exposes the weather domain over HTTP and drives the server lifecycle.
*/

mod api;
mod handlers;
pub mod lifecycle;


use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Context;
use axum::{Router, extract::Request, response::Response, routing::get};
use hyper::server::conn::http1;
use hyper_util::{
    rt::{TokioIo, TokioTimer},
    server::graceful::GracefulShutdown,
    service::TowerToHyperService,
};
use tokio::{net, sync::watch, task::JoinSet};
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::domain::ports::WeatherService;
use handlers::{get_temperature_handler, health_handler, ready_handler};
use lifecycle::{DRAIN_TIMEOUT, LifecycleState};

const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpServerConfig<'a> {
    pub host: &'a str,
    pub port: u16,
}

/// The global application state shared between all request handlers.
#[derive(Debug)]
struct AppState<WS: WeatherService> {
    weather_service: Arc<WS>,
}

impl<WS: WeatherService> Clone for AppState<WS> {
    fn clone(&self) -> Self {
        Self {
            weather_service: Arc::clone(&self.weather_service),
        }
    }
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
    lifecycle: watch::Sender<LifecycleState>,
    drain_timeout: Duration,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        weather_service: impl WeatherService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let (lifecycle, _) = watch::channel(LifecycleState::Starting);

        let state = AppState {
            weather_service: Arc::new(weather_service),
        };

        // One `info` line per request, carrying method, uri, final status and latency.
        let access_log = TraceLayer::new_for_http()
            .make_span_with(|request: &Request| {
                tracing::info_span!("request", method = %request.method(), uri = %request.uri())
            })
            .on_request(())
            .on_response(|response: &Response, latency: Duration, _: &Span| {
                tracing::info!(status = response.status().as_u16(), ?latency, "response");
            })
            .on_failure(());

        let router = Router::new()
            .nest("/api", api_routes())
            .layer(access_log)
            .with_state(state);

        let listener = net::TcpListener::bind((config.host, config.port))
            .await
            .with_context(|| format!("failed to listen on {}:{}", config.host, config.port))?;

        Ok(Self {
            router,
            listener,
            lifecycle,
            drain_timeout: DRAIN_TIMEOUT,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Observe the server's [LifecycleState].
    pub fn lifecycle(&self) -> watch::Receiver<LifecycleState> {
        self.lifecycle.subscribe()
    }

    #[cfg(test)]
    fn with_drain_timeout(mut self, drain_timeout: Duration) -> Self {
        self.drain_timeout = drain_timeout;
        self
    }

    /// Serve requests until `shutdown` is cancelled, then drain.
    ///
    /// Once `shutdown` fires the listener is closed and in-flight requests get the drain timeout
    /// to finish. Connections still open after that are aborted; the overrun is logged but is not
    /// an error.
    pub async fn run(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        let Self {
            router,
            listener,
            lifecycle,
            drain_timeout,
        } = self;

        tracing::info!("listening on {}", listener.local_addr()?);
        transition(&lifecycle, LifecycleState::Listening);

        let graceful = GracefulShutdown::new();
        let mut connections = JoinSet::new();

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
                accepted = listener.accept() => {
                    let (stream, remote_addr) = match accepted {
                        Ok(conn) => conn,
                        Err(e) => {
                            tracing::warn!("failed to accept connection: {}", e);
                            tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                            continue;
                        }
                    };

                    let service = TowerToHyperService::new(router.clone());
                    let conn = http1::Builder::new()
                        .timer(TokioTimer::new())
                        .serve_connection(TokioIo::new(stream), service);
                    let conn = graceful.watch(conn);

                    connections.spawn(async move {
                        if let Err(e) = conn.await {
                            tracing::debug!("connection from {} closed: {}", remote_addr, e);
                        }
                    });
                }
            }
        }

        drop(listener);
        transition(&lifecycle, LifecycleState::ShuttingDown);

        if tokio::time::timeout(drain_timeout, graceful.shutdown())
            .await
            .is_err()
        {
            tracing::error!(
                "error shutting http server down: aborting requests still running after {:?}",
                drain_timeout
            );
        }
        connections.shutdown().await;

        transition(&lifecycle, LifecycleState::Stopped);
        Ok(())
    }
}

fn transition(lifecycle: &watch::Sender<LifecycleState>, next: LifecycleState) {
    let previous = lifecycle.send_replace(next);
    tracing::info!("http server {} -> {}", previous, next);
}

fn api_routes<WS: WeatherService>() -> Router<AppState<WS>> {
    Router::new()
        .route("/weather/{cep}", get(get_temperature_handler::<WS>))
        .route("/health", get(health_handler::<WS>))
        .route("/ready", get(ready_handler))
}
