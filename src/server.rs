//! HTTP transport over hyper.
//!
//! The routing core never touches a socket. This module is the transport
//! collaborator wrapped around it: it pulls the verb and target out of
//! each incoming request, runs [`Router::dispatch`], and writes the
//! resulting [`Reply`] back to the wire.
//!
//! # Shutdown
//!
//! [`Server::serve`] runs until the process receives SIGTERM or Ctrl-C.
//! On the first signal the accept loop stops; connections already in
//! flight drain to completion before `serve` returns. Under Kubernetes,
//! give `terminationGracePeriodSeconds` more headroom than your slowest
//! handler needs.

use std::convert::Infallible;
use std::future::ready;
use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use http::HeaderValue;
use http::header::CONTENT_TYPE;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

use crate::error::ServerError;
use crate::reply::Reply;
use crate::router::Router;

/// The HTTP server.
pub struct Server {
    addr: SocketAddr,
}

impl Server {
    /// Configures the address to bind when [`serve`](Server::serve) runs.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is not a valid `host:port` string.
    ///
    /// ```rust,no_run
    /// use ruta::Server;
    /// let server = Server::bind("0.0.0.0:3000");
    /// ```
    pub fn bind(addr: &str) -> Self {
        let addr: SocketAddr = addr.parse().expect("invalid socket address");
        Self { addr }
    }

    /// Accepts connections and routes every request through `router`,
    /// returning once a shutdown signal has arrived and the in-flight
    /// connections have drained.
    pub async fn serve(self, router: Router) -> Result<(), ServerError> {
        let listener = TcpListener::bind(self.addr).await?;

        // One Arc shared by every connection task. The tables inside are
        // read-only once registration is done, so no locking is involved.
        let router = Arc::new(router);

        info!(addr = %self.addr, "listening");

        let mut connections = tokio::task::JoinSet::new();
        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                // The shutdown arm goes first: once a signal lands, stop
                // accepting even if the backlog still holds connections.
                biased;

                () = &mut shutdown => break,

                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        connections.spawn(handle_connection(Arc::clone(&router), stream, peer));
                    }
                    Err(e) => error!("accept failed: {e}"),
                },

                // Reap completed tasks so the set stays bounded.
                Some(_) = connections.join_next(), if !connections.is_empty() => {}
            }
        }

        info!(in_flight = connections.len(), "shutting down, draining connections");
        while connections.join_next().await.is_some() {}
        info!("stopped");
        Ok(())
    }
}

/// Serves one accepted connection, HTTP/1.1 or HTTP/2 as negotiated.
async fn handle_connection(router: Arc<Router>, stream: TcpStream, peer: SocketAddr) {
    // Dispatch is synchronous, so every request gets an already-resolved
    // future. hyper never sees an error: each routing outcome, 400s and
    // 500s included, is an ordinary Reply.
    let svc = service_fn(move |req: hyper::Request<hyper::body::Incoming>| {
        let verb = req.method().as_str();
        // Target with its query intact; the resolver cuts it off itself.
        let target = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.uri().path(), |pq| pq.as_str());
        ready(Ok::<_, Infallible>(into_response(router.dispatch(verb, target))))
    });

    if let Err(e) = ConnBuilder::new(TokioExecutor::new())
        .serve_connection(TokioIo::new(stream), svc)
        .await
    {
        error!(%peer, "connection error: {e}");
    }
}

/// Lowers a [`Reply`] onto the wire types.
fn into_response(reply: Reply) -> http::Response<Full<Bytes>> {
    let mut response = http::Response::new(Full::new(reply.body().cloned().unwrap_or_default()));
    *response.status_mut() = reply.status();
    if reply.body().is_some() {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    response
}

/// Completes on the first SIGTERM (Unix) or Ctrl-C the process receives.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            r = tokio::signal::ctrl_c() => r.expect("failed to install Ctrl-C handler"),
            _ = sigterm.recv() => {}
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl-C handler");
}
