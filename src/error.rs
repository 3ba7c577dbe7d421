//! Dispatch error kinds.

use http::StatusCode;
use thiserror::Error;

use crate::handler::HandlerError;
use crate::verb::Verb;

/// The three ways a dispatch terminates without a success reply.
///
/// All are terminal for the request in hand: none is retried or recovered.
/// Infrastructure failures (binding a port, accepting a connection) are not
/// expressed here; they surface from [`Server`](crate::Server) as
/// [`ServerError`].
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The incoming verb string is not in the supported set. A caller or
    /// configuration error, reported with 400 semantics.
    #[error("unsupported method: {0}")]
    UnsupportedVerb(String),

    /// The verb is valid but no scheme in its table matches the resolved
    /// segments. A client error, reported with 400 semantics.
    #[error("no {0} route matching the given URI")]
    NoMatchingRoute(Verb),

    /// A registered handler failed during execution. Treated as an internal
    /// error regardless of its root cause; this layer has no visibility
    /// into handler internals.
    #[error("{0}")]
    Handler(#[source] HandlerError),
}

impl DispatchError {
    /// The status class each kind is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedVerb(_) | Self::NoMatchingRoute(_) => StatusCode::BAD_REQUEST,
            Self::Handler(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure of the transport itself: binding the listener or accepting a
/// connection. Routing outcomes are never errors at this level — no
/// match, bad verb, and handler failure all arrive as
/// [`Reply`](crate::Reply) values, whatever their status.
#[derive(Debug, Error)]
#[error("io: {0}")]
pub struct ServerError(#[from] std::io::Error);
