//! # ruta
//!
//! A minimal specificity-ordered request router for JSON services.
//! Verbs and paths in, JSON replies out.
//!
//! ## The contract
//!
//! The transport reads verbs, paths, headers, and bodies off the wire;
//! ruta never does. It takes a verb string and a request path and gives
//! back a [`Reply`] carrying a status and an optional JSON body. Flushing
//! that reply onto a socket, and when, is the transport's business (the
//! bundled [`Server`] is one such transport).
//!
//! What ruta owns — the only part with a real algorithm:
//!
//! - **Scheme parsing** — `/cities/:name/show` into literal and parameter
//!   tokens
//! - **Specificity ordering** — a deterministic three-level rule that makes
//!   first-match-wins predictable over overlapping schemes
//! - **Matching and binding** — positional literal comparison, parameter
//!   values bound by name
//! - **Dispatch** — unsupported verb, no match, and handler failure each
//!   mapped to a distinct error reply
//!
//! ## Quick start
//!
//! ```rust
//! use ruta::{Params, Router};
//! use serde_json::json;
//!
//! let app = Router::new()
//!     .base("/api/v1")
//!     .get("/cities/:name", get_city)
//!     .delete("/cities/:name", |_p: Params| {});
//!
//! fn get_city(params: Params) -> serde_json::Value {
//!     json!({ "city": params["name"] })
//! }
//!
//! let reply = app.dispatch("GET", "/api/v1/cities/lyon");
//! assert_eq!(reply.status(), 200);
//!
//! let reply = app.dispatch("GET", "/api/v1/nowhere");
//! assert_eq!(reply.status(), 400);
//! ```
//!
//! ## Ordering, precisely
//!
//! Routes for a verb are kept sorted by: segment count descending, then
//! parameter count descending, then case-insensitive scheme string
//! ascending. The middle level means `/a/:x` outranks `/a/b` — more
//! wildcards win at equal length. That is the router's historical,
//! observable contract; registrations may depend on it, so it stays.

mod error;
mod handler;
mod reply;
mod resolve;
mod route;
mod router;
mod scheme;
mod server;
mod table;
mod verb;

pub mod health;

pub use error::{DispatchError, ServerError};
pub use handler::{Handler, HandlerError, IntoOutcome, Outcome, Params};
pub use reply::Reply;
pub use resolve::resolve;
pub use route::Route;
pub use router::Router;
pub use scheme::{Scheme, Token};
pub use server::Server;
pub use verb::Verb;
