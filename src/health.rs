//! Ready-made health-check handlers.
//!
//! [`liveness`] answers "is the process up" and [`readiness`] answers
//! "should traffic be sent here" — the two probes a Kubernetes pod spec
//! usually wires to `/healthz` and `/readyz`. They register like any
//! other route:
//!
//! ```rust
//! use ruta::{Router, health};
//!
//! let app = Router::new()
//!     .get("/healthz", health::liveness)
//!     .get("/readyz", health::readiness);
//! ```
//!
//! Swap `readiness` for a handler of your own when serving traffic
//! depends on warm-up or downstream availability.

use serde_json::{Value, json};

use crate::handler::Params;

/// Liveness probe: `{"status":"ok"}`, unconditionally.
///
/// A process that can answer this at all is alive, so the handler
/// deliberately depends on nothing.
pub fn liveness(_params: Params) -> Value {
    json!({ "status": "ok" })
}

/// Default readiness probe: `{"status":"ready"}`, unconditionally.
pub fn readiness(_params: Params) -> Value {
    json!({ "status": "ready" })
}
