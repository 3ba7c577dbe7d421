//! Route registration and dispatch.
//!
//! One specificity-ordered table per HTTP verb, scanned linearly, first
//! match wins. Registration and dispatch are the entire surface: register
//! a scheme, dispatch a request, read the reply.

use std::collections::HashMap;

use crate::error::DispatchError;
use crate::handler::Handler;
use crate::reply::Reply;
use crate::resolve::resolve;
use crate::route::Route;
use crate::scheme::Scheme;
use crate::table::Table;
use crate::verb::Verb;

/// The application router.
///
/// One ordered table per verb, kept sorted by the specificity rule on
/// every registration. Build it once at startup; after that it is
/// read-only, so it can be shared across concurrent dispatches without
/// locking. Each registration call returns `self` so calls chain
/// naturally.
///
/// ```rust
/// use ruta::{Router, Params};
/// use serde_json::json;
///
/// let router = Router::new()
///     .base("/api/v1")
///     .get("/cities/:name", |p: Params| json!({ "city": p["name"] }))
///     .delete("/cities/:name", |_p: Params| {});
///
/// let reply = router.dispatch("GET", "/api/v1/cities/lyon");
/// assert_eq!(reply.status(), 200);
/// ```
pub struct Router {
    base: String,
    separator: char,
    tables: HashMap<Verb, Table>,
}

impl Router {
    /// An empty router: no base path, `/` separator, no routes.
    pub fn new() -> Self {
        Self {
            base: String::new(),
            separator: '/',
            tables: HashMap::new(),
        }
    }

    /// Sets the base path stripped from every request path before
    /// matching (e.g. `"/api/v1"`).
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Sets the segment separator used for request-path resolution.
    /// Defaults to `/`. Schemes always use `/`.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Registers a handler for a verb + scheme pair. Returns `self` for
    /// chaining.
    ///
    /// Scheme parameters use `:name` syntax; the handler receives them as
    /// its [`Params`](crate::Params) argument. The verb's table is
    /// re-sorted by specificity after the insertion, so registration order
    /// never changes dispatch behavior.
    pub fn on(mut self, verb: Verb, scheme: &str, handler: impl Handler) -> Self {
        let route = Route::new(Scheme::parse(scheme), handler);
        self.tables.entry(verb).or_default().insert(route);
        self
    }

    /// Registers a GET route.
    pub fn get(self, scheme: &str, handler: impl Handler) -> Self {
        self.on(Verb::Get, scheme, handler)
    }

    /// Registers a POST route.
    pub fn post(self, scheme: &str, handler: impl Handler) -> Self {
        self.on(Verb::Post, scheme, handler)
    }

    /// Registers a PUT route.
    pub fn put(self, scheme: &str, handler: impl Handler) -> Self {
        self.on(Verb::Put, scheme, handler)
    }

    /// Registers a PATCH route.
    pub fn patch(self, scheme: &str, handler: impl Handler) -> Self {
        self.on(Verb::Patch, scheme, handler)
    }

    /// Registers a DELETE route.
    pub fn delete(self, scheme: &str, handler: impl Handler) -> Self {
        self.on(Verb::Delete, scheme, handler)
    }

    /// Registers an OPTIONS route. Mind CORS preflight if you use this.
    pub fn options(self, scheme: &str, handler: impl Handler) -> Self {
        self.on(Verb::Options, scheme, handler)
    }

    /// Routes one request to completion and returns the reply.
    ///
    /// `verb` is the raw verb string from the transport; `path` is the
    /// full request path, query component included. Every outcome, error
    /// or not, comes back as a [`Reply`]; the transport alone decides how
    /// to flush it and end the exchange.
    pub fn dispatch(&self, verb: &str, path: &str) -> Reply {
        match self.try_dispatch(verb, path) {
            Ok(reply) => reply,
            Err(err) => Reply::from(&err),
        }
    }

    /// Like [`dispatch`](Router::dispatch), but keeps the error kind
    /// instead of folding it into an error reply.
    pub fn try_dispatch(&self, verb: &str, path: &str) -> Result<Reply, DispatchError> {
        let verb: Verb = verb
            .parse()
            .map_err(|()| DispatchError::UnsupportedVerb(verb.to_owned()))?;

        let segments = resolve(path, &self.base, self.separator);

        let routes = self.tables.get(&verb).into_iter().flat_map(Table::iter);
        for route in routes {
            if route.matches(&segments) {
                return match route.run(&segments) {
                    Ok(Some(value)) => Ok(Reply::json(&value)),
                    Ok(None) => Ok(Reply::no_body()),
                    Err(err) => Err(DispatchError::Handler(err)),
                };
            }
        }
        Err(DispatchError::NoMatchingRoute(verb))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{HandlerError, Params};
    use http::StatusCode;
    use serde_json::{Value, json};

    fn body_json(reply: &Reply) -> Value {
        serde_json::from_slice(reply.body().expect("body")).expect("valid json")
    }

    #[test]
    fn dispatches_to_the_matching_route() {
        let router = Router::new()
            .base("/api/v1")
            .get("/cities/:name/weather/:day", |p: Params| {
                json!({ "city": p["name"], "day": p["day"] })
            });

        let reply = router.dispatch("GET", "/api/v1/cities/lyon/weather/monday");
        assert_eq!(reply.status(), StatusCode::OK);
        assert_eq!(body_json(&reply), json!({ "city": "lyon", "day": "monday" }));
    }

    #[test]
    fn equal_length_tie_prefers_the_parameterized_route() {
        // regression pin for the documented ordering quirk: /a/:x ranks
        // before /a/b, so /a/b dispatches to the parameterized route
        let router = Router::new()
            .get("/a/b", |_p: Params| json!("literal"))
            .get("/a/:x", |p: Params| json!({ "x": p["x"] }));

        let reply = router.dispatch("GET", "/a/b");
        assert_eq!(body_json(&reply), json!({ "x": "b" }));
    }

    #[test]
    fn unsupported_verb_is_400_whatever_the_tables_hold() {
        let empty = Router::new();
        let reply = empty.dispatch("TRACE", "/anything");
        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&reply), json!({ "error": "unsupported method: TRACE" }));

        let populated = Router::new().get("/a", |_p: Params| {});
        let reply = populated.dispatch("TRACE", "/a");
        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn no_match_names_the_verb() {
        let router = Router::new().get("/cities", |_p: Params| {});
        let reply = router.dispatch("DELETE", "/cities");
        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&reply),
            json!({ "error": "no DELETE route matching the given URI" })
        );
    }

    #[test]
    fn handler_failure_is_500_with_its_message() {
        let router = Router::new().get("/boom", |_p: Params| -> Result<Value, HandlerError> {
            Err("kaboom".into())
        });
        let reply = router.dispatch("GET", "/boom");
        assert_eq!(reply.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&reply), json!({ "error": "kaboom" }));
    }

    #[test]
    fn empty_handler_outcome_sends_no_body() {
        let router = Router::new().delete("/cities/:name", |_p: Params| {});
        let reply = router.dispatch("DELETE", "/cities/lyon");
        assert_eq!(reply.status(), StatusCode::OK);
        assert!(reply.body().is_none());
    }

    #[test]
    fn query_and_trailing_separator_are_ignored() {
        let router = Router::new()
            .base("/api/v1")
            .get("/items/:id", |p: Params| json!({ "id": p["id"] }));
        let reply = router.dispatch("GET", "/api/v1/items/42/?foo=bar");
        assert_eq!(body_json(&reply), json!({ "id": "42" }));
    }

    #[test]
    fn percent_decoded_values_reach_the_handler() {
        let router = Router::new()
            .get("/cities/:name", |p: Params| json!(p["name"]));
        let reply = router.dispatch("GET", "/cities/saint%20denis");
        assert_eq!(body_json(&reply), json!("saint denis"));
    }

    #[test]
    fn first_match_wins_under_specificity_order() {
        // the longer scheme outranks the shorter one whatever the
        // registration order, and only one handler ever runs
        let router = Router::new()
            .get("/cities/:name", |_p: Params| json!("short"))
            .get("/cities/:name/weather", |_p: Params| json!("long"));

        assert_eq!(body_json(&router.dispatch("GET", "/cities/lyon/weather")), json!("long"));
        assert_eq!(body_json(&router.dispatch("GET", "/cities/lyon")), json!("short"));
    }

    #[test]
    fn try_dispatch_exposes_the_error_kind() {
        let router = Router::new();
        match router.try_dispatch("PATCH", "/nothing") {
            Err(DispatchError::NoMatchingRoute(verb)) => assert_eq!(verb, Verb::Patch),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn custom_separator_applies_to_resolution_only() {
        let router = Router::new()
            .base("/svc")
            .separator('|')
            .get("/items/:id", |p: Params| json!(p["id"]));
        let reply = router.dispatch("GET", "/svc|items|7");
        assert_eq!(body_json(&reply), json!("7"));
    }
}
