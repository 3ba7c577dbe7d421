//! Handler trait and type erasure.
//!
//! A route table holds handlers of arbitrary concrete types in one `Vec`,
//! so the concrete type has to disappear at registration time.
//! Registration wraps the function in a private newtype and converts it to
//! an `Arc<dyn ErasedHandler>`; the table stores only that. At dispatch
//! time the route pays a single vtable call, which is noise next to the
//! table scan in front of it.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Parameter bindings handed to a handler: parameter name (without the `:`
/// marker) to the path segment it matched.
pub type Params = HashMap<String, String>;

/// The failure type a handler may surface. Mapped to a 500-class error
/// reply by the dispatcher, whatever its root cause.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What a handler produces: a JSON value to send, nothing (no body), or a
/// failure.
pub type Outcome = Result<Option<Value>, HandlerError>;

// ── Type erasure ──────────────────────────────────────────────────────────────

/// Object-safe dispatch interface.
///
/// `#[doc(hidden)] pub` instead of `pub(crate)`: the public `Handler`
/// trait names it in a method signature, so it must be reachable from
/// outside, but downstream crates have no use for it.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, params: Params) -> Outcome;
}

/// Shared, type-erased handler. `Arc` because one handler serves every
/// concurrent dispatch of its route.
///
/// `#[doc(hidden)] pub` for the same reason as `ErasedHandler`.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// Never implemented by hand: the blanket impl below covers any function
/// or closure of shape `fn(Params) -> impl IntoOutcome`, and the private
/// `Sealed` supertrait keeps other impls out, so the bound can evolve
/// without breaking downstream code.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

/// External crates cannot name `Sealed`, which makes the blanket impl the
/// only door into `Handler`.
mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, R> private::Sealed for F
where
    F: Fn(Params) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
}

/// `Fn(Params) -> R` covers named `fn` items, closures, and function
/// structs alike.
impl<F, R> Handler for F
where
    F: Fn(Params) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Carries a concrete `F` across into the trait-object world.
struct FnHandler<F>(F);

impl<F, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Params) -> R + Send + Sync,
    R: IntoOutcome,
{
    fn call(&self, params: Params) -> Outcome {
        (self.0)(params).into_outcome()
    }
}

// ── IntoOutcome ───────────────────────────────────────────────────────────────

/// Conversion into a handler [`Outcome`].
///
/// Lets handlers return the shape that reads best at each call site:
///
/// ```rust
/// use ruta::{Params, HandlerError};
/// use serde_json::{Value, json};
///
/// // a value — sent as the JSON body
/// fn show(params: Params) -> Value {
///     json!({ "city": params["name"] })
/// }
///
/// // nothing — 200 with no body
/// fn touch(_params: Params) {}
///
/// // fallible — an Err becomes a 500 error reply
/// fn lookup(params: Params) -> Result<Value, HandlerError> {
///     let id: u64 = params["id"].parse()?;
///     Ok(json!({ "id": id }))
/// }
/// ```
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Value {
    fn into_outcome(self) -> Outcome {
        Ok(Some(self))
    }
}

impl IntoOutcome for Option<Value> {
    fn into_outcome(self) -> Outcome {
        Ok(self)
    }
}

/// `()` signals "no body to send".
impl IntoOutcome for () {
    fn into_outcome(self) -> Outcome {
        Ok(None)
    }
}

impl<R, E> IntoOutcome for Result<R, E>
where
    R: IntoOutcome,
    E: Into<HandlerError>,
{
    fn into_outcome(self) -> Outcome {
        self.map_err(Into::into).and_then(IntoOutcome::into_outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn erase(h: impl Handler) -> BoxedHandler {
        h.into_boxed_handler()
    }

    #[test]
    fn value_handler_produces_a_body() {
        let h = erase(|params: Params| json!({ "name": params["name"] }));
        let mut params = Params::new();
        params.insert("name".to_owned(), "lyon".to_owned());
        let out = h.call(params).unwrap();
        assert_eq!(out, Some(json!({ "name": "lyon" })));
    }

    #[test]
    fn unit_handler_produces_no_body() {
        let h = erase(|_params: Params| {});
        assert_eq!(h.call(Params::new()).unwrap(), None);
    }

    #[test]
    fn err_outcome_carries_the_message() {
        let h = erase(|_params: Params| -> Result<Value, HandlerError> {
            Err("backend unavailable".into())
        });
        let err = h.call(Params::new()).unwrap_err();
        assert_eq!(err.to_string(), "backend unavailable");
    }

    #[test]
    fn ok_none_through_result() {
        let h = erase(|_params: Params| -> Result<Option<Value>, HandlerError> {
            Ok(None)
        });
        assert_eq!(h.call(Params::new()).unwrap(), None);
    }
}
