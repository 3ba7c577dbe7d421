//! A single registered route: one scheme, one handler.

use crate::handler::{BoxedHandler, Handler, Outcome, Params};
use crate::scheme::{Scheme, Token};

/// An immutable pairing of a parsed [`Scheme`] and a handler.
///
/// Created once at registration time, lives for the service lifetime,
/// never mutated. Knows how to test itself against a candidate path and
/// how to extract parameter bindings from one.
pub struct Route {
    scheme: Scheme,
    handler: BoxedHandler,
}

impl Route {
    /// Pairs a parsed scheme with its handler.
    pub fn new(scheme: Scheme, handler: impl Handler) -> Self {
        Self { scheme, handler: handler.into_boxed_handler() }
    }

    /// The route's scheme.
    pub fn scheme(&self) -> &Scheme {
        &self.scheme
    }

    /// Returns true iff `segments` lines up with the scheme: same length,
    /// and every position is either a parameter token or a literal equal to
    /// the segment (case-sensitive). A length mismatch returns false
    /// without inspecting contents.
    pub fn matches(&self, segments: &[String]) -> bool {
        let tokens = self.scheme.tokens();
        if segments.len() != tokens.len() {
            return false;
        }
        tokens.iter().zip(segments).all(|(token, segment)| match token {
            Token::Param(_) => true,
            Token::Literal(lit) => lit == segment,
        })
    }

    /// Invokes the handler with the parameter bindings extracted from
    /// `segments`.
    ///
    /// Callers must check [`matches`](Route::matches) first; behavior on a
    /// non-matching input is unspecified. Each parameter token binds its
    /// name to the segment at the same position, in scheme order, so a
    /// duplicated parameter name keeps the later binding.
    pub fn run(&self, segments: &[String]) -> Outcome {
        let mut params = Params::new();
        for (token, segment) in self.scheme.tokens().iter().zip(segments) {
            if let Token::Param(name) = token {
                params.insert(name.clone(), segment.clone());
            }
        }
        self.handler.call(params)
    }
}
