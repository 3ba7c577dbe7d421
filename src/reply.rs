//! Outgoing reply value.
//!
//! A dispatch always produces a [`Reply`]: a status code plus an optional
//! pre-serialized JSON body. The transport collaborator decides how to
//! flush it; the routing layer never writes to a socket or terminates
//! anything itself.

use bytes::Bytes;
use http::StatusCode;
use serde_json::{Value, json};

use crate::error::DispatchError;

/// The outcome of one dispatch, ready for the transport to send.
#[derive(Clone, Debug)]
pub struct Reply {
    status: StatusCode,
    body: Option<Bytes>,
}

impl Reply {
    /// `200 OK` with a JSON body.
    pub fn json(payload: &Value) -> Self {
        Self {
            status: StatusCode::OK,
            // Value's Display writes compact JSON and cannot fail.
            body: Some(Bytes::from(payload.to_string())),
        }
    }

    /// `200 OK` with no body — the handler returned nothing to send.
    pub fn no_body() -> Self {
        Self { status: StatusCode::OK, body: None }
    }

    /// An error payload `{"error": <message>}` with the given status.
    pub fn error(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            body: Some(Bytes::from(json!({ "error": message }).to_string())),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The serialized JSON body, if any.
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

impl From<&DispatchError> for Reply {
    fn from(err: &DispatchError) -> Self {
        Self::error(err.status(), &err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verb::Verb;

    fn body_json(reply: &Reply) -> Value {
        serde_json::from_slice(reply.body().expect("body")).expect("valid json")
    }

    #[test]
    fn json_reply_is_200_with_compact_body() {
        let reply = Reply::json(&json!({ "id": 42 }));
        assert_eq!(reply.status(), StatusCode::OK);
        assert_eq!(body_json(&reply), json!({ "id": 42 }));
    }

    #[test]
    fn no_body_reply_is_200_without_body() {
        let reply = Reply::no_body();
        assert_eq!(reply.status(), StatusCode::OK);
        assert!(reply.body().is_none());
    }

    #[test]
    fn error_reply_wraps_the_message() {
        let err = DispatchError::NoMatchingRoute(Verb::Put);
        let reply = Reply::from(&err);
        assert_eq!(reply.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&reply),
            json!({ "error": "no PUT route matching the given URI" })
        );
    }

    #[test]
    fn unicode_is_not_escaped() {
        let reply = Reply::json(&json!({ "ville": "Besançon" }));
        let text = String::from_utf8(reply.body().expect("body").to_vec()).expect("utf8");
        assert!(text.contains("Besançon"));
    }
}
