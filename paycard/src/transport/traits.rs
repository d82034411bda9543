// paycard/src/transport/traits.rs
//! The transport trait and request verbs.

use derive_more::Display;
use serde_json::Value;

use crate::Result;

/// HTTP verb of a gateway request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Method {
    /// `GET`
    #[display(fmt = "GET")]
    Get,
    /// `POST`
    #[display(fmt = "POST")]
    Post,
    /// `PUT`
    #[display(fmt = "PUT")]
    Put,
    /// `DELETE`
    #[display(fmt = "DELETE")]
    Delete,
}

/// Transport trait abstracts the HTTP exchange away from request shaping.
///
/// Implementations are expected to map a gateway 404 to `Error::NotFound`.
pub trait Transport {
    /// Issue one request and return the decoded response body. A response
    /// without a body is `Value::Null`.
    fn request(&mut self, method: Method, path: &str, body: Option<&Value>) -> Result<Value>;

    /// `GET path`
    fn get(&mut self, path: &str) -> Result<Value> {
        self.request(Method::Get, path, None)
    }

    /// `POST path` with a JSON body.
    fn post(&mut self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::Post, path, Some(body))
    }

    /// `PUT path` with a JSON body.
    fn put(&mut self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::Put, path, Some(body))
    }

    /// `DELETE path`; any response body is discarded.
    fn delete(&mut self, path: &str) -> Result<()> {
        self.request(Method::Delete, path, None).map(|_| ())
    }
}
