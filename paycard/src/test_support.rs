// paycard/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize fixture construction so tests across the crate
//! and the tests/ directory build cards and gateways the same way.
#![allow(dead_code)]

use serde_json::{Map, Value};

use crate::gateway::{CreditCardGateway, GatewayConfig};
use crate::transport::mock::MockTransport;

/// Unwrap a JSON object literal into an attribute map.
#[doc(hidden)]
pub fn attributes(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("attributes fixture must be a JSON object, got {}", other),
    }
}

/// A gateway for merchant `test_merchant` backed by a MockTransport
/// pre-seeded with the given responses.
#[doc(hidden)]
pub fn mock_gateway(responses: Vec<Value>) -> CreditCardGateway<MockTransport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    CreditCardGateway::new(mock, GatewayConfig::new("test_merchant"))
}

/// Wrap card attributes in the gateway's `creditCard` response envelope.
#[doc(hidden)]
pub fn card_response(card: Value) -> Value {
    serde_json::json!({ "creditCard": card })
}
