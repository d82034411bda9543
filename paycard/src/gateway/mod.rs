// paycard/src/gateway/mod.rs
//! Request-side authority for credit cards: signatures, key validation and
//! the gateway handle that dispatches through a [`Transport`].

use log::debug;
use serde_json::{Map, Value};

use crate::constants::CREDIT_CARD_ENVELOPE;
use crate::credit_card::CreditCard;
use crate::transport::Transport;
use crate::types::Token;
use crate::{Error, Result};

pub mod builder;
pub mod signature;
pub mod validation;

pub use builder::{GatewayBuilder, GatewayConfig};
pub use signature::{Signature, SignatureNode, create_signature, update_signature};
pub use validation::{KeyReport, inspect_keys, verify_keys};

/// Shapes, validates and dispatches credit card requests.
///
/// Every check (token shape, key allow-list) runs before the transport is
/// touched.
pub struct CreditCardGateway<T: Transport> {
    transport: T,
    config: GatewayConfig,
}

impl<T: Transport> CreditCardGateway<T> {
    /// Create a gateway from a transport and merchant settings.
    pub fn new(transport: T, config: GatewayConfig) -> Self {
        Self { transport, config }
    }

    /// Start a [`GatewayBuilder`].
    pub fn builder() -> GatewayBuilder<T> {
        GatewayBuilder::new()
    }

    /// Merchant settings in use.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Borrow the underlying transport (e.g. to inspect a mock).
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate `attributes` against [`Signature::create`] and POST them.
    pub fn create(&mut self, attributes: &Map<String, Value>) -> Result<CreditCard> {
        Signature::create().validate(attributes)?;
        let path = self.config.collection_path();
        debug!("creating credit card via {}", path);
        let resp = self.transport.post(&path, &envelope(attributes))?;
        unwrap_card(&resp)
    }

    /// Look a card up by token. Blank tokens fail with `InvalidArgument`
    /// without a request, since the gateway reads them as a list call.
    pub fn find(&mut self, token: &str) -> Result<CreditCard> {
        let token = Token::try_from(token)?;
        let path = self.config.card_path(&token);
        debug!("finding credit card via {}", path);
        match self.transport.get(&path) {
            Ok(resp) => unwrap_card(&resp),
            Err(Error::NotFound(_)) => Err(not_found(&token)),
            Err(e) => Err(e),
        }
    }

    /// Validate the token and `attributes` against [`Signature::update`],
    /// then PUT them.
    pub fn update(&mut self, token: &str, attributes: &Map<String, Value>) -> Result<CreditCard> {
        let token = Token::try_from(token)?;
        Signature::update().validate(attributes)?;
        let path = self.config.card_path(&token);
        debug!("updating credit card via {}", path);
        match self.transport.put(&path, &envelope(attributes)) {
            Ok(resp) => unwrap_card(&resp),
            Err(Error::NotFound(_)) => Err(not_found(&token)),
            Err(e) => Err(e),
        }
    }

    /// Delete the card with `token`.
    pub fn delete(&mut self, token: &str) -> Result<()> {
        let token = Token::try_from(token)?;
        let path = self.config.card_path(&token);
        debug!("deleting credit card via {}", path);
        match self.transport.delete(&path) {
            Err(Error::NotFound(_)) => Err(not_found(&token)),
            other => other,
        }
    }
}

fn envelope(attributes: &Map<String, Value>) -> Value {
    let mut outer = Map::new();
    outer.insert(
        CREDIT_CARD_ENVELOPE.to_string(),
        Value::Object(attributes.clone()),
    );
    Value::Object(outer)
}

fn unwrap_card(resp: &Value) -> Result<CreditCard> {
    match resp.get(CREDIT_CARD_ENVELOPE) {
        Some(card) => CreditCard::from_value(card),
        None => Err(Error::UnexpectedResponse(format!(
            "expected a {} envelope",
            CREDIT_CARD_ENVELOPE
        ))),
    }
}

fn not_found(token: &Token) -> Error {
    Error::NotFound(format!("credit card with token {} not found", token))
}
