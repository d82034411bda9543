// paycard/src/gateway/builder.rs
//! Gateway configuration and construction.

use crate::gateway::CreditCardGateway;
use crate::transport::Transport;
use crate::types::Token;
use crate::utils::is_blank;
use crate::{Error, Result};

/// Per-merchant settings used to derive request paths.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GatewayConfig {
    /// Merchant account the requests are made on behalf of.
    pub merchant_id: String,
}

impl GatewayConfig {
    /// Settings for `merchant_id`.
    pub fn new(merchant_id: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
        }
    }

    /// `/merchants/{merchant_id}/payment_methods`
    pub fn collection_path(&self) -> String {
        format!("/merchants/{}/payment_methods", self.merchant_id)
    }

    /// `/merchants/{merchant_id}/payment_methods/credit_card/{token}`
    pub fn card_path(&self, token: &Token) -> String {
        format!("{}/credit_card/{}", self.collection_path(), token)
    }
}

/// Helper to construct a gateway from a transport and merchant settings.
pub struct GatewayBuilder<T: Transport> {
    transport: Option<T>,
    merchant_id: Option<String>,
}

impl<T: Transport> GatewayBuilder<T> {
    /// An empty builder; a transport and merchant id must be supplied.
    pub fn new() -> Self {
        Self {
            transport: None,
            merchant_id: None,
        }
    }

    /// Provide the transport requests are sent through (e.g. MockTransport).
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Set the merchant id used in request paths.
    pub fn merchant_id(mut self, merchant_id: impl Into<String>) -> Self {
        self.merchant_id = Some(merchant_id.into());
        self
    }

    /// Consume the builder. Requires a transport and a non-blank merchant id.
    pub fn build(self) -> Result<CreditCardGateway<T>> {
        let transport = self
            .transport
            .ok_or_else(|| Error::InvalidArgument("a transport is required".to_string()))?;
        let merchant_id = match self.merchant_id {
            Some(id) if !is_blank(&id) => id,
            _ => {
                return Err(Error::InvalidArgument(
                    "merchant id must not be blank".to_string(),
                ));
            }
        };
        Ok(CreditCardGateway::new(
            transport,
            GatewayConfig::new(merchant_id),
        ))
    }
}

impl<T: Transport> Default for GatewayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
