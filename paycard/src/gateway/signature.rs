//! Request signatures: the authoritative, ordered shape of the fields a
//! create or update request may carry.
//!
//! Order is part of the contract and is reproduced exactly.

use serde_json::{Map, Value};

use crate::Result;
use crate::constants as f;
use crate::gateway::validation::verify_keys;
use crate::utils::nested_key;

/// One node of a signature tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SignatureNode {
    /// A scalar field name.
    Field(&'static str),
    /// A named group of nested nodes.
    Group(&'static str, Vec<SignatureNode>),
}

impl SignatureNode {
    /// Wire name of the field or group.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Field(name) | Self::Group(name, _) => *name,
        }
    }

    fn collect_keys(&self, prefix: &str, out: &mut Vec<String>) {
        match self {
            Self::Field(name) => out.push(nested_key(prefix, name)),
            Self::Group(name, children) => {
                let path = nested_key(prefix, name);
                for child in children {
                    child.collect_keys(&path, out);
                }
            }
        }
    }
}

/// Flattened keys that are still accepted but slated for removal at the next
/// major version.
pub const DEPRECATED_KEYS: &[&str] = &["venmoSdkPaymentMethodCode", "options[venmoSdkSession]"];

/// An ordered list of signature nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signature(Vec<SignatureNode>);

impl Signature {
    /// Wrap an ordered list of nodes.
    pub fn new(nodes: Vec<SignatureNode>) -> Self {
        Self(nodes)
    }

    /// Top-level nodes in order.
    pub fn nodes(&self) -> &[SignatureNode] {
        &self.0
    }

    /// Every legal key in bracket notation, in signature order:
    /// `cvv`, `options[makeDefault]`, `billingAddress[options][updateExisting]`.
    pub fn allowed_keys(&self) -> Vec<String> {
        let mut out = Vec::new();
        for node in &self.0 {
            node.collect_keys("", &mut out);
        }
        out
    }

    /// Look up a top-level node by name.
    pub fn get(&self, name: &str) -> Option<&SignatureNode> {
        self.0.iter().find(|n| n.name() == name)
    }

    /// Fields accepted when creating a card; see [`create_signature`].
    pub fn create() -> Self {
        create_signature()
    }

    /// Fields accepted when updating a card; see [`update_signature`].
    pub fn update() -> Self {
        update_signature()
    }

    /// Reject caller attributes containing keys this signature does not allow.
    pub fn validate(&self, attributes: &Map<String, Value>) -> Result<()> {
        verify_keys(attributes, self)
    }

    /// True for keys kept only for backward compatibility.
    pub fn is_deprecated(key: &str) -> bool {
        DEPRECATED_KEYS.contains(&key)
    }
}

fn field(name: &'static str) -> SignatureNode {
    SignatureNode::Field(name)
}

fn group(name: &'static str, fields: &[&'static str]) -> SignatureNode {
    SignatureNode::Group(name, fields.iter().copied().map(field).collect())
}

const OPTIONS: &[&str] = &[
    "accountInformationInquiry",
    "failOnDuplicatePaymentMethod",
    "failOnDuplicatePaymentMethodForCustomer",
    "makeDefault",
    "skipAdvancedFraudChecking",
    f::VENMO_SDK_SESSION,
    "verificationAccountType",
    "verificationAmount",
    "verificationMerchantAccountId",
    "verifyCard",
];

const BILLING_ADDRESS: &[&str] = &[
    "firstName",
    "lastName",
    "company",
    "countryCodeAlpha2",
    "countryCodeAlpha3",
    "countryCodeNumeric",
    "countryName",
    "extendedAddress",
    "locality",
    "region",
    "postalCode",
    "streetAddress",
    "phoneNumber",
];

const THREE_D_SECURE_PASS_THRU: &[&str] = &[
    "eciFlag",
    "cavv",
    "xid",
    "threeDSecureVersion",
    "authenticationResponse",
    "directoryResponse",
    "cavvAlgorithm",
    "dsTransactionId",
];

fn base_signature() -> Vec<SignatureNode> {
    vec![
        field(f::BILLING_ADDRESS_ID),
        field(f::CARDHOLDER_NAME),
        field(f::CVV),
        field(f::NUMBER),
        field(f::EXPIRATION_DATE),
        field(f::EXPIRATION_MONTH),
        field(f::EXPIRATION_YEAR),
        field(f::TOKEN),
        field(f::VENMO_SDK_PAYMENT_METHOD_CODE),
        field(f::DEVICE_DATA),
        field(f::PAYMENT_METHOD_NONCE),
        group(f::OPTIONS, OPTIONS),
    ]
}

/// Fields accepted when creating a card.
pub fn create_signature() -> Signature {
    let mut nodes = base_signature();
    nodes.push(group(f::BILLING_ADDRESS, BILLING_ADDRESS));
    nodes.push(field(f::CUSTOMER_ID));
    nodes.push(group(f::THREE_D_SECURE_PASS_THRU, THREE_D_SECURE_PASS_THRU));
    Signature::new(nodes)
}

/// Fields accepted when updating a card. The billing address may carry an
/// `options.updateExisting` flag; the customer cannot be changed.
pub fn update_signature() -> Signature {
    let mut address: Vec<SignatureNode> = BILLING_ADDRESS.iter().copied().map(field).collect();
    address.push(group(f::OPTIONS, &[f::UPDATE_EXISTING]));

    let mut nodes = base_signature();
    nodes.push(SignatureNode::Group(f::BILLING_ADDRESS, address));
    nodes.push(group(f::THREE_D_SECURE_PASS_THRU, THREE_D_SECURE_PASS_THRU));
    Signature::new(nodes)
}
