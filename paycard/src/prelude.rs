// paycard/src/prelude.rs
//! Common imports: `use paycard::prelude::*;`.

pub use crate::credit_card::{
    BinData, Business, Commercial, Consumer, Corporate, CreditCard, Debit, DurbinRegulated,
    Healthcare, Payroll, Prepaid, Purchase, Verification,
};
pub use crate::gateway::{
    CreditCardGateway, GatewayBuilder, GatewayConfig, Signature, SignatureNode,
};
pub use crate::transport::{Method, Transport};
pub use crate::{CardType, CustomerLocation, Error, Result, Token};
