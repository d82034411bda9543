// paycard/src/lib.rs

//! paycard
//!
//! Credit card model and request-signature builder for a payment gateway
//! client. The HTTP exchange itself is supplied by the caller through
//! [`transport::Transport`].
#![warn(missing_docs)]

pub mod constants;
pub mod credit_card;
pub mod error;
pub mod gateway;
pub mod prelude;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
