// paycard/src/transport/mod.rs
//! The seam to the HTTP layer. Only the trait and a recording mock live here;
//! real transports are provided by the caller.

pub mod mock;
pub mod traits;

pub use traits::{Method, Transport};
