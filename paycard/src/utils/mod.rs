//! Utilities for paycard: small, reusable helpers used across the crate.

pub mod text;
pub mod time;

pub use text::*;
pub use time::*;
