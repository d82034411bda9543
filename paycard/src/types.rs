// paycard/src/types.rs
//! Small value types shared across the crate.

use crate::Error;
use crate::utils::is_blank;
use derive_more::Display;
use std::convert::TryFrom;

/// Token - Newtype Pattern (non-blank payment method identifier)
///
/// The gateway treats a blank identifier as a list request rather than a
/// lookup, so blank tokens are rejected before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Token(String);

impl Token {
    /// The token as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Token {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if is_blank(s) {
            return Err(Error::InvalidArgument(
                "expected credit card token to be set".to_string(),
            ));
        }
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for Token {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Token::try_from(s.as_str())
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

/// Card brand as reported in `cardType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// `American Express`
    #[display(fmt = "American Express")]
    AmericanExpress,
    /// `Carte Blanche`
    #[display(fmt = "Carte Blanche")]
    CarteBlanche,
    /// `China UnionPay`
    #[display(fmt = "China UnionPay")]
    ChinaUnionPay,
    /// `Discover`
    #[display(fmt = "Discover")]
    Discover,
    /// `Elo`
    #[display(fmt = "Elo")]
    Elo,
    /// `JCB`
    #[display(fmt = "JCB")]
    Jcb,
    /// `Laser`
    #[display(fmt = "Laser")]
    Laser,
    /// `Maestro`
    #[display(fmt = "Maestro")]
    Maestro,
    /// `UK Maestro`
    #[display(fmt = "UK Maestro")]
    UkMaestro,
    /// `MasterCard`
    #[display(fmt = "MasterCard")]
    MasterCard,
    /// `Solo`
    #[display(fmt = "Solo")]
    Solo,
    /// `Switch`
    #[display(fmt = "Switch")]
    Switch,
    /// `Visa`
    #[display(fmt = "Visa")]
    Visa,
    /// Any brand not listed above.
    #[default]
    #[display(fmt = "Unknown")]
    Unknown,
}

impl CardType {
    /// Every named brand, excluding `Unknown`.
    pub const ALL: [CardType; 13] = [
        Self::AmericanExpress,
        Self::CarteBlanche,
        Self::ChinaUnionPay,
        Self::Discover,
        Self::Elo,
        Self::Jcb,
        Self::Laser,
        Self::Maestro,
        Self::UkMaestro,
        Self::MasterCard,
        Self::Solo,
        Self::Switch,
        Self::Visa,
    ];

    /// Map the gateway's brand name; anything unrecognised is `Unknown`.
    pub fn from_wire(name: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.to_string() == name)
            .unwrap_or(Self::Unknown)
    }
}

/// CustomerLocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerLocation {
    /// Card holder located in the United States.
    #[display(fmt = "us")]
    Us,
    /// Card holder located elsewhere.
    #[display(fmt = "international")]
    International,
}

impl CustomerLocation {
    /// Map the gateway's `customerLocation` value.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "us" => Some(Self::Us),
            "international" => Some(Self::International),
            _ => None,
        }
    }
}
