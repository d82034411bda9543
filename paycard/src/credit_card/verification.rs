//! Verification records attached to a card.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::constants::{CREATED_AT, ID, VERIFICATIONS};
use crate::utils::parse_timestamp;
use crate::{Error, Result};

/// A gateway-side record of one verification attempt on a card.
///
/// Only identity and creation time are modelled; the verification resource's
/// remaining fields belong to its own model.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verification {
    /// Gateway id.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl Verification {
    /// Create a verification record.
    pub fn new(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_at,
        }
    }

    /// Gateway id of the verification.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// When the verification was made.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Build from one element of the `verifications` array.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| Error::invalid_attribute(VERIFICATIONS, "expected an object entry"))?;

        let id = match obj.get(ID) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => {
                return Err(Error::invalid_attribute(
                    VERIFICATIONS,
                    "entry is missing a string id",
                ));
            }
        };

        let created_at = obj
            .get(CREATED_AT)
            .and_then(Value::as_str)
            .and_then(parse_timestamp)
            .ok_or_else(|| {
                Error::invalid_attribute(
                    VERIFICATIONS,
                    format!("entry {} has no valid createdAt", id),
                )
            })?;

        Ok(Self { id, created_at })
    }

    pub(crate) fn to_value(&self) -> Value {
        serde_json::json!({
            ID: self.id,
            CREATED_AT: self.created_at.to_rfc3339(),
        })
    }
}

/// Parse the full `verifications` collection. Absent or `null` is empty.
pub fn parse_all(value: Option<&Value>) -> Result<Vec<Verification>> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items.iter().map(Verification::from_value).collect(),
        Some(_) => Err(Error::invalid_attribute(VERIFICATIONS, "expected an array")),
    }
}

/// Select the most recent verification.
///
/// When several share the latest `created_at`, the one appearing last in
/// `verifications` wins.
pub fn latest(verifications: &[Verification]) -> Option<&Verification> {
    latest_index(verifications).map(|idx| &verifications[idx])
}

/// Position of [`latest`] within `verifications`.
pub fn latest_index(verifications: &[Verification]) -> Option<usize> {
    verifications
        .iter()
        .enumerate()
        .max_by_key(|(_, v)| v.created_at)
        .map(|(idx, _)| idx)
}
