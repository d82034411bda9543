//! Allow-list checks run on caller-supplied attributes before a request is
//! dispatched.
//!
//! Caller attributes are walked level by level against the signature tree, so
//! a key is accepted only where a node of that exact name sits at that depth.

use log::warn;
use serde_json::{Map, Value};

use crate::gateway::signature::{Signature, SignatureNode};
use crate::utils::{join_keys, nested_key};
use crate::{Error, Result};

/// Result of checking caller attributes against a signature. Keys are in
/// bracket notation (`options[bogus]`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyReport {
    /// Keys the signature does not accept at their position.
    pub invalid: Vec<String>,
    /// Accepted keys slated for removal at the next major version.
    pub deprecated: Vec<String>,
}

impl KeyReport {
    /// True when no invalid key was found.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Walk `attributes` against `signature` without failing or logging.
///
/// A key is invalid when no node of that name exists at its depth, when a
/// group is given anything but an object, or when a scalar field is given an
/// object. Keys containing brackets never match a node and are always
/// invalid.
pub fn inspect_keys(attributes: &Map<String, Value>, signature: &Signature) -> KeyReport {
    let mut report = KeyReport::default();
    walk(attributes, signature.nodes(), "", &mut report);
    report
}

fn walk(map: &Map<String, Value>, nodes: &[SignatureNode], prefix: &str, report: &mut KeyReport) {
    for (key, value) in map {
        let path = nested_key(prefix, key);
        let node = nodes.iter().find(|n| n.name() == key.as_str());
        match (node, value) {
            (None, _) => report.invalid.push(path),
            (Some(SignatureNode::Group(_, children)), Value::Object(inner)) => {
                walk(inner, children, &path, report)
            }
            (Some(SignatureNode::Group(..)), _) => report.invalid.push(path),
            (Some(SignatureNode::Field(_)), Value::Object(_)) => report.invalid.push(path),
            (Some(SignatureNode::Field(_)), _) => {
                if Signature::is_deprecated(&path) {
                    report.deprecated.push(path);
                }
            }
        }
    }
}

/// Reject any attribute key that `signature` does not allow.
///
/// Every offending key is listed in one `InvalidArgument`, e.g.
/// `invalid keys: invalidKey, options[bogus]`.
pub fn verify_keys(attributes: &Map<String, Value>, signature: &Signature) -> Result<()> {
    let report = inspect_keys(attributes, signature);
    for key in &report.deprecated {
        warn!("{} is deprecated and will be removed in the next major version", key);
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "invalid keys: {}",
            join_keys(&report.invalid)
        )))
    }
}
