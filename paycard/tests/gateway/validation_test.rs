use paycard::gateway::{create_signature, update_signature, verify_keys};
use paycard::prelude::*;
use paycard::test_support::attributes;
use serde_json::json;

use crate::common;

#[test]
fn create_throws_if_invalid_key() {
    common::init_logging();
    let err = verify_keys(&attributes(json!({"invalidKey": "foo"})), &create_signature())
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument("invalid keys: invalidKey".to_string())
    );
}

#[test]
fn all_invalid_keys_are_joined() {
    let msg = verify_keys(
        &attributes(json!({"alpha": 1, "beta": 2, "cvv": "123"})),
        &update_signature(),
    )
    .unwrap_err()
    .to_string();
    assert_eq!(msg, "invalid keys: alpha, beta");
}

#[test]
fn signature_validate_matches_verify_keys() {
    let sig = Signature::update();
    let ok = attributes(json!({"billingAddress": {"options": {"updateExisting": true}}}));
    assert!(sig.validate(&ok).is_ok());
    assert_eq!(sig.validate(&ok), verify_keys(&ok, &sig));
}

#[test]
fn allowed_keys_cover_every_leaf() {
    let keys = create_signature().allowed_keys();
    assert_eq!(keys.len(), 11 + 10 + 13 + 1 + 8);
    let update_keys = update_signature().allowed_keys();
    assert_eq!(update_keys.len(), 11 + 10 + 13 + 1 + 8);
}

#[test]
fn unknown_group_with_empty_object_is_rejected() {
    let err = verify_keys(&attributes(json!({"bogusGroup": {}})), &create_signature())
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidArgument("invalid keys: bogusGroup".to_string())
    );
}

#[test]
fn literal_bracketed_keys_are_rejected() {
    let attrs = attributes(json!({
        "options[makeDefault]": true,
        "billingAddress[options]": {"updateExisting": true}
    }));
    let msg = verify_keys(&attrs, &update_signature())
        .unwrap_err()
        .to_string();
    assert!(msg.contains("options[makeDefault]"));
    assert!(msg.contains("billingAddress[options]"));
}

#[test]
fn malformed_group_shapes_are_rejected() {
    let cases = [
        (json!({"options": [{"verifyCard": true}]}), "options"),
        (json!({"options": null}), "options"),
        (json!({"billingAddress": {"options": "updateExisting"}}), "billingAddress[options]"),
        (json!({"number": {"value": "4111111111111111"}}), "number"),
        (json!({"threeDSecurePassThru": {"eciFlag": {}}}), "threeDSecurePassThru[eciFlag]"),
    ];
    for (attrs, bad_key) in cases {
        let err = verify_keys(&attributes(attrs), &update_signature()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument(format!("invalid keys: {}", bad_key))
        );
    }
}

#[test]
fn signature_methods_need_no_transport() {
    let attrs = attributes(json!({"customerId": "c1"}));
    assert!(Signature::create().validate(&attrs).is_ok());
    assert!(Signature::update().validate(&attrs).is_err());
}
