use paycard::prelude::*;
use paycard::test_support::attributes;
use serde_json::json;

use crate::common;

#[test]
fn undefined_property_errors_on_access() {
    let cc = CreditCard::factory(&attributes(json!({}))).unwrap();
    let err = cc.attribute("foo").unwrap_err();
    assert_eq!(err, Error::UndefinedProperty("foo".to_string()));
}

#[test]
fn is_default_roundtrips_flag() {
    let cc = CreditCard::factory(&attributes(json!({"default": true}))).unwrap();
    assert!(cc.is_default());

    let cc = CreditCard::factory(&attributes(json!({"default": false}))).unwrap();
    assert!(!cc.is_default());
}

#[test]
fn masked_number() {
    let cc = CreditCard::factory(&attributes(json!({"bin": "123456", "last4": "7890"}))).unwrap();
    assert_eq!(cc.masked_number().unwrap(), "123456******7890");
}

#[test]
fn verification_is_latest_verification() {
    let cc = CreditCard::factory(&attributes(json!({
        "verifications": common::sample_verifications_json()
    })))
    .unwrap();
    assert_eq!(cc.verification().unwrap().id(), "932");
}

#[test]
fn full_gateway_payload() -> anyhow::Result<()> {
    common::init_logging();
    let cc = CreditCard::from_value(&common::sample_card_json())?;

    assert_eq!(cc.token(), Some("my_token"));
    assert_eq!(cc.masked_number()?, "411111******1111");
    assert_eq!(cc.card_type(), Some(CardType::Visa));
    assert_eq!(cc.cardholder_name(), Some("Jane Doe"));
    assert_eq!(cc.customer_id(), Some("customer_1"));
    assert_eq!(cc.expiration_date(), Some("05/2030"));
    assert!(cc.is_default());
    assert!(!cc.is_expired());
    assert_eq!(cc.customer_location(), Some(CustomerLocation::Us));
    assert_eq!(cc.country_of_issuance(), Some("USA"));
    assert_eq!(cc.issuing_bank(), Some("First Bank"));
    assert_eq!(cc.billing_address_id(), Some("ad"));
    assert!(cc.created_at().unwrap() < cc.updated_at().unwrap());
    assert_eq!(cc.verification().map(Verification::id), Some("932"));
    Ok(())
}

#[test]
fn unrecognized_payload_keys_are_dropped() -> anyhow::Result<()> {
    let cc = CreditCard::from_value(&common::sample_card_json())?;
    // `subscriptions` belongs to another resource model.
    assert!(matches!(
        cc.attribute("subscriptions"),
        Err(Error::UndefinedProperty(_))
    ));
    Ok(())
}

#[test]
fn cards_are_shareable_across_threads() {
    let cc = std::sync::Arc::new(CreditCard::from_value(&common::sample_card_json()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cc = cc.clone();
            std::thread::spawn(move || cc.masked_number().map(str::to_string))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), "411111******1111");
    }
}
