use paycard::prelude::*;
use paycard::test_support::attributes;
use proptest::prelude::*;
use serde_json::json;

proptest! {
    #[test]
    fn masked_number_is_bin_mask_last4(bin in "[0-9]{6}", last4 in "[0-9]{4}") {
        let cc = CreditCard::factory(&attributes(json!({"bin": &bin, "last4": &last4}))).unwrap();
        let expected = format!("{}******{}", bin, last4);
        prop_assert_eq!(cc.masked_number().unwrap(), expected.as_str());
    }

    #[test]
    fn unknown_names_are_undefined(name in "[a-z]{3,12}Typo") {
        let cc = CreditCard::factory(&attributes(json!({}))).unwrap();
        let is_undefined = matches!(cc.attribute(&name), Err(Error::UndefinedProperty(_)));
        prop_assert!(is_undefined);
    }

    #[test]
    fn default_flag_passthrough(flag in any::<bool>()) {
        let cc = CreditCard::factory(&attributes(json!({"default": flag}))).unwrap();
        prop_assert_eq!(cc.is_default(), flag);
    }
}
