use paycard::prelude::*;
use paycard::test_support::attributes;
use serde_json::json;

#[test]
fn bin_data() {
    let cc = CreditCard::factory(&attributes(json!({
        "business": "Yes",
        "consumer": "No",
        "corporate": "Yes",
        "purchase": "No"
    })))
    .unwrap();

    assert_eq!(cc.business(), CreditCard::BUSINESS_YES);
    assert_eq!(cc.consumer(), CreditCard::CONSUMER_NO);
    assert_eq!(cc.corporate(), CreditCard::CORPORATE_YES);
    assert_eq!(cc.purchase(), CreditCard::PURCHASE_NO);
}

#[test]
fn absent_flags_are_unknown() {
    let cc = CreditCard::factory(&attributes(json!({}))).unwrap();
    let bin = cc.bin_data();
    assert_eq!(bin.business, CreditCard::BUSINESS_UNKNOWN);
    assert_eq!(bin.commercial, CreditCard::COMMERCIAL_UNKNOWN);
    assert_eq!(bin.debit, CreditCard::DEBIT_UNKNOWN);
    assert_eq!(bin.durbin_regulated, CreditCard::DURBIN_REGULATED_UNKNOWN);
    assert_eq!(bin.healthcare, CreditCard::HEALTHCARE_UNKNOWN);
    assert_eq!(bin.payroll, CreditCard::PAYROLL_UNKNOWN);
    assert_eq!(bin.prepaid, CreditCard::PREPAID_UNKNOWN);
}

#[test]
fn extended_flags() {
    let cc = CreditCard::factory(&attributes(json!({
        "commercial": "No",
        "debit": "Yes",
        "durbinRegulated": "No",
        "healthcare": "Yes",
        "payroll": "No",
        "prepaid": "Yes"
    })))
    .unwrap();

    assert_eq!(cc.commercial(), CreditCard::COMMERCIAL_NO);
    assert_eq!(cc.debit(), CreditCard::DEBIT_YES);
    assert_eq!(cc.durbin_regulated(), CreditCard::DURBIN_REGULATED_NO);
    assert_eq!(cc.healthcare(), CreditCard::HEALTHCARE_YES);
    assert_eq!(cc.payroll(), CreditCard::PAYROLL_NO);
    assert_eq!(cc.prepaid(), CreditCard::PREPAID_YES);
}

#[test]
fn generic_view_exposes_normalized_values() {
    let cc = CreditCard::factory(&attributes(json!({"business": "maybe"}))).unwrap();
    assert_eq!(cc.attribute("business").unwrap(), Some(&json!("Unknown")));
}
