use paycard::prelude::*;
use paycard::SignatureNode::{Field, Group};

fn options() -> SignatureNode {
    Group(
        "options",
        vec![
            Field("accountInformationInquiry"),
            Field("failOnDuplicatePaymentMethod"),
            Field("failOnDuplicatePaymentMethodForCustomer"),
            Field("makeDefault"),
            Field("skipAdvancedFraudChecking"),
            Field("venmoSdkSession"), // deprecated
            Field("verificationAccountType"),
            Field("verificationAmount"),
            Field("verificationMerchantAccountId"),
            Field("verifyCard"),
        ],
    )
}

fn address_fields() -> Vec<SignatureNode> {
    vec![
        Field("firstName"),
        Field("lastName"),
        Field("company"),
        Field("countryCodeAlpha2"),
        Field("countryCodeAlpha3"),
        Field("countryCodeNumeric"),
        Field("countryName"),
        Field("extendedAddress"),
        Field("locality"),
        Field("region"),
        Field("postalCode"),
        Field("streetAddress"),
        Field("phoneNumber"),
    ]
}

fn three_d_secure() -> SignatureNode {
    Group(
        "threeDSecurePassThru",
        vec![
            Field("eciFlag"),
            Field("cavv"),
            Field("xid"),
            Field("threeDSecureVersion"),
            Field("authenticationResponse"),
            Field("directoryResponse"),
            Field("cavvAlgorithm"),
            Field("dsTransactionId"),
        ],
    )
}

fn leading_fields() -> Vec<SignatureNode> {
    vec![
        Field("billingAddressId"),
        Field("cardholderName"),
        Field("cvv"),
        Field("number"),
        Field("expirationDate"),
        Field("expirationMonth"),
        Field("expirationYear"),
        Field("token"),
        Field("venmoSdkPaymentMethodCode"), // deprecated
        Field("deviceData"),
        Field("paymentMethodNonce"),
        options(),
    ]
}

#[test]
fn create_signature() {
    let mut expected = leading_fields();
    expected.push(Group("billingAddress", address_fields()));
    expected.push(Field("customerId"));
    expected.push(three_d_secure());

    assert_eq!(
        Signature::create(),
        Signature::new(expected)
    );
}

#[test]
fn update_signature() {
    let mut address = address_fields();
    address.push(Group("options", vec![Field("updateExisting")]));

    let mut expected = leading_fields();
    expected.push(Group("billingAddress", address));
    expected.push(three_d_secure());

    assert_eq!(Signature::update(), Signature::new(expected));
    assert_eq!(paycard::gateway::update_signature(), Signature::update());
}

#[test]
fn signatures_are_stable_across_calls() {
    assert_eq!(
        paycard::gateway::create_signature(),
        paycard::gateway::create_signature()
    );
    assert_ne!(
        paycard::gateway::create_signature(),
        paycard::gateway::update_signature()
    );
}
