// fixtures.rs — provides commonly used gateway payloads

use serde_json::{Value, json};

pub fn sample_card_json() -> Value {
    json!({
        "token": "my_token",
        "bin": "411111",
        "last4": "1111",
        "cardType": "Visa",
        "cardholderName": "Jane Doe",
        "customerId": "customer_1",
        "expirationMonth": "05",
        "expirationYear": "2030",
        "expired": false,
        "default": true,
        "customerLocation": "us",
        "countryOfIssuance": "USA",
        "issuingBank": "First Bank",
        "createdAt": "2020-01-02T03:04:05Z",
        "updatedAt": "2020-02-03T04:05:06Z",
        "business": "Yes",
        "consumer": "No",
        "prepaid": "Unknown",
        "billingAddress": {"id": "ad", "postalCode": "60606"},
        "subscriptions": [],
        "verifications": sample_verifications_json()
    })
}

pub fn sample_verifications_json() -> Value {
    json!([
        {"id": "123", "createdAt": "2012-12-12"},
        {"id": "932", "createdAt": "2012-12-15"},
        {"id": "456", "createdAt": "2012-12-13"}
    ])
}

pub fn sample_card_response() -> Value {
    json!({ "creditCard": sample_card_json() })
}
