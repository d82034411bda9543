// paycard/src/constants.rs
//! Wire field names shared by the credit card model and its gateway.
//!
//! These must match the gateway's camelCase names verbatim.

/// `billingAddress`
pub const BILLING_ADDRESS: &str = "billingAddress";
/// `billingAddressId`
pub const BILLING_ADDRESS_ID: &str = "billingAddressId";
/// `bin`
pub const BIN: &str = "bin";
/// `business`
pub const BUSINESS: &str = "business";
/// `cardType`
pub const CARD_TYPE: &str = "cardType";
/// `cardholderName`
pub const CARDHOLDER_NAME: &str = "cardholderName";
/// `commercial`
pub const COMMERCIAL: &str = "commercial";
/// `consumer`
pub const CONSUMER: &str = "consumer";
/// `corporate`
pub const CORPORATE: &str = "corporate";
/// `countryOfIssuance`
pub const COUNTRY_OF_ISSUANCE: &str = "countryOfIssuance";
/// `createdAt`
pub const CREATED_AT: &str = "createdAt";
/// `customerId`
pub const CUSTOMER_ID: &str = "customerId";
/// `customerLocation`
pub const CUSTOMER_LOCATION: &str = "customerLocation";
/// `cvv`
pub const CVV: &str = "cvv";
/// `debit`
pub const DEBIT: &str = "debit";
/// `default`
pub const DEFAULT: &str = "default";
/// `deviceData`
pub const DEVICE_DATA: &str = "deviceData";
/// `durbinRegulated`
pub const DURBIN_REGULATED: &str = "durbinRegulated";
/// `expirationDate`
pub const EXPIRATION_DATE: &str = "expirationDate";
/// `expirationMonth`
pub const EXPIRATION_MONTH: &str = "expirationMonth";
/// `expirationYear`
pub const EXPIRATION_YEAR: &str = "expirationYear";
/// `expired`
pub const EXPIRED: &str = "expired";
/// `healthcare`
pub const HEALTHCARE: &str = "healthcare";
/// `id`
pub const ID: &str = "id";
/// `imageUrl`
pub const IMAGE_URL: &str = "imageUrl";
/// `issuingBank`
pub const ISSUING_BANK: &str = "issuingBank";
/// `last4`
pub const LAST4: &str = "last4";
/// `maskedNumber`
pub const MASKED_NUMBER: &str = "maskedNumber";
/// `number`
pub const NUMBER: &str = "number";
/// `options`
pub const OPTIONS: &str = "options";
/// `paymentMethodNonce`
pub const PAYMENT_METHOD_NONCE: &str = "paymentMethodNonce";
/// `payroll`
pub const PAYROLL: &str = "payroll";
/// `prepaid`
pub const PREPAID: &str = "prepaid";
/// `productId`
pub const PRODUCT_ID: &str = "productId";
/// `purchase`
pub const PURCHASE: &str = "purchase";
/// `threeDSecurePassThru`
pub const THREE_D_SECURE_PASS_THRU: &str = "threeDSecurePassThru";
/// `token`
pub const TOKEN: &str = "token";
/// `uniqueNumberIdentifier`
pub const UNIQUE_NUMBER_IDENTIFIER: &str = "uniqueNumberIdentifier";
/// `updatedAt`
pub const UPDATED_AT: &str = "updatedAt";
/// `updateExisting`
pub const UPDATE_EXISTING: &str = "updateExisting";
/// `venmoSdkPaymentMethodCode`
pub const VENMO_SDK_PAYMENT_METHOD_CODE: &str = "venmoSdkPaymentMethodCode";
/// `venmoSdkSession`
pub const VENMO_SDK_SESSION: &str = "venmoSdkSession";
/// `verification`
pub const VERIFICATION: &str = "verification";
/// `verifications`
pub const VERIFICATIONS: &str = "verifications";

/// Envelope key wrapping a card in gateway requests and responses.
pub const CREDIT_CARD_ENVELOPE: &str = "creditCard";

/// Fixed mask placed between `bin` and `last4`, independent of card length.
pub const MASK: &str = "******";
