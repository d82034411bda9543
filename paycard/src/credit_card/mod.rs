// paycard/src/credit_card/mod.rs
//! The stored credit card, as returned by the gateway.

use chrono::{DateTime, Utc};
use log::trace;
use serde_json::{Map, Value};

use crate::constants::{self as f, MASK};
use crate::types::{CardType, CustomerLocation};
use crate::utils::parse_timestamp;
use crate::{Error, Result};

pub mod bin_data;
pub mod verification;

pub use bin_data::{
    BinData, Business, Commercial, Consumer, Corporate, Debit, DurbinRegulated, Healthcare,
    Payroll, Prepaid, Purchase,
};
pub use verification::Verification;

/// Attribute names stored as received from the gateway.
pub const ATTRIBUTES: &[&str] = &[
    f::BILLING_ADDRESS,
    f::BIN,
    f::BUSINESS,
    f::CARD_TYPE,
    f::CARDHOLDER_NAME,
    f::COMMERCIAL,
    f::CONSUMER,
    f::CORPORATE,
    f::COUNTRY_OF_ISSUANCE,
    f::CREATED_AT,
    f::CUSTOMER_ID,
    f::CUSTOMER_LOCATION,
    f::DEBIT,
    f::DEFAULT,
    f::DURBIN_REGULATED,
    f::EXPIRATION_MONTH,
    f::EXPIRATION_YEAR,
    f::EXPIRED,
    f::HEALTHCARE,
    f::IMAGE_URL,
    f::ISSUING_BANK,
    f::LAST4,
    f::PAYROLL,
    f::PREPAID,
    f::PRODUCT_ID,
    f::PURCHASE,
    f::TOKEN,
    f::UNIQUE_NUMBER_IDENTIFIER,
    f::UPDATED_AT,
    f::VERIFICATIONS,
];

/// Attribute names computed at construction.
pub const DERIVED_ATTRIBUTES: &[&str] = &[f::EXPIRATION_DATE, f::MASKED_NUMBER, f::VERIFICATION];

/// Attributes that must be strings when present.
const STRING_ATTRIBUTES: &[&str] = &[
    f::BIN,
    f::CARDHOLDER_NAME,
    f::CARD_TYPE,
    f::COUNTRY_OF_ISSUANCE,
    f::CUSTOMER_ID,
    f::CUSTOMER_LOCATION,
    f::EXPIRATION_MONTH,
    f::EXPIRATION_YEAR,
    f::IMAGE_URL,
    f::ISSUING_BANK,
    f::LAST4,
    f::PRODUCT_ID,
    f::TOKEN,
    f::UNIQUE_NUMBER_IDENTIFIER,
];

/// True if `name` can be read through [`CreditCard::attribute`].
pub fn is_recognized(name: &str) -> bool {
    ATTRIBUTES.contains(&name) || DERIVED_ATTRIBUTES.contains(&name)
}

/// Read-only view of a stored payment card.
///
/// Built once from the attribute map returned by the gateway and never
/// mutated afterwards, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCard {
    values: Map<String, Value>,
    default: bool,
    expired: bool,
    bin_data: BinData,
    card_type: Option<CardType>,
    customer_location: Option<CustomerLocation>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    verifications: Vec<Verification>,
    latest_verification: Option<usize>,
}

impl CreditCard {
    /// Build a card from a flat attribute map.
    ///
    /// Keys outside the recognized set are dropped, not rejected; key legality
    /// is checked by the gateway on the request side. Recognized keys with a
    /// value of the wrong shape fail with `InvalidAttribute`.
    pub fn factory(attributes: &Map<String, Value>) -> Result<Self> {
        let mut values = Map::new();
        for (key, value) in attributes {
            if ATTRIBUTES.contains(&key.as_str()) {
                values.insert(key.clone(), value.clone());
            } else {
                trace!("credit card attribute {} is not recognized; dropping", key);
            }
        }

        for name in STRING_ATTRIBUTES {
            match values.get(*name) {
                None | Some(Value::Null) | Some(Value::String(_)) => {}
                Some(_) => return Err(Error::invalid_attribute(name, "expected a string")),
            }
        }

        let default = bool_attr(&values, f::DEFAULT)?;
        let expired = bool_attr(&values, f::EXPIRED)?;
        let created_at = timestamp_attr(&values, f::CREATED_AT)?;
        let updated_at = timestamp_attr(&values, f::UPDATED_AT)?;

        let bin_data = BinData::from_lookup(|k| values.get(k).and_then(Value::as_str));
        let card_type = values
            .get(f::CARD_TYPE)
            .and_then(Value::as_str)
            .map(CardType::from_wire);
        let customer_location = values
            .get(f::CUSTOMER_LOCATION)
            .and_then(Value::as_str)
            .and_then(CustomerLocation::from_wire);

        let verifications = verification::parse_all(values.get(f::VERIFICATIONS))?;
        let latest_verification = verification::latest_index(&verifications);

        // Derived values join the generic view alongside the raw ones.
        for (name, normalized) in bin_data.wire_pairs() {
            values.insert(name.to_string(), Value::String(normalized));
        }
        if let Some(masked) = masked(&values) {
            values.insert(f::MASKED_NUMBER.to_string(), Value::String(masked));
        }
        let month = str_in(&values, f::EXPIRATION_MONTH);
        let year = str_in(&values, f::EXPIRATION_YEAR);
        if let (Some(month), Some(year)) = (month, year) {
            let date = format!("{}/{}", month, year);
            values.insert(f::EXPIRATION_DATE.to_string(), Value::String(date));
        }
        if let Some(idx) = latest_verification {
            values.insert(f::VERIFICATION.to_string(), verifications[idx].to_value());
        }

        trace!(
            "built credit card with {} attributes and {} verifications",
            values.len(),
            verifications.len()
        );

        Ok(Self {
            values,
            default,
            expired,
            bin_data,
            card_type,
            customer_location,
            created_at,
            updated_at,
            verifications,
            latest_verification,
        })
    }

    /// Build a card from a JSON object value.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Self::factory(map),
            _ => Err(Error::invalid_attribute(
                f::CREDIT_CARD_ENVELOPE,
                "expected an object",
            )),
        }
    }

    /// Generic access by wire name.
    ///
    /// Fails with `UndefinedProperty` for names outside the recognized set,
    /// so a misspelt name is caught at the call site instead of reading as
    /// absent. Recognized but absent attributes are `Ok(None)`.
    pub fn attribute(&self, name: &str) -> Result<Option<&Value>> {
        if !is_recognized(name) {
            return Err(Error::UndefinedProperty(name.to_string()));
        }
        if name == f::MASKED_NUMBER {
            self.masked_number()?;
        }
        Ok(self.values.get(name))
    }

    /// `token`, present once the card is stored.
    pub fn token(&self) -> Option<&str> {
        self.str_attr(f::TOKEN)
    }

    /// First six digits of the card number.
    pub fn bin(&self) -> Option<&str> {
        self.str_attr(f::BIN)
    }

    /// Last four digits of the card number.
    pub fn last4(&self) -> Option<&str> {
        self.str_attr(f::LAST4)
    }

    /// `bin + "******" + last4`. Fails when either part is absent rather than
    /// returning a partial mask.
    pub fn masked_number(&self) -> Result<&str> {
        if self.bin().is_none() {
            return Err(Error::MissingAttribute(f::BIN));
        }
        if self.last4().is_none() {
            return Err(Error::MissingAttribute(f::LAST4));
        }
        self.str_attr(f::MASKED_NUMBER)
            .ok_or(Error::MissingAttribute(f::MASKED_NUMBER))
    }

    /// Whether this is the customer's default payment method.
    pub fn is_default(&self) -> bool {
        self.default
    }

    /// Whether the gateway reports the card as expired.
    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// `cardholderName`
    pub fn cardholder_name(&self) -> Option<&str> {
        self.str_attr(f::CARDHOLDER_NAME)
    }

    /// Id of the owning customer.
    pub fn customer_id(&self) -> Option<&str> {
        self.str_attr(f::CUSTOMER_ID)
    }

    /// `expirationMonth`
    pub fn expiration_month(&self) -> Option<&str> {
        self.str_attr(f::EXPIRATION_MONTH)
    }

    /// `expirationYear`
    pub fn expiration_year(&self) -> Option<&str> {
        self.str_attr(f::EXPIRATION_YEAR)
    }

    /// `MM/YYYY`, present only when both month and year are.
    pub fn expiration_date(&self) -> Option<&str> {
        self.str_attr(f::EXPIRATION_DATE)
    }

    /// Brand parsed from `cardType`.
    pub fn card_type(&self) -> Option<CardType> {
        self.card_type
    }

    /// Parsed `customerLocation`.
    pub fn customer_location(&self) -> Option<CustomerLocation> {
        self.customer_location
    }

    /// `countryOfIssuance`
    pub fn country_of_issuance(&self) -> Option<&str> {
        self.str_attr(f::COUNTRY_OF_ISSUANCE)
    }

    /// `issuingBank`
    pub fn issuing_bank(&self) -> Option<&str> {
        self.str_attr(f::ISSUING_BANK)
    }

    /// `productId`
    pub fn product_id(&self) -> Option<&str> {
        self.str_attr(f::PRODUCT_ID)
    }

    /// `imageUrl`
    pub fn image_url(&self) -> Option<&str> {
        self.str_attr(f::IMAGE_URL)
    }

    /// `uniqueNumberIdentifier`
    pub fn unique_number_identifier(&self) -> Option<&str> {
        self.str_attr(f::UNIQUE_NUMBER_IDENTIFIER)
    }

    /// Id of the billing address; the address itself is modelled elsewhere.
    pub fn billing_address_id(&self) -> Option<&str> {
        self.values
            .get(f::BILLING_ADDRESS)
            .and_then(|a| a.get(f::ID))
            .and_then(Value::as_str)
    }

    /// `createdAt`
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// `updatedAt`
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Every verification, in the order received.
    pub fn verifications(&self) -> &[Verification] {
        &self.verifications
    }

    /// The most recent verification, if any.
    pub fn verification(&self) -> Option<&Verification> {
        self.latest_verification.map(|idx| &self.verifications[idx])
    }

    /// All bin-data flags.
    pub fn bin_data(&self) -> &BinData {
        &self.bin_data
    }

    /// `business` flag.
    pub fn business(&self) -> Business {
        self.bin_data.business
    }

    /// `commercial` flag.
    pub fn commercial(&self) -> Commercial {
        self.bin_data.commercial
    }

    /// `consumer` flag.
    pub fn consumer(&self) -> Consumer {
        self.bin_data.consumer
    }

    /// `corporate` flag.
    pub fn corporate(&self) -> Corporate {
        self.bin_data.corporate
    }

    /// `debit` flag.
    pub fn debit(&self) -> Debit {
        self.bin_data.debit
    }

    /// `durbinRegulated` flag.
    pub fn durbin_regulated(&self) -> DurbinRegulated {
        self.bin_data.durbin_regulated
    }

    /// `healthcare` flag.
    pub fn healthcare(&self) -> Healthcare {
        self.bin_data.healthcare
    }

    /// `payroll` flag.
    pub fn payroll(&self) -> Payroll {
        self.bin_data.payroll
    }

    /// `prepaid` flag.
    pub fn prepaid(&self) -> Prepaid {
        self.bin_data.prepaid
    }

    /// `purchase` flag.
    pub fn purchase(&self) -> Purchase {
        self.bin_data.purchase
    }

    fn str_attr(&self, name: &str) -> Option<&str> {
        str_in(&self.values, name)
    }
}

macro_rules! scoped_flag_constants {
    ($($ty:ident => $yes:ident, $no:ident, $unknown:ident;)*) => {
        impl CreditCard {
            $(
                #[doc = concat!("`", stringify!($ty), "::Yes`")]
                pub const $yes: $ty = $ty::Yes;
                #[doc = concat!("`", stringify!($ty), "::No`")]
                pub const $no: $ty = $ty::No;
                #[doc = concat!("`", stringify!($ty), "::Unknown`")]
                pub const $unknown: $ty = $ty::Unknown;
            )*
        }
    };
}

scoped_flag_constants! {
    Business => BUSINESS_YES, BUSINESS_NO, BUSINESS_UNKNOWN;
    Commercial => COMMERCIAL_YES, COMMERCIAL_NO, COMMERCIAL_UNKNOWN;
    Consumer => CONSUMER_YES, CONSUMER_NO, CONSUMER_UNKNOWN;
    Corporate => CORPORATE_YES, CORPORATE_NO, CORPORATE_UNKNOWN;
    Debit => DEBIT_YES, DEBIT_NO, DEBIT_UNKNOWN;
    DurbinRegulated => DURBIN_REGULATED_YES, DURBIN_REGULATED_NO, DURBIN_REGULATED_UNKNOWN;
    Healthcare => HEALTHCARE_YES, HEALTHCARE_NO, HEALTHCARE_UNKNOWN;
    Payroll => PAYROLL_YES, PAYROLL_NO, PAYROLL_UNKNOWN;
    Prepaid => PREPAID_YES, PREPAID_NO, PREPAID_UNKNOWN;
    Purchase => PURCHASE_YES, PURCHASE_NO, PURCHASE_UNKNOWN;
}

fn str_in<'a>(values: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    values.get(name).and_then(Value::as_str)
}

fn masked(values: &Map<String, Value>) -> Option<String> {
    let bin = str_in(values, f::BIN)?;
    let last4 = str_in(values, f::LAST4)?;
    Some(format!("{}{}{}", bin, MASK, last4))
}

fn bool_attr(values: &Map<String, Value>, name: &str) -> Result<bool> {
    match values.get(name) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(Error::invalid_attribute(name, "expected a boolean")),
    }
}

fn timestamp_attr(values: &Map<String, Value>, name: &str) -> Result<Option<DateTime<Utc>>> {
    match values.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| Error::invalid_attribute(name, format!("unparsable timestamp {:?}", s))),
        Some(_) => Err(Error::invalid_attribute(name, "expected a timestamp string")),
    }
}
