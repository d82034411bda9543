//! Issuer classification flags ("bin data").
//!
//! The gateway reports each flag as `"Yes"`, `"No"` or `"Unknown"`. Every flag
//! gets its own enumeration so a `Business::Yes` can never be compared with a
//! `Consumer::Yes` by accident.

use derive_more::Display;

macro_rules! bin_data_flag {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $name {
            /// `"Yes"`
            #[display(fmt = "Yes")]
            Yes,
            /// `"No"`
            #[display(fmt = "No")]
            No,
            /// Absent or any other value.
            #[default]
            #[display(fmt = "Unknown")]
            Unknown,
        }

        impl $name {
            /// Normalize a raw gateway value. Absent or unrecognised values
            /// map to `Unknown`.
            pub fn from_wire(raw: Option<&str>) -> Self {
                match raw {
                    Some("Yes") => Self::Yes,
                    Some("No") => Self::No,
                    _ => Self::Unknown,
                }
            }
        }
    };
}

bin_data_flag!(
    /// `business`
    Business
);
bin_data_flag!(
    /// `commercial`
    Commercial
);
bin_data_flag!(
    /// `consumer`
    Consumer
);
bin_data_flag!(
    /// `corporate`
    Corporate
);
bin_data_flag!(
    /// `debit`
    Debit
);
bin_data_flag!(
    /// `durbinRegulated`
    DurbinRegulated
);
bin_data_flag!(
    /// `healthcare`
    Healthcare
);
bin_data_flag!(
    /// `payroll`
    Payroll
);
bin_data_flag!(
    /// `prepaid`
    Prepaid
);
bin_data_flag!(
    /// `purchase`
    Purchase
);

/// All bin-data flags of one card, normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinData {
    /// `business`
    pub business: Business,
    /// `commercial`
    pub commercial: Commercial,
    /// `consumer`
    pub consumer: Consumer,
    /// `corporate`
    pub corporate: Corporate,
    /// `debit`
    pub debit: Debit,
    /// `durbinRegulated`
    pub durbin_regulated: DurbinRegulated,
    /// `healthcare`
    pub healthcare: Healthcare,
    /// `payroll`
    pub payroll: Payroll,
    /// `prepaid`
    pub prepaid: Prepaid,
    /// `purchase`
    pub purchase: Purchase,
}

impl BinData {
    /// Read every flag from a raw attribute map via `lookup`.
    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        use crate::constants as f;
        Self {
            business: Business::from_wire(lookup(f::BUSINESS)),
            commercial: Commercial::from_wire(lookup(f::COMMERCIAL)),
            consumer: Consumer::from_wire(lookup(f::CONSUMER)),
            corporate: Corporate::from_wire(lookup(f::CORPORATE)),
            debit: Debit::from_wire(lookup(f::DEBIT)),
            durbin_regulated: DurbinRegulated::from_wire(lookup(f::DURBIN_REGULATED)),
            healthcare: Healthcare::from_wire(lookup(f::HEALTHCARE)),
            payroll: Payroll::from_wire(lookup(f::PAYROLL)),
            prepaid: Prepaid::from_wire(lookup(f::PREPAID)),
            purchase: Purchase::from_wire(lookup(f::PURCHASE)),
        }
    }

    /// Normalized flags keyed by wire name, for the generic attribute view.
    pub(crate) fn wire_pairs(&self) -> [(&'static str, String); 10] {
        use crate::constants as f;
        [
            (f::BUSINESS, self.business.to_string()),
            (f::COMMERCIAL, self.commercial.to_string()),
            (f::CONSUMER, self.consumer.to_string()),
            (f::CORPORATE, self.corporate.to_string()),
            (f::DEBIT, self.debit.to_string()),
            (f::DURBIN_REGULATED, self.durbin_regulated.to_string()),
            (f::HEALTHCARE, self.healthcare.to_string()),
            (f::PAYROLL, self.payroll.to_string()),
            (f::PREPAID, self.prepaid.to_string()),
            (f::PURCHASE, self.purchase.to_string()),
        ]
    }
}
