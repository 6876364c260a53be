use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The closed set of sensitive-data categories Veil detects.
///
/// The variant order here is also the catalog evaluation order: later
/// categories have broader matchers and would shadow the earlier, more
/// specific ones if evaluated first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ssn,
    Phone,
    Email,
    CreditCard,
    PersonName,
    StreetAddress,
}

impl Category {
    /// All categories in catalog evaluation order.
    pub const ALL: [Category; 6] = [
        Category::Ssn,
        Category::Phone,
        Category::Email,
        Category::CreditCard,
        Category::PersonName,
        Category::StreetAddress,
    ];

    /// The fixed mask token substituted for this category during redaction.
    ///
    /// Digit-shaped masks keep the original field shape; bracketed tokens are
    /// used where no shape is worth preserving. No mask re-matches any
    /// catalog pattern, which makes redaction idempotent.
    pub fn mask(self) -> &'static str {
        match self {
            Category::Ssn => "XXX-XX-XXXX",
            Category::Phone => "XXX-XXX-XXXX",
            Category::Email => "[EMAIL_REDACTED]",
            Category::CreditCard => "XXXX-XXXX-XXXX-XXXX",
            Category::PersonName => "[NAME_REDACTED]",
            Category::StreetAddress => "[ADDRESS_REDACTED]",
        }
    }

    /// Stable lower-case label, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Category::Ssn => "ssn",
            Category::Phone => "phone",
            Category::Email => "email",
            Category::CreditCard => "credit_card",
            Category::PersonName => "person_name",
            Category::StreetAddress => "street_address",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
