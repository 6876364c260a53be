use veil_core::{Category, IFakeProvider};

use crate::fake::StaticFakeProvider;

/// Digit-shaped masks first, longest to shortest, so no shorter token can
/// bite into a longer one; bracketed tokens can't collide and follow.
const MASK_ORDER: [Category; 6] = [
    Category::CreditCard,
    Category::Phone,
    Category::Ssn,
    Category::Email,
    Category::PersonName,
    Category::StreetAddress,
];

/// Reverses mask tokens in redacted text into plausible fake values.
///
/// Total on any input: text without mask tokens passes through unchanged,
/// and running the synthesizer on its own output is a no-op since fake
/// values contain no mask tokens.
pub struct Synthesizer {
    provider: Box<dyn IFakeProvider>,
}

impl Synthesizer {
    /// A synthesizer backed by the fixed sample table.
    pub fn new() -> Self {
        Self::with_provider(Box::new(StaticFakeProvider))
    }

    /// A synthesizer backed by a custom fake-value provider.
    pub fn with_provider(provider: Box<dyn IFakeProvider>) -> Self {
        Self { provider }
    }

    /// Substitute every mask token with its category's fake value.
    pub fn synthesize(&self, redacted: &str) -> String {
        let mut result = redacted.to_string();
        for category in MASK_ORDER {
            result = result.replace(category.mask(), self.provider.fake_value(category));
        }
        result
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
