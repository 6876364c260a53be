use veil_core::{Category, IFakeProvider};

/// The default fake-value provider: one fixed, plausible sample per
/// category. Deliberately a placeholder capability — no randomness, no
/// statistical fidelity.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticFakeProvider;

impl IFakeProvider for StaticFakeProvider {
    fn fake_value(&self, category: Category) -> &str {
        match category {
            Category::Ssn => "555-12-3456",
            Category::Phone => "555-123-4567",
            Category::Email => "alex.johnson@example.com",
            Category::CreditCard => "4242-4242-4242-4242",
            Category::PersonName => "Alex Johnson",
            Category::StreetAddress => "123 Main Street",
        }
    }
}
