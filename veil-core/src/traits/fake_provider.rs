use crate::models::Category;

/// Supplies the fake value substituted for a category's mask token during
/// synthesis.
///
/// A seam rather than a table: the default implementation returns fixed
/// samples, but callers can inject randomized or statistically faithful
/// generators without touching the pipeline shape.
pub trait IFakeProvider: Send + Sync {
    /// A plausible fake value for the given category.
    fn fake_value(&self, category: Category) -> &str;
}
