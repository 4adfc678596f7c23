use crate::domain::RatingSummary;

/// Custom actions for Product records.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Replaces the derived average rating and review count.
    ApplyRating(RatingSummary),
}
