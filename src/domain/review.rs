/// A shopper's rating of a product. One review per (user, product).
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,
    pub product_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub product_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewPatch {
    pub rating: u8,
    pub comment: String,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub fn is_valid_rating(rating: u8) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Aggregate rating shown on a product.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place; `None` when there are no reviews.
    pub average: Option<f64>,
    pub count: u32,
}

impl RatingSummary {
    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Self {
        let (sum, count) = ratings
            .into_iter()
            .fold((0u32, 0u32), |(sum, count), rating| (sum + u32::from(rating), count + 1));
        if count == 0 {
            return Self::default();
        }
        let mean = f64::from(sum) / f64::from(count);
        Self {
            average: Some((mean * 10.0).round() / 10.0),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rounds_to_one_decimal() {
        let summary = RatingSummary::from_ratings([5, 4, 4]);
        assert_eq!(summary.average, Some(4.3));
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_summary_without_reviews_is_unrated() {
        assert_eq!(RatingSummary::from_ratings([]), RatingSummary { average: None, count: 0 });
    }

    #[test]
    fn test_rating_bounds() {
        assert!(!is_valid_rating(0));
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(6));
    }
}
