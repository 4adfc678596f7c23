use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::Product;

/// Active catalog filter. The default value matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, description and category name.
    pub search: String,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub min_rating: Option<f64>,
    pub category_id: Option<String>,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `product` passes every active constraint.
    ///
    /// `category_name` is the resolved name of the product's category, if any.
    pub fn matches(&self, product: &Product, category_name: Option<&str>) -> bool {
        self.matches_search(product, category_name)
            && self.matches_price(product.price)
            && self.matches_rating(product.rating_or_zero())
            && self.matches_category(product.category_id.as_deref())
    }

    fn matches_search(&self, product: &Product, category_name: Option<&str>) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(&product.name)
            || contains(&product.description)
            || category_name.is_some_and(contains)
    }

    fn matches_price(&self, price: Decimal) -> bool {
        self.min_price.map_or(true, |min| price >= min) && self.max_price.map_or(true, |max| price <= max)
    }

    fn matches_rating(&self, rating: f64) -> bool {
        self.min_rating.map_or(true, |min| rating >= min)
    }

    fn matches_category(&self, category_id: Option<&str>) -> bool {
        match &self.category_id {
            None => true,
            Some(selected) => category_id == Some(selected.as_str()),
        }
    }
}

/// Filter fields exactly as typed by the shopper.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterInput {
    pub search: String,
    pub min_price: String,
    pub max_price: String,
    pub min_rating: String,
    pub category: String,
}

impl From<&FilterInput> for FilterCriteria {
    /// Blank or unparsable numeric fields and a blank category become "no constraint".
    fn from(input: &FilterInput) -> Self {
        let category = input.category.trim();
        Self {
            search: input.search.clone(),
            min_price: parse_decimal(&input.min_price),
            max_price: parse_decimal(&input.max_price),
            min_rating: parse_rating(&input.min_rating),
            category_id: (!category.is_empty()).then(|| category.to_string()),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim()).ok()
}

fn parse_rating(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|rating| rating.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn sunset() -> Product {
        Product::new("1", "Sunset", dec!(500))
            .with_description("Warm oils over the bay")
            .with_category("A")
            .with_rating(4.5, 2)
    }

    #[test]
    fn test_search_covers_description_and_category_name() {
        let product = sunset();
        let by = |search: &str| FilterCriteria { search: search.into(), ..Default::default() };

        assert!(by("SUN").matches(&product, Some("Landscapes")));
        assert!(by("the bay").matches(&product, Some("Landscapes")));
        assert!(by("landscape").matches(&product, Some("Landscapes")));
        assert!(!by("landscape").matches(&product, None));
        assert!(!by("portrait").matches(&product, Some("Landscapes")));
    }

    #[test]
    fn test_unrated_products_count_as_zero() {
        let unrated = Product::new("3", "Study", dec!(50));
        let zero = FilterCriteria { min_rating: Some(0.0), ..Default::default() };
        let one = FilterCriteria { min_rating: Some(1.0), ..Default::default() };
        assert!(zero.matches(&unrated, None));
        assert!(!one.matches(&unrated, None));
    }

    #[test]
    fn test_category_selection_excludes_uncategorized() {
        let uncategorized = Product::new("3", "Study", dec!(50));
        let criteria = FilterCriteria { category_id: Some("A".into()), ..Default::default() };
        assert!(criteria.matches(&sunset(), None));
        assert!(!criteria.matches(&uncategorized, None));
        assert!(FilterCriteria::default().matches(&uncategorized, None));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let criteria = FilterCriteria {
            min_price: Some(dec!(500)),
            max_price: Some(dec!(500)),
            ..Default::default()
        };
        assert!(criteria.matches(&sunset(), None));
    }

    #[test]
    fn test_input_parsing_treats_garbage_as_unset() {
        let input = FilterInput {
            search: "sun".into(),
            min_price: "abc".into(),
            max_price: " 1500 ".into(),
            min_rating: "NaN".into(),
            category: "  ".into(),
        };
        let criteria = FilterCriteria::from(&input);
        assert_eq!(criteria.search, "sun");
        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, Some(dec!(1500)));
        assert_eq!(criteria.min_rating, None);
        assert_eq!(criteria.category_id, None);

        assert!(FilterCriteria::from(&FilterInput::default()).is_unconstrained());
    }

    fn product_strategy() -> impl Strategy<Value = Product> {
        (
            "[a-z]{1,8}",
            0u32..5000,
            proptest::option::of(0.0f64..=5.0),
            proptest::option::of("[AB]"),
        )
            .prop_map(|(name, price, rating, category)| {
                let mut product = Product::new(name.clone(), name, Decimal::from(price));
                product.average_rating = rating;
                product.category_id = category;
                product
            })
    }

    proptest! {
        #[test]
        fn prop_default_criteria_matches_everything(product in product_strategy()) {
            prop_assert!(FilterCriteria::default().matches(&product, Some("Anything")));
        }

        #[test]
        fn prop_inverted_price_range_matches_nothing(
            product in product_strategy(),
            min in 1u32..5000,
            gap in 1u32..1000,
        ) {
            let min = Decimal::from(min);
            let criteria = FilterCriteria {
                min_price: Some(min),
                max_price: Some(min - Decimal::from(gap)),
                ..Default::default()
            };
            prop_assert!(!criteria.matches(&product, None));
        }
    }
}
