//! Listing filter/sort pipeline.
//!
//! [`filter_properties`] derives the visible listing set from the full sample
//! set, a free-text query, the session [`SearchFilters`] and a [`SortKey`].
//! Every filter step is skipped when its input is empty, so default filters
//! and an empty query return the input unchanged.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Property, SearchFilters};

/// Listing order. Unknown keys parse to [`SortKey::Unsorted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    Rating,
    Newest,
    #[default]
    Unsorted,
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "newest" => SortKey::Newest,
            _ => SortKey::Unsorted,
        })
    }
}

impl SortKey {
    fn compare(self, a: &Property, b: &Property) -> Ordering {
        match self {
            SortKey::PriceLow => a.price.cmp(&b.price),
            SortKey::PriceHigh => b.price.cmp(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Newest => b.year_built.cmp(&a.year_built),
            SortKey::Unsorted => Ordering::Equal,
        }
    }
}

/// Free-text query plus sort order, the per-page half of a search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub sort: SortKey,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, sort: SortKey) -> Self {
        Self {
            text: text.into(),
            sort,
        }
    }

    pub fn run(&self, properties: &[Property], filters: &SearchFilters) -> Vec<Property> {
        filter_properties(properties, &self.text, filters, self.sort)
    }
}

/// Parse a numeric filter typed as text.
///
/// Reads the leading integer, so `"900000.50"` bounds at 900000 and `"3+"` at
/// 3. Empty text or text that does not start with a digit is no bound.
pub fn parse_bound(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let digits_start = usize::from(text.starts_with(|c: char| c == '-' || c == '+'));
    let digits_end = text[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |i| i + digits_start);
    if digits_end == digits_start {
        return None;
    }
    text[..digits_end].parse().ok()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Apply query, filters and sort order to `properties`.
///
/// Filters run in a fixed order: query (title or location), minimum price,
/// maximum price, minimum bedrooms, exact type, location substring,
/// sustainability. Bounds are inclusive. The sort is stable.
pub fn filter_properties(
    properties: &[Property],
    query: &str,
    filters: &SearchFilters,
    sort: SortKey,
) -> Vec<Property> {
    let mut filtered: Vec<Property> = properties.to_vec();

    if !query.is_empty() {
        let needle = query.to_lowercase();
        filtered.retain(|p| {
            contains_ignore_case(&p.title, &needle) || contains_ignore_case(&p.location, &needle)
        });
    }

    if let Some(min) = parse_bound(&filters.price_min) {
        filtered.retain(|p| p.price >= min);
    }
    if let Some(max) = parse_bound(&filters.price_max) {
        filtered.retain(|p| p.price <= max);
    }
    if let Some(bedrooms) = parse_bound(&filters.bedrooms) {
        filtered.retain(|p| i64::from(p.bedrooms) >= bedrooms);
    }
    if !filters.property_type.is_empty() {
        filtered.retain(|p| p.kind == filters.property_type);
    }
    if !filters.location.is_empty() {
        let needle = filters.location.to_lowercase();
        filtered.retain(|p| contains_ignore_case(&p.location, &needle));
    }
    if filters.sustainability {
        filtered.retain(|p| p.sustainable);
    }

    if sort != SortKey::Unsorted {
        filtered.sort_by(|a, b| sort.compare(a, b));
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample;

    fn ids(properties: &[Property]) -> Vec<u32> {
        properties.iter().map(|p| p.id).collect()
    }

    fn filters() -> SearchFilters {
        SearchFilters::default()
    }

    #[test]
    fn empty_inputs_are_identity() {
        let all = sample::properties();
        let result = filter_properties(&all, "", &filters(), SortKey::Unsorted);
        assert_eq!(result, all);
    }

    #[test]
    fn price_min_removes_exactly_cheaper_listings() {
        let all = sample::properties();
        let f = SearchFilters {
            price_min: "1200000".to_string(),
            ..filters()
        };
        let result = filter_properties(&all, "", &f, SortKey::Unsorted);
        assert_eq!(ids(&result), vec![2, 3, 4, 6]);
        assert!(result.iter().all(|p| p.price >= 1_200_000));
    }

    #[test]
    fn price_range_is_inclusive() {
        let all = sample::properties();
        let f = SearchFilters {
            price_min: "850000".to_string(),
            price_max: "1800000".to_string(),
            ..filters()
        };
        let result = filter_properties(&all, "", &f, SortKey::Unsorted);
        assert_eq!(ids(&result), vec![1, 3, 6]);
    }

    #[test]
    fn sort_by_price_low() {
        let all: Vec<Property> = sample::properties()
            .into_iter()
            .filter(|p| [1, 2, 3, 4].contains(&p.id))
            .collect();
        let result = filter_properties(&all, "", &filters(), SortKey::PriceLow);
        let prices: Vec<i64> = result.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![850_000, 1_200_000, 2_500_000, 4_200_000]);
    }

    #[test]
    fn sort_by_rating_keeps_input_order_for_ties() {
        let all = sample::properties();
        let result = filter_properties(&all, "", &filters(), SortKey::Rating);
        // 3 and 6 are both rated 4.7
        assert_eq!(ids(&result), vec![4, 2, 1, 3, 6, 5]);
    }

    #[test]
    fn sort_by_price_high_and_newest() {
        let all = sample::properties();
        assert_eq!(
            ids(&filter_properties(&all, "", &filters(), SortKey::PriceHigh)),
            vec![4, 2, 6, 3, 1, 5]
        );
        assert_eq!(
            ids(&filter_properties(&all, "", &filters(), SortKey::Newest)),
            vec![4, 2, 1, 5, 3, 6]
        );
    }

    #[test]
    fn unknown_sort_key_keeps_order() {
        let key: SortKey = "price".parse().unwrap();
        assert_eq!(key, SortKey::Unsorted);

        let all = sample::properties();
        assert_eq!(ids(&filter_properties(&all, "", &filters(), key)), ids(&all));
    }

    #[test]
    fn query_matches_title_or_location_case_insensitively() {
        let all = sample::properties();
        assert_eq!(
            ids(&filter_properties(&all, "DUBAI", &filters(), SortKey::Unsorted)),
            vec![1, 5]
        );
        assert_eq!(
            ids(&filter_properties(&all, "villa", &filters(), SortKey::Unsorted)),
            vec![2]
        );
    }

    #[test]
    fn bedrooms_type_location_and_sustainability() {
        let all = sample::properties();

        let f = SearchFilters {
            bedrooms: "4".to_string(),
            ..filters()
        };
        assert_eq!(ids(&filter_properties(&all, "", &f, SortKey::Unsorted)), vec![2, 4, 6]);

        let f = SearchFilters {
            property_type: "Studio".to_string(),
            ..filters()
        };
        assert_eq!(ids(&filter_properties(&all, "", &f, SortKey::Unsorted)), vec![5]);

        let f = SearchFilters {
            location: "jumeirah".to_string(),
            ..filters()
        };
        assert_eq!(ids(&filter_properties(&all, "", &f, SortKey::Unsorted)), vec![2, 4]);

        let f = SearchFilters {
            sustainability: true,
            ..filters()
        };
        assert_eq!(
            ids(&filter_properties(&all, "", &f, SortKey::Unsorted)),
            vec![1, 2, 4, 5, 6]
        );
    }

    #[test]
    fn non_numeric_bounds_are_ignored() {
        assert_eq!(parse_bound(""), None);
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound(" 42 "), Some(42));
        assert_eq!(parse_bound("-"), None);
        assert_eq!(parse_bound(".5"), None);

        let all = sample::properties();
        let f = SearchFilters {
            price_min: "lots".to_string(),
            bedrooms: "  ".to_string(),
            ..filters()
        };
        assert_eq!(filter_properties(&all, "", &f, SortKey::Unsorted), all);
    }

    #[test]
    fn decimal_and_suffixed_bounds_use_leading_integer() {
        assert_eq!(parse_bound("900000.50"), Some(900_000));
        assert_eq!(parse_bound("3+"), Some(3));
        assert_eq!(parse_bound("12abc"), Some(12));

        let all = sample::properties();
        let f = SearchFilters {
            price_max: "900000.50".to_string(),
            ..filters()
        };
        assert_eq!(ids(&filter_properties(&all, "", &f, SortKey::Unsorted)), vec![1, 5]);
    }

    #[test]
    fn no_matches_is_an_empty_list() {
        let all = sample::properties();
        let f = SearchFilters {
            price_max: "100".to_string(),
            ..filters()
        };
        assert!(filter_properties(&all, "", &f, SortKey::PriceLow).is_empty());
    }

    #[test]
    fn search_query_runs_pipeline() {
        let all = sample::properties();
        let query = SearchQuery::new("", "price-low".parse().unwrap());
        assert_eq!(ids(&query.run(&all, &filters())), vec![5, 1, 3, 6, 2, 4]);
    }
}
