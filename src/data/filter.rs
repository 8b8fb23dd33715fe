use std::fmt;

use super::model::{Catalog, Listing};

// ---------------------------------------------------------------------------
// Query: the criteria of one form submission
// ---------------------------------------------------------------------------

/// Label shown for the "match every model" choice.
pub const ANY_LABEL: &str = "(Any)";

/// Model-name criterion: either any model of the brand, or one exact name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BikeNameFilter {
    #[default]
    Any,
    Exact(String),
}

impl BikeNameFilter {
    pub fn matches(&self, bike_name: &str) -> bool {
        match self {
            BikeNameFilter::Any => true,
            BikeNameFilter::Exact(name) => name == bike_name,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, BikeNameFilter::Any)
    }
}

impl fmt::Display for BikeNameFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BikeNameFilter::Any => f.write_str(ANY_LABEL),
            BikeNameFilter::Exact(name) => f.write_str(name),
        }
    }
}

/// User-supplied filter criteria.
///
/// `min_price <= max_price` is not checked: inverted bounds simply match
/// nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub brand: String,
    pub bike_name: BikeNameFilter,
    pub age: u32,
    pub min_price: u64,
    pub max_price: u64,
}

impl Query {
    /// A listing matches when brand, model and age are equal and the price
    /// lies within the inclusive range.
    pub fn matches(&self, listing: &Listing) -> bool {
        listing.brand == self.brand
            && self.bike_name.matches(&listing.bike_name)
            && listing.age == self.age
            && (self.min_price as f64) <= listing.price
            && listing.price <= (self.max_price as f64)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of listings matching `query`, in catalog order.
pub fn filtered_indices(catalog: &Catalog, query: &Query) -> Vec<usize> {
    catalog
        .listings()
        .iter()
        .enumerate()
        .filter(|(_, listing)| query.matches(listing))
        .map(|(i, _)| i)
        .collect()
}

/// Return the listings matching `query`, in catalog order. An empty result
/// means "no matches", not a failure.
pub fn filter<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Listing> {
    catalog
        .listings()
        .iter()
        .filter(|listing| query.matches(listing))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::listing;

    fn honda_query(age: u32, min_price: u64, max_price: u64) -> Query {
        Query {
            brand: "Honda".to_string(),
            bike_name: BikeNameFilter::Any,
            age,
            min_price,
            max_price,
        }
    }

    fn single_row() -> Catalog {
        Catalog::from_listings(vec![listing("Honda", "CB350", 5, 150000.0)])
    }

    fn mixed() -> Catalog {
        Catalog::from_listings(vec![
            listing("Honda", "CB350", 5, 150000.0),
            listing("Yamaha", "R15", 5, 150000.0),
            listing("Honda", "Shine", 5, 60000.0),
            listing("Honda", "CB350", 6, 140000.0),
            listing("Honda", "Shine", 5, 100000.0),
            listing("Honda", "CB350", 5, 200000.0),
            listing("Honda", "CB350", 5, 200000.5),
        ])
    }

    #[test]
    fn single_matching_row_is_returned() {
        let catalog = single_row();
        let result = filter(&catalog, &honda_query(5, 100000, 200000));
        assert_eq!(result, vec![&catalog.listings()[0]]);
    }

    #[test]
    fn wrong_age_yields_no_matches() {
        let catalog = single_row();
        assert!(filter(&catalog, &honda_query(6, 100000, 200000)).is_empty());
    }

    #[test]
    fn inverted_price_bounds_yield_no_matches() {
        let catalog = single_row();
        assert!(filter(&catalog, &honda_query(5, 200000, 100000)).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = mixed();
        assert_eq!(
            filtered_indices(&catalog, &honda_query(5, 100000, 200000)),
            vec![0, 4, 5]
        );
    }

    #[test]
    fn exact_model_narrows_the_result() {
        let catalog = mixed();
        let mut query = honda_query(5, 0, 2_000_000);
        query.bike_name = BikeNameFilter::Exact("Shine".to_string());
        assert_eq!(filtered_indices(&catalog, &query), vec![2, 4]);
    }

    #[test]
    fn result_partitions_the_catalog() {
        let catalog = mixed();
        let query = honda_query(5, 50000, 180000);
        let hits = filtered_indices(&catalog, &query);

        for (i, row) in catalog.listings().iter().enumerate() {
            assert_eq!(hits.contains(&i), query.matches(row), "row {i}");
        }
        for &i in &hits {
            let row = &catalog.listings()[i];
            assert_eq!(row.brand, "Honda");
            assert_eq!(row.age, 5);
            assert!((50000.0..=180000.0).contains(&row.price));
        }
    }

    #[test]
    fn order_is_preserved_and_repeatable() {
        let catalog = mixed();
        let query = honda_query(5, 0, 2_000_000);
        let first = filtered_indices(&catalog, &query);
        let second = filtered_indices(&catalog, &query);

        assert_eq!(first, second);
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn any_label_is_displayed() {
        assert_eq!(BikeNameFilter::Any.to_string(), "(Any)");
        assert_eq!(BikeNameFilter::Exact("R15".into()).to_string(), "R15");
    }
}
