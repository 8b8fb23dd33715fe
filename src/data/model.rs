use std::collections::{BTreeMap, BTreeSet};

// ---------------------------------------------------------------------------
// Listing – one row of the catalog
// ---------------------------------------------------------------------------

/// A single used-bike listing (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub brand: String,
    pub bike_name: String,
    /// Age in whole years.
    pub age: u32,
    /// Asking price in the catalog's currency.
    pub price: f64,
    pub kms_driven: Option<u64>,
    /// Engine displacement.
    pub cc: Option<f64>,
    pub power: Option<f64>,
}

// ---------------------------------------------------------------------------
// Catalog – the complete loaded table
// ---------------------------------------------------------------------------

/// All listings in file order, plus a brand → model-name index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    models_by_brand: BTreeMap<String, BTreeSet<String>>,
}

impl Catalog {
    /// Build the brand index from the loaded listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut models_by_brand: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for listing in &listings {
            models_by_brand
                .entry(listing.brand.clone())
                .or_default()
                .insert(listing.bike_name.clone());
        }
        Catalog {
            listings,
            models_by_brand,
        }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Distinct brands, sorted ascending.
    pub fn brands(&self) -> impl Iterator<Item = &str> {
        self.models_by_brand.keys().map(String::as_str)
    }

    /// Distinct model names for `brand`, sorted ascending. Empty for an unknown brand.
    pub fn models_for(&self, brand: &str) -> impl Iterator<Item = &str> {
        self.models_by_brand
            .get(brand)
            .into_iter()
            .flat_map(|models| models.iter().map(String::as_str))
    }

    pub fn has_brand(&self, brand: &str) -> bool {
        self.models_by_brand.contains_key(brand)
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn listing(brand: &str, bike_name: &str, age: u32, price: f64) -> Listing {
        Listing {
            brand: brand.to_string(),
            bike_name: bike_name.to_string(),
            age,
            price,
            kms_driven: None,
            cc: None,
            power: None,
        }
    }

    #[test]
    fn brands_and_models_are_sorted_and_distinct() {
        let catalog = Catalog::from_listings(vec![
            listing("Yamaha", "R15", 3, 120000.0),
            listing("Honda", "Shine", 2, 60000.0),
            listing("Honda", "CB350", 5, 150000.0),
            listing("Honda", "Shine", 4, 45000.0),
        ]);

        assert_eq!(catalog.brands().collect::<Vec<_>>(), ["Honda", "Yamaha"]);
        assert_eq!(
            catalog.models_for("Honda").collect::<Vec<_>>(),
            ["CB350", "Shine"]
        );
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn unknown_brand_has_no_models() {
        let catalog = Catalog::from_listings(vec![listing("Honda", "CB350", 5, 150000.0)]);
        assert_eq!(catalog.models_for("Ducati").count(), 0);
        assert!(!catalog.has_brand("Ducati"));
        assert!(catalog.has_brand("Honda"));
    }

    #[test]
    fn listings_keep_file_order() {
        let rows = vec![
            listing("TVS", "Apache", 1, 90000.0),
            listing("Bajaj", "Pulsar", 2, 70000.0),
        ];
        let catalog = Catalog::from_listings(rows.clone());
        assert_eq!(catalog.listings(), rows.as_slice());
    }
}
