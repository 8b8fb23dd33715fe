use std::sync::Arc;

use crate::config::{AppConfig, FormConfig};
use crate::data::filter::{filtered_indices, BikeNameFilter, Query};
use crate::data::model::{Catalog, Listing};

// ---------------------------------------------------------------------------
// Search outcome
// ---------------------------------------------------------------------------

/// Result of one form submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The criteria that were submitted.
    pub query: Query,
    /// Catalog indices of the matching listings, in catalog order.
    pub indices: Vec<usize>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full form state, independent of rendering.
pub struct AppState {
    /// Loaded catalog, shared read-only.
    pub catalog: Arc<Catalog>,

    /// Form bounds and defaults.
    form: FormConfig,

    /// Selected brand (None only when the catalog is empty).
    brand: Option<String>,

    /// Selected model, `(Any)` by default.
    bike_name: BikeNameFilter,

    age: u32,
    min_price: u64,
    max_price: u64,

    /// Outcome of the last submission, kept until the next one.
    pub last_outcome: Option<SearchOutcome>,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, config: &AppConfig) -> Self {
        let form = config.form.clone();
        let brand = catalog.brands().next().map(str::to_string);
        let mut state = Self {
            catalog,
            brand,
            bike_name: BikeNameFilter::Any,
            age: 0,
            min_price: 0,
            max_price: 0,
            last_outcome: None,
            form,
        };
        state.set_age(state.form.default_age);
        state.set_min_price(state.form.default_min_price);
        state.set_max_price(state.form.default_max_price);
        state
    }

    pub fn form(&self) -> &FormConfig {
        &self.form
    }

    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn bike_name(&self) -> &BikeNameFilter {
        &self.bike_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn min_price(&self) -> u64 {
        self.min_price
    }

    pub fn max_price(&self) -> u64 {
        self.max_price
    }

    /// Select a brand and reset the model choice to `(Any)`.
    /// Brands absent from the catalog are ignored.
    pub fn set_brand(&mut self, brand: &str) {
        if self.brand.as_deref() == Some(brand) || !self.catalog.has_brand(brand) {
            return;
        }
        self.brand = Some(brand.to_string());
        self.bike_name = BikeNameFilter::Any;
    }

    pub fn set_bike_name(&mut self, bike_name: BikeNameFilter) {
        self.bike_name = bike_name;
    }

    /// `(Any)` followed by the sorted models of the selected brand.
    pub fn model_options(&self) -> Vec<BikeNameFilter> {
        let models = self
            .brand
            .as_deref()
            .into_iter()
            .flat_map(|brand| self.catalog.models_for(brand))
            .map(|name| BikeNameFilter::Exact(name.to_string()));
        std::iter::once(BikeNameFilter::Any).chain(models).collect()
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age.clamp(*self.form.age_range.start(), *self.form.age_range.end());
    }

    pub fn set_min_price(&mut self, price: u64) {
        self.min_price = self.clamp_price(price);
    }

    pub fn set_max_price(&mut self, price: u64) {
        self.max_price = self.clamp_price(price);
    }

    fn clamp_price(&self, price: u64) -> u64 {
        price.clamp(*self.form.price_range.start(), *self.form.price_range.end())
    }

    /// Whether the minimum price is above the maximum. Such a query is still
    /// accepted and simply matches nothing.
    pub fn price_bounds_inverted(&self) -> bool {
        self.min_price > self.max_price
    }

    /// The query the form currently describes.
    pub fn query(&self) -> Option<Query> {
        let brand = self.brand.clone()?;
        Some(Query {
            brand,
            bike_name: self.bike_name.clone(),
            age: self.age,
            min_price: self.min_price,
            max_price: self.max_price,
        })
    }

    /// Run the current query against the catalog and keep the outcome.
    pub fn submit(&mut self) -> Option<&SearchOutcome> {
        let query = self.query()?;
        let indices = filtered_indices(&self.catalog, &query);
        log::info!(
            "Query brand={} bike_name={} age={} price={}..={} matched {} listings",
            query.brand,
            query.bike_name,
            query.age,
            query.min_price,
            query.max_price,
            indices.len()
        );
        self.last_outcome = Some(SearchOutcome { query, indices });
        self.last_outcome.as_ref()
    }

    /// Listings of the last outcome, in catalog order.
    pub fn matching_listings(&self) -> Vec<&Listing> {
        let listings = self.catalog.listings();
        self.last_outcome
            .iter()
            .flat_map(|outcome| outcome.indices.iter())
            .map(|&i| &listings[i])
            .collect()
    }
}
