use std::ops::RangeInclusive;
use std::path::PathBuf;

/// Catalog file looked up relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "Used_Bikes.csv";

/// Environment variable overriding [`DEFAULT_CATALOG_PATH`].
pub const CATALOG_PATH_ENV: &str = "BIKE_FINDER_CATALOG";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Path of the listing catalog.
    pub catalog_path: PathBuf,

    /// Symbol prefixed to every displayed price.
    pub currency_symbol: String,

    /// Initial window size in logical points.
    pub window_size: [f32; 2],

    /// Smallest window size in logical points.
    pub min_window_size: [f32; 2],

    /// Form bounds and initial values.
    pub form: FormConfig,
}

/// Bounds and starting values of the filter form.
#[derive(Clone, Debug, PartialEq)]
pub struct FormConfig {
    pub age_range: RangeInclusive<u32>,
    pub price_range: RangeInclusive<u64>,
    pub default_age: u32,
    pub default_min_price: u64,
    pub default_max_price: u64,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            age_range: 0..=30,
            price_range: 0..=2_000_000,
            default_age: 5,
            default_min_price: 50_000,
            default_max_price: 100_000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            currency_symbol: "₹".to_string(),
            window_size: [1200.0, 800.0],
            min_window_size: [700.0, 450.0],
            form: FormConfig::default(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the catalog path taken from the environment when set.
    pub fn from_env() -> Self {
        Self::with_catalog_override(std::env::var_os(CATALOG_PATH_ENV).map(PathBuf::from))
    }

    fn with_catalog_override(path: Option<PathBuf>) -> Self {
        let mut config = Self::default();
        if let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) {
            config.catalog_path = path;
        }
        config
    }
}
