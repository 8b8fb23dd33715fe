use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use super::error::{CatalogError, Result};
use super::model::{Catalog, Listing};

/// Columns every catalog file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["brand", "bike_name", "age", "price"];

// ---------------------------------------------------------------------------
// Memoized source
// ---------------------------------------------------------------------------

/// A catalog file that is read at most once.
///
/// The first successful [`CatalogSource::catalog`] call parses the file;
/// later calls hand out the same `Arc` without touching the disk. A failed
/// load is not cached, so the next call retries.
#[derive(Debug)]
pub struct CatalogSource {
    path: PathBuf,
    cached: OnceLock<Arc<Catalog>>,
}

impl CatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cached: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the catalog, loading it on first use.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = self.cached.get() {
            return Ok(Arc::clone(catalog));
        }
        let loaded = Arc::new(load_catalog(&self.path)?);
        Ok(Arc::clone(self.cached.get_or_init(|| loaded)))
    }
}

// ---------------------------------------------------------------------------
// Uncached entry-points
// ---------------------------------------------------------------------------

/// Load a catalog from a delimited text file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CatalogError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CatalogError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let catalog = read_catalog(file)?;
    log::info!(
        "Loaded {} listings ({} brands) from {}",
        catalog.len(),
        catalog.brands().count(),
        path.display()
    );
    Ok(catalog)
}

/// CSV layout: header row, then one listing per record.
///
/// `brand`, `bike_name`, `age` and `price` are required. `kms_driven`, `cc`
/// and `power` are optional, both as columns and as cells. Unknown columns
/// are ignored. Numbers may carry a fractional part (`"3.0"`), but `age`
/// must still be a whole number.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(CatalogError::MissingColumn { column });
        }
    }

    let mut listings = Vec::new();
    for (idx, result) in reader.deserialize::<RawListing>().enumerate() {
        let raw = result?;
        listings.push(raw.into_listing(idx + 1)?);
    }

    Ok(Catalog::from_listings(listings))
}

// ---------------------------------------------------------------------------
// Row conversion
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawListing {
    brand: String,
    bike_name: String,
    age: f64,
    price: f64,
    #[serde(default)]
    kms_driven: Option<f64>,
    #[serde(default)]
    cc: Option<f64>,
    #[serde(default)]
    power: Option<f64>,
}

impl RawListing {
    fn into_listing(self, row: usize) -> Result<Listing> {
        let age = whole_number(self.age, row, "age")?;
        let age = u32::try_from(age).map_err(|_| CatalogError::InvalidValue {
            row,
            column: "age",
            message: format!("{age} is out of range"),
        })?;

        if !self.price.is_finite() {
            return Err(CatalogError::InvalidValue {
                row,
                column: "price",
                message: format!("'{}' is not a finite amount", self.price),
            });
        }

        let kms_driven = self
            .kms_driven
            .map(|kms| non_negative(kms, row, "kms_driven").map(|v| v.trunc() as u64))
            .transpose()?;

        Ok(Listing {
            brand: self.brand,
            bike_name: self.bike_name,
            age,
            price: self.price,
            kms_driven,
            cc: self.cc,
            power: self.power,
        })
    }
}

fn non_negative(value: f64, row: usize, column: &'static str) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CatalogError::InvalidValue {
            row,
            column,
            message: format!("'{value}' is not a non-negative number"),
        })
    }
}

fn whole_number(value: f64, row: usize, column: &'static str) -> Result<u64> {
    let value = non_negative(value, row, column)?;
    if value.fract() != 0.0 {
        return Err(CatalogError::InvalidValue {
            row,
            column,
            message: format!("'{value}' is not a whole number"),
        });
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const USED_BIKES: &str = "\
bike_name,price,city,kms_driven,owner,age,power,brand
TVS Star City Plus Dual Tone 110cc,35000.0,Ahmedabad,17654.0,First Owner,3.0,110.0,TVS
Royal Enfield Classic 350cc,119900.0,Delhi,11000.0,First Owner,4.0,350.0,Royal Enfield
Honda CB350,150000.0,Pune,,Second Owner,5.0,,Honda
";

    #[test]
    fn reads_used_bikes_layout() {
        let catalog = read_catalog(USED_BIKES.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 3);

        let first = &catalog.listings()[0];
        assert_eq!(first.brand, "TVS");
        assert_eq!(first.bike_name, "TVS Star City Plus Dual Tone 110cc");
        assert_eq!(first.age, 3);
        assert_eq!(first.price, 35000.0);
        assert_eq!(first.kms_driven, Some(17654));
        assert_eq!(first.power, Some(110.0));
        assert_eq!(first.cc, None);

        let honda = &catalog.listings()[2];
        assert_eq!(honda.kms_driven, None);
        assert_eq!(honda.power, None);
    }

    #[test]
    fn minimal_columns_are_enough() {
        let text = "brand,bike_name,age,price\nHonda,CB350,5,150000\n";
        let catalog = read_catalog(text.as_bytes()).unwrap();
        assert_eq!(catalog.listings()[0].age, 5);
        assert_eq!(catalog.listings()[0].kms_driven, None);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let text = "brand , bike_name,age,price,cc\n Honda , CB350 , 5 , 150000 , 348.36\n";
        let catalog = read_catalog(text.as_bytes()).unwrap();
        let row = &catalog.listings()[0];
        assert_eq!(row.brand, "Honda");
        assert_eq!(row.bike_name, "CB350");
        assert_eq!(row.cc, Some(348.36));
    }

    #[test]
    fn missing_required_column_is_reported() {
        let text = "brand,bike_name,price\nHonda,CB350,150000\n";
        let err = read_catalog(text.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn { column: "age" }));
    }

    #[test]
    fn fractional_age_is_rejected() {
        let text = "brand,bike_name,age,price\nHonda,CB350,5,150000\nHonda,Shine,2.5,60000\n";
        let err = read_catalog(text.as_bytes()).unwrap_err();
        match err {
            CatalogError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 2);
                assert_eq!(column, "age");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_kms_is_rejected() {
        let text = "brand,bike_name,age,price,kms_driven\nHonda,CB350,5,150000,-10\n";
        let err = read_catalog(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidValue {
                column: "kms_driven",
                ..
            }
        ));
    }

    #[test]
    fn non_numeric_price_is_a_parse_error() {
        let text = "brand,bike_name,age,price\nHonda,CB350,5,cheap\n";
        let err = read_catalog(text.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv { .. }));
    }

    #[test]
    fn ragged_row_is_a_parse_error() {
        let text = "brand,bike_name,age,price\nHonda,CB350,5\n";
        let err = read_catalog(text.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("Used_Bikes.csv")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound { .. }));
    }

    #[test]
    fn source_reads_the_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Used_Bikes.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(USED_BIKES.as_bytes()).unwrap();
        drop(file);

        let source = CatalogSource::new(&path);
        let first = source.catalog().unwrap();

        // The memo must not go back to disk.
        std::fs::remove_file(&path).unwrap();
        let second = source.catalog().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 3);
    }

    #[test]
    fn failed_load_is_retried() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Used_Bikes.csv");
        let source = CatalogSource::new(&path);
        assert!(source.catalog().is_err());

        std::fs::write(&path, "brand,bike_name,age,price\nHonda,CB350,5,150000\n").unwrap();
        assert_eq!(source.catalog().unwrap().len(), 1);
    }
}
