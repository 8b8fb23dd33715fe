//! Text shown around a search result.

use crate::data::filter::{BikeNameFilter, Query};

/// `150000` → `"150,000"`.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole-unit amount with the currency symbol, e.g. `"₹150,000"`.
/// Fractions are truncated.
pub fn currency(symbol: &str, amount: f64) -> String {
    let whole = if amount.is_finite() && amount > 0.0 {
        amount.trunc() as u64
    } else {
        0
    };
    format!("{symbol}{}", group_thousands(whole))
}

/// `"Recommended Honda CB350 bikes"`, or `"Recommended Honda bikes"` for any model.
pub fn headline(query: &Query) -> String {
    match &query.bike_name {
        BikeNameFilter::Any => format!("Recommended {} bikes", query.brand),
        BikeNameFilter::Exact(name) => format!("Recommended {} {name} bikes", query.brand),
    }
}

/// `"Age: 5 years, Price: ₹50,000 - ₹100,000"`.
pub fn criteria_line(symbol: &str, query: &Query) -> String {
    format!(
        "Age: {} years, Price: {} - {}",
        query.age,
        currency(symbol, query.min_price as f64),
        currency(symbol, query.max_price as f64)
    )
}

/// Notice shown instead of results when nothing matched.
pub fn no_matches_notice(query: &Query) -> &'static str {
    if query.bike_name.is_any() {
        "No bikes found for this brand, age, and price range."
    } else {
        "No bikes found for this brand, bike name, age, and price range."
    }
}
