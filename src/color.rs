use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Listing;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: bike model → Color32
// ---------------------------------------------------------------------------

/// Maps the model names of a result set to distinct colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// One colour per distinct model name, assigned in sorted name order.
    pub fn for_listings<'a>(listings: impl IntoIterator<Item = &'a Listing>) -> Self {
        let names: BTreeSet<&str> = listings
            .into_iter()
            .map(|l| l.bike_name.as_str())
            .collect();
        let palette = generate_palette(names.len());
        let mapping = names
            .into_iter()
            .zip(palette)
            .map(|(name, c)| (name.to_string(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a model name.
    pub fn color_for(&self, bike_name: &str) -> Color32 {
        self.mapping
            .get(bike_name)
            .copied()
            .unwrap_or(Color32::GRAY)
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::listing;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        let colours = generate_palette(4);
        assert_eq!(colours.len(), 4);
        assert_ne!(colours[0], colours[2]);
    }

    #[test]
    fn one_colour_per_model() {
        let rows = [
            listing("Honda", "Shine", 5, 60000.0),
            listing("Honda", "CB350", 5, 150000.0),
            listing("Honda", "Shine", 5, 75000.0),
        ];
        let map = ColorMap::for_listings(&rows);
        assert_eq!(map.len(), 2);
        assert_ne!(map.color_for("Shine"), map.color_for("CB350"));
        assert_eq!(map.color_for("Apache"), Color32::GRAY);
    }
}
