use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, Points};

use crate::color::ColorMap;
use crate::data::model::Listing;

// ---------------------------------------------------------------------------
// Price / distance scatter of the matches
// ---------------------------------------------------------------------------

/// Plot price against kilometres driven, one series per model.
/// Listings without a distance are left out.
pub fn price_scatter(ui: &mut Ui, matches: &[&Listing], colors: &ColorMap, height: f32) {
    let mut by_model: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
    for listing in matches {
        if let Some(kms) = listing.kms_driven {
            by_model
                .entry(listing.bike_name.as_str())
                .or_default()
                .push([kms as f64, listing.price]);
        }
    }

    if by_model.is_empty() {
        ui.label("No distance data to plot for these bikes.");
        return;
    }

    Plot::new("price_scatter")
        .legend(Legend::default())
        .height(height)
        .x_axis_label("Kilometres driven")
        .y_axis_label("Price")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (name, points) in by_model {
                let series = Points::new(points)
                    .name(name)
                    .color(colors.color_for(name))
                    .radius(4.0);
                plot_ui.points(series);
            }
        });
}
