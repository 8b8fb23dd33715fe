use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::panels::ACCENT;
use super::plot;
use crate::color::ColorMap;
use crate::data::model::Listing;
use crate::format::{criteria_line, currency, group_thousands, headline, no_matches_notice};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – outcome of the last submission
// ---------------------------------------------------------------------------

/// Render the last search outcome, or nothing before the first submission.
pub fn results_panel(ui: &mut Ui, state: &AppState, colors: &ColorMap, currency_symbol: &str) {
    let Some(outcome) = &state.last_outcome else {
        return;
    };

    if outcome.is_empty() {
        ui.label(
            RichText::new(format!("⚠ {}", no_matches_notice(&outcome.query)))
                .color(Color32::YELLOW)
                .size(15.0),
        );
        ui.add_space(8.0);
        return;
    }

    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.horizontal_wrapped(|ui: &mut Ui| {
            ui.label(RichText::new(headline(&outcome.query)).color(ACCENT).strong());
            ui.label(format!("({})", criteria_line(currency_symbol, &outcome.query)));
        });
    });
    ui.add_space(4.0);

    ui.label(RichText::new("Bikes Found").weak());
    ui.label(RichText::new(outcome.len().to_string()).size(28.0).strong());
    ui.add_space(4.0);

    let matches = state.matching_listings();

    egui::CollapsingHeader::new("Price vs. kilometres")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            plot::price_scatter(ui, &matches, colors, 260.0);
        });
    ui.add_space(4.0);

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        listing_table(ui, &matches, colors, currency_symbol);
    });
    ui.add_space(8.0);
}

/// One row per listing: name, price, age, then kms / cc / power when known.
fn listing_table(ui: &mut Ui, matches: &[&Listing], colors: &ColorMap, currency_symbol: &str) {
    let row_height = 20.0;
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(60.0))
        .max_scroll_height(420.0)
        .header(row_height, |mut header| {
            for title in ["Bike", "Price", "Age", "Kilometers", "CC", "Power"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, matches.len(), |mut row| {
                let listing = matches[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(
                        RichText::new(&listing.bike_name).color(colors.color_for(&listing.bike_name)),
                    );
                });
                row.col(|ui: &mut Ui| {
                    ui.label(currency(currency_symbol, listing.price));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{} yrs", listing.age));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(optional(listing.kms_driven.map(group_thousands)));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(optional(listing.cc.map(|cc| cc.to_string())));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(optional(listing.power.map(|p| p.to_string())));
                });
            });
        });
}

fn optional(value: Option<String>) -> String {
    value.unwrap_or_else(|| "–".to_string())
}
