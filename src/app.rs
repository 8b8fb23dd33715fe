use eframe::egui;

use crate::color::ColorMap;
use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, results};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BikeFinderApp {
    pub state: AppState,
    /// Model colours of the last outcome.
    colors: ColorMap,
    currency_symbol: String,
}

impl BikeFinderApp {
    pub fn new(state: AppState, config: &AppConfig) -> Self {
        Self {
            state,
            colors: ColorMap::default(),
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    fn recommend(&mut self) {
        if self.state.submit().is_some() {
            self.colors = ColorMap::for_listings(self.state.matching_listings());
        }
    }
}

impl eframe::App for BikeFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: filter form ----
        let submitted = egui::SidePanel::left("filter_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| panels::side_panel(ui, &mut self.state))
            .inner;
        if submitted {
            self.recommend();
        }

        // ---- Central panel: results and help ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    results::results_panel(ui, &self.state, &self.colors, &self.currency_symbol);
                    panels::how_to_use(ui);
                });
        });
    }
}
