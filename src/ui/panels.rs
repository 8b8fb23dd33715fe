use eframe::egui::{self, Color32, ComboBox, DragValue, RichText, Ui};

use crate::state::AppState;

/// Accent used for headings and highlighted values.
pub const ACCENT: Color32 = Color32::from_rgb(0xF7, 0xCA, 0x18);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(6.0);
        ui.label(
            RichText::new("🏍 Used Bike Recommendation App")
                .color(ACCENT)
                .size(26.0)
                .strong(),
        );
        ui.label("Find the best used bikes for your needs and budget!");
        ui.label(
            RichText::new(format!(
                "{} listings across {} brands",
                state.catalog.len(),
                state.catalog.brands().count()
            ))
            .weak(),
        );
        ui.add_space(6.0);
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter form
// ---------------------------------------------------------------------------

/// Render the filter form. Returns `true` when the user asked for recommendations.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) -> bool {
    ui.heading(RichText::new("🔎 Filter Bikes").color(ACCENT));
    ui.separator();

    let Some(current_brand) = state.brand().map(str::to_string) else {
        ui.label("The catalog has no listings.");
        return false;
    };

    // ---- Brand ----
    ui.strong("Brand");
    let brands: Vec<String> = state.catalog.brands().map(str::to_string).collect();
    ComboBox::from_id_salt("brand")
        .selected_text(&current_brand)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for brand in &brands {
                if ui.selectable_label(*brand == current_brand, brand).clicked() {
                    state.set_brand(brand);
                }
            }
        });
    ui.add_space(4.0);

    // ---- Bike name ----
    ui.strong("Bike Name");
    let current_model = state.bike_name().clone();
    let options = state.model_options();
    ComboBox::from_id_salt("bike_name")
        .selected_text(current_model.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for option in options {
                let label = option.to_string();
                if ui.selectable_label(option == current_model, label).clicked() {
                    state.set_bike_name(option);
                }
            }
        });
    ui.add_space(4.0);

    // ---- Age and price range ----
    let form = state.form().clone();
    egui::Grid::new("numeric_inputs")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("Age (years)");
            let mut age = state.age();
            if ui
                .add(DragValue::new(&mut age).range(form.age_range.clone()))
                .changed()
            {
                state.set_age(age);
            }
            ui.end_row();

            ui.label("Min Price");
            let mut min_price = state.min_price();
            if ui
                .add(
                    DragValue::new(&mut min_price)
                        .range(form.price_range.clone())
                        .speed(500.0),
                )
                .changed()
            {
                state.set_min_price(min_price);
            }
            ui.end_row();

            ui.label("Max Price");
            let mut max_price = state.max_price();
            if ui
                .add(
                    DragValue::new(&mut max_price)
                        .range(form.price_range.clone())
                        .speed(500.0),
                )
                .changed()
            {
                state.set_max_price(max_price);
            }
            ui.end_row();
        });

    if state.price_bounds_inverted() {
        ui.label(
            RichText::new("Min price is above max price; nothing will match.")
                .color(Color32::YELLOW)
                .small(),
        );
    }

    ui.separator();

    ui.add_sized(
        [ui.available_width(), 28.0],
        egui::Button::new(RichText::new("✨ Recommend Bikes").strong()),
    )
    .clicked()
}

// ---------------------------------------------------------------------------
// Help
// ---------------------------------------------------------------------------

/// Usage notes shown below the results.
pub fn how_to_use(ui: &mut Ui) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.label(RichText::new("How to use:").color(ACCENT).strong().size(16.0));
        ui.label(
            "• Select a brand, then choose a bike name (or leave it as (Any) to see \
             all available bikes for that brand).",
        );
        ui.label("• Enter age, minimum price, and maximum price to filter recommendations.");
        ui.label("• Click ✨ Recommend Bikes to see the list of recommended bikes from our dataset.");
    });
    ui.add_space(8.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Made with ❤ for bike lovers").color(ACCENT));
    });
}
