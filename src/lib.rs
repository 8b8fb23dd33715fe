//! Used bike finder: load a catalog of used motorcycle listings and filter it
//! by brand, model, age and price range.
//!
//! The data layer ([`data`]) is free of UI types; [`state`] holds the form,
//! and [`app`] / [`ui`] render it with egui.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod format;
pub mod state;
pub mod ui;
