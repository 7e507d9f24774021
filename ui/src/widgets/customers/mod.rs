use egui::Color32;

mod modals;
mod notice;
mod pagination;
mod panel;
mod table;
mod tabs;
mod toolbar;

pub use panel::{LOADING_LABEL, customers_panel};
pub use table::{DELETE_LABEL, row_action};
pub use toolbar::CLEAR_LABEL;

/// Info notices.
const SUCCESS_COLOR: Color32 = Color32::from_rgb(34, 139, 34);
/// Error notices and destructive buttons.
const DANGER_COLOR: Color32 = Color32::from_rgb(220, 53, 69);
const WARNING_COLOR: Color32 = Color32::from_rgb(255, 193, 7);
