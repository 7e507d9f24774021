//! Cell rendering for the customers table.

use backoffice_business::format::CellText;
use egui::{Button, Hyperlink, Label, Ui};

pub const DELETE_LABEL: &str = "🗑";

/// Renders formatter output: a hyperlink when the text has a link target.
#[inline]
pub fn render_text_cell(ui: &mut Ui, cell: &CellText) {
    match &cell.link {
        Some(link) => {
            ui.add(Hyperlink::from_label_and_url(cell.text.as_str(), link));
        }
        None => {
            ui.add(Label::new(cell.text.as_str()).truncate());
        }
    }
}

/// Renders the delete button and reports whether it was clicked.
#[inline]
pub fn render_delete_cell(ui: &mut Ui) -> bool {
    ui.centered_and_justified(|ui| {
        ui.add(Button::new(DELETE_LABEL).small())
            .on_hover_text("Delete customer")
            .clicked()
    })
    .inner
}
