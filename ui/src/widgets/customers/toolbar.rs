use backoffice_business::customers::{CustomersAction, QueryState};
use egui::{TextEdit, Ui};

pub const CLEAR_LABEL: &str = "Clear";

/// Free-text search box and the "Clear" button.
pub fn search_bar(ui: &mut Ui, query: &QueryState, is_fetching: bool) -> Option<CustomersAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let mut text = query.search_text.clone();
        let response = ui.add(
            TextEdit::singleline(&mut text)
                .id_salt("customer_search")
                .hint_text("Search customers")
                .desired_width(240.0),
        );
        if response.changed() {
            action = Some(CustomersAction::SearchChanged { text });
        }

        if ui.button(CLEAR_LABEL).clicked() {
            action = Some(CustomersAction::ClearRequested);
        }

        if is_fetching {
            ui.spinner();
        }
    });

    action
}
