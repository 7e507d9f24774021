use egui::{Response, Ui};

use crate::{state::State, widgets};

/// Renders the customers table, issuing the initial fetch on first show.
pub fn customers_page(state: &mut State, ui: &mut Ui) -> Response {
    state.mount_customers();
    widgets::customers_panel(&mut state.customers, ui)
}
