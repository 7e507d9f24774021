use backoffice_business::Route;
use backoffice_business::customers::CustomerId;
use egui::{Response, Ui};

use crate::{state::State, widgets};

pub const BACK_LABEL: &str = "← Back";

/// Shows the customer from the current result page.
pub fn customer_detail_page(state: &mut State, id: CustomerId, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        if ui.button(BACK_LABEL).clicked() {
            state.route = Route::Customers;
        }
        ui.add_space(8.0);

        match state
            .customers
            .snapshot()
            .and_then(|snapshot| snapshot.row(id))
        {
            Some(customer) => widgets::customer_detail(ui, customer),
            None => {
                ui.label(format!("Customer {id} is not on the current page."));
            }
        }
    })
    .response
}
