//! Row rendering for the customers table.

use backoffice_business::customers::{CUSTOMER_COLUMNS, CustomerId, CustomerRow, CustomersAction};
use egui_extras::TableRow;

use super::cells::{render_delete_cell, render_text_cell};

/// Action for a row interaction. The delete control takes precedence so a
/// click on it never activates the row.
pub fn row_action(row_clicked: bool, delete_clicked: bool, id: CustomerId) -> Option<CustomersAction> {
    if delete_clicked {
        Some(CustomersAction::DeleteRequested { id })
    } else if row_clicked {
        Some(CustomersAction::RowActivated { id })
    } else {
        None
    }
}

/// Renders one customer and returns the resulting action, if any.
pub fn render_customer_row(
    row: &mut TableRow<'_, '_>,
    customer: &CustomerRow,
    with_actions: bool,
) -> Option<CustomersAction> {
    for config in &CUSTOMER_COLUMNS {
        row.col(|ui| {
            render_text_cell(ui, &config.render(customer.value(config.key)));
        });
    }

    let mut delete_clicked = false;
    if with_actions {
        row.col(|ui| {
            delete_clicked = render_delete_cell(ui);
        });
    }

    row_action(row.response().clicked(), delete_clicked, customer.id)
}
