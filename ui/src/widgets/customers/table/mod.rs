//! Customers table:
//! - `columns`: column widths
//! - `header`: headings and filter inputs
//! - `row`: one customer per row
//! - `cells`: per-cell rendering

mod cells;
mod columns;
mod header;
mod row;

use backoffice_business::customers::{CustomersAction, QueryState, ResultSnapshot};
use egui::{Align, Layout, Sense, Ui};
use egui_extras::TableBuilder;

pub use cells::DELETE_LABEL;
pub use row::row_action;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_customer_row;

/// Renders the table and returns the actions triggered this frame.
pub fn customers_table(
    ui: &mut Ui,
    query: &QueryState,
    snapshot: &ResultSnapshot,
    with_actions: bool,
) -> Vec<CustomersAction> {
    let mut actions = Vec::new();

    let mut table = TableBuilder::new(ui)
        .id_salt("customers_table")
        .striped(true)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .max_scroll_height(f32::INFINITY);
    for column in table_columns(with_actions) {
        table = table.column(column);
    }

    table
        .header(HEADER_HEIGHT, |mut header| {
            render_table_header(&mut header, query, with_actions, &mut actions);
        })
        .body(|mut body| {
            for customer in &snapshot.data {
                body.row(ROW_HEIGHT, |mut row| {
                    if let Some(action) = render_customer_row(&mut row, customer, with_actions) {
                        actions.push(action);
                    }
                });
            }
        });

    if snapshot.data.is_empty() {
        ui.add_space(8.0);
        ui.weak("No customers match.");
    }

    actions
}
