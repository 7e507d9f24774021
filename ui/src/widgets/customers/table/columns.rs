//! Column layout of the customers table.

use backoffice_business::customers::CUSTOMER_COLUMNS;
use egui_extras::Column;

pub const ACTIONS_WIDTH: f32 = 60.0;
pub const ROW_HEIGHT: f32 = 28.0;
/// Heading plus filter input.
pub const HEADER_HEIGHT: f32 = 52.0;

/// One column per configured customer column, plus the delete column when
/// the session may delete.
pub fn table_columns(with_actions: bool) -> Vec<Column> {
    let mut columns: Vec<Column> = CUSTOMER_COLUMNS
        .iter()
        .map(|config| Column::initial(config.width).at_least(60.0).resizable(true).clip(true))
        .collect();
    if with_actions {
        columns.push(Column::exact(ACTIONS_WIDTH));
    }
    columns
}
