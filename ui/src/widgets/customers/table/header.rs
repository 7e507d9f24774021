//! Header row: column headings with their filter inputs.

use backoffice_business::customers::{CUSTOMER_COLUMNS, ColumnConfig, CustomersAction, QueryState};
use egui::{TextEdit, Ui};
use egui_extras::TableRow;

/// Renders headings and filter inputs, pushing a `FilterChanged` for every edit.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    query: &QueryState,
    with_actions: bool,
    actions: &mut Vec<CustomersAction>,
) {
    for config in &CUSTOMER_COLUMNS {
        header.col(|ui| {
            ui.vertical(|ui| {
                ui.strong(config.heading);
                if config.filter_box
                    && let Some(action) = render_filter_input(ui, config, query)
                {
                    actions.push(action);
                }
            });
        });
    }
    if with_actions {
        header.col(|ui| {
            ui.strong("Actions");
        });
    }
}

fn render_filter_input(
    ui: &mut Ui,
    config: &ColumnConfig,
    query: &QueryState,
) -> Option<CustomersAction> {
    let mut value = query.filter_value(config.key).to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut value)
            .id_salt(("customer_filter", config.key.as_str()))
            .hint_text("Filter")
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(CustomersAction::FilterChanged {
        key: config.key,
        value,
    })
}
