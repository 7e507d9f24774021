//! Read-only view of a single customer.

use backoffice_business::customers::{CUSTOMER_COLUMNS, CustomerRow};
use egui::{Grid, Ui};

pub fn customer_detail(ui: &mut Ui, customer: &CustomerRow) {
    let name = customer.display_name();
    ui.heading(if name.is_empty() { customer.id.as_str() } else { name.as_str() });
    ui.add_space(8.0);

    Grid::new(("customer_detail", customer.id.as_str()))
        .num_columns(2)
        .spacing([24.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("ID");
            ui.monospace(customer.id.as_str());
            ui.end_row();

            for config in &CUSTOMER_COLUMNS {
                ui.strong(config.heading);
                let cell = config.render(customer.value(config.key));
                match &cell.link {
                    Some(link) => ui.hyperlink_to(cell.text.as_str(), link),
                    None => ui.label(cell.text.as_str()),
                };
                ui.end_row();
            }

            let mut extra: Vec<_> = customer.extra.iter().collect();
            extra.sort_by(|a, b| a.0.cmp(b.0));
            for (key, value) in extra {
                ui.strong(key.as_str());
                match value.as_str() {
                    Some(text) => ui.label(text),
                    None => ui.monospace(value.to_string()),
                };
                ui.end_row();
            }
        });
}
