//! Pagination control, rendered above and below the table.

use backoffice_business::customers::{CustomersAction, PageInfo};
use egui::{Button, Ui};

/// Page numbers shown around the current page.
const PAGE_WINDOW: u64 = 5;

pub fn pagination(ui: &mut Ui, info: PageInfo) -> Option<CustomersAction> {
    let mut target = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(info.has_previous(), Button::new("◀ Prev"))
            .clicked()
        {
            target = Some(info.current - 1);
        }

        for page in info.window(PAGE_WINDOW) {
            if ui
                .selectable_label(page == info.current, page.to_string())
                .clicked()
                && page != info.current
            {
                target = Some(page);
            }
        }

        if ui
            .add_enabled(info.has_next(), Button::new("Next ▶"))
            .clicked()
        {
            target = Some(info.current + 1);
        }

        ui.weak(format!(
            "Page {} of {} · {} customers",
            info.current, info.total, info.count
        ));
    });

    target.map(|page| CustomersAction::PageChanged {
        skip: info.skip_for(page),
    })
}
