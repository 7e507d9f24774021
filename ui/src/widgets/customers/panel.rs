//! The customers view: tabs, toolbar, pagination, table and dialogs.

use backoffice_business::customers::{CustomersAction, CustomersController};
use egui::{Response, Ui};

use super::modals::delete_confirmation_modal;
use super::notice::notice_banner;
use super::pagination::pagination;
use super::table::customers_table;
use super::tabs::status_tabs;
use super::toolbar::search_bar;

pub const LOADING_LABEL: &str = "Loading customers…";

/// Renders the panel and dispatches whatever the user did this frame.
pub fn customers_panel(controller: &mut CustomersController, ui: &mut Ui) -> Response {
    let (actions, response) = {
        let controller = &*controller;
        let mut actions = Vec::new();

        let response = ui
            .vertical(|ui| {
                if let Some(notice) = controller.notice() {
                    actions.extend(notice_banner(ui, notice));
                    ui.add_space(4.0);
                }

                actions.extend(status_tabs(ui, controller.query()));
                ui.separator();

                let Some(snapshot) = controller.snapshot() else {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(LOADING_LABEL);
                    });
                    return;
                };

                let info = controller.page_info();
                ui.horizontal(|ui| {
                    ui.push_id("pagination_top", |ui| actions.extend(pagination(ui, info)));
                    ui.separator();
                    actions.extend(search_bar(ui, controller.query(), controller.is_fetching()));
                });
                ui.add_space(4.0);

                actions.extend(customers_table(
                    ui,
                    controller.query(),
                    snapshot,
                    controller.can_delete(),
                ));

                ui.add_space(4.0);
                ui.push_id("pagination_bottom", |ui| actions.extend(pagination(ui, info)));
            })
            .response;

        if let Some(id) = controller.pending_delete() {
            actions.extend(delete_confirmation_modal(
                ui.ctx(),
                id,
                &controller.delete_prompt(id),
            ));
        }

        (actions, response)
    };

    for action in actions {
        controller.dispatch(action);
    }
    response
}
