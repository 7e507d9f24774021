use backoffice_business::customers::{CustomersAction, QueryState, Tab};
use egui::Ui;

/// Active / Inactive / All. The effective tab is highlighted, so an unset
/// tab shows Active.
pub fn status_tabs(ui: &mut Ui, query: &QueryState) -> Option<CustomersAction> {
    let selected = query.effective_tab();
    let mut action = None;

    ui.horizontal(|ui| {
        for tab in Tab::ALL {
            if ui.selectable_label(tab == selected, tab.label()).clicked() {
                action = Some(CustomersAction::TabChanged(tab));
            }
        }
    });

    action
}
