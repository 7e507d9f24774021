//! Delete confirmation dialog.

use backoffice_business::customers::{CustomerId, CustomersAction};
use egui::{Context, RichText, Window};

use super::{DANGER_COLOR, WARNING_COLOR};

/// Shows the confirmation window for `id` and returns the answer once given.
///
/// Closing the window counts as declining.
pub fn delete_confirmation_modal(
    ctx: &Context,
    id: CustomerId,
    prompt: &str,
) -> Option<CustomersAction> {
    let mut open = true;
    let mut answer = None;

    Window::new("Confirm delete")
        .id(egui::Id::new(("confirm_delete", id.as_str())))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.colored_label(WARNING_COLOR, "⚠ Warning");
            ui.add_space(4.0);
            ui.label(prompt);
            ui.label("This action cannot be undone.");

            ui.add_space(16.0);

            ui.horizontal(|ui| {
                if ui
                    .button(RichText::new("Delete").color(DANGER_COLOR))
                    .clicked()
                {
                    answer = Some(CustomersAction::DeleteConfirmed { id });
                }

                if ui.button("Cancel").clicked() {
                    answer = Some(CustomersAction::DeleteDeclined);
                }
            });
        });

    if !open {
        return Some(CustomersAction::DeleteDeclined);
    }
    answer
}
