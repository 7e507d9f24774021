use backoffice_business::customers::{CustomersAction, Notice, NoticeKind};
use egui::{Frame, Margin, Ui};

use super::{DANGER_COLOR, SUCCESS_COLOR};

pub fn notice_banner(ui: &mut Ui, notice: &Notice) -> Option<CustomersAction> {
    let color = match notice.kind {
        NoticeKind::Info => SUCCESS_COLOR,
        NoticeKind::Error => DANGER_COLOR,
    };

    Frame::NONE
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(Margin::symmetric(8, 6))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(color, notice.message.as_str());
                ui.button("Dismiss")
                    .clicked()
                    .then_some(CustomersAction::NoticeDismissed)
            })
            .inner
        })
        .inner
}
