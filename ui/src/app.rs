use backoffice_business::Route;

use crate::{pages, state::State};

pub struct BackofficeApp {
    state: State,
}

impl BackofficeApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    /// Renders one frame into `ui`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        self.state.sync();

        let route = self.state.route;
        match route {
            Route::Customers => pages::customers_page(&mut self.state, ui),
            Route::CustomerDetail(id) => pages::customer_detail_page(&mut self.state, id, ui),
        };
    }
}

impl eframe::App for BackofficeApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.strong("Backoffice");
                ui.separator();
                ui.label(self.state.route.path());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.state.config.api_base_url());
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
