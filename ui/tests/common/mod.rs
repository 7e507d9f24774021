use std::sync::Arc;

use backoffice_business::customers::CustomerRow;
use backoffice_business::testing::{FakeCustomersApi, customer};
use backoffice_business::{BusinessConfig, MANAGES_CUSTOMERS};
use backoffice_ui::BackofficeApp;
use egui_kittest::Harness;

pub fn customers() -> Vec<CustomerRow> {
    vec![
        customer("c-1", "Ada", "Lovelace", "London"),
        customer("c-2", "John", "Smith", "Leeds"),
        customer("c-3", "Jane", "Smith", "York"),
    ]
}

pub struct TestCtx<'a> {
    pub api: FakeCustomersApi,
    harness: Harness<'a, BackofficeApp>,
}

impl<'a> TestCtx<'a> {
    /// App over an in-memory API. Must be created inside a Tokio runtime.
    pub fn new(can_manage: bool) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut config = BusinessConfig::new("http://backoffice.test").with_page_size(10);
        if can_manage {
            config = config.with_authorizations([MANAGES_CUSTOMERS]);
        }
        let api = FakeCustomersApi::new(customers());
        let state = backoffice_ui::state::State::with_api(config, Arc::new(api.clone()))
            .expect("inside tokio");
        let harness = Harness::builder()
            .with_size(egui::vec2(1400.0, 900.0))
            .build_ui_state(
                |ui, app: &mut BackofficeApp| app.ui(ui),
                BackofficeApp::new(state),
            );

        Self { api, harness }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, BackofficeApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, BackofficeApp> {
        &self.harness
    }

    /// Runs a frame, lets outstanding requests finish, then renders their results.
    pub async fn step_and_settle(&mut self) {
        self.harness.step();
        self.harness.state_mut().state_mut().customers.settle().await;
        self.harness.step();
    }
}
