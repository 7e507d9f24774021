use std::sync::Arc;

use backoffice_business::customers::{
    ChannelNavigator, CustomersAction, CustomersApi, CustomersController, HttpCustomersApi,
};
use backoffice_business::{BusinessConfig, Route, Session};
use backoffice_states::TaskRuntime;

/// The main application state.
pub struct State {
    pub config: BusinessConfig,
    pub route: Route,
    pub customers: CustomersController,
    /// Paths requested by the customers navigator.
    routes: flume::Receiver<String>,
    customers_mounted: bool,
}

impl State {
    /// State backed by the HTTP API. Must be called inside a Tokio runtime.
    pub fn new(config: BusinessConfig) -> Result<Self, backoffice_states::Error> {
        let api = Arc::new(HttpCustomersApi::new(config.clone()));
        Self::with_api(config, api)
    }

    pub fn with_api(
        config: BusinessConfig,
        api: Arc<dyn CustomersApi>,
    ) -> Result<Self, backoffice_states::Error> {
        let (navigator, routes) = ChannelNavigator::channel();
        let session = Session::new(config.authorizations().iter().cloned());
        let customers = CustomersController::new(
            api,
            Box::new(navigator),
            TaskRuntime::current()?,
            session,
            config.page_size(),
        );

        Ok(Self {
            config,
            route: Route::default(),
            customers,
            routes,
            customers_mounted: false,
        })
    }

    /// Issues the initial fetch the first time the customers page is shown.
    pub fn mount_customers(&mut self) {
        if !self.customers_mounted {
            self.customers_mounted = true;
            self.customers.dispatch(CustomersAction::Refresh);
        }
    }

    /// Applies task results and pending navigation. Call once per frame.
    pub fn sync(&mut self) {
        self.customers.poll();

        for path in self.routes.try_iter() {
            match Route::from_path(&path) {
                Some(route) => {
                    log::info!("Navigating to {path}");
                    self.route = route;
                }
                None => log::warn!("Ignoring navigation to unknown path {path}"),
            }
        }
    }
}
