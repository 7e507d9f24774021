#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use anyhow::Context as _;
use backoffice_business::BusinessConfig;
use backoffice_ui::BackofficeApp;
use backoffice_ui::state::State;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    if let Err(err) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {err}");
    }

    let config = BusinessConfig::init()?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the Tokio runtime")?;
    let _guard = runtime.enter();
    let state = State::new(config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 720.0])
            .with_min_inner_size([640.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Backoffice",
        native_options,
        Box::new(move |cc| {
            let mut state = state;
            let ctx = cc.egui_ctx.clone();
            state
                .customers
                .set_waker(Arc::new(move || ctx.request_repaint()));
            Ok(Box::new(BackofficeApp::new(state)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("eframe exited with an error: {err}"))
}
