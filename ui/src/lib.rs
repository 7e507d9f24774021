#![warn(clippy::all, rust_2018_idioms)]

//! egui front end of the backoffice console.

pub mod app;
pub mod pages;
pub mod state;
pub mod widgets;

pub use app::BackofficeApp;
