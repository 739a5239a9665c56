extern crate log as _log;

pub mod appearance;
mod config;
mod context;
mod dialog;
pub mod event;
pub mod paint;

pub use config::*;
pub use context::*;
pub use dialog::ErrorDialog;
pub use event::EventHandler;

pub use eframe::egui;

pub mod log {
    /// Logs to stderr, filtered by `RUST_LOG`.
    pub fn init() {
        let _ = env_logger::try_init();
    }
}
