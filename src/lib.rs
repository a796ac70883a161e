pub mod app;
pub mod calendar;
pub mod classify;
pub mod dates;
pub mod errors;
pub mod gratitude;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
