pub mod analysis;
pub mod app;
pub mod classify;
pub mod content;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_entries, resolve_data_path};
