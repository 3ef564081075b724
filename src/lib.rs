pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod level;
pub mod models;
pub mod state;
pub mod stats;
pub mod streaks;
pub mod window;

pub use app::router;
pub use calendar::build_grid;
pub use config::{load_config, resolve_config_path, CalendarConfig};
pub use errors::CalendarError;
pub use state::AppState;
pub use stats::build_stats;
pub use window::display_window;
