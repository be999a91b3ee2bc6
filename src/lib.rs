pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod todos;
pub mod users;

pub use app::build_app;
pub use state::AppState;
