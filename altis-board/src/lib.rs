pub mod app_config;
pub mod roster;

pub use app_config::Config;
pub use roster::{build_flight, LogCardEmitter};
