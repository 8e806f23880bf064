mod app_context;
mod config_warnings;

pub use app_context::{AppContext, resolve_format};
pub use config_warnings::warn_unconfigured;
