mod app;
mod core;

pub use app::{AppConfig, AppConfigError, GeneralConfig, SearchSettings};
pub use core::Config;
