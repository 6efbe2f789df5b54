//! Optional user settings loaded from `~/.hostpick/hostpick.yaml`.

mod errors;
mod loader;
mod settings;

pub use errors::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{GeneralSettings, Settings};

/// Load settings from the default location, falling back to defaults when the
/// file does not exist.
pub fn load_settings() -> Result<Settings, ConfigError> {
    ConfigLoader::new()?.load_config()
}
