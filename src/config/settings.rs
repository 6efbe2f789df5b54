use serde::Deserialize;

pub(crate) const DEFAULT_TERMINAL_APP: &str = "Terminal";

/// Top-level shape of `hostpick.yaml`.
///
/// ```yaml
/// settings:
///   debug_mode: false
///   terminal_app: Terminal
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub settings: GeneralSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralSettings {
    /// Write the debug log without passing `--debug`.
    pub debug_mode: bool,
    /// macOS application that receives the `ssh` command.
    pub terminal_app: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            terminal_app: DEFAULT_TERMINAL_APP.to_string(),
        }
    }
}
