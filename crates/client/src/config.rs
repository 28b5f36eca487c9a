//! CLI-specific configuration for the terminal UI.
use std::env;

/// Terminal UI configuration, separate from the session configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_LINES` - Scrollback lines above the status line (default: 4)
    /// - `CLI_SHOW_TURN` - `true`/`false`, append the turn number (default: true)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(lines) = parse_var::<u16>(&var, "CLI_MESSAGE_LINES") {
            config.ui.message_lines = lines;
        }
        if let Some(show) = parse_var::<bool>(&var, "CLI_SHOW_TURN") {
            config.ui.show_turn = show;
        }

        config
    }
}

/// UI layout configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Recent messages shown between the map and the status line.
    pub message_lines: u16,
    /// Append the turn number to the status line.
    pub show_turn: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_lines: 4,
            show_turn: true,
        }
    }
}

fn parse_var<T>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    var(key)?.trim().parse().ok()
}
