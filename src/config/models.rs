use super::defaults;
use serde::Deserialize;

/// Flattened app configuration; built from the TOML tables in `tables.rs`.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub text_size: u16,
    pub window_width: f32,
    pub window_height: f32,
    pub log_level: LogLevel,
    pub print_command: String,
    pub key_toggle_ingredients: String,
    pub key_toggle_steps: String,
    pub key_start_cooking: String,
    pub key_next_step: String,
    pub key_reset: String,
    pub key_print: String,
    pub key_quit: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            text_size: defaults::default_text_size(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            log_level: defaults::default_log_level(),
            print_command: defaults::default_print_command(),
            key_toggle_ingredients: defaults::default_key_toggle_ingredients(),
            key_toggle_steps: defaults::default_key_toggle_steps(),
            key_start_cooking: defaults::default_key_start_cooking(),
            key_next_step: defaults::default_key_next_step(),
            key_reset: defaults::default_key_reset(),
            key_print: defaults::default_key_print(),
            key_quit: defaults::default_key_quit(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Day
    }
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Debug
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
