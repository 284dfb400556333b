use super::defaults;
use super::models::{AppConfig, LogLevel, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `conf/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    window: WindowConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default)]
    print: PrintConfig,
    #[serde(default)]
    shortcuts: ShortcutConfig,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            text_size: tables.appearance.text_size,
            window_width: tables.window.width,
            window_height: tables.window.height,
            log_level: tables.logging.log_level,
            print_command: tables.print.command,
            key_toggle_ingredients: tables.shortcuts.toggle_ingredients,
            key_toggle_steps: tables.shortcuts.toggle_steps,
            key_start_cooking: tables.shortcuts.start_cooking,
            key_next_step: tables.shortcuts.next_step,
            key_reset: tables.shortcuts.reset,
            key_print: tables.shortcuts.print,
            key_quit: tables.shortcuts.quit,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_text_size")]
    text_size: u16,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            text_size: defaults::default_text_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct WindowConfig {
    #[serde(default = "defaults::default_window_width")]
    width: f32,
    #[serde(default = "defaults::default_window_height")]
    height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: defaults::default_window_width(),
            height: defaults::default_window_height(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PrintConfig {
    #[serde(default = "defaults::default_print_command")]
    command: String,
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            command: defaults::default_print_command(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ShortcutConfig {
    #[serde(default = "defaults::default_key_toggle_ingredients")]
    toggle_ingredients: String,
    #[serde(default = "defaults::default_key_toggle_steps")]
    toggle_steps: String,
    #[serde(default = "defaults::default_key_start_cooking")]
    start_cooking: String,
    #[serde(default = "defaults::default_key_next_step")]
    next_step: String,
    #[serde(default = "defaults::default_key_reset")]
    reset: String,
    #[serde(default = "defaults::default_key_print")]
    print: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        ShortcutConfig {
            toggle_ingredients: defaults::default_key_toggle_ingredients(),
            toggle_steps: defaults::default_key_toggle_steps(),
            start_cooking: defaults::default_key_start_cooking(),
            next_step: defaults::default_key_next_step(),
            reset: defaults::default_key_reset(),
            print: defaults::default_key_print(),
            quit: defaults::default_key_quit(),
        }
    }
}
