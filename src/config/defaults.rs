pub(crate) fn default_window_width() -> f32 {
    900.0
}

pub(crate) fn default_window_height() -> f32 {
    960.0
}

pub(crate) fn default_text_size() -> u16 {
    16
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Debug
}

pub(crate) fn default_print_command() -> String {
    "lp".to_string()
}

pub(crate) fn default_key_toggle_ingredients() -> String {
    "i".to_string()
}

pub(crate) fn default_key_toggle_steps() -> String {
    "s".to_string()
}

pub(crate) fn default_key_start_cooking() -> String {
    "c".to_string()
}

pub(crate) fn default_key_next_step() -> String {
    "space".to_string()
}

pub(crate) fn default_key_reset() -> String {
    "r".to_string()
}

pub(crate) fn default_key_print() -> String {
    "ctrl+p".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}
