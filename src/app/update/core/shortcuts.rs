use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::Enter) => "enter".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        let bindings = [
            (&self.config.key_toggle_ingredients, "i", Message::ToggleIngredients),
            (&self.config.key_toggle_steps, "s", Message::ToggleSteps),
            (&self.config.key_start_cooking, "c", Message::StartCooking),
            (&self.config.key_next_step, "space", Message::NextStep),
            (&self.config.key_reset, "r", Message::ResetCooking),
            (&self.config.key_print, "ctrl+p", Message::Print),
            (&self.config.key_quit, "q", Message::Quit),
        ];

        bindings
            .into_iter()
            .find(|(raw, fallback, _)| Self::shortcut_matches(raw, fallback, &pressed, modifiers))
            .map(|(_, _, message)| message)
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("return", "enter")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn empty_binding_uses_fallback() {
        assert_eq!(App::normalize_shortcut_token("  ", "ctrl+p"), "ctrl+p");
        assert!(App::shortcut_matches("", "ctrl+p", "p", Modifiers::CTRL));
    }

    #[test]
    fn matches_ctrl_p_shortcut() {
        assert!(App::shortcut_matches("ctrl+p", "x", "p", Modifiers::CTRL));
        assert!(!App::shortcut_matches("ctrl+p", "x", "p", Modifiers::empty()));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "i",
            "x",
            "i",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl+", "x", "ctrl", Modifiers::CTRL));
    }

    #[test]
    fn rebinding_changes_dispatched_message() {
        let mut config = AppConfig::default();
        config.key_next_step = "n".to_string();
        let (app, _task) = App::bootstrap(config);

        let message = app.shortcut_message_for_key(Key::Character("n".into()), Modifiers::empty());
        assert!(matches!(message, Some(Message::NextStep)));

        let message = app.shortcut_message_for_key(
            Key::Named(key::Named::Space),
            Modifiers::empty(),
        );
        assert!(message.is_none());
    }
}
