use super::super::state::App;
use tracing::debug;

impl App {
    pub(super) fn handle_toggle_ingredients(&mut self) {
        self.toggles.toggle_ingredients();
        debug!(visible = self.toggles.show_ingredients, "Toggled ingredients");
    }

    pub(super) fn handle_toggle_steps(&mut self) {
        self.toggles.toggle_steps();
        debug!(visible = self.toggles.show_steps, "Toggled steps");
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        debug!(theme = %self.config.theme, "Toggled theme");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, ThemeMode};

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    #[test]
    fn toggles_leave_session_and_timer_alone() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        app.handle_next_step();
        let session = app.session;
        let timer = app.timer;

        app.handle_toggle_ingredients();
        app.handle_toggle_steps();
        app.handle_toggle_steps();
        app.handle_toggle_ingredients();

        assert_eq!(app.session, session);
        assert_eq!(app.timer, timer);
        assert!(!app.toggles.show_ingredients);
        assert!(app.toggles.show_steps);
    }

    #[test]
    fn hiding_steps_while_cooking_is_allowed() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        app.handle_toggle_steps();
        assert!(!app.toggles.show_steps);
        assert!(app.session.is_active());
    }

    #[test]
    fn theme_toggle_flips_between_day_and_night() {
        let mut app = build_test_app();
        assert_eq!(app.config.theme, ThemeMode::Day);
        app.handle_toggle_theme();
        assert!(app.is_night());
        app.handle_toggle_theme();
        assert_eq!(app.config.theme, ThemeMode::Day);
    }
}
