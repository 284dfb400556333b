use super::super::state::App;
use std::time::Instant;
use tracing::{debug, info, trace};

impl App {
    pub(super) fn handle_start_cooking(&mut self) {
        if !self.session.start() {
            debug!("Start ignored; a cooking session is already running");
            return;
        }
        self.toggles.show_steps = true;
        self.timer.start();
        info!(
            steps = self.step_count(),
            remaining = %self.timer.label(),
            "Started cooking session"
        );
    }

    pub(super) fn handle_next_step(&mut self) {
        let step_count = self.step_count();
        if self.session.advance(step_count) {
            info!(
                step = self.session.current_step().map(|step| step + 1),
                of = step_count,
                "Advanced to next step"
            );
        } else {
            debug!(
                active = self.session.is_active(),
                "Next step ignored; no further step to advance to"
            );
        }
    }

    pub(super) fn handle_reset_cooking(&mut self) {
        if !self.session.reset() {
            debug!("Reset ignored; no cooking session is running");
            return;
        }
        self.timer.stop();
        info!("Reset cooking session");
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        if self.timer.tick() {
            info!(?now, "Cooking timer finished");
        } else {
            trace!(?now, remaining = self.timer.remaining_secs, "Countdown tick");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::app::state::{COOKING_DURATION_SECS, CookingSession};
    use crate::config::AppConfig;

    fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default());
        app
    }

    fn tick(app: &mut App, count: u32) {
        for _ in 0..count {
            app.reduce(Message::Tick(Instant::now()));
        }
    }

    #[test]
    fn start_activates_first_step_and_runs_timer() {
        let mut app = build_test_app();
        app.handle_start_cooking();

        assert_eq!(app.session, CookingSession::Active { step: 0 });
        assert!(app.timer.is_running());
        assert_eq!(app.timer.remaining_secs, COOKING_DURATION_SECS);
        assert!(app.toggles.show_steps);
        assert!(!app.toggles.show_ingredients);
    }

    #[test]
    fn restart_mid_session_keeps_position_and_time() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        app.handle_next_step();
        app.handle_next_step();
        tick(&mut app, 30);

        app.handle_start_cooking();

        assert_eq!(app.session.current_step(), Some(2));
        assert_eq!(app.timer.remaining_secs, COOKING_DURATION_SECS - 30);
    }

    #[test]
    fn next_step_walks_to_the_end_and_clamps() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        let last = app.step_count() - 1;

        for expected in 1..=last {
            app.handle_next_step();
            assert_eq!(app.session.current_step(), Some(expected));
        }
        app.handle_next_step();
        app.handle_next_step();
        assert_eq!(app.session.current_step(), Some(last));
        assert_eq!(app.progress_percentage(), 100.0);
    }

    #[test]
    fn next_step_while_idle_does_nothing() {
        let mut app = build_test_app();
        app.handle_next_step();
        assert_eq!(app.session, CookingSession::Idle);
    }

    #[test]
    fn reset_stops_timer_and_keeps_steps_visibility() {
        for hide_steps in [false, true] {
            let mut app = build_test_app();
            app.handle_start_cooking();
            app.handle_next_step();
            tick(&mut app, 125);
            if hide_steps {
                app.handle_toggle_steps();
            }
            let steps_visible = app.toggles.show_steps;

            app.handle_reset_cooking();

            assert_eq!(app.session, CookingSession::Idle);
            assert!(!app.timer.is_running());
            assert_eq!(app.timer.remaining_secs, COOKING_DURATION_SECS);
            assert_eq!(app.toggles.show_steps, steps_visible);
            assert_eq!(app.progress_percentage(), 0.0);
        }
    }

    #[test]
    fn ticks_after_reset_do_not_move_the_clock() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        tick(&mut app, 10);
        app.handle_reset_cooking();
        tick(&mut app, 10);
        assert_eq!(app.timer.remaining_secs, COOKING_DURATION_SECS);
    }

    #[test]
    fn timer_runs_down_to_zero_and_stays_there() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        tick(&mut app, COOKING_DURATION_SECS);
        assert_eq!(app.timer.remaining_secs, 0);
        tick(&mut app, 5);
        assert_eq!(app.timer.remaining_secs, 0);
        assert!(app.timer.is_running());
        assert!(!app.timer.needs_tick());
    }

    #[test]
    fn start_after_reset_begins_again_from_scratch() {
        let mut app = build_test_app();
        app.handle_start_cooking();
        app.handle_next_step();
        tick(&mut app, 42);
        app.handle_reset_cooking();
        app.handle_start_cooking();

        assert_eq!(app.session.current_step(), Some(0));
        assert_eq!(app.timer.remaining_secs, COOKING_DURATION_SECS);
        assert!(app.timer.is_running());
    }

    #[test]
    fn tick_is_only_wanted_while_counting_down() {
        let mut app = build_test_app();
        assert!(!app.timer.needs_tick());

        app.reduce(Message::StartCooking);
        assert!(app.timer.needs_tick());

        app.reduce(Message::ResetCooking);
        assert!(!app.timer.needs_tick());

        app.reduce(Message::StartCooking);
        tick(&mut app, COOKING_DURATION_SECS);
        assert!(!app.timer.needs_tick());

        app.reduce(Message::ResetCooking);
        assert!(!app.timer.needs_tick());
        assert_eq!(app.timer.remaining_secs, COOKING_DURATION_SECS);
    }
}
