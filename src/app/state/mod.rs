mod constants;
mod session;
mod timer;
mod ui;

use crate::config::{AppConfig, ThemeMode};
use crate::recipe::Recipe;
use crate::theme::Theme;
use iced::Task;
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use session::{CookingSession, StepStatus};
pub(in crate::app) use timer::CountdownTimer;
pub(in crate::app) use ui::VisibilityToggles;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) recipe: &'static Recipe,
    pub(super) session: CookingSession,
    pub(super) timer: CountdownTimer,
    pub(super) toggles: VisibilityToggles,
    pub(super) config: AppConfig,
}

impl App {
    pub fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let recipe = Recipe::builtin();
        info!(
            title = %recipe.title,
            steps = recipe.step_count(),
            ingredients = recipe.ingredients.len(),
            "Mounted recipe card"
        );
        let app = App {
            recipe,
            session: CookingSession::default(),
            timer: CountdownTimer::default(),
            toggles: VisibilityToggles::default(),
            config,
        };
        (app, Task::none())
    }

    pub(super) fn step_count(&self) -> usize {
        self.recipe.step_count()
    }

    pub(super) fn progress_percentage(&self) -> f32 {
        self.session.progress_percentage(self.step_count())
    }

    pub(super) fn theme(&self) -> Theme {
        Theme::from(self.config.theme)
    }

    pub(super) fn is_night(&self) -> bool {
        matches!(self.config.theme, ThemeMode::Night)
    }
}
