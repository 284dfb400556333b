use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::{debug, info, warn};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::ToggleIngredients => self.handle_toggle_ingredients(),
            Message::ToggleSteps => self.handle_toggle_steps(),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::StartCooking => self.handle_start_cooking(),
            Message::NextStep => self.handle_next_step(),
            Message::ResetCooking => self.handle_reset_cooking(),
            Message::Tick(now) => self.handle_tick(now),
            Message::Print => self.handle_print(&mut effects),
            Message::PrintFinished { error } => self.handle_print_finished(error),
            Message::Quit => effects.push(Effect::Quit),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }

    fn handle_print(&mut self, effects: &mut Vec<Effect>) {
        info!(command = %self.config.print_command, "Sending recipe to printer");
        effects.push(Effect::Print {
            command: self.config.print_command.clone(),
            document: self.recipe.to_plain_text(),
        });
    }

    fn handle_print_finished(&mut self, error: Option<String>) {
        match error {
            None => debug!("Print job handed off"),
            Some(err) => warn!("Print failed: {err}"),
        }
    }
}
