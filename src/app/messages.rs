use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleIngredients,
    ToggleSteps,
    ToggleTheme,
    StartCooking,
    NextStep,
    ResetCooking,
    Print,
    PrintFinished { error: Option<String> },
    Quit,
    KeyPressed { key: Key, modifiers: Modifiers },
    Tick(Instant),
}
