use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::print::PrintJob;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::window;
use tracing::{debug, info};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Print { command, document } => {
                let job = PrintJob::new(command, document);
                let program = job.program().unwrap_or_else(|| "<none>".to_string());
                debug!(%program, "Dispatching print job");
                Task::perform(
                    async move {
                        match job.dispatch() {
                            Ok(()) => Message::PrintFinished { error: None },
                            Err(err) => Message::PrintFinished {
                                error: Some(format!("{err:#}")),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::Quit => {
                info!("Closing recipe card");
                iced::exit()
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
