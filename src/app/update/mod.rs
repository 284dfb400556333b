mod appearance;
mod cooking;
mod core;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Effect {
    Print { command: String, document: String },
    Quit,
}
