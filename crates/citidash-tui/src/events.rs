//! Events consumed by the reducer.

use crossterm::event::Event;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Render cadence; drives flash expiry.
    Tick,
    /// Current terminal size, sent before other events each loop.
    Frame { width: u16, height: u16 },
    /// Raw terminal input.
    Terminal(Event),
    /// Outcome of an [`OpenMapDocument`](crate::effects::UiEffect::OpenMapDocument) effect.
    MapOpened { result: Result<String, String> },
}
