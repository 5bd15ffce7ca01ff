//! Built-in subscription sources: terminal input and a repeating timer.

mod terminal;
mod timer;

pub use terminal::{terminal_events, TerminalEvents};
pub use timer::Every;
