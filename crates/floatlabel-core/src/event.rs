use crossterm::event::{Event, KeyEvent, MouseEvent};

/// Terminal input as delivered by [`terminal_events`](crate::terminal_events).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Columns, rows.
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl From<Event> for TerminalEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Mouse(m) => TerminalEvent::Mouse(m),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::FocusGained => TerminalEvent::FocusGained,
            Event::FocusLost => TerminalEvent::FocusLost,
            Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn crossterm_events_convert() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(TerminalEvent::from(Event::Key(key)), TerminalEvent::Key(key));
        assert_eq!(
            TerminalEvent::from(Event::Paste("555".into())),
            TerminalEvent::Paste("555".into())
        );
        assert_eq!(
            TerminalEvent::from(Event::Resize(80, 24)),
            TerminalEvent::Resize(80, 24)
        );
    }
}
