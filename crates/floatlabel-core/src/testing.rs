//! Headless helpers for testing models and components.

use crate::command::Command;
use crate::component::Component;
use crate::model::Model;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

/// Drives a [`Model`] without a terminal or async runtime.
///
/// Immediate messages returned from `update` (see [`Command::message`]) are
/// queued and can be processed with [`drain_messages`](Self::drain_messages).
/// Futures and quit commands are dropped.
///
/// ```rust,ignore
/// let mut prog = TestProgram::<SignupForm>::new(());
/// prog.send(Msg::Phone(floating_input::Message::Paste("5551234".into())));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 12).contains("(555) 123-4"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending: Vec<M::Message>,
}

impl<M: Model> TestProgram<M> {
    /// Call [`Model::init`] and queue its immediate messages.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        Self {
            model,
            pending: sync_messages(init_cmd),
        }
    }

    /// Run one update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.pending.extend(sync_messages(cmd));
    }

    /// Keep feeding queued messages back into `update` until none are left.
    pub fn drain_messages(&mut self) {
        while !self.pending.is_empty() {
            for msg in std::mem::take(&mut self.pending) {
                self.send(msg);
            }
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn render(&self, width: u16, height: u16) -> Buffer {
        draw(width, height, |frame| self.model.view(frame))
    }

    /// Render and return the screen as text, one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }
}

/// Render a [`Component`] into the whole of a `width` x `height` buffer.
pub fn render_component<C: Component>(component: &C, width: u16, height: u16) -> Buffer {
    draw(width, height, |frame| component.view(frame, frame.area()))
}

/// Like [`render_component`], returning the screen as text.
pub fn render_component_string<C: Component>(component: &C, width: u16, height: u16) -> String {
    buffer_to_string(&render_component(component, width, height))
}

/// One line per buffer row, trailing spaces kept.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flatten a command into the messages it would deliver immediately.
///
/// Useful for asserting what a component reported to its parent:
///
/// ```rust,ignore
/// let msgs = sync_messages(field.update(Message::Paste("42".into())));
/// assert!(matches!(msgs.as_slice(), [Message::Changed(v)] if v == "42"));
/// ```
pub fn sync_messages<Msg: Send + 'static>(cmd: Command<Msg>) -> Vec<Msg> {
    cmd.into_messages()
}

fn draw(width: u16, height: u16, f: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let mut terminal =
        Terminal::new(TestBackend::new(width, height)).expect("test backend never fails");
    terminal.draw(f).expect("test backend never fails");
    terminal.backend().buffer().clone()
}
