use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::{layout::Rect, Frame};

/// A reusable piece of UI that renders into an area chosen by its parent.
///
/// Parents wrap a component's messages in one of their own variants and lift
/// the returned commands and subscriptions with `map`:
///
/// ```rust,ignore
/// use floatlabel_core::{Command, Component, Model};
/// use floatlabel_widgets::floating_input::{self, FloatingInput};
///
/// enum Msg { Email(floating_input::Message) }
///
/// fn update(form: &mut Form, msg: Msg) -> Command<Msg> {
///     match msg {
///         Msg::Email(m) => form.email.update(m).map(Msg::Email),
///     }
/// }
///
/// fn subscriptions(form: &Form) -> Vec<Subscription<Msg>> {
///     form.email
///         .subscriptions()
///         .into_iter()
///         .map(|s| s.map(Msg::Email))
///         .collect()
/// }
/// ```
pub trait Component: Send + 'static {
    /// Messages the component reacts to and emits.
    type Message: Send + 'static;

    /// Handle a message. The parent maps the returned command into its own
    /// message type.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render inside `area` only.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Subscriptions the parent should include in its own list.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }

    /// Whether the component currently holds keyboard focus.
    fn focused(&self) -> bool {
        false
    }
}
