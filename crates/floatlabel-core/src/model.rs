use crate::command::Command;
use crate::subscription::Subscription;
use ratatui::Frame;

/// The top-level application trait.
///
/// A [`Program`](crate::Program) calls [`init`](Model::init) once, then
/// alternates between [`view`](Model::view) and [`update`](Model::update) as
/// messages arrive, reconciling [`subscriptions`](Model::subscriptions) after
/// each update.
///
/// # Example
///
/// ```rust,ignore
/// use floatlabel_core::{Command, Model};
/// use ratatui::widgets::Paragraph;
/// use ratatui::Frame;
///
/// struct Form { email: String }
///
/// enum Msg { EmailChanged(String) }
///
/// impl Model for Form {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_: ()) -> (Self, Command<Msg>) {
///         (Form { email: String::new() }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::EmailChanged(value) => self.email = value,
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new(self.email.as_str()), frame.area());
///     }
/// }
/// ```
pub trait Model: Sized + Send + 'static {
    /// Every event that can change application state.
    type Message: Send + 'static;

    /// Startup data passed to [`Model::init`]. Use `()` when none is needed.
    type Flags: Send + 'static;

    /// Build the initial state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Handle one message and describe any follow-up work.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Draw the current state. Called after every update.
    fn view(&self, frame: &mut Frame);

    /// Subscriptions that should be active for the current state.
    ///
    /// The runtime diffs the returned list by id: new entries start, missing
    /// entries are cancelled, unchanged entries keep running.
    fn subscriptions(&self) -> Vec<Subscription<Self::Message>> {
        vec![]
    }
}
