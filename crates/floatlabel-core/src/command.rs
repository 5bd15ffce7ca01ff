use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// Side effects returned from [`Model::update`](crate::Model::update) or
/// [`Component::update`](crate::Component::update).
///
/// A command is a flat list of effects run in order: messages are queued,
/// futures are spawned, and a quit stops the program. Batching concatenates
/// the lists, so nesting never builds up.
///
/// Widgets report to their parent by emitting messages:
///
/// ```rust,ignore
/// fn update(&mut self, msg: Message) -> Command<Message> {
///     self.value.push('x');
///     Command::message(Message::Changed(self.value.clone()))
/// }
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) effects: Vec<Effect<Msg>>,
}

pub(crate) enum Effect<Msg> {
    /// Queue a message for the next update.
    Emit(Msg),
    /// Run a future on the runtime and queue its output.
    Spawn(BoxFuture<'static, Msg>),
    Quit,
}

impl<Msg: Send + 'static> Command<Msg> {
    pub fn none() -> Self {
        Command {
            effects: Vec::new(),
        }
    }

    /// Deliver `msg` to `update` as soon as the current update returns.
    pub fn message(msg: Msg) -> Self {
        Command {
            effects: vec![Effect::Emit(msg)],
        }
    }

    /// Run `future` and turn its output into a message.
    pub fn perform<F, T>(future: F, map: impl FnOnce(T) -> Msg + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Command {
            effects: vec![Effect::Spawn(Box::pin(async move { map(future.await) }))],
        }
    }

    pub fn quit() -> Self {
        Command {
            effects: vec![Effect::Quit],
        }
    }

    /// Concatenate commands, keeping their order.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        Command {
            effects: cmds.into_iter().flat_map(|cmd| cmd.effects).collect(),
        }
    }

    /// Lift a child's command into the parent's message type.
    ///
    /// ```rust,ignore
    /// Msg::Email(m) => self.email.update(m).map(Msg::Email),
    /// ```
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        let f = Arc::new(f);
        let effects = self
            .effects
            .into_iter()
            .map(|effect| match effect {
                Effect::Emit(msg) => Effect::Emit(f(msg)),
                Effect::Spawn(fut) => {
                    let f = Arc::clone(&f);
                    Effect::Spawn(Box::pin(async move { f(fut.await) }))
                }
                Effect::Quit => Effect::Quit,
            })
            .collect();
        Command { effects }
    }

    pub fn is_none(&self) -> bool {
        self.effects.is_empty()
    }

    /// Whether running this command stops the program.
    pub fn quits(&self) -> bool {
        self.effects.iter().any(|e| matches!(e, Effect::Quit))
    }

    /// The messages this command emits immediately, in order. Futures and
    /// quits are dropped.
    pub fn into_messages(self) -> Vec<Msg> {
        self.effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::Emit(msg) => Some(msg),
                Effect::Spawn(_) | Effect::Quit => None,
            })
            .collect()
    }
}

impl<Msg: Send + 'static> Default for Command<Msg> {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_has_no_effects() {
        assert!(Command::<()>::none().is_none());
        assert!(Command::<()>::default().is_none());
    }

    #[test]
    fn batch_flattens_in_order() {
        let inner = Command::batch([Command::message(2), Command::none(), Command::message(3)]);
        let cmd = Command::batch([Command::message(1), inner, Command::quit()]);
        assert!(cmd.quits());
        assert_eq!(cmd.into_messages(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_batch_is_none() {
        let cmd: Command<i32> = Command::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn map_lifts_messages_and_keeps_quit() {
        #[derive(Debug, PartialEq)]
        enum Parent {
            Field(i32),
        }
        let cmd = Command::batch([Command::message(7), Command::quit()]).map(Parent::Field);
        assert!(cmd.quits());
        assert_eq!(cmd.into_messages(), vec![Parent::Field(7)]);
    }

    #[tokio::test]
    async fn mapped_future_resolves_through_map() {
        let cmd = Command::perform(async { 20 }, |n: i32| n + 1).map(|n| n * 2);
        let Some(Effect::Spawn(fut)) = cmd.effects.into_iter().next() else {
            panic!("expected a spawned future");
        };
        assert_eq!(fut.await, 42);
    }
}
