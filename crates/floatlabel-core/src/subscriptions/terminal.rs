use crate::event::TerminalEvent;
use crate::subscription::{forward, Subscription, SubscriptionId, SubscriptionSource};
use crossterm::event::EventStream;
use futures::stream::BoxStream;
use futures::StreamExt;
use std::sync::Arc;

/// Keyboard, mouse, resize, focus and paste events from the terminal.
pub struct TerminalEvents;

impl SubscriptionSource for TerminalEvents {
    type Output = TerminalEvent;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::of::<Self>()
    }

    fn stream(self) -> BoxStream<'static, TerminalEvent> {
        Box::pin(EventStream::new().filter_map(|result| async move {
            match result {
                Ok(event) => Some(TerminalEvent::from(event)),
                Err(err) => {
                    tracing::warn!(%err, "terminal event stream error");
                    None
                }
            }
        }))
    }
}

/// Subscribe to terminal events, keeping only those `map` turns into a
/// message.
///
/// ```rust,ignore
/// fn subscriptions(&self) -> Vec<Subscription<Msg>> {
///     vec![terminal_events(|event| match event {
///         TerminalEvent::Key(key) => Some(Msg::Key(key)),
///         TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
///         _ => None,
///     })]
/// }
/// ```
pub fn terminal_events<Msg: Send + 'static>(
    map: impl Fn(TerminalEvent) -> Option<Msg> + Send + Sync + 'static,
) -> Subscription<Msg> {
    let map = Arc::new(map);
    // The EventStream is created inside the task. Creating it on every
    // `subscriptions()` call would poll crossterm's global reader.
    Subscription {
        id: SubscriptionId::of::<TerminalEvents>(),
        spawn: Box::new(move |tx| {
            let events = futures::stream::once(async { EventStream::new() })
                .flatten()
                .filter_map(move |result| {
                    let map = map.clone();
                    async move { result.ok().and_then(|event| map(TerminalEvent::from(event))) }
                });
            forward(events, tx)
        }),
    }
}
