use crate::subscription::{SubscriptionId, SubscriptionSource};
use futures::stream::BoxStream;
use futures::StreamExt;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::IntervalStream;

/// A repeating timer emitting the current [`Instant`] every `interval`.
///
/// Timers with different `id`s run side by side; two fields animating at
/// once each use their own id.
///
/// ```rust,ignore
/// use floatlabel_core::{subscribe, Every};
///
/// let frames = subscribe(Every::new(Duration::from_millis(16), "label"))
///     .map(Msg::AnimationFrame);
/// ```
#[derive(Debug, Clone)]
pub struct Every {
    pub interval: Duration,
    pub id: String,
}

impl Every {
    pub fn new(interval: Duration, id: impl Into<String>) -> Self {
        Self {
            interval,
            id: id.into(),
        }
    }
}

impl SubscriptionSource for Every {
    type Output = Instant;

    fn id(&self) -> SubscriptionId {
        SubscriptionId::with_str::<Self>(&self.id)
    }

    fn stream(self) -> BoxStream<'static, Instant> {
        let mut interval = tokio::time::interval(self.interval);
        // A late frame should not be followed by a burst of catch-up frames.
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Box::pin(IntervalStream::new(interval).map(|tick| tick.into_std()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timers_with_distinct_ids_differ() {
        let a = Every::new(Duration::from_millis(16), "email");
        let b = Every::new(Duration::from_millis(16), "phone");
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), Every::new(Duration::from_secs(1), "email").id());
    }

    #[tokio::test]
    async fn every_emits_repeatedly() {
        let mut stream = Every::new(Duration::from_millis(1), "t").stream();
        let first = stream.next().await;
        let second = stream.next().await;
        assert!(matches!((first, second), (Some(a), Some(b)) if b >= a));
    }
}
