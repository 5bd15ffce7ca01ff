//! Elm-architecture runtime for floatlabel terminal forms.
//!
//! A program is an **init -> update -> view** cycle. State changes only in
//! [`Model::update`], side effects are returned as [`Command`]s, and
//! long-lived event sources (terminal input, animation frame timers) are
//! declared as [`Subscription`]s that the runtime starts and stops by diffing.
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Model`] | Top-level application (init / update / view) |
//! | [`Component`] | Reusable child that renders into a [`ratatui::layout::Rect`] |
//! | [`Command`] | A side effect for the runtime to perform |
//! | [`Subscription`] | A diffed, long-lived event source |
//! | [`Program`] | Runs a [`Model`] against the terminal |
//! | [`TestProgram`](testing::TestProgram) | Runs a [`Model`] headlessly in tests |

pub mod command;
pub mod component;
pub mod event;
pub mod logging;
pub mod model;
pub mod runtime;
pub mod subscription;
pub mod subscriptions;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use event::TerminalEvent;
pub use logging::log_to_file;
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramHandle, ProgramOptions};
pub use subscription::{subscribe, Subscription, SubscriptionId, SubscriptionSource};
pub use subscriptions::{terminal_events, Every, TerminalEvents};

/// Run a model with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run a model with custom options.
pub async fn run_with<M: Model>(flags: M::Flags, options: ProgramOptions) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
