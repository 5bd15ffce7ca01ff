use crate::command::{Command, Effect};
use crate::model::Model;
use crate::subscription::SubscriptionManager;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while starting or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// Terminal setup, rendering, or opening the log file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A global `tracing` subscriber was already installed.
    #[error("could not install logger: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for a [`Program`].
///
/// ```rust,ignore
/// let options = ProgramOptions {
///     fps: 30,
///     log_file: Some("form.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Frames per second, clamped to 1..=120 (default 60).
    pub fps: u32,
    /// Render in the alternate screen (default true).
    pub alt_screen: bool,
    /// Deliver pastes as a single event (default true).
    pub bracketed_paste: bool,
    /// Restore the terminal before the panic message is printed (default true).
    pub catch_panics: bool,
    /// Quit on Ctrl+C signals (default true).
    pub handle_signals: bool,
    /// Write `tracing` output to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            bracketed_paste: true,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
        }
    }
}

impl ProgramOptions {
    fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.clamp(1, 120)))
    }
}

/// A cloneable handle for talking to a running [`Program`] from elsewhere.
#[derive(Clone)]
pub struct ProgramHandle<Msg: Send + 'static> {
    msg_tx: mpsc::UnboundedSender<Msg>,
    killed: Arc<AtomicBool>,
}

impl<Msg: Send + 'static> ProgramHandle<Msg> {
    /// Queue a message. Does nothing once the program has exited.
    pub fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Make the program exit at its next loop iteration.
    pub fn kill(&self) {
        self.killed.store(true, Ordering::SeqCst);
    }
}

/// Raw mode, alternate screen and paste mode for as long as the value lives.
/// Dropping it puts the terminal back.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    alt_screen: bool,
}

impl TerminalSession {
    fn enter(options: &ProgramOptions) -> Result<Self, ProgramError> {
        if options.catch_panics {
            install_panic_hook(options.alt_screen);
        }
        // Built before any mode switch so a failed step below still restores.
        let mut session = Self {
            terminal: Terminal::new(CrosstermBackend::new(stdout()))?,
            alt_screen: options.alt_screen,
        };
        enable_raw_mode()?;
        let mut out = stdout();
        if options.alt_screen {
            execute!(out, EnterAlternateScreen)?;
        }
        if options.bracketed_paste {
            execute!(out, EnableBracketedPaste)?;
        }
        execute!(out, cursor::Hide)?;
        session.terminal.clear()?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = leave_terminal(self.alt_screen) {
            tracing::warn!(%err, "could not restore terminal");
        }
    }
}

fn install_panic_hook(alt_screen: bool) {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = leave_terminal(alt_screen);
            previous(info);
        }));
    });
}

/// Runs every step even if an earlier one fails; only the raw-mode error is
/// reported.
fn leave_terminal(alt_screen: bool) -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut out = stdout();
    execute!(out, DisableBracketedPaste).ok();
    execute!(out, cursor::Show).ok();
    if alt_screen {
        execute!(out, LeaveAlternateScreen).ok();
    }
    raw
}

/// What woke the event loop.
enum Wake<Msg> {
    Interrupted,
    Message(Msg),
    Frame,
}

/// Drives a [`Model`] against the real terminal until it returns
/// [`Command::quit`].
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), ProgramError> {
///     let form = Program::<SignupForm>::new(())?.run().await?;
///     println!("{}", form.summary());
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    session: TerminalSession,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    subscriptions: SubscriptionManager<M::Message>,
    options: ProgramOptions,
    dirty: bool,
    should_quit: bool,
    killed: Arc<AtomicBool>,
}

impl<M: Model> Program<M> {
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Set up logging and the terminal, then run [`Model::init`]. Must be
    /// called inside a tokio runtime.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        if let Some(path) = &options.log_file {
            crate::logging::log_to_file(path)?;
        }

        let session = TerminalSession::enter(&options)?;
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            session,
            subscriptions: SubscriptionManager::new(msg_tx.clone()),
            msg_tx,
            msg_rx,
            options,
            dirty: true,
            should_quit: false,
            killed: Arc::new(AtomicBool::new(false)),
        };
        tracing::info!(fps = program.options.fps, "program started");

        program.execute(init_cmd);
        program.reconcile();
        Ok(program)
    }

    pub fn handle(&self) -> ProgramHandle<M::Message> {
        ProgramHandle {
            msg_tx: self.msg_tx.clone(),
            killed: Arc::clone(&self.killed),
        }
    }

    /// Run until quit and return the final model. The terminal is restored
    /// whether or not the loop fails.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;
        tracing::info!(ok = result.is_ok(), "program stopping");
        self.subscriptions.shutdown();
        let Program { model, session, .. } = self;
        drop(session);
        result.map(|()| model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        let mut frames = tokio::time::interval(self.options.frame_interval());
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let handle_signals = self.options.handle_signals;

        while !self.should_quit && !self.killed.load(Ordering::SeqCst) {
            let wake = tokio::select! {
                biased;
                _ = tokio::signal::ctrl_c(), if handle_signals => Wake::Interrupted,
                Some(msg) = self.msg_rx.recv() => Wake::Message(msg),
                _ = frames.tick() => Wake::Frame,
            };

            match wake {
                Wake::Interrupted => {
                    tracing::info!("interrupted");
                    break;
                }
                Wake::Message(msg) => {
                    self.update(msg);
                    // Apply everything already queued before the next frame.
                    while !self.should_quit {
                        match self.msg_rx.try_recv() {
                            Ok(msg) => self.update(msg),
                            Err(_) => break,
                        }
                    }
                }
                Wake::Frame if self.dirty => {
                    self.session.terminal.draw(|frame| self.model.view(frame))?;
                    self.dirty = false;
                }
                Wake::Frame => {}
            }
        }
        Ok(())
    }

    fn update(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute(cmd);
        self.reconcile();
        self.dirty = true;
    }

    fn reconcile(&mut self) {
        let wanted = self.model.subscriptions();
        self.subscriptions.reconcile(wanted);
    }

    fn execute(&mut self, cmd: Command<M::Message>) {
        for effect in cmd.effects {
            match effect {
                Effect::Emit(msg) => {
                    let _ = self.msg_tx.send(msg);
                }
                Effect::Spawn(fut) => {
                    let tx = self.msg_tx.clone();
                    tokio::spawn(async move {
                        let _ = tx.send(fut.await);
                    });
                }
                Effect::Quit => self.should_quit = true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = ProgramOptions::default();
        assert_eq!(options.fps, 60);
        assert!(options.alt_screen);
        assert!(options.bracketed_paste);
        assert!(options.catch_panics);
        assert!(options.handle_signals);
        assert!(options.log_file.is_none());
    }

    #[test]
    fn frame_interval_clamps_fps() {
        let at = |fps| ProgramOptions { fps, ..ProgramOptions::default() }.frame_interval();
        assert_eq!(at(0), Duration::from_secs(1));
        assert_eq!(at(500), at(120));
        assert!(at(60) < at(30));
    }

    #[tokio::test]
    async fn handle_sends_and_kills() {
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
        let killed = Arc::new(AtomicBool::new(false));
        let handle = ProgramHandle {
            msg_tx,
            killed: Arc::clone(&killed),
        };

        handle.send("phone changed");
        assert_eq!(msg_rx.recv().await, Some("phone changed"));

        handle.clone().kill();
        assert!(killed.load(Ordering::SeqCst));
    }
}
