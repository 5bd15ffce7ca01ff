//! # Signup Form Example
//!
//! Five floating-label fields sharing one theme:
//! - a name with a character countdown
//! - phone and date fields behind fixed masks
//! - a dollar amount with thousands grouping
//! - a password with a visibility toggle (Ctrl+T)
//!
//! Tab / Shift+Tab move focus, Enter submits, Esc quits. Set
//! `FLOATLABEL_LOG=signup.log` to write a trace log.
//!
//! Run with: `cargo run --example signup_form`

use std::sync::Arc;

use floatlabel::crossterm::event::{KeyCode, KeyModifiers};
use floatlabel::mask::{Affix, Divider, MaskKind};
use floatlabel::ratatui::layout::{Alignment, Constraint, Layout};
use floatlabel::ratatui::style::{Color, Modifier, Style};
use floatlabel::ratatui::text::{Line, Span};
use floatlabel::ratatui::widgets::Paragraph;
use floatlabel::ratatui::Frame;
use floatlabel::widgets::floating_input::{self, FloatingInput};
use floatlabel::widgets::style::{FieldStyles, GlobalStyles, LabelStyles};
use floatlabel::widgets::FocusRing;
use floatlabel::{
    terminal_events, Command, Component, Model, ProgramOptions, Subscription, TerminalEvent,
};

const NAME: usize = 0;
const PASSWORD: usize = 4;

struct SignupForm {
    fields: Vec<FloatingInput>,
    focus: FocusRing,
    status: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Field(usize, floating_input::Message),
    Key(floatlabel::crossterm::event::KeyEvent),
    Paste(String),
    FocusNext,
    FocusPrev,
    Quit,
}

fn theme() -> Arc<GlobalStyles> {
    GlobalStyles::new()
        .with_label(LabelStyles {
            color_focused: Some(Color::Rgb(0x5f, 0xaf, 0xff)),
            color_blurred: Some(Color::Rgb(0x80, 0x80, 0x80)),
            ..LabelStyles::default()
        })
        .with_field(FieldStyles {
            input: Some(Style::default().fg(Color::White)),
            ..FieldStyles::default()
        })
        .shared()
}

impl SignupForm {
    fn forward(&mut self, index: usize, msg: floating_input::Message) -> Command<Msg> {
        match self.fields.get_mut(index) {
            Some(field) => field.update(msg).map(move |m| Msg::Field(index, m)),
            None => Command::none(),
        }
    }

    fn move_focus(&mut self, change: Option<floatlabel::widgets::focus::FocusChange>) -> Command<Msg> {
        let Some(change) = change else {
            return Command::none();
        };
        Command::batch([
            self.forward(change.blurred, floating_input::Message::Blur),
            self.forward(change.focused, floating_input::Message::Focus),
        ])
    }

    fn submit(&mut self) {
        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.is_empty())
            .map(FloatingInput::label)
            .collect();
        self.status = Some(if missing.is_empty() {
            let summary: Vec<String> = self
                .fields
                .iter()
                .take(PASSWORD)
                .map(|f| format!("{}: {}", f.label(), f.value()))
                .collect();
            format!("Submitted. {}", summary.join(", "))
        } else {
            format!("Missing: {}", missing.join(", "))
        });
    }
}

impl Model for SignupForm {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let theme = theme();
        let fields = vec![
            FloatingInput::new("Name")
                .with_hint("as on your card")
                .with_max_length(24)
                .with_countdown("characters left"),
            FloatingInput::new("Phone")
                .with_mask("(___) ___-____")
                .with_mask_kind(MaskKind::Phone)
                .with_hint("(555) 123-4567"),
            FloatingInput::new("Birthday")
                .with_mask("__/__/____")
                .with_mask_kind(MaskKind::Date)
                .with_hint("MM/DD/YYYY"),
            FloatingInput::new("Budget")
                .with_mask_kind(MaskKind::Currency)
                .with_currency_divider(Divider::Comma)
                .with_currency_affix(Affix::Prefix("$".into()))
                .with_right_adornment(" USD"),
            FloatingInput::new("Password").with_password(true),
        ]
        .into_iter()
        .map(|field| field.with_global_styles(Arc::clone(&theme)))
        .collect::<Vec<_>>();
        let focus = FocusRing::new(fields.len());

        let mut form = SignupForm {
            fields,
            focus,
            status: None,
        };
        let cmd = form.forward(NAME, floating_input::Message::Focus);
        (form, cmd)
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Field(_, floating_input::Message::Submit(_)) => {
                self.submit();
                Command::none()
            }
            Msg::Field(_, floating_input::Message::Changed(_)) => {
                self.status = None;
                Command::none()
            }
            Msg::Field(index, floating_input::Message::PasswordToggled(visible)) => {
                // Showing the password focuses it; keep the ring in step.
                if visible {
                    if let Some(change) = self.focus.focus(index) {
                        return self.forward(change.blurred, floating_input::Message::Blur);
                    }
                }
                Command::none()
            }
            Msg::Field(index, m) => self.forward(index, m),
            Msg::Key(key) => {
                let focused = self.focus.focused();
                self.forward(focused, floating_input::Message::KeyPress(key))
            }
            Msg::Paste(text) => {
                let focused = self.focus.focused();
                self.forward(focused, floating_input::Message::Paste(text))
            }
            Msg::FocusNext => {
                let change = self.focus.next();
                self.move_focus(change)
            }
            Msg::FocusPrev => {
                let change = self.focus.prev();
                self.move_focus(change)
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(self.fields.iter().map(|f| Constraint::Length(f.height())));
        constraints.push(Constraint::Length(2));
        constraints.push(Constraint::Fill(1));
        constraints.push(Constraint::Length(1));
        let areas = Layout::vertical(constraints).split(frame.area().inner(
            floatlabel::ratatui::layout::Margin {
                horizontal: 2,
                vertical: 1,
            },
        ));

        let title = Paragraph::new("Create an account")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        frame.render_widget(title, areas[0]);

        for (field, area) in self.fields.iter().zip(areas.iter().skip(1)) {
            field.view(frame, *area);
        }

        if let Some(status) = &self.status {
            let style = if status.starts_with("Submitted") {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            let status = Paragraph::new(status.as_str())
                .alignment(Alignment::Center)
                .style(style);
            frame.render_widget(status, areas[self.fields.len() + 1]);
        }

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" next  "),
            Span::styled("Shift+Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" prev  "),
            Span::styled("Ctrl+T", Style::default().fg(Color::Cyan)),
            Span::raw(" show password  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" submit  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(" quit"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(help, areas[areas.len() - 1]);
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        // Keys go through `update` so routing always sees the current focus.
        let mut subs = vec![terminal_events(|ev| match ev {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Esc, _) => Some(Msg::Quit),
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                (KeyCode::Tab, KeyModifiers::NONE) => Some(Msg::FocusNext),
                (KeyCode::BackTab, _) => Some(Msg::FocusPrev),
                _ => Some(Msg::Key(key)),
            },
            TerminalEvent::Paste(text) => Some(Msg::Paste(text)),
            _ => None,
        })];
        for (index, field) in self.fields.iter().enumerate() {
            subs.extend(
                field
                    .subscriptions()
                    .into_iter()
                    .map(move |s| s.map(move |m| Msg::Field(index, m))),
            );
        }
        subs
    }
}

#[floatlabel::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let options = ProgramOptions {
        log_file: std::env::var_os("FLOATLABEL_LOG").map(Into::into),
        ..ProgramOptions::default()
    };
    let form = floatlabel::run_with::<SignupForm>((), options).await?;
    if let Some(status) = form.status {
        println!("{status}");
    }
    Ok(())
}
