//! Single-line input whose label floats onto the border when the field is
//! focused or filled, with optional masking, a password visibility toggle and
//! a character countdown.

use std::ops::Range;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use floatlabel_core::{subscribe, Command, Component, Every, Subscription};
use floatlabel_mask::{transform, Affix, CurrencyFormat, Divider, InputMask, MaskKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::animation::{Animated, LabelFrame, DEFAULT_DURATION};
use crate::style::{FieldStyles, GlobalStyles, LabelStyles, ResolvedField, ResolvedLabel};

/// Interval of the frame timer that runs while the label moves.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

const BULLET: char = '•';

/// Messages for [`FloatingInput`].
///
/// `Changed`, `Submit` and `PasswordToggled` are emitted by the field for its
/// parent; sending them to the field does nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    KeyPress(KeyEvent),
    /// Insert text at the cursor.
    Paste(String),
    Focus,
    Blur,
    /// Flip password visibility. Also bound to Ctrl+T.
    TogglePassword,
    /// Force password visibility. Ignored when already in that state.
    SetPasswordVisible(bool),
    /// Advance the label animation.
    AnimationFrame(Instant),
    /// The value after an accepted edit.
    Changed(String),
    /// Enter was pressed.
    Submit(String),
    /// Password visibility changed; `true` means the text is now shown.
    PasswordToggled(bool),
}

/// A floating-label text field.
///
/// The label rests in the input row like a placeholder and floats onto the top
/// border, with a linear animation, when the field gains focus or holds a
/// value. Every edit is routed through the configured mask before it is
/// stored.
///
/// ```ignore
/// let phone = FloatingInput::new("Phone")
///     .with_mask("(___) ___-____")
///     .with_mask_kind(MaskKind::Phone)
///     .with_hint("digits only")
///     .with_countdown("left");
///
/// let price = FloatingInput::new("Price")
///     .with_mask_kind(MaskKind::Currency)
///     .with_currency_divider(Divider::Comma)
///     .with_currency_affix(Affix::Prefix("$".into()));
/// ```
///
/// Each field animating at the same time needs its own frame timer, so ids
/// (the label, unless set with [`with_id`](Self::with_id)) must be unique
/// within a program.
pub struct FloatingInput {
    id: String,
    label: String,
    hint: Option<String>,
    value: Vec<char>,
    cursor: usize,
    focus: bool,
    focus_override: Option<bool>,
    static_label: bool,
    password: bool,
    password_visible: bool,
    show_text: String,
    hide_text: String,
    mask_template: Option<String>,
    mask_kind: Option<MaskKind>,
    currency: CurrencyFormat,
    mask: Option<InputMask>,
    max_length: Option<usize>,
    countdown_label: Option<String>,
    left_adornment: Option<String>,
    right_adornment: Option<String>,
    animation_duration: Duration,
    global_styles: Arc<GlobalStyles>,
    label_styles: LabelStyles,
    field_styles: FieldStyles,
    label_frame: Animated<LabelFrame>,
}

impl FloatingInput {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let global_styles = Arc::new(GlobalStyles::default());
        let resting = LabelStyles::resolved(&global_styles.label, &LabelStyles::default());
        Self {
            id: label.clone(),
            label,
            hint: None,
            value: Vec::new(),
            cursor: 0,
            focus: false,
            focus_override: None,
            static_label: false,
            password: false,
            password_visible: false,
            show_text: "show".into(),
            hide_text: "hide".into(),
            mask_template: None,
            mask_kind: None,
            currency: CurrencyFormat::default(),
            mask: None,
            max_length: None,
            countdown_label: None,
            left_adornment: None,
            right_adornment: None,
            animation_duration: DEFAULT_DURATION,
            global_styles,
            label_styles: LabelStyles::default(),
            field_styles: FieldStyles::default(),
            label_frame: Animated::new(resting.blurred_frame()),
        }
    }

    /// Identity of this field's frame timer. Defaults to the label.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Text shown in the empty input while the label is floated.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Keep the label on the border at all times.
    pub fn with_static_label(mut self, static_label: bool) -> Self {
        self.static_label = static_label;
        self.snap_label()
    }

    /// Hide the value behind bullets, with a visibility toggle.
    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self.password_visible = false;
        self
    }

    /// Indicator texts for the hidden and shown states.
    pub fn with_toggle_text(mut self, show: impl Into<String>, hide: impl Into<String>) -> Self {
        self.show_text = show.into();
        self.hide_text = hide.into();
        self
    }

    /// Fixed-position mask such as `(___) ___-____`. Ignored when the mask
    /// kind is [`MaskKind::Currency`].
    pub fn with_mask(mut self, template: impl Into<String>) -> Self {
        self.mask_template = Some(template.into());
        self.rebuild_mask()
    }

    pub fn with_mask_kind(mut self, kind: MaskKind) -> Self {
        self.mask_kind = Some(kind);
        self.rebuild_mask()
    }

    pub fn with_currency_divider(mut self, divider: Divider) -> Self {
        self.currency = self.currency.with_divider(divider);
        self.rebuild_mask()
    }

    pub fn with_max_decimal_places(mut self, places: usize) -> Self {
        self.currency = self.currency.with_max_decimal_places(places);
        self.rebuild_mask()
    }

    pub fn with_currency_affix(mut self, affix: Affix) -> Self {
        self.currency = self.currency.with_affix(affix);
        self.rebuild_mask()
    }

    /// Cap the value length. A mask template's length takes precedence.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Show `"{remaining} {label}"` under the box. Needs a max length or a
    /// mask template to have any effect.
    pub fn with_countdown(mut self, label: impl Into<String>) -> Self {
        self.countdown_label = Some(label.into());
        self
    }

    /// Let the parent decide whether the label floats, regardless of where the
    /// keyboard focus is.
    pub fn with_focus_override(mut self, focused: bool) -> Self {
        self.focus_override = Some(focused);
        self.snap_label()
    }

    pub fn with_left_adornment(mut self, text: impl Into<String>) -> Self {
        self.left_adornment = Some(text.into());
        self
    }

    pub fn with_right_adornment(mut self, text: impl Into<String>) -> Self {
        self.right_adornment = Some(text.into());
        self
    }

    /// Duration of the label transition. Zero moves the label instantly.
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = duration;
        self
    }

    pub fn with_global_styles(mut self, styles: Arc<GlobalStyles>) -> Self {
        self.global_styles = styles;
        self.snap_label()
    }

    pub fn with_label_styles(mut self, styles: LabelStyles) -> Self {
        self.label_styles = styles;
        self.snap_label()
    }

    pub fn with_field_styles(mut self, styles: FieldStyles) -> Self {
        self.field_styles = styles;
        self
    }

    /// Start with `value`, formatted by the mask. A value the mask rejects is
    /// ignored.
    pub fn with_value(mut self, value: &str) -> Self {
        if let Err(reason) = self.set_value(value) {
            tracing::debug!(label = %self.label, %reason, "initial value rejected");
        }
        self.snap_label()
    }

    // --- State ---

    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the value, formatted by the mask, and move the cursor to the
    /// end. Does not emit `Changed`.
    pub fn set_value(&mut self, value: &str) -> Result<(), floatlabel_mask::Rejected> {
        let formatted = transform(self.mask.as_ref(), "", value)?;
        self.value = self.cap_to_mask(formatted.chars().collect());
        self.cursor = self.amount_range().end;
        self.sync_label(Instant::now());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.sync_label(Instant::now());
    }

    pub fn focus(&mut self) {
        self.set_focus(true, Instant::now());
    }

    pub fn blur(&mut self) {
        self.set_focus(false, Instant::now());
    }

    /// Change the controlled focus state. `None` hands control back to the
    /// keyboard focus.
    pub fn set_focus_override(&mut self, focused: Option<bool>) {
        self.focus_override = focused;
        self.sync_label(Instant::now());
    }

    /// Whether the label sits in its focused position.
    pub fn is_floated(&self) -> bool {
        self.static_label || self.focus_override.unwrap_or(self.focus) || !self.value.is_empty()
    }

    pub fn is_password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn mask(&self) -> Option<&InputMask> {
        self.mask.as_ref()
    }

    /// The length cap in force: the mask template's length, else the
    /// configured max length.
    pub fn effective_max_length(&self) -> Option<usize> {
        self.mask
            .as_ref()
            .and_then(InputMask::max_len)
            .or(self.max_length)
    }

    /// Characters left before the cap, if there is one.
    pub fn remaining(&self) -> Option<usize> {
        self.effective_max_length()
            .map(|max| max.saturating_sub(self.value.len()))
    }

    /// The countdown line, when enabled and a cap exists.
    pub fn countdown_text(&self) -> Option<String> {
        let label = self.countdown_label.as_ref()?;
        let remaining = self.remaining()?;
        Some(format!("{remaining} {label}"))
    }

    /// Where the label is drawn at `now`.
    pub fn label_frame(&self, now: Instant) -> LabelFrame {
        self.label_frame.value(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.label_frame.is_running(now)
    }

    /// Rows the field needs: the bordered box plus the countdown line.
    pub fn height(&self) -> u16 {
        if self.countdown_text().is_some() {
            4
        } else {
            3
        }
    }

    // --- Internals ---

    fn rebuild_mask(mut self) -> Self {
        self.mask = InputMask::resolve(
            self.mask_template.as_deref(),
            self.mask_kind,
            self.currency.clone(),
        );
        self
    }

    fn label_styles(&self) -> ResolvedLabel {
        LabelStyles::resolved(&self.global_styles.label, &self.label_styles)
    }

    fn field_styles(&self, label: &ResolvedLabel) -> ResolvedField {
        FieldStyles::resolved(
            &self.global_styles.field,
            &self.field_styles,
            label.color_focused,
        )
    }

    fn target_frame(&self) -> LabelFrame {
        let label = self.label_styles();
        if self.is_floated() {
            label.focused_frame()
        } else {
            label.blurred_frame()
        }
    }

    fn snap_label(mut self) -> Self {
        self.label_frame.set(self.target_frame());
        self
    }

    fn sync_label(&mut self, now: Instant) {
        let target = self.target_frame();
        if *self.label_frame.target() != target {
            self.label_frame
                .animate_to(target, self.animation_duration, now);
        }
    }

    fn set_focus(&mut self, focus: bool, now: Instant) {
        self.focus = focus;
        self.sync_label(now);
    }

    fn set_password_visible(&mut self, visible: bool) -> Command<Message> {
        if !self.password || visible == self.password_visible {
            return Command::none();
        }
        self.password_visible = visible;
        tracing::debug!(label = %self.label, visible, "password visibility toggled");
        // Showing the text focuses the field; hiding it releases focus.
        self.set_focus(visible, Instant::now());
        Command::message(Message::PasswordToggled(visible))
    }

    fn cap_to_mask(&self, mut value: Vec<char>) -> Vec<char> {
        if let Some(limit) = self.mask.as_ref().and_then(InputMask::max_len) {
            value.truncate(limit);
        }
        value
    }

    /// Char positions of the editable text. Only a currency symbol sits
    /// outside it.
    fn amount_range(&self) -> Range<usize> {
        match &self.mask {
            Some(mask) => mask.amount_range(&self.value()),
            None => 0..self.value.len(),
        }
    }

    /// The editable text and the cursor position within it.
    fn amount(&self) -> (Vec<char>, usize) {
        let range = self.amount_range();
        let at = self.cursor.clamp(range.start, range.end) - range.start;
        (self.value[range].to_vec(), at)
    }

    fn place_cursor(&mut self, at: usize) {
        let range = self.amount_range();
        self.cursor = at.clamp(range.start, range.end);
    }

    /// Run an edited amount through the mask and store the result if
    /// accepted. `cursor` is relative to the amount.
    fn commit(&mut self, candidate: Vec<char>, cursor: usize) -> Command<Message> {
        let previous: String = self.amount().0.into_iter().collect();
        let raw: String = candidate.iter().collect();
        match transform(self.mask.as_ref(), &previous, &raw) {
            Ok(formatted) => {
                let formatted = self.cap_to_mask(formatted.chars().collect());
                let changed = formatted != self.value;
                self.value = formatted;
                let range = self.amount_range();
                self.cursor = if self.mask.is_some() {
                    range.end
                } else {
                    (range.start + cursor).min(range.end)
                };
                if !changed {
                    return Command::none();
                }
                self.sync_label(Instant::now());
                Command::message(Message::Changed(self.value()))
            }
            Err(reason) => {
                tracing::debug!(label = %self.label, %reason, raw = %raw, "edit rejected");
                Command::none()
            }
        }
    }

    fn insert(&mut self, text: &str) -> Command<Message> {
        let accepted: Vec<char> = text
            .chars()
            .filter(|c| !c.is_control())
            .filter(|c| self.mask.as_ref().is_none_or(|m| m.accepts(*c)))
            .collect();
        let room = self
            .effective_max_length()
            .map_or(accepted.len(), |max| max.saturating_sub(self.value.len()));
        let take = accepted.len().min(room);
        if take == 0 {
            return Command::none();
        }
        let (mut candidate, at) = self.amount();
        candidate.splice(at..at, accepted[..take].iter().copied());
        self.commit(candidate, at + take)
    }

    fn delete_backward(&mut self) -> Command<Message> {
        let (mut candidate, at) = self.amount();
        if at == 0 {
            return Command::none();
        }
        candidate.remove(at - 1);
        self.commit(candidate, at - 1)
    }

    fn delete_forward(&mut self) -> Command<Message> {
        let (mut candidate, at) = self.amount();
        if at >= candidate.len() {
            return Command::none();
        }
        candidate.remove(at);
        self.commit(candidate, at)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('t') if ctrl => self.set_password_visible(!self.password_visible),
            KeyCode::Char('a') if ctrl => {
                self.place_cursor(0);
                Command::none()
            }
            KeyCode::Char('e') if ctrl => {
                self.place_cursor(usize::MAX);
                Command::none()
            }
            KeyCode::Char('u') if ctrl => {
                let (amount, at) = self.amount();
                self.commit(amount[at..].to_vec(), 0)
            }
            KeyCode::Char('k') if ctrl => {
                let (amount, at) = self.amount();
                self.commit(amount[..at].to_vec(), at)
            }
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.insert(c.encode_utf8(&mut [0; 4]))
            }
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => {
                self.place_cursor(self.cursor.saturating_sub(1));
                Command::none()
            }
            KeyCode::Right => {
                self.place_cursor(self.cursor + 1);
                Command::none()
            }
            KeyCode::Home => {
                self.place_cursor(0);
                Command::none()
            }
            KeyCode::End => {
                self.place_cursor(usize::MAX);
                Command::none()
            }
            KeyCode::Enter => Command::message(Message::Submit(self.value())),
            _ => Command::none(),
        }
    }

    fn display_value(&self) -> Vec<char> {
        if self.password && !self.password_visible {
            vec![BULLET; self.value.len()]
        } else {
            self.value.clone()
        }
    }

    fn toggle_text(&self) -> Option<&str> {
        match (self.password, self.password_visible) {
            (false, _) => None,
            (true, false) => Some(&self.show_text),
            (true, true) => Some(&self.hide_text),
        }
    }

    fn text_line(&self, width: usize, styles: &ResolvedField) -> Line<'static> {
        if width == 0 {
            return Line::default();
        }
        let display = self.display_value();
        if display.is_empty() {
            let mut spans = Vec::new();
            if self.focus {
                spans.push(Span::styled(" ", styles.input.add_modifier(Modifier::REVERSED)));
            }
            if let Some(hint) = self.hint.as_ref().filter(|_| self.is_floated()) {
                spans.push(Span::styled(hint.clone(), styles.hint));
            }
            return Line::from(spans);
        }

        // Scroll so the cursor cell stays visible.
        let offset = (self.cursor + 1).saturating_sub(width);
        let end = (offset + width).min(display.len());
        let visible = &display[offset..end];
        if !self.focus {
            return Line::from(Span::styled(visible.iter().collect::<String>(), styles.input));
        }

        let at = self.cursor - offset;
        let before: String = visible[..at.min(visible.len())].iter().collect();
        let under = visible.get(at).map_or_else(|| " ".to_string(), char::to_string);
        let after: String = visible.get(at + 1..).unwrap_or_default().iter().collect();
        Line::from(vec![
            Span::styled(before, styles.input),
            Span::styled(under, styles.input.add_modifier(Modifier::REVERSED)),
            Span::styled(after, styles.input),
        ])
    }
}

impl Component for FloatingInput {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::Paste(text) if self.focus => self.insert(&text),
            Message::KeyPress(_) | Message::Paste(_) => Command::none(),
            Message::Focus => {
                self.focus();
                Command::none()
            }
            Message::Blur => {
                self.blur();
                Command::none()
            }
            Message::TogglePassword => self.set_password_visible(!self.password_visible),
            Message::SetPasswordVisible(visible) => self.set_password_visible(visible),
            Message::AnimationFrame(now) => {
                self.label_frame.settle(now);
                Command::none()
            }
            Message::Changed(_) | Message::Submit(_) | Message::PasswordToggled(_) => {
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let now = Instant::now();
        let label_styles = self.label_styles();
        let styles = self.field_styles(&label_styles);
        let label_frame = self.label_frame.value(now);

        let box_area = Rect {
            height: area.height.min(3),
            ..area
        };
        let block = Block::bordered()
            .style(styles.container)
            .border_style(Style::default().fg(label_frame.color));
        let inner = block.inner(box_area);
        frame.render_widget(block, box_area);

        let width_of = |s: Option<&str>| s.map_or(0, |s| s.width() as u16);
        let toggle = self.toggle_text();
        let [left_area, text_area, right_area, toggle_area] = Layout::horizontal([
            Constraint::Length(width_of(self.left_adornment.as_deref())),
            Constraint::Fill(1),
            Constraint::Length(width_of(self.right_adornment.as_deref())),
            Constraint::Length(toggle.map_or(0, |t| t.width() as u16 + 1)),
        ])
        .areas(inner);

        if let Some(text) = &self.left_adornment {
            frame.render_widget(Span::styled(text.as_str(), styles.input), left_area);
        }
        if let Some(text) = &self.right_adornment {
            frame.render_widget(Span::styled(text.as_str(), styles.input), right_area);
        }
        if let Some(text) = toggle {
            frame.render_widget(
                Paragraph::new(text).style(styles.toggle).alignment(Alignment::Right),
                toggle_area,
            );
        }
        frame.render_widget(
            Paragraph::new(self.text_line(text_area.width as usize, &styles)),
            text_area,
        );

        // The label is drawn last so it sits on top of the border.
        let x = text_area.x.saturating_add(label_frame.column());
        let y = box_area.y.saturating_add(label_frame.row());
        let right_edge = box_area.right().saturating_sub(1);
        if !self.label.is_empty() && y < box_area.bottom() && x < right_edge {
            let style = styles.label.fg(label_frame.color);
            frame
                .buffer_mut()
                .set_stringn(x, y, &self.label, usize::from(right_edge - x), style);
        }

        if let Some(countdown) = self.countdown_text() {
            if area.height > box_area.height {
                let row = Rect {
                    y: box_area.bottom(),
                    height: 1,
                    ..area
                };
                frame.render_widget(
                    Paragraph::new(countdown)
                        .style(styles.countdown)
                        .alignment(Alignment::Right),
                    row,
                );
            }
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        if self.label_frame.is_running(Instant::now()) {
            let timer = Every::new(FRAME_INTERVAL, format!("floating-input/{}", self.id));
            vec![subscribe(timer).map(Message::AnimationFrame)]
        } else {
            vec![]
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
