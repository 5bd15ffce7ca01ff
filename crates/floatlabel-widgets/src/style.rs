//! Three-tier style resolution: built-in defaults, app-wide [`GlobalStyles`],
//! and per-field overrides.
//!
//! Global styles are an immutable value shared through an [`Arc`]. Build them
//! once at startup and hand a clone of the `Arc` to every field:
//!
//! ```
//! use std::sync::Arc;
//! use floatlabel_widgets::floating_input::FloatingInput;
//! use floatlabel_widgets::style::{GlobalStyles, LabelStyles};
//! use ratatui::style::Color;
//!
//! let theme = Arc::new(GlobalStyles::new().with_label(LabelStyles {
//!     color_focused: Some(Color::Cyan),
//!     ..LabelStyles::default()
//! }));
//! let email = FloatingInput::new("Email").with_global_styles(theme.clone());
//! let phone = FloatingInput::new("Phone").with_global_styles(theme);
//! ```

use std::sync::Arc;

use ratatui::style::{Color, Modifier, Style};

use crate::animation::LabelFrame;

/// Default label colour in both states.
pub const LABEL_COLOR: Color = Color::Rgb(0x49, 0x65, 0x8c);

/// Pick the first value present: the instance's, then the global one, then the
/// built-in default.
pub fn resolve<T>(instance: Option<T>, global: Option<T>, builtin: T) -> T {
    instance.or(global).unwrap_or(builtin)
}

/// Label position and colour for both label states. Unset fields fall back to
/// the next tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelStyles {
    /// Column offset when floated.
    pub left_focused: Option<u16>,
    /// Column offset when resting in the input row.
    pub left_blurred: Option<u16>,
    /// Row when floated, counted from the top border.
    pub top_focused: Option<u16>,
    /// Row when resting, counted from the top border.
    pub top_blurred: Option<u16>,
    pub color_focused: Option<Color>,
    pub color_blurred: Option<Color>,
}

impl LabelStyles {
    /// Apply built-in < global < instance, field by field.
    pub fn resolved(global: &LabelStyles, instance: &LabelStyles) -> ResolvedLabel {
        ResolvedLabel {
            left_focused: resolve(instance.left_focused, global.left_focused, 1),
            left_blurred: resolve(instance.left_blurred, global.left_blurred, 0),
            top_focused: resolve(instance.top_focused, global.top_focused, 0),
            top_blurred: resolve(instance.top_blurred, global.top_blurred, 1),
            color_focused: resolve(instance.color_focused, global.color_focused, LABEL_COLOR),
            color_blurred: resolve(instance.color_blurred, global.color_blurred, LABEL_COLOR),
        }
    }
}

/// [`LabelStyles`] with every tier applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub left_focused: u16,
    pub left_blurred: u16,
    pub top_focused: u16,
    pub top_blurred: u16,
    pub color_focused: Color,
    pub color_blurred: Color,
}

impl ResolvedLabel {
    /// The frame the label animates to when it floats.
    pub fn focused_frame(&self) -> LabelFrame {
        LabelFrame {
            left: f32::from(self.left_focused),
            top: f32::from(self.top_focused),
            color: self.color_focused,
        }
    }

    /// The frame the label animates to when it rests in the input row.
    pub fn blurred_frame(&self) -> LabelFrame {
        LabelFrame {
            left: f32::from(self.left_blurred),
            top: f32::from(self.top_blurred),
            color: self.color_blurred,
        }
    }
}

/// Styles for the parts of a field.
///
/// `container`, `input`, `hint` and `toggle` replace lower tiers whole.
/// `label` and `countdown` are patched over them, so an instance can change
/// one attribute and keep the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStyles {
    /// The bordered box. Its border colour follows the label colour.
    pub container: Option<Style>,
    /// The typed text. Without a foreground it takes the focused label colour.
    pub input: Option<Style>,
    pub label: Option<Style>,
    pub hint: Option<Style>,
    /// The password visibility indicator.
    pub toggle: Option<Style>,
    pub countdown: Option<Style>,
}

impl FieldStyles {
    pub fn builtin() -> Self {
        Self {
            container: Some(Style::default()),
            input: Some(Style::default()),
            label: Some(Style::default()),
            hint: Some(Style::default().fg(Color::DarkGray)),
            toggle: Some(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD)),
            countdown: Some(Style::default().fg(Color::DarkGray)),
        }
    }

    /// Apply all three tiers. `focused_label` is the resolved focused label
    /// colour, used when no tier gives the input a foreground.
    pub fn resolved(global: &FieldStyles, instance: &FieldStyles, focused_label: Color) -> ResolvedField {
        let builtin = Self::builtin();
        let whole = |pick: fn(&FieldStyles) -> Option<Style>| {
            resolve(pick(instance), pick(global), pick(&builtin).unwrap_or_default())
        };
        let patched = |pick: fn(&FieldStyles) -> Option<Style>| {
            [pick(&builtin), pick(global), pick(instance)]
                .into_iter()
                .flatten()
                .fold(Style::default(), |acc, style| acc.patch(style))
        };

        let mut input = whole(|s| s.input);
        if input.fg.is_none() {
            input = input.fg(focused_label);
        }

        ResolvedField {
            container: whole(|s| s.container),
            input,
            label: patched(|s| s.label),
            hint: whole(|s| s.hint),
            toggle: whole(|s| s.toggle),
            countdown: patched(|s| s.countdown),
        }
    }
}

/// [`FieldStyles`] with every tier applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedField {
    pub container: Style,
    pub input: Style,
    pub label: Style,
    pub hint: Style,
    pub toggle: Style,
    pub countdown: Style,
}

/// App-wide styles shared by every field that is given them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalStyles {
    pub label: LabelStyles,
    pub field: FieldStyles,
}

impl GlobalStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, label: LabelStyles) -> Self {
        self.label = label;
        self
    }

    pub fn with_field(mut self, field: FieldStyles) -> Self {
        self.field = field;
        self
    }

    /// Wrap in an [`Arc`] for sharing.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_instance_then_global() {
        assert_eq!(resolve(Some(1), Some(2), 3), 1);
        assert_eq!(resolve(None, Some(2), 3), 2);
        assert_eq!(resolve(None::<i32>, None, 3), 3);
    }

    #[test]
    fn label_defaults() {
        let label = LabelStyles::resolved(&LabelStyles::default(), &LabelStyles::default());
        assert_eq!(label.left_focused, 1);
        assert_eq!(label.left_blurred, 0);
        assert_eq!(label.top_focused, 0);
        assert_eq!(label.top_blurred, 1);
        assert_eq!(label.color_focused, LABEL_COLOR);
        assert_eq!(label.color_blurred, LABEL_COLOR);
    }

    #[test]
    fn label_tiers_merge_per_field() {
        let global = LabelStyles {
            left_focused: Some(3),
            color_focused: Some(Color::Cyan),
            ..LabelStyles::default()
        };
        let instance = LabelStyles {
            color_focused: Some(Color::Magenta),
            ..LabelStyles::default()
        };
        let label = LabelStyles::resolved(&global, &instance);
        assert_eq!(label.left_focused, 3);
        assert_eq!(label.color_focused, Color::Magenta);
        assert_eq!(label.color_blurred, LABEL_COLOR);
        assert_eq!(label.focused_frame().left, 3.0);
        assert_eq!(label.blurred_frame().top, 1.0);
    }

    #[test]
    fn whole_value_styles_replace_lower_tiers() {
        let global = FieldStyles {
            container: Some(Style::default().bg(Color::Black)),
            hint: Some(Style::default().fg(Color::Yellow)),
            ..FieldStyles::default()
        };
        let instance = FieldStyles {
            container: Some(Style::default().fg(Color::White)),
            ..FieldStyles::default()
        };
        let field = FieldStyles::resolved(&global, &instance, LABEL_COLOR);
        // The instance container does not inherit the global background.
        assert_eq!(field.container, Style::default().fg(Color::White));
        assert_eq!(field.hint, Style::default().fg(Color::Yellow));
        assert_eq!(field.toggle, FieldStyles::builtin().toggle.unwrap_or_default());
    }

    #[test]
    fn patched_styles_keep_lower_tier_attributes() {
        let global = FieldStyles {
            countdown: Some(Style::default().add_modifier(Modifier::ITALIC)),
            ..FieldStyles::default()
        };
        let instance = FieldStyles {
            countdown: Some(Style::default().fg(Color::Red)),
            ..FieldStyles::default()
        };
        let field = FieldStyles::resolved(&global, &instance, LABEL_COLOR);
        assert_eq!(field.countdown.fg, Some(Color::Red));
        assert!(field.countdown.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn input_color_falls_back_to_focused_label() {
        let field = FieldStyles::resolved(&FieldStyles::default(), &FieldStyles::default(), Color::Green);
        assert_eq!(field.input.fg, Some(Color::Green));

        let global = FieldStyles {
            input: Some(Style::default().fg(Color::Blue)),
            ..FieldStyles::default()
        };
        let field = FieldStyles::resolved(&global, &FieldStyles::default(), Color::Green);
        assert_eq!(field.input.fg, Some(Color::Blue));
    }

    #[test]
    fn global_styles_are_shared_values() {
        let a = GlobalStyles::new()
            .with_label(LabelStyles {
                top_focused: Some(0),
                ..LabelStyles::default()
            })
            .shared();
        let b = Arc::clone(&a);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(b.label.top_focused, Some(0));
    }
}
