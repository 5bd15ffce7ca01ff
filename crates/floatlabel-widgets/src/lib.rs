//! Floating-label input widgets for floatlabel programs.
//!
//! Every widget implements [`floatlabel_core::Component`], so it can be
//! embedded in any [`floatlabel_core::Model`] and laid out with [`ratatui`].
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`floating_input`] | [`FloatingInput`](floating_input::FloatingInput), the floating-label text field |
//! | [`animation`] | Linear, instant-driven value animation used for the label |
//! | [`style`] | Built-in, global and per-field style resolution |
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for moving focus between fields |

pub mod animation;
pub mod floating_input;
pub mod focus;
pub mod style;

pub use floating_input::FloatingInput;
pub use focus::FocusRing;
pub use style::{FieldStyles, GlobalStyles, LabelStyles};
