//! **floatlabel**: floating-label, maskable text inputs for [`ratatui`]
//! applications.
//!
//! This umbrella crate re-exports everything needed to build a form from a
//! single dependency:
//!
//! * the runtime from [`floatlabel_core`] at the crate root ([`Model`],
//!   [`Component`], [`Command`], [`Subscription`], [`Program`], [`run`]),
//! * the widgets from [`floatlabel_widgets`] under [`widgets`],
//! * the edit transforms from [`floatlabel_mask`] under [`mask`],
//! * [`ratatui`], [`crossterm`] and [`tokio`].
//!
//! ```ignore
//! use floatlabel::widgets::FloatingInput;
//! use floatlabel::mask::{Divider, MaskKind};
//!
//! let price = FloatingInput::new("Price")
//!     .with_mask_kind(MaskKind::Currency)
//!     .with_currency_divider(Divider::Comma);
//! ```

pub use floatlabel_core::*;

pub mod widgets {
    pub use floatlabel_widgets::*;
}

pub mod mask {
    pub use floatlabel_mask::*;
}

pub use crossterm;
pub use ratatui;
pub use tokio;
