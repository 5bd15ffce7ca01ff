//! Text masking and currency formatting for **floatlabel** inputs.
//!
//! Everything here is a pure function of its arguments: a field passes in the
//! value it currently shows and the raw value a keystroke would produce, and
//! gets back the text to display or a [`Rejected`] reason to keep the old one.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`apply_mask`] / [`MaskTemplate`] | Fixed-position literals, e.g. `(___) ___-____` |
//! | [`format_currency`] / [`CurrencyFormat`] | Thousands grouping and decimal-place limits |
//! | [`InputMask`] | Routes an edit to the right formatter |
//! | [`Separators`] / [`Divider`] | The `{divider, decimal}` character pair |
//!
//! # Example
//!
//! ```
//! use floatlabel_mask::{apply_mask, format_currency, Divider, Rejected};
//!
//! assert_eq!(apply_mask("5551234", "(___) ___-____"), "(555) 123-4");
//! assert_eq!(
//!     format_currency("12.3", "12.345", Some(Divider::Comma), Some(2)).unwrap(),
//!     "12.34",
//! );
//! assert_eq!(
//!     format_currency("12.34", "12.345", Some(Divider::Comma), Some(2)),
//!     Err(Rejected::DecimalLimitReached { limit: 2 }),
//! );
//! ```

pub mod currency;
pub mod error;
pub mod input_mask;
pub mod separators;
pub mod template;

pub use currency::{format_currency, Affix, CurrencyFormat, DEFAULT_DECIMAL_PLACES};
pub use error::{MaskError, Rejected};
pub use input_mask::{transform, InputMask, MaskKind};
pub use separators::{group_thousands, strip_separators, Divider, Separators};
pub use template::{apply_mask, unmask, MaskTemplate, Slot};
