//! Choosing between pattern masking, currency formatting, and plain input.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::currency::CurrencyFormat;
use crate::error::{MaskError, Rejected};
use crate::template::MaskTemplate;

/// What kind of value a masked field holds.
///
/// Only [`MaskKind::Currency`] changes behavior; the other kinds describe a
/// pattern mask and are kept so callers can label or validate the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaskKind {
    /// A money amount, formatted with [`CurrencyFormat`].
    Currency,
    /// A phone number pattern.
    Phone,
    /// A date pattern.
    Date,
    /// A payment card number pattern.
    Card,
}

impl MaskKind {
    /// The lowercase name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            MaskKind::Currency => "currency",
            MaskKind::Phone => "phone",
            MaskKind::Date => "date",
            MaskKind::Card => "card",
        }
    }
}

impl fmt::Display for MaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaskKind {
    type Err = MaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "currency" => Ok(MaskKind::Currency),
            "phone" => Ok(MaskKind::Phone),
            "date" => Ok(MaskKind::Date),
            "card" => Ok(MaskKind::Card),
            other => Err(MaskError::UnknownKind(other.to_owned())),
        }
    }
}

/// The transformation a field applies to every edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMask {
    /// Fixed-position literals around alphanumeric input.
    Pattern(MaskTemplate),
    /// Thousands grouping and decimal-place limits.
    Currency(CurrencyFormat),
}

impl InputMask {
    /// Pick the mask a field should use.
    ///
    /// A currency kind always wins and ignores any template. Otherwise a
    /// template selects pattern masking. With neither, input is not masked.
    pub fn resolve(
        template: Option<&str>,
        kind: Option<MaskKind>,
        currency: CurrencyFormat,
    ) -> Option<Self> {
        match (kind, template) {
            (Some(MaskKind::Currency), _) => Some(InputMask::Currency(currency)),
            (_, Some(template)) => Some(InputMask::Pattern(MaskTemplate::new(template))),
            (_, None) => None,
        }
    }

    /// Longest value the mask can display, if the mask bounds it.
    pub fn max_len(&self) -> Option<usize> {
        match self {
            InputMask::Pattern(template) => Some(template.len()),
            InputMask::Currency(_) => None,
        }
    }

    /// Whether `c` can be typed into a field using this mask.
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputMask::Pattern(_) => true,
            InputMask::Currency(format) => format.accepts(c),
        }
    }

    /// Char positions of `value` that hold user-editable text. Only a
    /// currency symbol is excluded.
    pub fn amount_range(&self, value: &str) -> Range<usize> {
        match self {
            InputMask::Pattern(_) => 0..value.chars().count(),
            InputMask::Currency(format) => format.amount_range(value),
        }
    }

    /// Transform the raw candidate `raw` that would replace `previous`.
    ///
    /// Pattern masks never reject. Currency masks only format growing values,
    /// so a shorter candidate (a deletion) is formatted afresh against an
    /// empty previous value.
    ///
    /// A currency candidate with the same char count as `previous` is refused
    /// with [`Rejected::NotLonger`], even when its text differs. Replacing a
    /// selection with one character therefore drops the edit; hosts that
    /// support selection-replace should delete the selection first and then
    /// insert.
    pub fn apply(&self, previous: &str, raw: &str) -> Result<String, Rejected> {
        match self {
            InputMask::Pattern(template) => Ok(template.apply(raw)),
            InputMask::Currency(format) => {
                if raw.chars().count() < previous.chars().count() {
                    tracing::trace!(previous, raw, "re-deriving currency value after deletion");
                    format.format("", raw)
                } else {
                    format.format(previous, raw)
                }
            }
        }
    }
}

/// Route an edit through an optional mask. Without a mask the raw value is
/// accepted unchanged.
pub fn transform(mask: Option<&InputMask>, previous: &str, raw: &str) -> Result<String, Rejected> {
    match mask {
        Some(mask) => mask.apply(previous, raw),
        None => Ok(raw.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::Affix;
    use crate::separators::Divider;

    fn currency() -> CurrencyFormat {
        CurrencyFormat::new().with_divider(Divider::Comma)
    }

    #[test]
    fn kind_parses_from_lowercase_names() {
        assert_eq!("currency".parse::<MaskKind>().unwrap(), MaskKind::Currency);
        assert_eq!("phone".parse::<MaskKind>().unwrap(), MaskKind::Phone);
        assert_eq!("date".parse::<MaskKind>().unwrap(), MaskKind::Date);
        assert_eq!("card".parse::<MaskKind>().unwrap(), MaskKind::Card);
        assert_eq!(
            "zip".parse::<MaskKind>(),
            Err(MaskError::UnknownKind("zip".into()))
        );
        assert_eq!(MaskKind::Card.to_string(), "card");
    }

    #[test]
    fn currency_kind_wins_over_template() {
        let mask = InputMask::resolve(Some("___"), Some(MaskKind::Currency), currency());
        assert!(matches!(mask, Some(InputMask::Currency(_))));
    }

    #[test]
    fn template_selects_pattern_mask() {
        let mask = InputMask::resolve(Some("__/__"), Some(MaskKind::Date), currency());
        assert!(matches!(mask, Some(InputMask::Pattern(_))));
        let mask = InputMask::resolve(Some("__/__"), None, currency());
        assert_eq!(mask.and_then(|m| m.max_len()), Some(5));
    }

    #[test]
    fn nothing_configured_means_no_mask() {
        assert!(InputMask::resolve(None, None, currency()).is_none());
        assert!(InputMask::resolve(None, Some(MaskKind::Phone), currency()).is_none());
    }

    #[test]
    fn unmasked_input_passes_through() {
        assert_eq!(transform(None, "ab", "a-b!").unwrap(), "a-b!");
    }

    #[test]
    fn pattern_mask_applies_template() {
        let mask = InputMask::Pattern(MaskTemplate::new("(___) ___-____"));
        assert_eq!(
            transform(Some(&mask), "(555) 123", "(555) 1234").unwrap(),
            "(555) 123-4"
        );
        // A trailing literal is dropped once nothing follows it.
        assert_eq!(transform(Some(&mask), "(555) 123-4", "(555) 123-").unwrap(), "(555) 123");
    }

    #[test]
    fn currency_mask_formats_growing_values() {
        let mask = InputMask::Currency(currency());
        assert_eq!(mask.apply("1,234", "1,2345").unwrap(), "12,345");
        assert_eq!(
            mask.apply("12.34", "12.345"),
            Err(Rejected::DecimalLimitReached { limit: 2 })
        );
    }

    #[test]
    fn currency_mask_rederives_after_deletion() {
        let mask = InputMask::Currency(currency());
        assert_eq!(mask.apply("1,234", "1,23").unwrap(), "123");
        assert_eq!(mask.apply("12,345", "12,34").unwrap(), "1,234");
        assert_eq!(mask.apply("1", "").unwrap(), "");
    }

    #[test]
    fn currency_mask_rejects_unchanged_value() {
        let mask = InputMask::Currency(currency());
        assert_eq!(mask.apply("1,234", "1,234"), Err(Rejected::NotLonger));
    }

    #[test]
    fn currency_mask_drops_same_length_replacement() {
        let mask = InputMask::Currency(currency());
        assert_eq!(mask.apply("1,234", "1,239"), Err(Rejected::NotLonger));
        // Delete then insert goes through.
        let shorter = mask.apply("1,234", "1,23").unwrap();
        assert_eq!(mask.apply(&shorter, "1239").unwrap(), "1,239");
    }

    #[test]
    fn amount_range_excludes_only_the_symbol() {
        let pattern = InputMask::Pattern(MaskTemplate::new("(___)"));
        assert_eq!(pattern.amount_range("(55"), 0..3);
        let usd = InputMask::Currency(currency().with_affix(Affix::Prefix("$".into())));
        assert_eq!(usd.amount_range("$1,234"), 1..6);
    }

    #[test]
    fn accepted_characters_depend_on_mask() {
        let pattern = InputMask::Pattern(MaskTemplate::new("___"));
        assert!(pattern.accepts('x'));
        let money = InputMask::Currency(currency());
        assert!(money.accepts('5'));
        assert!(!money.accepts('x'));
        assert_eq!(money.max_len(), None);
    }
}
