//! As-you-type currency formatting.
//!
//! The formatter only ever accepts edits that extend the previous value. The
//! integer part is regrouped in blocks of three on every keystroke, and the
//! fraction is held to a fixed number of decimal places.

use std::ops::Range;

use crate::error::Rejected;
use crate::separators::{group_thousands, is_separator, strip_separators, Divider, Separators};

/// Decimal places allowed when no limit is configured.
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

/// Format `raw` as a currency amount, given the value it replaces.
///
/// Returns the text to display, or the reason the edit must be ignored. See
/// [`Rejected`] for the refusal cases; an empty `raw` is always accepted so a
/// field can be cleared.
///
/// ```
/// use floatlabel_mask::{format_currency, Divider, Rejected};
///
/// assert_eq!(format_currency("", "1234", Some(Divider::Comma), Some(2)).unwrap(), "1,234");
/// assert_eq!(format_currency("", "1234", Some(Divider::Dot), Some(2)).unwrap(), "1.234");
/// assert_eq!(
///     format_currency("1,234", "1,23", Some(Divider::Comma), Some(2)),
///     Err(Rejected::NotLonger),
/// );
/// ```
pub fn format_currency(
    previous: &str,
    raw: &str,
    divider: Option<Divider>,
    max_decimal_places: Option<usize>,
) -> Result<String, Rejected> {
    let Separators { divider, decimal } = Separators::resolve(divider);
    let limit = max_decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES);

    if raw.is_empty() {
        return Ok(String::new());
    }
    if raw.chars().count() <= previous.chars().count() {
        return Err(Rejected::NotLonger);
    }

    let Some((integer, fraction)) = raw.split_once(decimal) else {
        return Ok(group_thousands(&strip_separators(raw), divider));
    };

    if fraction.contains(decimal) {
        return Err(Rejected::MultipleDecimalMarkers);
    }
    if fraction.contains(divider) {
        return Err(Rejected::DividerInFraction);
    }

    let fraction_len = fraction.chars().count();
    if let Some((_, previous_fraction)) = previous.split_once(decimal) {
        if previous_fraction.chars().count() == limit && fraction_len > limit {
            return Err(Rejected::DecimalLimitReached { limit });
        }
    }

    let mut formatted = group_thousands(&strip_separators(integer), divider);
    formatted.push(decimal);
    formatted.extend(fraction.chars().take(limit));
    Ok(formatted)
}

/// A currency symbol kept outside the formatted number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affix {
    /// Written before the amount, e.g. `$`.
    Prefix(String),
    /// Written after the amount, e.g. ` €`.
    Suffix(String),
}

/// Reusable currency formatting settings.
///
/// Wraps [`format_currency`] with a fixed divider and decimal-place limit, and
/// takes care of an optional currency symbol so the formatter only ever sees
/// the number.
///
/// ```
/// use floatlabel_mask::{Affix, CurrencyFormat, Divider};
///
/// let usd = CurrencyFormat::new()
///     .with_divider(Divider::Comma)
///     .with_affix(Affix::Prefix("$".into()));
/// assert_eq!(usd.format("$1,234", "$1,2345").unwrap(), "$12,345");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyFormat {
    divider: Option<Divider>,
    max_decimal_places: Option<usize>,
    affix: Option<Affix>,
}

impl CurrencyFormat {
    /// Dot-divided thousands, comma decimals, two decimal places, no symbol.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the thousands divider.
    pub fn with_divider(mut self, divider: Divider) -> Self {
        self.divider = Some(divider);
        self
    }

    /// Set the maximum number of decimal places.
    pub fn with_max_decimal_places(mut self, places: usize) -> Self {
        self.max_decimal_places = Some(places);
        self
    }

    /// Keep a currency symbol before or after the amount.
    pub fn with_affix(mut self, affix: Affix) -> Self {
        self.affix = Some(affix);
        self
    }

    /// The resolved divider / decimal pair.
    pub fn separators(&self) -> Separators {
        Separators::resolve(self.divider)
    }

    /// The effective decimal-place limit.
    pub fn decimal_places(&self) -> usize {
        self.max_decimal_places.unwrap_or(DEFAULT_DECIMAL_PLACES)
    }

    /// Whether `c` may be typed into a currency field at all.
    pub fn accepts(&self, c: char) -> bool {
        c.is_ascii_digit() || is_separator(c)
    }

    /// Format an edit, stripping and restoring the currency symbol around
    /// [`format_currency`]. An empty amount is shown without the symbol.
    pub fn format(&self, previous: &str, raw: &str) -> Result<String, Rejected> {
        let amount = format_currency(
            self.strip_affix(previous),
            self.strip_affix(raw),
            self.divider,
            self.max_decimal_places,
        )?;
        Ok(self.restore_affix(amount))
    }

    /// Remove the currency symbol from `value`, if it carries one.
    pub fn strip_affix<'a>(&self, value: &'a str) -> &'a str {
        match &self.affix {
            Some(Affix::Prefix(p)) => value.strip_prefix(p.as_str()).unwrap_or(value),
            Some(Affix::Suffix(s)) => value.strip_suffix(s.as_str()).unwrap_or(value),
            None => value,
        }
    }

    /// Char positions of the amount inside `value`, leaving out the currency
    /// symbol.
    ///
    /// ```
    /// use floatlabel_mask::{Affix, CurrencyFormat};
    ///
    /// let eur = CurrencyFormat::new().with_affix(Affix::Suffix(" €".into()));
    /// assert_eq!(eur.amount_range("12.345 €"), 0..6);
    /// ```
    pub fn amount_range(&self, value: &str) -> Range<usize> {
        let len = value.chars().count();
        match &self.affix {
            Some(Affix::Prefix(p)) if value.starts_with(p.as_str()) => p.chars().count()..len,
            Some(Affix::Suffix(s)) if value.ends_with(s.as_str()) => 0..len - s.chars().count(),
            _ => 0..len,
        }
    }

    fn restore_affix(&self, amount: String) -> String {
        if amount.is_empty() {
            return amount;
        }
        match &self.affix {
            Some(Affix::Prefix(p)) => format!("{p}{amount}"),
            Some(Affix::Suffix(s)) => format!("{amount}{s}"),
            None => amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMA: Option<Divider> = Some(Divider::Comma);
    const DOT: Option<Divider> = Some(Divider::Dot);

    fn fmt(previous: &str, raw: &str) -> Result<String, Rejected> {
        format_currency(previous, raw, COMMA, Some(2))
    }

    #[test]
    fn groups_thousands_with_either_divider() {
        assert_eq!(fmt("", "1234").unwrap(), "1,234");
        assert_eq!(format_currency("", "1234", DOT, Some(2)).unwrap(), "1.234");
        assert_eq!(fmt("", "1234567").unwrap(), "1,234,567");
    }

    #[test]
    fn regroups_after_each_keystroke() {
        assert_eq!(fmt("1,234", "1,2345").unwrap(), "12,345");
        assert_eq!(fmt("12,345", "12,3456").unwrap(), "123,456");
        assert_eq!(fmt("123,456", "123,4567").unwrap(), "1,234,567");
    }

    #[test]
    fn short_amounts_lose_stray_dividers() {
        assert_eq!(fmt("", "1,23").unwrap(), "123");
        assert_eq!(fmt("1", "12").unwrap(), "12");
    }

    #[test]
    fn unset_divider_groups_with_dots() {
        assert_eq!(format_currency("123", "1234", None, None).unwrap(), "1.234");
        assert_eq!(format_currency("1.234", "1.234,5", None, None).unwrap(), "1.234,5");
    }

    #[test]
    fn shorter_or_equal_input_is_rejected() {
        assert_eq!(fmt("1,234", "1,23"), Err(Rejected::NotLonger));
        assert_eq!(fmt("1,234", "1,234"), Err(Rejected::NotLonger));
        assert_eq!(fmt("12.34", "12.34"), Err(Rejected::NotLonger));
    }

    #[test]
    fn empty_input_clears() {
        assert_eq!(fmt("", "").unwrap(), "");
        assert_eq!(fmt("1,234", "").unwrap(), "");
    }

    #[test]
    fn decimal_marker_keeps_integer_grouping() {
        assert_eq!(fmt("1,234", "1,234.").unwrap(), "1,234.");
        assert_eq!(fmt("1,234.", "1,234.5").unwrap(), "1,234.5");
        assert_eq!(fmt("", "1234567.5").unwrap(), "1,234,567.5");
        assert_eq!(fmt("", ".5").unwrap(), ".5");
    }

    // Boundary matrix for the decimal-place limit.
    #[test]
    fn third_decimal_is_truncated_when_previous_was_below_limit() {
        assert_eq!(fmt("12.3", "12.345").unwrap(), "12.34");
        assert_eq!(fmt("12", "12.345").unwrap(), "12.34");
        assert_eq!(fmt("", "1.23456").unwrap(), "1.23");
    }

    #[test]
    fn typing_past_a_full_fraction_is_rejected() {
        assert_eq!(
            fmt("12.34", "12.345"),
            Err(Rejected::DecimalLimitReached { limit: 2 })
        );
    }

    #[test]
    fn fraction_exactly_at_limit_is_accepted() {
        assert_eq!(fmt("12.3", "12.34").unwrap(), "12.34");
    }

    #[test]
    fn custom_decimal_limit() {
        assert_eq!(
            format_currency("1.23", "1.234", COMMA, Some(3)).unwrap(),
            "1.234"
        );
        assert_eq!(
            format_currency("1.234", "1.2345", COMMA, Some(3)),
            Err(Rejected::DecimalLimitReached { limit: 3 })
        );
    }

    #[test]
    fn zero_decimal_places_drop_fraction_digits() {
        assert_eq!(format_currency("12", "12.", COMMA, Some(0)).unwrap(), "12.");
        assert_eq!(format_currency("12", "12.5", COMMA, Some(0)).unwrap(), "12.");
        assert_eq!(
            format_currency("12.", "12.5", COMMA, Some(0)),
            Err(Rejected::DecimalLimitReached { limit: 0 })
        );
    }

    #[test]
    fn second_decimal_marker_is_rejected() {
        assert_eq!(fmt("1.2", "1.2."), Err(Rejected::MultipleDecimalMarkers));
        assert_eq!(
            format_currency("1,2", "1,2,", DOT, Some(2)),
            Err(Rejected::MultipleDecimalMarkers)
        );
    }

    #[test]
    fn divider_in_fraction_is_rejected() {
        assert_eq!(fmt("1.2", "1.2,"), Err(Rejected::DividerInFraction));
    }

    #[test]
    fn affix_is_stripped_and_restored() {
        let usd = CurrencyFormat::new()
            .with_divider(Divider::Comma)
            .with_affix(Affix::Prefix("$".into()));
        assert_eq!(usd.format("", "1").unwrap(), "$1");
        assert_eq!(usd.format("$123", "$1234").unwrap(), "$1,234");
        assert_eq!(usd.format("$1", "").unwrap(), "");

        let eur = CurrencyFormat::new().with_affix(Affix::Suffix(" €".into()));
        assert_eq!(eur.format("1.234 €", "1.234, €").unwrap(), "1.234, €");
        assert_eq!(eur.strip_affix("12 €"), "12");
    }

    #[test]
    fn amount_range_skips_the_symbol() {
        let usd = CurrencyFormat::new().with_affix(Affix::Prefix("$".into()));
        assert_eq!(usd.amount_range("$1,234"), 1..6);
        assert_eq!(usd.amount_range("$"), 1..1);
        assert_eq!(usd.amount_range(""), 0..0);

        let eur = CurrencyFormat::new().with_affix(Affix::Suffix(" €".into()));
        assert_eq!(eur.amount_range("1.234 €"), 0..5);
        // A value without the symbol is all amount.
        assert_eq!(eur.amount_range("1.234"), 0..5);
        assert_eq!(CurrencyFormat::new().amount_range("12"), 0..2);
    }

    #[test]
    fn accepted_characters() {
        let format = CurrencyFormat::new();
        assert!(format.accepts('7'));
        assert!(format.accepts(','));
        assert!(format.accepts('.'));
        assert!(!format.accepts('a'));
        assert!(!format.accepts('-'));
    }

    #[test]
    fn format_settings_resolve_defaults() {
        let format = CurrencyFormat::new();
        assert_eq!(format.decimal_places(), 2);
        assert_eq!(format.separators(), Separators::resolve(None));
        let format = format.with_max_decimal_places(4);
        assert_eq!(format.decimal_places(), 4);
    }
}
