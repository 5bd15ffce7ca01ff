//! Thousands-divider / decimal-marker pairs and the grouping helpers shared by
//! the currency formatter.

use crate::error::MaskError;

/// The thousands divider a currency field uses.
///
/// The decimal marker is always the other character, so the pair can never
/// collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Divider {
    /// `1,234.56`
    Comma,
    /// `1.234,56`
    #[default]
    Dot,
}

impl Divider {
    /// The divider character itself.
    pub fn as_char(self) -> char {
        match self {
            Divider::Comma => ',',
            Divider::Dot => '.',
        }
    }
}

impl TryFrom<char> for Divider {
    type Error = MaskError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ',' => Ok(Divider::Comma),
            '.' => Ok(Divider::Dot),
            other => Err(MaskError::InvalidDivider(other)),
        }
    }
}

/// A resolved `{divider, decimal}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Character inserted between groups of three integer digits.
    pub divider: char,
    /// Character separating the integer part from the fraction.
    pub decimal: char,
}

impl Separators {
    /// Resolve the pair for an optional divider choice. An unset divider
    /// means `.` groups thousands and `,` marks decimals.
    pub fn resolve(divider: Option<Divider>) -> Self {
        match divider.unwrap_or_default() {
            Divider::Comma => Self {
                divider: ',',
                decimal: '.',
            },
            Divider::Dot => Self {
                divider: '.',
                decimal: ',',
            },
        }
    }
}

impl From<Divider> for Separators {
    fn from(divider: Divider) -> Self {
        Self::resolve(Some(divider))
    }
}

/// Whether `c` is one of the two separator characters, regardless of role.
pub fn is_separator(c: char) -> bool {
    c == ',' || c == '.'
}

/// Remove every `,` and `.` from `s`.
pub fn strip_separators(s: &str) -> String {
    s.chars().filter(|&c| !is_separator(c)).collect()
}

/// Insert `divider` between blocks of three characters, counting from the
/// right. Inputs of three characters or fewer come back unchanged.
pub fn group_thousands(digits: &str, divider: char) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(divider);
        }
        out.push(*c);
    }
    out
}
