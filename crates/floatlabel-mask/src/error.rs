/// Why an edit was refused.
///
/// A rejected edit is not a failure: the field keeps its previous value and
/// the change is not reported to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejected {
    /// The new value is not longer than the previous one.
    #[error("edit does not extend the previous value")]
    NotLonger,
    /// The decimal marker appears more than once.
    #[error("more than one decimal marker")]
    MultipleDecimalMarkers,
    /// A thousands divider was typed after the decimal marker.
    #[error("thousands divider inside the fractional part")]
    DividerInFraction,
    /// The fraction was already at the decimal-place limit.
    #[error("fraction already has {limit} decimal places")]
    DecimalLimitReached {
        /// The configured maximum number of decimal places.
        limit: usize,
    },
}

/// Errors raised while building a mask configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    /// Only `,` and `.` can divide thousands.
    #[error("invalid currency divider {0:?}, expected ',' or '.'")]
    InvalidDivider(char),
    /// The mask kind name is not one of `currency`, `phone`, `date`, `card`.
    #[error("unknown mask kind {0:?}")]
    UnknownKind(String),
}
