//! Fixed-position character masks such as `(___) ___-____` or `__/__/____`.

/// One position of a [`MaskTemplate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Accepts one input character.
    Placeholder,
    /// Inserted verbatim whenever input reaches this position.
    Literal(char),
}

impl Slot {
    fn classify(c: char) -> Self {
        if c.is_ascii_alphanumeric() || c == '_' {
            Slot::Placeholder
        } else {
            Slot::Literal(c)
        }
    }
}

/// A parsed mask template.
///
/// ASCII letters, digits and `_` are placeholders; every other character is a
/// literal that sits at a fixed index.
///
/// ```
/// use floatlabel_mask::MaskTemplate;
///
/// let phone = MaskTemplate::new("(___) ___-____");
/// assert_eq!(phone.apply("5551234"), "(555) 123-4");
/// assert_eq!(phone.len(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskTemplate {
    source: String,
    slots: Vec<Slot>,
}

impl MaskTemplate {
    /// Parse a template string.
    pub fn new(template: impl Into<String>) -> Self {
        let source = template.into();
        let slots = source.chars().map(Slot::classify).collect();
        Self { source, slots }
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Number of characters in the template, which is also the longest value
    /// the mask can display.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the template has no characters at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// How many input characters the template can hold.
    pub fn placeholder_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, Slot::Placeholder))
            .count()
    }

    /// Whether the slot at `index` is a literal. Out-of-range indices are not.
    pub fn is_literal(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Literal(_)))
    }

    /// The parsed slots, in template order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Re-insert the template's literals around the alphanumeric content of
    /// `raw`.
    ///
    /// Literals ahead of the next placeholder are emitted before each input
    /// character; literals after the last placed character are not. Input
    /// beyond the template is appended without further literals, the caller
    /// caps input length. An empty template masks everything away.
    pub fn apply(&self, raw: &str) -> String {
        if self.slots.is_empty() {
            return String::new();
        }
        let mut out = String::with_capacity(self.slots.len().max(raw.len()));
        let mut offset = 0;
        for (j, c) in unmask(raw).chars().enumerate() {
            while let Some(Slot::Literal(lit)) = self.slots.get(j + offset) {
                out.push(*lit);
                offset += 1;
            }
            out.push(c);
        }
        out
    }
}

impl From<&str> for MaskTemplate {
    fn from(template: &str) -> Self {
        Self::new(template)
    }
}

/// Keep only the ASCII letters and digits of `s`.
pub fn unmask(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Apply a template given as a plain string. See [`MaskTemplate::apply`].
pub fn apply_mask(raw: &str, template: &str) -> String {
    MaskTemplate::new(template).apply(raw)
}
