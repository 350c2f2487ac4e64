use crate::fix::{FixDescriptor, FixRange, Spanned};

/// Stateless factory for [`FixDescriptor`]s.
///
/// Rules receive a builder and describe their intent - insert after this
/// node, replace that token, remove this span - and get back a normalized
/// descriptor. Every operation is pure: no state is retained between calls,
/// no input is validated, and nothing can fail. Inverted ranges pass through
/// untouched and are rejected later by the speculative verifier, keeping
/// descriptor construction free of validation overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixBuilder;

/// Insertion anchored to the end offset of `range`.
fn insert_text_at(range: FixRange, text: String) -> FixDescriptor {
    FixDescriptor {
        range: FixRange::at(range.end),
        text,
    }
}

/// Insertion anchored to the start offset of `range`.
fn insert_before_at(range: FixRange, text: String) -> FixDescriptor {
    FixDescriptor {
        range: FixRange::at(range.start),
        text,
    }
}

impl FixBuilder {
    /// Create a builder.
    pub const fn new() -> Self {
        Self
    }

    /// Insert `text` immediately following the referenced span.
    pub fn insert_text_after(&self, node: &impl Spanned, text: impl Into<String>) -> FixDescriptor {
        self.insert_text_after_range(node.range(), text)
    }

    /// Insert `text` immediately following `range`.
    pub fn insert_text_after_range(
        &self,
        range: FixRange,
        text: impl Into<String>,
    ) -> FixDescriptor {
        insert_text_at(range, text.into())
    }

    /// Insert `text` immediately preceding the referenced span.
    pub fn insert_text_before(
        &self,
        node: &impl Spanned,
        text: impl Into<String>,
    ) -> FixDescriptor {
        self.insert_text_before_range(node.range(), text)
    }

    /// Insert `text` immediately preceding `range`.
    pub fn insert_text_before_range(
        &self,
        range: FixRange,
        text: impl Into<String>,
    ) -> FixDescriptor {
        insert_before_at(range, text.into())
    }

    /// Replace the full referenced span with `text`.
    pub fn replace_text(&self, node: &impl Spanned, text: impl Into<String>) -> FixDescriptor {
        self.replace_text_range(node.range(), text)
    }

    /// Replace `range` with `text`.
    pub fn replace_text_range(&self, range: FixRange, text: impl Into<String>) -> FixDescriptor {
        FixDescriptor {
            range,
            text: text.into(),
        }
    }

    /// Delete the referenced span.
    pub fn remove(&self, node: &impl Spanned) -> FixDescriptor {
        self.remove_range(node.range())
    }

    /// Delete `range`.
    pub fn remove_range(&self, range: FixRange) -> FixDescriptor {
        FixDescriptor {
            range,
            text: String::new(),
        }
    }
}
