use serde::{Deserialize, Serialize};

/// A span of the original source text, in byte offsets.
///
/// Offsets are zero-based and signed, measured against the source with any
/// leading byte-order marker stripped. A negative `start` addresses the
/// virtual BOM region in front of offset 0, which is how a fix can rewrite
/// the very beginning of a file. `start == end` denotes a pure insertion
/// point.
///
/// Ranges always refer to the original, unmodified source - never to a
/// previously rewritten output. `start <= end` is required for a range to be
/// usable, but is deliberately not enforced here: descriptor construction is
/// validation-free, and the speculative verifier is the sole boundary that
/// rejects inverted ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[isize; 2]", into = "[isize; 2]")]
pub struct FixRange {
    /// Starting byte offset (inclusive).
    pub start: isize,
    /// Ending byte offset (exclusive).
    pub end: isize,
}

impl FixRange {
    /// Create a range covering `[start, end)`.
    pub const fn new(start: isize, end: isize) -> Self {
        Self { start, end }
    }

    /// Create an empty range at `pos`, i.e. an insertion point.
    pub const fn at(pos: isize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Whether `start <= end`.
    pub const fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Whether the range spans no text.
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<[isize; 2]> for FixRange {
    fn from([start, end]: [isize; 2]) -> Self {
        Self { start, end }
    }
}

impl From<FixRange> for [isize; 2] {
    fn from(range: FixRange) -> Self {
        [range.start, range.end]
    }
}

impl From<(isize, isize)> for FixRange {
    fn from((start, end): (isize, isize)) -> Self {
        Self { start, end }
    }
}

impl From<std::ops::Range<usize>> for FixRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start as isize,
            end: range.end as isize,
        }
    }
}

/// Anything that carries a source range.
///
/// Structural references (syntax-tree nodes, tokens) implement this so the
/// builder's reference-based operations are typed against the one attribute
/// they actually read. Nothing else about the reference is inspected.
pub trait Spanned {
    /// The source range the reference covers.
    fn range(&self) -> FixRange;
}

impl Spanned for FixRange {
    fn range(&self) -> FixRange {
        *self
    }
}

/// The fundamental fix primitive: replace `range` in the original source
/// with `text`.
///
/// Insertion is a descriptor whose range is empty; deletion is a descriptor
/// whose text is empty. Descriptors are immutable value objects - two calls
/// with the same inputs produce structurally equal values, and nothing is
/// shared between them.
///
/// Serialized form uses `range` as a two-element `[start, end]` array, the
/// shape the downstream merge/apply layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "a FixDescriptor does nothing until verified or applied"]
pub struct FixDescriptor {
    /// Span of original source to replace.
    pub range: FixRange,
    /// Replacement text (empty string = deletion).
    pub text: String,
}

impl FixDescriptor {
    /// Create a descriptor replacing `range` with `text`.
    pub fn new(range: impl Into<FixRange>, text: impl Into<String>) -> Self {
        Self {
            range: range.into(),
            text: text.into(),
        }
    }

    /// Whether this descriptor inserts without removing anything.
    pub fn is_insertion(&self) -> bool {
        self.range.is_empty()
    }

    /// Whether this descriptor removes without inserting anything.
    pub fn is_deletion(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_ordering() {
        assert!(FixRange::new(3, 7).is_ordered());
        assert!(FixRange::at(5).is_ordered());
        assert!(!FixRange::new(7, 3).is_ordered());
    }

    #[test]
    fn insertion_point_is_empty() {
        let range = FixRange::at(12);
        assert!(range.is_empty());
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn descriptor_value_equality() {
        let a = FixDescriptor::new(FixRange::new(0, 4), "x");
        let b = FixDescriptor::new(FixRange::new(0, 4), "x");
        assert_eq!(a, b);
    }

    #[test]
    fn descriptor_kind_predicates() {
        assert!(FixDescriptor::new(FixRange::at(3), "y").is_insertion());
        assert!(FixDescriptor::new(FixRange::new(3, 9), "").is_deletion());
        let replace = FixDescriptor::new(FixRange::new(3, 9), "y");
        assert!(!replace.is_insertion());
        assert!(!replace.is_deletion());
    }

    #[test]
    fn range_serializes_as_pair() {
        let fix = FixDescriptor::new(FixRange::new(6, 7), "y");
        let json = serde_json::to_value(&fix).unwrap();
        assert_eq!(json, serde_json::json!({"range": [6, 7], "text": "y"}));

        let back: FixDescriptor = serde_json::from_value(json).unwrap();
        assert_eq!(back, fix);
    }

    #[test]
    fn range_from_conversions() {
        assert_eq!(FixRange::from((2, 5)), FixRange::new(2, 5));
        assert_eq!(FixRange::from([2isize, 5]), FixRange::new(2, 5));
        assert_eq!(FixRange::from(2usize..5), FixRange::new(2, 5));
    }
}
