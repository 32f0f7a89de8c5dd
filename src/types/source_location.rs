//! Source positions for tokens and parse nodes.
//!
//! A `SourceLocation` is a byte range into the original input string. The
//! input is shared via `Arc<str>` so that every token can carry its span
//! without copying the source, and so error messages can underline the
//! offending region after parsing has long moved on.

use alloc::sync::Arc;

/// A half-open byte range `[start, end)` into a lexed input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// The input string this location points into.
    pub input: Arc<str>,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl SourceLocation {
    /// Create a new location over `input`.
    #[must_use]
    pub const fn new(input: Arc<str>, start: usize, end: usize) -> Self {
        Self { input, start, end }
    }

    /// Byte offset of the first character.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Merge two optional locations into the range spanning both.
    ///
    /// Returns `None` when either side is missing or the two locations do not
    /// share the same lexer input.
    #[must_use]
    pub fn range(first: Option<Self>, second: Option<Self>) -> Option<Self> {
        let first = first?;
        let second = second?;
        if !Arc::ptr_eq(&first.input, &second.input) {
            return None;
        }
        Some(Self {
            input: first.input,
            start: first.start,
            end: second.end,
        })
    }
}

/// Merge borrowed optional locations, cloning only on success.
pub trait SourceRangeRef {
    /// Like [`SourceLocation::range`] but over `Option<&SourceLocation>`.
    fn range_ref(self, other: Option<&SourceLocation>) -> Option<SourceLocation>;
}

impl SourceRangeRef for Option<&SourceLocation> {
    fn range_ref(self, other: Option<&SourceLocation>) -> Option<SourceLocation> {
        SourceLocation::range(self.cloned(), other.cloned())
    }
}
