//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets into the scanned buffer plus the human-readable line and
//! column of the first character.
//!
//! # Examples
//!
//! ```
//! use toyc_util::span::Span;
//!
//! // A three-byte token starting at line 1, column 5
//! let span = Span::new(4, 7, 1, 5);
//! assert_eq!(span.len(), 3);
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// A `Span` represents a range in source code, identified by:
/// - Byte offsets (start inclusive, end exclusive)
/// - Line and column numbers of `start` (1-based, for human-readable output)
///
/// # Examples
///
/// ```
/// use toyc_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.column, 5);
///
/// let point = Span::point(3, 1);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create a span at a single point with no byte extent
    #[inline]
    pub fn point(line: u32, column: u32) -> Self {
        Self {
            start: 0,
            end: 0,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if this span contains a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert!(span.contains(15));
    /// assert!(!span.contains(20));
    /// ```
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Merge two spans into a single span covering both
    ///
    /// The position of the merged span is the position of whichever span
    /// starts first.
    #[inline]
    pub fn merge(self, other: Span) -> Span {
        let (first, _) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
