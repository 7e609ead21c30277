//! Single source file view for computing source locations.
//!
//! The scanner works on raw bytes, so the file keeps its content as bytes
//! and only converts to text (lossily) when a line is requested for display.

use std::borrow::Cow;
use std::sync::Arc;

/// A source file with its content and precomputed line starts
///
/// # Examples
///
/// ```
/// use toyc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.toy", "func main ( ) { }");
/// assert_eq!(file.name(), "main.toy");
/// assert_eq!(file.len(), 17);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content as raw bytes
    pub fn new(name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        let content: Arc<[u8]> = Arc::from(content.as_ref());
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, b)| **b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the content in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the file has no content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Get the total number of lines
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.toy", "a\nb\nc");
    /// assert_eq!(file.line_count(), 3);
    /// ```
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to 1-based (line, column) coordinates
    ///
    /// Columns are measured in bytes from the start of the line.
    pub fn offset_to_line_col(&self, offset: usize) -> (usize, usize) {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => (line + 1, 1),
            Err(insert_point) => {
                // line_starts[0] == 0, so insert_point is at least 1 here
                let line = insert_point.saturating_sub(1);
                let col = offset.saturating_sub(self.line_starts[line]) + 1;
                (line + 1, col)
            },
        }
    }

    /// Get a specific source line (1-indexed) without its line terminator
    ///
    /// Bytes that are not valid UTF-8 are replaced for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use toyc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.toy", "int x ;\r\nx = 1 ;");
    /// assert_eq!(file.line_at(1).as_deref(), Some("int x ;"));
    /// assert_eq!(file.line_at(2).as_deref(), Some("x = 1 ;"));
    /// assert_eq!(file.line_at(3), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<Cow<'_, str>> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        let mut bytes = &self.content[start..end];
        while let [rest @ .., b'\n' | b'\r'] = bytes {
            bytes = rest;
        }
        Some(String::from_utf8_lossy(bytes))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}
