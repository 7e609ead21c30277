//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! diagnostics. The scanner never prints anything itself: it emits into a
//! [`Handler`], and whoever drives the scanner decides where the collected
//! diagnostics end up.
//!
//! # Examples
//!
//! ```
//! use toyc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

pub use crate::span::Span;
use crate::span::SourceFile;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use toyc_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Malformed input
    Error,
    /// Suspicious but scannable input
    Warning,
}

impl Level {
    /// Returns true for [`Level::Error`]
    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// The one-line header, e.g. `error[E1002]: unterminated string literal`
    pub fn headline(&self) -> String {
        match self.code {
            Some(code) => format!("{}[{}]: {}", self.level, code, self.message),
            None => format!("{}: {}", self.level, self.message),
        }
    }

    /// Snippet for the primary span, built from the given file
    ///
    /// The caret range is clipped to the end of the first line, so a span
    /// that runs over several lines is underlined up to the line break.
    pub fn primary_snippet(&self, file: &SourceFile) -> Option<SourceSnippet> {
        let line = file.line_at(self.span.line as usize)?;
        let start_column = self.span.column as usize;
        let line_end_column = (line.len() + 1).max(start_column);
        let end_column = (start_column + self.span.len()).min(line_end_column);
        Some(SourceSnippet::new(
            line.into_owned(),
            self.span.line as usize,
            start_column,
            end_column,
            None::<String>,
        ))
    }

    /// Render the full report against a source file
    ///
    /// ```text
    /// error[E1002]: unterminated string literal
    ///   --> main.toy:3:5
    ///   3 | x = 'abc
    ///     |     ^^^^
    ///     = help: add a closing `'`
    /// ```
    pub fn render(&self, file: &SourceFile) -> String {
        let mut out = self.headline();
        out.push('\n');

        let primary = self.primary_snippet(file);
        let width = primary.as_ref().map_or(3, SourceSnippet::gutter_width);
        out.push_str(&format!(
            "{:>width$}--> {}:{}:{}\n",
            "",
            file.name(),
            self.span.line,
            self.span.column,
            width = width - 1
        ));

        if let Some(snippet) = &primary {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("{:>width$} = note: {}\n", "", note));
        }
        for help in &self.helps {
            out.push_str(&format!("{:>width$} = help: {}\n", "", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.headline(), self.span)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a `RefCell`, so a shared
/// reference is enough to emit. It can be configured to panic on errors
/// for testing.
///
/// # Examples
///
/// ```
/// use toyc_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::error("unexpected", Span::DUMMY));
///
/// assert_eq!(handler.error_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: false,
        }
    }

    /// Create a handler that panics on errors (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: true,
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        if self.panic_on_error && diagnostic.level.is_error() {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Create a diagnostic builder for a warning at `span`
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// Get all diagnostics, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
