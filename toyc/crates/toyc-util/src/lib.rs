//! toyc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the toyc toolchain:
//!
//! - [`span`] - byte/line/column locations and the [`SourceFile`] view used
//!   to show the offending source line.
//! - [`diagnostic`] - severity levels, codes, the fluent
//!   [`DiagnosticBuilder`] and the [`Handler`] that collects everything a
//!   phase reports.
//!
//! Phases never print diagnostics themselves. They emit into a `Handler`
//! and the driver decides how to render what was collected.

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet,
};
pub use span::{SourceFile, Span};
