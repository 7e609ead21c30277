//! toyc-drv - Scanner Driver
//!
//! Glue around the lexer: reads a source file, pulls tokens under a
//! [`StopPolicy`], writes the stream in the chosen [`OutputFormat`] and
//! renders collected diagnostics. The `toyc` binary adds the command line,
//! configuration lookup and logging on top.

pub mod config;
pub mod error;
pub mod output;

use std::io::Write;
use std::path::{Path, PathBuf};

use toyc_lex::{Lexer, Token};
use toyc_util::{Handler, SourceFile};
use tracing::{debug, info, trace};

pub use config::Config;
pub use error::{DriverError, Result};
pub use output::{render_diagnostics, write_tokens, OutputFormat, TokenRecord};

/// When to stop asking the lexer for tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopPolicy {
    /// Stop after the first `ERROR` token.
    #[default]
    FirstError,
    /// Keep scanning past errors until `EOF`.
    Exhaust,
}

/// Reads the entire file into memory.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|source| DriverError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read source");
    Ok(bytes)
}

/// Scans `source` under `policy`.
///
/// The result ends with `EOF`, or with the first `ERROR` token under
/// [`StopPolicy::FirstError`].
pub fn scan(source: &[u8], policy: StopPolicy, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::from_bytes(source, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        trace!(kind = %token.kind, line = token.line(), column = token.column(), "token");
        let stop = token.is_eof() || (token.is_error() && policy == StopPolicy::FirstError);
        tokens.push(token);
        if stop {
            break;
        }
    }
    tokens
}

/// A single scan of one file.
#[derive(Debug, Clone)]
pub struct Session {
    /// File to scan.
    pub path: PathBuf,
    /// Token output format.
    pub format: OutputFormat,
    /// Error policy.
    pub policy: StopPolicy,
}

impl Session {
    /// Creates a session with the default format and policy.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: OutputFormat::default(),
            policy: StopPolicy::default(),
        }
    }

    /// Scans the file, writing tokens to `out` and diagnostics to `err`.
    ///
    /// Fails with [`DriverError::LexicalErrors`] after all output has been
    /// written if any error was reported.
    pub fn run<W: Write, E: Write>(&self, out: &mut W, err: &mut E) -> Result<()> {
        let bytes = read_source(&self.path)?;
        let handler = Handler::new();

        let tokens = scan(&bytes, self.policy, &handler);
        write_tokens(out, &tokens, self.format)?;

        let diagnostics = handler.diagnostics();
        if !diagnostics.is_empty() {
            let file = SourceFile::new(self.path.display().to_string(), &bytes);
            write!(err, "{}", render_diagnostics(&file, &diagnostics))
                .map_err(DriverError::Write)?;
        }

        info!(
            file = %self.path.display(),
            tokens = tokens.len(),
            errors = handler.error_count(),
            "scan finished"
        );

        match handler.error_count() {
            0 => Ok(()),
            n => Err(DriverError::LexicalErrors(n)),
        }
    }
}
