//! Token stream and diagnostic output.

use std::io::Write;

use serde::{Deserialize, Serialize};
use toyc_lex::Token;
use toyc_util::{Diagnostic, SourceFile};

use crate::error::{DriverError, Result};

/// How tokens are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `Token(KIND, 'text', Lline, Ccol)` line per token.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// JSON shape of a single token.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TokenRecord<'a> {
    /// Upper-case kind name.
    pub kind: &'static str,
    /// Lexeme, `null` for EOF.
    pub text: Option<&'a str>,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.text(),
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Writes `tokens` to `out`, one per line.
pub fn write_tokens<W: Write>(out: &mut W, tokens: &[Token], format: OutputFormat) -> Result<()> {
    for token in tokens {
        let written = match format {
            OutputFormat::Text => writeln!(out, "{}", token),
            OutputFormat::Json => {
                let line = serde_json::to_string(&TokenRecord::from(token))?;
                writeln!(out, "{}", line)
            },
        };
        written.map_err(DriverError::Write)?;
    }
    out.flush().map_err(DriverError::Write)
}

/// Renders every diagnostic against `file`, separated by blank lines.
pub fn render_diagnostics(file: &SourceFile, diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.render(file))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use toyc_util::Handler;

    fn write(source: &str, format: OutputFormat) -> String {
        let handler = Handler::new();
        let tokens = toyc_lex::tokenize(source, &handler);
        let mut buf: Vec<u8> = Vec::new();
        write_tokens(&mut buf, &tokens, format).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_output() {
        assert_eq!(
            write("x = 1", OutputFormat::Text),
            "Token(IDENTIFIER, 'x', L1, C1)\n\
             Token(ASSIGN, '=', L1, C3)\n\
             Token(NUMBER, '1', L1, C5)\n\
             Token(EOF, 'NULL', L1, C6)\n"
        );
    }

    #[test]
    fn test_json_output() {
        let out = write("if 'a'", OutputFormat::Json);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], r#"{"kind":"IF","text":"if","line":1,"column":1}"#);
        assert_eq!(
            lines[1],
            r#"{"kind":"STRING_LITERAL","text":"'a'","line":1,"column":4}"#
        );
        assert_eq!(lines[2], r#"{"kind":"EOF","text":null,"line":1,"column":7}"#);
    }

    #[test]
    fn test_json_lines_parse_back() {
        let out = write("while ( a >= 'q\"' )", OutputFormat::Json);
        for line in out.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value["kind"].is_string());
            assert!(value["line"].is_u64());
        }
    }

    #[test]
    fn test_format_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Json).unwrap(), "\"json\"");
        assert_eq!(
            serde_json::from_str::<OutputFormat>("\"text\"").unwrap(),
            OutputFormat::Text
        );
    }

    #[test]
    fn test_render_diagnostics() {
        let source = "x = 'abc";
        let handler = Handler::new();
        toyc_lex::tokenize(source, &handler);
        let file = SourceFile::new("main.toy", source);

        let rendered = render_diagnostics(&file, &handler.diagnostics());
        assert!(rendered.starts_with("error[E1002]: unterminated string literal\n"));
        assert!(rendered.contains("--> main.toy:1:5"));
        assert!(rendered.contains("x = 'abc"));
        assert!(rendered.contains("= help: add a closing `'`"));
    }

    #[test]
    fn test_render_no_diagnostics() {
        let file = SourceFile::new("empty.toy", "");
        assert_eq!(render_diagnostics(&file, &[]), "");
    }
}
