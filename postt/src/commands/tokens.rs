//! Tokens command implementation.
//!
//! Dumps the token stream of one file, one token per line.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::Write;
use std::path::PathBuf;

use posti_lex::{Token, TokenKind};

use crate::commands::common::read_source;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// File to scan; `-` reads standard input.
    pub input: PathBuf,
}

/// Format tokens as `kind<TAB>start<TAB>text` lines, `text` debug-escaped.
pub fn format_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for token in tokens {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}\t{}\t{:?}", token.kind(), token.start(), token.text());
    }
    out
}

/// Number of tokens per class.
pub fn count_by_kind(tokens: &[Token<'_>]) -> BTreeMap<TokenKind, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.kind()).or_insert(0) += 1;
    }
    counts
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs) -> Result<()> {
    let source = read_source(&args.input)?;
    let tokens = posti_lex::tokenize(&source);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    out.write_all(format_tokens(&tokens).as_bytes())?;
    out.flush()?;

    for (kind, count) in count_by_kind(&tokens) {
        tracing::debug!(%kind, count, "token class");
    }
    tracing::debug!(path = %args.input.display(), total = tokens.len(), "tokens listed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use posti_lex::tokenize;

    #[test]
    fn test_format_tokens() {
        let tokens = tokenize("def f():\n\t'x'");
        let dump = format_tokens(&tokens);
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines[0], "keyword\t0\t\"def\"");
        assert_eq!(lines[2], "function-name\t4\t\"f\"");
        assert!(lines.contains(&"plain\t8\t\"\\n\""));
        assert!(lines.contains(&"plain\t9\t\"\\t\""));
        assert_eq!(lines.last(), Some(&"string\t10\t\"'x'\""));
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_tokens(&[]), "");
    }

    #[test]
    fn test_count_by_kind() {
        let tokens = tokenize("a = b + c");
        let counts = count_by_kind(&tokens);
        assert_eq!(counts[&TokenKind::Plain], 7);
        assert_eq!(counts[&TokenKind::Operator], 2);
        assert!(!counts.contains_key(&TokenKind::Keyword));
    }

    #[test]
    fn test_run_tokens_missing_file() {
        let args = TokensArgs {
            input: PathBuf::from("/nonexistent/file.py"),
        };
        assert!(run_tokens(args).is_err());
    }
}
