//! posti-render - Output renderers for posti token streams
//!
//! Turns the [`Token`](posti_lex::Token)s produced by `posti-lex` into
//! HTML, ANSI terminal, plain or JSON output.
//!
//! # Example Usage
//!
//! ```
//! use posti_lex::tokenize;
//! use posti_render::{HtmlRenderer, Render};
//!
//! let tokens = tokenize("x = None");
//! let html = HtmlRenderer::default().render(&tokens).unwrap();
//! assert_eq!(html, "x <span class=\"op\">=</span> <span class=\"kw\">None</span>");
//! ```

#![warn(missing_docs)]

pub mod color;
pub mod error;
pub mod escape;
pub mod format;
pub mod render;
pub mod style;

pub use color::stdout_supports_color;
pub use error::{RenderError, Result};
pub use escape::{escape_html, escape_html_into};
pub use format::OutputFormat;
pub use render::{renderer_for, AnsiRenderer, HtmlRenderer, JsonRenderer, PlainRenderer, Render};
pub use style::{css_class, Theme, RESET};

/// Scans `source` and renders it in `format`.
pub fn highlight(source: &str, format: OutputFormat, theme: &Theme, standalone: bool) -> Result<String> {
    let tokens = posti_lex::tokenize(source);
    let out = renderer_for(format, theme, standalone).render(&tokens)?;
    tracing::debug!(%format, tokens = tokens.len(), bytes = out.len(), "rendered source");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_html() {
        let out = highlight("def foo():", OutputFormat::Html, &Theme::default(), false).unwrap();
        assert!(out.starts_with("<span class=\"kw\">def</span> <span class=\"fn\">foo</span>"));
    }

    #[test]
    fn test_highlight_plain_preserves_source() {
        let source = "x = 0x1F  # hex\r\n";
        let out = highlight(source, OutputFormat::Plain, &Theme::default(), true).unwrap();
        assert_eq!(out, source);
    }
}
