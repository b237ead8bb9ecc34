//! Renderers turning token streams into output text.
//!
//! Every renderer preserves the source: removing the markup it adds gives
//! back the exact scanned text.

use posti_lex::Token;

use crate::error::Result;
use crate::escape::escape_html_into;
use crate::format::OutputFormat;
use crate::style::{css_class, Theme, RESET};

/// Output renderer for one format.
pub trait Render {
    /// Appends the rendering of a single token to `out`.
    fn render_token(&self, token: &Token<'_>, out: &mut String) -> Result<()>;

    /// Written before the first token.
    fn prologue(&self, _out: &mut String) {}

    /// Written after the last token.
    fn epilogue(&self, _out: &mut String) {}

    /// Renders a complete token sequence.
    fn render(&self, tokens: &[Token<'_>]) -> Result<String> {
        let capacity = tokens.iter().map(|t| t.text().len()).sum::<usize>() * 2;
        let mut out = String::with_capacity(capacity);
        self.prologue(&mut out);
        for token in tokens {
            self.render_token(token, &mut out)?;
        }
        self.epilogue(&mut out);
        Ok(out)
    }
}

/// HTML renderer: each styled token becomes `<span class="...">`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer {
    /// Wrap the output in `<pre class="posti">`.
    pub standalone: bool,
}

impl HtmlRenderer {
    /// Creates an HTML renderer.
    pub fn new(standalone: bool) -> Self {
        Self { standalone }
    }
}

impl Render for HtmlRenderer {
    fn render_token(&self, token: &Token<'_>, out: &mut String) -> Result<()> {
        match css_class(token.kind()) {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                escape_html_into(token.text(), out);
                out.push_str("</span>");
            }
            None => escape_html_into(token.text(), out),
        }
        Ok(())
    }

    fn prologue(&self, out: &mut String) {
        if self.standalone {
            out.push_str("<pre class=\"posti\">");
        }
    }

    fn epilogue(&self, out: &mut String) {
        if self.standalone {
            out.push_str("</pre>\n");
        }
    }
}

/// Terminal renderer using ANSI SGR sequences from a [`Theme`].
#[derive(Debug, Clone, Default)]
pub struct AnsiRenderer {
    theme: Theme,
}

impl AnsiRenderer {
    /// Creates an ANSI renderer with `theme`.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// The renderer's theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

impl Render for AnsiRenderer {
    fn render_token(&self, token: &Token<'_>, out: &mut String) -> Result<()> {
        match self.theme.escape(token.kind()) {
            Some(escape) => {
                out.push_str(&escape);
                out.push_str(token.text());
                out.push_str(RESET);
            }
            None => out.push_str(token.text()),
        }
        Ok(())
    }
}

/// Renderer writing the source text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Render for PlainRenderer {
    fn render_token(&self, token: &Token<'_>, out: &mut String) -> Result<()> {
        out.push_str(token.text());
        Ok(())
    }
}

/// JSON renderer: `[{"kind": ..., "text": ..., "start": ...}, ...]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    /// Pretty-print with indentation.
    pub pretty: bool,
}

impl Render for JsonRenderer {
    /// Appends one token record.
    fn render_token(&self, token: &Token<'_>, out: &mut String) -> Result<()> {
        out.push_str(&serde_json::to_string(token)?);
        Ok(())
    }

    fn render(&self, tokens: &[Token<'_>]) -> Result<String> {
        if self.pretty {
            let mut out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
            return Ok(out);
        }

        let mut out = String::from("[");
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            self.render_token(token, &mut out)?;
        }
        out.push_str("]\n");
        Ok(out)
    }
}

/// Builds the renderer for `format`.
///
/// `theme` applies to ANSI output; `standalone` wraps HTML output and
/// pretty-prints JSON output.
pub fn renderer_for(format: OutputFormat, theme: &Theme, standalone: bool) -> Box<dyn Render + Send + Sync> {
    match format {
        OutputFormat::Html => Box::new(HtmlRenderer::new(standalone)),
        OutputFormat::Ansi => Box::new(AnsiRenderer::new(theme.clone())),
        OutputFormat::Plain => Box::new(PlainRenderer),
        OutputFormat::Json => Box::new(JsonRenderer { pretty: standalone }),
    }
}
