//! Output formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Supported output formats.
///
/// Serialized under the canonical name; deserialized through
/// [`OutputFormat::parse`], so aliases and any letter case are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    /// `<span class="...">` markup.
    #[default]
    Html,
    /// ANSI SGR escape sequences for terminals.
    Ansi,
    /// Source text unchanged.
    Plain,
    /// Token records as a JSON array.
    Json,
}

impl OutputFormat {
    /// Every format, in declaration order.
    pub const ALL: [OutputFormat; 4] = [Self::Html, Self::Ansi, Self::Plain, Self::Json];

    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "ansi" | "term" | "terminal" => Some(Self::Ansi),
            "plain" | "text" | "txt" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Ansi => "ansi",
            Self::Plain => "plain",
            Self::Json => "json",
        }
    }

    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Ansi => "ansi",
            Self::Plain => "txt",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RenderError::UnknownFormat(s.to_string()))
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = RenderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(OutputFormat::parse("HTML"), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::parse("term"), Some(OutputFormat::Ansi));
        assert_eq!(OutputFormat::parse("txt"), Some(OutputFormat::Plain));
        assert_eq!(OutputFormat::parse("Json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("pdf"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "svg".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown format: svg");
    }

    #[test]
    fn test_name_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
            assert_eq!(format.to_string(), format.name());
        }
    }

    #[test]
    fn test_deserialize_accepts_aliases() {
        let format: OutputFormat = serde_json::from_str("\"TXT\"").unwrap();
        assert_eq!(format, OutputFormat::Plain);
        let format: OutputFormat = serde_json::from_str("\"term\"").unwrap();
        assert_eq!(format, OutputFormat::Ansi);

        let err = serde_json::from_str::<OutputFormat>("\"pdf\"").unwrap_err();
        assert!(err.to_string().contains("Unknown format: pdf"));
    }

    #[test]
    fn test_serialize_canonical_name() {
        assert_eq!(serde_json::to_string(&OutputFormat::Plain).unwrap(), "\"plain\"");
    }

    #[test]
    fn test_extensions() {
        assert_eq!(OutputFormat::Html.extension(), "html");
        assert_eq!(OutputFormat::Plain.extension(), "txt");
    }
}
