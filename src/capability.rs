use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A source-parsing capability consumed by the speculative verifier.
///
/// Implementations parse `text` and either return an opaque parse result or
/// a typed error describing why the text does not parse. The contract is
/// that failure is always reported through `Err` - an implementation must
/// not panic on malformed input, since the verifier's whole purpose is to
/// probe inputs that may well be malformed.
pub trait ParseCapability {
    /// Successful parse result. Opaque to the verifier.
    type Output;
    /// Parse failure carried back to the caller as data.
    type Error: std::error::Error;

    /// Parse `text` with the configured dialect and filename context.
    fn parse(&self, text: &str, context: &ParseContext) -> Result<Self::Output, Self::Error>;
}

impl<P: ParseCapability> ParseCapability for &P {
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, text: &str, context: &ParseContext) -> Result<Self::Output, Self::Error> {
        (*self).parse(text, context)
    }
}

/// Context forwarded verbatim to the parse capability on every check.
///
/// Captured once when a verifier is constructed and reused for each
/// verification call; the verifier never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseContext {
    /// Logical name of the file being verified, for parser diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<PathBuf>,
    /// Free-form dialect options interpreted by the capability.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub parser_options: serde_json::Value,
}

impl ParseContext {
    /// Context with no filename and no dialect options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context naming the file under verification.
    pub fn for_file(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: Some(filename.into()),
            parser_options: serde_json::Value::Null,
        }
    }

    /// Attach dialect options.
    pub fn with_parser_options(mut self, options: serde_json::Value) -> Self {
        self.parser_options = options;
        self
    }

    /// Filename for log and error messages, `"<input>"` when unnamed.
    pub fn display_name(&self) -> String {
        match &self.filename {
            Some(path) => path.display().to_string(),
            None => "<input>".to_string(),
        }
    }
}
