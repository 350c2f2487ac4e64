use crate::fix::{FixRange, Spanned};
use crate::ts::errors::ParseError;
use ast_grep_language::{LanguageExt, SupportLang};
use tree_sitter::{Parser, Tree};

/// Tree-sitter parser wrapper for Rust source code.
pub struct RustParser {
    parser: Parser,
}

impl RustParser {
    /// Create a new Rust parser.
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        // Get the tree-sitter Language from ast-grep-language
        let ts_lang = SupportLang::Rust.get_ts_language();
        parser
            .set_language(&ts_lang)
            .map_err(|_| ParseError::LanguageSet)?;

        Ok(Self { parser })
    }

    /// Parse source code into a tree-sitter Tree.
    ///
    /// A returned tree may still contain ERROR nodes; use [`error_spans`] to
    /// find them.
    pub fn parse(&mut self, source: &str) -> Result<Tree, ParseError> {
        self.parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)
    }
}

/// Byte spans of all ERROR and missing nodes in a tree, sorted by position.
pub fn error_spans(tree: &Tree) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut stack = vec![tree.root_node()];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            spans.push((node.start_byte(), node.end_byte()));
        }
        let mut cursor = node.walk();
        stack.extend(node.children(&mut cursor));
    }

    spans.sort_unstable();
    spans
}

/// Tree-sitter nodes are structural references: rules can hand them straight
/// to the builder's reference-based operations.
impl Spanned for tree_sitter::Node<'_> {
    fn range(&self) -> FixRange {
        FixRange::new(self.start_byte() as isize, self.end_byte() as isize)
    }
}
