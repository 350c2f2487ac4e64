//! syn-backed validation for replacement text.
//!
//! A rule that fabricates replacement text can check it against the
//! syntactic category it is meant to fill before building a descriptor,
//! catching malformed snippets earlier than a whole-file speculative parse
//! would. [`SynFile`] additionally exposes syn's full-file parser as a
//! [`ParseCapability`] for verifiers that want a Rust AST instead of a
//! tree-sitter tree.

use crate::capability::{ParseCapability, ParseContext};
use thiserror::Error;

/// Syntactic category a replacement snippet is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    /// A top-level item (fn, struct, impl, etc.)
    Item,
    /// A statement
    Stmt,
    /// An expression
    Expr,
    /// A type
    Type,
    /// Block contents (without the surrounding braces)
    Block,
}

impl SnippetKind {
    fn describe(self) -> &'static str {
        match self {
            SnippetKind::Item => "item",
            SnippetKind::Stmt => "statement",
            SnippetKind::Expr => "expression",
            SnippetKind::Type => "type",
            SnippetKind::Block => "block",
        }
    }
}

#[derive(Error, Debug)]
#[error("snippet is not a valid {}: {message}", .kind.describe())]
pub struct SnippetError {
    pub kind: SnippetKind,
    pub message: String,
    pub code: String,
}

impl SnippetError {
    fn new(kind: SnippetKind, error: &syn::Error, code: &str) -> Self {
        Self {
            kind,
            message: error.to_string(),
            code: code.to_string(),
        }
    }
}

/// Check that `code` parses as the given syntactic category.
pub fn check(kind: SnippetKind, code: &str) -> Result<(), SnippetError> {
    let result = match kind {
        SnippetKind::Item => syn::parse_str::<syn::Item>(code).map(|_| ()),
        SnippetKind::Stmt => syn::parse_str::<syn::Stmt>(code).map(|_| ()),
        SnippetKind::Expr => syn::parse_str::<syn::Expr>(code).map(|_| ()),
        SnippetKind::Type => syn::parse_str::<syn::Type>(code).map(|_| ()),
        SnippetKind::Block => {
            let wrapped = format!("{{ {} }}", code);
            syn::parse_str::<syn::Block>(&wrapped).map(|_| ())
        }
    };

    result.map_err(|e| SnippetError::new(kind, &e, code))
}

/// Check a match-arm body: an expression, possibly with a trailing comma.
pub fn check_match_arm_body(code: &str) -> Result<(), SnippetError> {
    let trimmed = code.trim().trim_end_matches(',');
    check(SnippetKind::Expr, trimmed)
}

/// Parse capability that accepts complete Rust files via syn.
///
/// Heavier than [`crate::ts::RustSyntax`] but yields a typed AST, which a
/// rule can inspect to decide whether to surface the verified fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynFile;

impl ParseCapability for SynFile {
    type Output = syn::File;
    type Error = syn::Error;

    fn parse(&self, text: &str, _context: &ParseContext) -> Result<syn::File, syn::Error> {
        syn::parse_file(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_snippets() {
        assert!(check(SnippetKind::Item, "fn foo() {}").is_ok());
        assert!(check(SnippetKind::Item, "struct Foo { x: i32 }").is_ok());
        assert!(check(SnippetKind::Item, "not valid rust").is_err());
    }

    #[test]
    fn expr_snippets() {
        assert!(check(SnippetKind::Expr, "1 + 2").is_ok());
        assert!(check(SnippetKind::Expr, "foo.bar()").is_ok());
        assert!(check(SnippetKind::Expr, "if x { 1 } else { 2 }").is_ok());
        assert!(check(SnippetKind::Expr, "fn foo() {}").is_err());
    }

    #[test]
    fn block_snippets() {
        assert!(check(SnippetKind::Block, "let x = 1; x + 1").is_ok());
        assert!(check(SnippetKind::Block, "println!(\"hello\");").is_ok());
        assert!(check(SnippetKind::Block, "let x =").is_err());
    }

    #[test]
    fn match_arm_bodies() {
        assert!(check_match_arm_body("Outcome::None").is_ok());
        assert!(check_match_arm_body("Outcome::None,").is_ok());
        assert!(check_match_arm_body("{ do_something(); result }").is_ok());
    }

    #[test]
    fn error_names_the_category() {
        let err = check(SnippetKind::Type, "1 + 2").unwrap_err();
        assert_eq!(err.kind, SnippetKind::Type);
        assert!(err.to_string().contains("type"));
        assert_eq!(err.code, "1 + 2");
    }

    #[test]
    fn syn_file_capability() {
        let capability = SynFile;
        let context = ParseContext::default();

        let file = capability.parse("fn main() { let x = 1; }", &context).unwrap();
        assert_eq!(file.items.len(), 1);

        assert!(capability.parse("fn main( {", &context).is_err());
    }
}
