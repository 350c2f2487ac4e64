use crate::capability::{ParseCapability, ParseContext};
use crate::ts::errors::ParseError;
use crate::ts::parser::{error_spans, RustParser};
use log::debug;
use std::cell::RefCell;
use tree_sitter::Tree;

thread_local! {
    // One parser per thread: tree-sitter parsing needs &mut, while the
    // capability contract is &self. Pooling keeps repeated speculative
    // checks from re-initializing the grammar on every call.
    static RUST_PARSER: RefCell<Option<RustParser>> = const { RefCell::new(None) };
}

fn with_parser<R>(f: impl FnOnce(&mut RustParser) -> R) -> Result<R, ParseError> {
    RUST_PARSER.with(|cell| {
        let mut opt = cell.borrow_mut();
        if opt.is_none() {
            *opt = Some(RustParser::new()?);
        }
        Ok(f(opt.as_mut().expect("parser was just initialized above")))
    })
}

/// Parse capability backed by the tree-sitter Rust grammar.
///
/// Succeeds with the parse tree when the text contains no ERROR or missing
/// nodes; otherwise reports the first offending span (or the error count
/// when there are several).
#[derive(Debug, Clone, Copy, Default)]
pub struct RustSyntax;

impl ParseCapability for RustSyntax {
    type Output = Tree;
    type Error = ParseError;

    fn parse(&self, text: &str, context: &ParseContext) -> Result<Tree, ParseError> {
        let tree = with_parser(|parser| parser.parse(text))??;

        let spans = error_spans(&tree);
        match spans.as_slice() {
            [] => Ok(tree),
            [(byte_start, byte_end)] => Err(ParseError::SyntaxError {
                byte_start: *byte_start,
                byte_end: *byte_end,
            }),
            spans => {
                debug!(
                    "{}: {} ERROR nodes after speculative edit",
                    context.display_name(),
                    spans.len()
                );
                Err(ParseError::MultipleSyntaxErrors { count: spans.len() })
            }
        }
    }
}

/// Validate that Rust source code has no syntax errors.
pub fn validate_syntax(source: &str) -> Result<(), ParseError> {
    RustSyntax.parse(source, &ParseContext::default()).map(|_| ())
}
