//! Specfix: speculative fix verification for static-analysis rules
//!
//! Lets independent analysis rules propose source-text transformations
//! without applying them blindly: a rule builds a range-based
//! [`FixDescriptor`] from a node, token, or explicit span, then asks the
//! [`FixVerifier`] whether the hypothetical result still parses - all
//! without mutating the original source.
//!
//! # Architecture
//!
//! Every proposed transformation compiles down to a single primitive:
//! [`FixDescriptor`], a `{range, text}` replacement against the original
//! source. [`FixBuilder`] produces descriptors from higher-level intents
//! (insert after, replace, remove) and never validates them; the verifier is
//! the sole validation boundary. [`FixVerifier`] reconstructs the would-be
//! output (handling a leading byte-order marker) and drives an injected
//! [`ParseCapability`] - the built-in ones are tree-sitter
//! ([`ts::RustSyntax`]) and syn ([`snippet::SynFile`]).
//!
//! # Failure model
//!
//! - Structurally unusable descriptors (inverted or non-advancing ranges)
//!   come back as [`VerifyOutcome::Invalid`], never as a panic
//! - Parse failures of the hypothetical output come back as
//!   [`VerifyOutcome::ParseFailed`] carrying the parser's error
//! - The original source and any already-reported diagnostics are unaffected
//!   either way
//!
//! # Example
//!
//! ```no_run
//! use specfix::{FixBuilder, FixRange, FixVerifier, RustSyntax};
//!
//! let source = "fn main() { let x = 1; }";
//! let fix = FixBuilder::new().replace_text_range(FixRange::new(16, 17), "y");
//!
//! let verifier = FixVerifier::new(RustSyntax);
//! let outcome = verifier.try_fix_and_check(&fix, source);
//! assert!(outcome.is_parsed());
//! ```

pub mod builder;
pub mod capability;
pub mod fix;
pub mod snippet;
pub mod ts;
pub mod verify;

// Re-exports
pub use builder::FixBuilder;
pub use capability::{ParseCapability, ParseContext};
pub use fix::{FixDescriptor, FixRange, Spanned};
pub use snippet::{SnippetError, SnippetKind, SynFile};
pub use ts::{validate_syntax, ParseError, RustParser, RustSyntax};
pub use verify::{rewrite, FixVerifier, VerifyOutcome, BOM};
