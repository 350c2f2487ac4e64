use crate::capability::{ParseCapability, ParseContext};
use crate::fix::{FixDescriptor, FixRange};
use log::{debug, trace};

/// Byte-order marker sentinel recognized at the start of source text.
pub const BOM: char = '\u{feff}';

/// Incremental rewriter that splices replacement text into the original
/// source while tracking how much of it has been consumed.
///
/// Ranges address the BOM-stripped text; the stripped BOM is re-emitted in
/// front of the output unless an edit claims the start of the file. The
/// cursor makes splices order-dependent: each one must start strictly past
/// the previously consumed offset, which is what rejects overlapping edits
/// when the rewriter is driven over a sequence.
struct Rewriter<'a> {
    /// Source with any leading BOM stripped.
    text: &'a str,
    /// Output accumulated so far, seeded with the BOM when one was present.
    output: String,
    /// Offset up to which original text has been emitted. `None` until the
    /// first splice, and compares below any real offset.
    consumed: Option<isize>,
}

impl<'a> Rewriter<'a> {
    fn new(source: &'a str) -> Self {
        let (bom, text) = match source.strip_prefix(BOM) {
            Some(rest) => ("\u{feff}", rest),
            None => ("", source),
        };
        Self {
            text,
            output: bom.to_string(),
            consumed: None,
        }
    }

    /// Slice of the original text with both bounds clamped to `0..len`.
    ///
    /// `None` when a clamped bound lands inside a multi-byte character.
    fn chunk(&self, from: isize, to: isize) -> Option<&'a str> {
        let len = self.text.len();
        let from = (from.max(0) as usize).min(len);
        let to = (to.max(0) as usize).min(len);
        self.text.get(from..to)
    }

    /// Emit everything up to `fix.range.start`, then the replacement text.
    ///
    /// Returns false when the fix is unusable: inverted range, a start that
    /// does not advance past consumed input, or a bound off a character
    /// boundary.
    fn splice(&mut self, fix: &FixDescriptor) -> bool {
        let FixRange { start, end } = fix.range;

        if self.consumed.is_some_and(|pos| pos >= start) || start > end {
            return false;
        }

        // An edit that rewrites the very start of the file owns the BOM:
        // drop the remembered one rather than emit it duplicated or dangling.
        if (start < 0 && end >= 0) || (start == 0 && fix.text.starts_with(BOM)) {
            self.output.clear();
        }

        let from = self.consumed.unwrap_or(0);
        let Some(prefix) = self.chunk(from, start) else {
            return false;
        };
        self.output.push_str(prefix);
        self.output.push_str(&fix.text);
        self.consumed = Some(end);
        true
    }

    /// Emit the untouched suffix and hand back the finished output.
    fn finish(mut self) -> Option<String> {
        let from = self.consumed.unwrap_or(0);
        let tail = self.chunk(from, self.text.len() as isize)?;
        self.output.push_str(tail);
        Some(self.output)
    }
}

/// Compute the hypothetical source that would result from applying `fix`.
///
/// `source` is not mutated; the result is a freshly built string. Returns
/// `None` when the descriptor is structurally unusable (inverted range or a
/// byte offset off a character boundary) - an expected, recoverable outcome
/// during rule evaluation, not an error.
///
/// When `source` starts with a [`BOM`], ranges address the text behind it
/// and the output keeps the BOM - unless the fix spans offset 0 from a
/// negative start, or inserts BOM-prefixed text at offset 0, in which case
/// the original BOM is dropped so the output never carries two.
pub fn rewrite(source: &str, fix: &FixDescriptor) -> Option<String> {
    let mut rewriter = Rewriter::new(source);
    if !rewriter.splice(fix) {
        return None;
    }
    rewriter.finish()
}

/// Outcome of speculatively applying and re-parsing one fix.
///
/// There are no partial states: a verification attempt either produced a
/// parse result, produced a parse error, or never got as far as parsing.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a VerifyOutcome reports whether the fix is safe to surface"]
pub enum VerifyOutcome<A, E> {
    /// The rewritten source parsed cleanly; carries the parse result.
    Parsed(A),
    /// The rewritten source was rejected by the parser; carries its error.
    ParseFailed(E),
    /// The descriptor itself was unusable: inverted range, or a range that
    /// does not advance past already-consumed input.
    Invalid,
}

impl<A, E> VerifyOutcome<A, E> {
    /// Whether the fix verified as syntactically safe.
    pub fn is_parsed(&self) -> bool {
        matches!(self, VerifyOutcome::Parsed(_))
    }

    /// Whether the rewritten source failed to parse.
    pub fn is_parse_failed(&self) -> bool {
        matches!(self, VerifyOutcome::ParseFailed(_))
    }

    /// Whether the descriptor never reached the parser.
    pub fn is_invalid(&self) -> bool {
        matches!(self, VerifyOutcome::Invalid)
    }

    /// The parse result, if the fix verified.
    pub fn parsed(self) -> Option<A> {
        match self {
            VerifyOutcome::Parsed(result) => Some(result),
            _ => None,
        }
    }

    /// The parser's error, if the rewritten source failed to parse.
    pub fn parse_error(self) -> Option<E> {
        match self {
            VerifyOutcome::ParseFailed(error) => Some(error),
            _ => None,
        }
    }
}

/// Speculative verifier for candidate fixes.
///
/// Reconstructs the would-be output for one [`FixDescriptor`] and asks the
/// injected [`ParseCapability`] whether it is still valid source, without
/// mutating anything and without letting a parse failure escape. The
/// capability and its [`ParseContext`] are captured once at construction;
/// every call's working state is local to that call, so a verifier can be
/// shared across threads when its capability is `Sync`.
#[derive(Debug, Clone)]
pub struct FixVerifier<P> {
    capability: P,
    context: ParseContext,
}

impl<P: ParseCapability> FixVerifier<P> {
    /// Verifier with an anonymous [`ParseContext`].
    pub fn new(capability: P) -> Self {
        Self {
            capability,
            context: ParseContext::default(),
        }
    }

    /// Verifier with an explicit context (filename, dialect options).
    pub fn with_context(capability: P, context: ParseContext) -> Self {
        Self { capability, context }
    }

    /// The context forwarded to the capability on every check.
    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    /// Speculatively apply `fix` to `source` and re-parse the result.
    ///
    /// All failure modes come back as data: an unusable descriptor is
    /// [`VerifyOutcome::Invalid`], a parse failure is
    /// [`VerifyOutcome::ParseFailed`]. A rule can therefore probe many
    /// candidate edits in a loop without one bad speculation aborting the
    /// evaluation of the rest.
    pub fn try_fix_and_check(
        &self,
        fix: &FixDescriptor,
        source: &str,
    ) -> VerifyOutcome<P::Output, P::Error> {
        let Some(output) = rewrite(source, fix) else {
            trace!("rejected fix at {:?}: unusable range", fix.range);
            return VerifyOutcome::Invalid;
        };

        match self.check_output(&output) {
            Ok(result) => VerifyOutcome::Parsed(result),
            Err(error) => {
                debug!(
                    "speculative fix for {} does not parse: {error}",
                    self.context.display_name()
                );
                VerifyOutcome::ParseFailed(error)
            }
        }
    }

    /// Parse `output` with the configured capability and context.
    pub fn check_output(&self, output: &str) -> Result<P::Output, P::Error> {
        self.capability.parse(output, &self.context)
    }
}
