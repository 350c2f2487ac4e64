//! Property tests for the reconstruction step.

use proptest::prelude::*;
use specfix::{rewrite, FixBuilder, FixDescriptor, FixRange};

proptest! {
    /// For any ASCII source and in-bounds ordered range, reconstruction is
    /// exactly prefix + replacement + suffix.
    #[test]
    fn rewrite_is_prefix_text_suffix(
        source in "[ -~]{0,40}",
        (start, end) in (0usize..=40, 0usize..=40).prop_map(|(a, b)| (a.min(b), a.max(b))),
        replacement in "[ -~]{0,10}",
    ) {
        let start = start.min(source.len());
        let end = end.min(source.len());
        let fix = FixDescriptor::new(FixRange::from(start..end), replacement.as_str());

        let out = rewrite(&source, &fix).expect("ordered ASCII range must splice");
        prop_assert_eq!(out, format!("{}{}{}", &source[..start], replacement, &source[end..]));
    }

    /// Insertion at a point is prefix + text + suffix around that point.
    #[test]
    fn insertion_splits_at_point(
        source in "[ -~]{0,40}",
        pos in 0usize..=40,
        text in "[ -~]{0,10}",
    ) {
        let pos = pos.min(source.len());
        let fix = FixBuilder::new()
            .insert_text_before_range(FixRange::from(pos..pos), text.as_str());

        let out = rewrite(&source, &fix).unwrap();
        prop_assert_eq!(out, format!("{}{}{}", &source[..pos], text, &source[pos..]));
    }

    /// Removal and replacement-with-empty are the same operation.
    #[test]
    fn remove_equals_replace_with_empty(
        source in "[ -~]{0,40}",
        (start, end) in (0usize..=40, 0usize..=40).prop_map(|(a, b)| (a.min(b), a.max(b))),
    ) {
        let builder = FixBuilder::new();
        let range = FixRange::from(start..end);

        let removed = builder.remove_range(range);
        let replaced = builder.replace_text_range(range, "");
        prop_assert_eq!(&removed, &replaced);
        prop_assert_eq!(rewrite(&source, &removed), rewrite(&source, &replaced));
    }

    /// Inverted ranges never splice, whatever the source.
    #[test]
    fn inverted_ranges_always_rejected(
        source in "[ -~]{0,40}",
        start in 1isize..100,
        delta in 1isize..50,
        text in "[ -~]{0,10}",
    ) {
        let fix = FixDescriptor::new(FixRange::new(start, start - delta), text.as_str());
        prop_assert_eq!(rewrite(&source, &fix), None);
    }

    /// An edit spanning offset zero from a negative start always drops the
    /// leading BOM.
    #[test]
    fn bom_dropped_when_edit_spans_offset_zero(
        body in "[ -~]{0,40}",
        start in -3isize..0,
        end in 0isize..40,
        replacement in "[a-z]{0,10}",
    ) {
        let source = format!("\u{feff}{}", body);
        let fix = FixDescriptor::new(FixRange::new(start, end), replacement.as_str());

        let out = rewrite(&source, &fix).unwrap();
        prop_assert!(!out.starts_with('\u{feff}'), "output must not start with BOM");
    }

    /// A leading BOM survives any edit that does not claim offset zero from
    /// a negative start.
    #[test]
    fn bom_preserved_for_in_text_edits(
        body in "[ -~]{0,40}",
        (start, end) in (0usize..=40, 0usize..=40).prop_map(|(a, b)| (a.min(b), a.max(b))),
        replacement in "[a-z]{0,10}",
    ) {
        let source = format!("\u{feff}{}", body);
        let start = start.min(body.len());
        let end = end.min(body.len());
        let fix = FixDescriptor::new(FixRange::from(start..end), replacement.as_str());

        let out = rewrite(&source, &fix).unwrap();
        prop_assert!(out.starts_with('\u{feff}'), "output must start with BOM");
        prop_assert_eq!(
            &out['\u{feff}'.len_utf8()..],
            format!("{}{}{}", &body[..start], replacement, &body[end..])
        );
    }
}
