use ccdict_count_core::fields::count_countable;
use ccdict_count_core::{EntryTally, FormatTag, classify, entry_count, line_entry_count};
use proptest::prelude::*;

/// コメントでも空でもない英訳・読みの要素
fn countable_item() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9 ]{0,12}"
}

fn gloss_group(items: &[String]) -> String {
    format!("/{}/", items.join("/"))
}

proptest! {
    #[test]
    fn test_total_equals_sum_of_keys(
        lines in prop::collection::vec(
            prop_oneof![
                "[a-z]{1,4} [a-z]{1,4} \\[[a-z0-9 ]{0,8}\\] /[a-z/ #]{0,20}",
                "[a-z]{1,4} [a-z]{1,4} \\[[a-z0-9 ]{0,8}\\] \\{[a-z0-9/ ]{0,8}\\} /[a-z/ #]{0,20}",
                "[a-z]{1,4} [a-z]{1,4} \\[[a-z0-9 ]{0,8}\\] \\{[a-z0-9 ]{0,8}\\}",
                "# [a-z ]{0,10}",
                "\\PC{0,30}",
            ],
            0..40,
        )
    ) {
        let tally: EntryTally = lines.iter().map(String::as_str).collect();
        let sum: usize = tally.iter().map(|(_, v)| v).sum();
        prop_assert_eq!(tally.total(), sum);
    }

    #[test]
    fn test_canto_hybrid_is_cross_product(
        prons in prop::collection::vec(countable_item(), 1..4),
        glosses in prop::collection::vec(countable_item(), 1..6),
    ) {
        let line = format!(
            "字 字 [zi4] {{{}}} {}",
            prons.join("/"),
            gloss_group(&glosses)
        );
        let format = classify(&line);
        prop_assert_eq!(format.tag(), FormatTag::CantoHybrid);
        prop_assert_eq!(entry_count(&format), prons.len() * glosses.len());
    }

    #[test]
    fn test_romanized_gloss_counts_glosses(
        glosses in prop::collection::vec(countable_item(), 1..8),
        comments in prop::collection::vec("#[a-z ]{0,6}", 0..3),
    ) {
        let mut parts = glosses.clone();
        parts.extend(comments);
        let line = format!("字 字 [zi4] {}", gloss_group(&parts));
        let format = classify(&line);
        prop_assert_eq!(format.tag(), FormatTag::RomanizedGloss);
        prop_assert_eq!(entry_count(&format), glosses.len());
    }

    #[test]
    fn test_hybrid_bracketed_is_always_one(
        pinyin in "[^\\]\\n/]{0,16}",
        jyutping in "[^\\n/]{0,16}",
    ) {
        // `/` を含まない行は CantoHybrid にも RomanizedGloss にもならない
        let line = format!("字 字 [{pinyin}] {{{jyutping}}}");
        prop_assert_eq!(classify(&line).tag(), FormatTag::HybridBracketed);
        prop_assert_eq!(line_entry_count(&line), 1);
    }

    #[test]
    fn test_comment_lines_contribute_nothing(
        indent in "[ \\t]{0,3}",
        body in "[^\\n]{0,30}",
    ) {
        let line = format!("{indent}#{body}");
        let mut tally = EntryTally::new();
        prop_assert_eq!(tally.process_line(&line), None);
        prop_assert!(tally.is_empty());
        prop_assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_rerun_is_idempotent(
        lines in prop::collection::vec("[a-z]{1,3} [a-z]{1,3} \\[[a-z]{0,3}\\] /[a-z/]{0,10}", 0..20)
    ) {
        let first: EntryTally = lines.iter().map(String::as_str).collect();
        let second: EntryTally = lines.iter().map(String::as_str).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_countable_never_exceeds_subfields(field in "[a-z #/ ]{0,40}") {
        let subfields = field.split('/').count();
        prop_assert!(count_countable(&field) <= subfields);
    }
}
