//! 書式ごとのエントリ数算出

use crate::classifier::classify;
use crate::fields::count_countable;
use crate::format::LineFormat;

/// 分類結果からエントリ数を求める
///
/// | 書式 | エントリ数 |
/// |---|---|
/// | CantoHybrid | 読みの数 × 英訳の数 |
/// | RomanizedGloss | 英訳の数 |
/// | HybridBracketed | 1 |
/// | Unrecognized | 0 |
///
/// CantoHybrid の読みも `/` で分割する。
#[must_use]
pub fn entry_count(format: &LineFormat<'_>) -> usize {
    match *format {
        LineFormat::CantoHybrid {
            pronunciations,
            glosses,
        } => count_countable(pronunciations) * count_countable(glosses),
        LineFormat::RomanizedGloss { glosses } => count_countable(glosses),
        LineFormat::HybridBracketed => 1,
        LineFormat::Unrecognized => 0,
    }
}

/// 行を分類してエントリ数を返す
#[must_use]
pub fn line_entry_count(line: &str) -> usize {
    entry_count(&classify(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stray_brace_line_counts_one() {
        let line = "陳慧琳 陈慧琳 [chen2 hui4 lin2] {can4 wai6} lam4} /Kelly Chen Wai Lam, a Hong Kong singer/";
        assert_eq!(line_entry_count(line), 1);
    }

    #[test]
    fn test_romanized_gloss_counts_glosses() {
        assert_eq!(line_entry_count("工作 工作 [gong1 zuo4] /to work/job/"), 2);
        assert_eq!(
            line_entry_count("葉 叶 [ye4] /leaf/page/lobe/(historical) period/classifier for small boats/"),
            5
        );
    }

    #[test]
    fn test_canto_hybrid_cross_product() {
        let format = LineFormat::CantoHybrid {
            pronunciations: "gung1 zok3/gung1 zok6",
            glosses: "/to work/job/occupation/",
        };
        assert_eq!(entry_count(&format), 6);
    }

    #[test]
    fn test_canto_hybrid_ignores_trailing_comment() {
        let line = "啹 啹 [ju2] {goe4} /to accept/to not object/to feel better/to burp/ # adapted from cc-cedict";
        assert_eq!(line_entry_count(line), 4);
    }

    #[test]
    fn test_hybrid_bracketed_is_one() {
        assert_eq!(line_entry_count("愛 爱 [ai4] {oi3}"), 1);
        assert_eq!(line_entry_count("X X [a/b/c] {d/e}"), 1);
    }

    #[test]
    fn test_unrecognized_is_zero() {
        assert_eq!(line_entry_count("???"), 0);
    }

    #[test]
    fn test_empty_gloss_group() {
        // `/` だけの英訳は数えない
        assert_eq!(line_entry_count("X X [x1] //"), 0);
    }
}
