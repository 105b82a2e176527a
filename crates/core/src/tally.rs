//! 見出し語ごとのエントリ数集計
//!
//! 不変条件: 各行の処理後は常に `total == per_key の合計`。
//! 加算のみで、途中で減少・リセットしない。

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::count::entry_count;
use crate::fields::is_comment_line;
use crate::format::FormatTag;

/// 1 行の処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub tag: FormatTag,
    pub count: usize,
}

/// 行の見出し語（最初の空白区切りトークン）
#[must_use]
pub fn headword_key(line: &str) -> Option<&str> {
    line.split_whitespace().next()
}

/// エントリ数の集計器
///
/// `per_key` の反復順序は未定義。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTally {
    total: usize,
    per_key: HashMap<String, usize>,
}

impl EntryTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 1 行を処理し、集計を更新する
    ///
    /// 空行・コメント行は状態を変えずに `None` を返す。
    /// 未認識の行も見出し語を 0 件で登録する。
    pub fn process_line(&mut self, line: &str) -> Option<LineOutcome> {
        if line.trim().is_empty() || is_comment_line(line) {
            return None;
        }
        let key = headword_key(line)?;

        let format = classify(line);
        let count = entry_count(&format);
        self.add(key, count);

        Some(LineOutcome {
            tag: format.tag(),
            count,
        })
    }

    fn add(&mut self, key: &str, count: usize) {
        self.total += count;
        match self.per_key.get_mut(key) {
            Some(v) => *v += count,
            None => {
                self.per_key.insert(key.to_owned(), count);
            }
        }
    }

    /// 2 つの集計を加算で合成する（分割集計の reduce 用）
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.total += other.total;
        for (key, count) in other.per_key {
            *self.per_key.entry(key).or_insert(0) += count;
        }
        self
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<usize> {
        self.per_key.get(key).copied()
    }

    /// 見出し語の種類数
    #[must_use]
    pub fn len(&self) -> usize {
        self.per_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.per_key.is_empty()
    }

    /// 見出し語と件数の組（順序不定）
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.per_key.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<'a> Extend<&'a str> for EntryTally {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, lines: I) {
        for line in lines {
            self.process_line(line);
        }
    }
}

impl<'a> FromIterator<&'a str> for EntryTally {
    fn from_iter<I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        let mut tally = Self::new();
        tally.extend(lines);
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_per_key(tally: &EntryTally) -> usize {
        tally.iter().map(|(_, v)| v).sum()
    }

    #[test]
    fn test_comment_line_is_skipped() {
        let mut tally = EntryTally::new();
        assert_eq!(tally.process_line("# this is a comment"), None);
        assert_eq!(tally.process_line("   "), None);
        assert_eq!(tally.process_line(""), None);
        assert_eq!(tally, EntryTally::new());
    }

    #[test]
    fn test_process_line_updates_total_and_key() {
        let mut tally = EntryTally::new();
        let outcome = tally.process_line("工作 工作 [gong1 zuo4] /to work/job/");
        assert_eq!(
            outcome,
            Some(LineOutcome {
                tag: FormatTag::RomanizedGloss,
                count: 2
            })
        );
        assert_eq!(tally.total(), 2);
        assert_eq!(tally.get("工作"), Some(2));
    }

    #[test]
    fn test_unrecognized_registers_key_with_zero() {
        let mut tally = EntryTally::new();
        let outcome = tally.process_line("???");
        assert_eq!(
            outcome,
            Some(LineOutcome {
                tag: FormatTag::Unrecognized,
                count: 0
            })
        );
        assert_eq!(tally.get("???"), Some(0));
        assert_eq!(tally.total(), 0);
    }

    #[test]
    fn test_same_headword_accumulates() {
        let tally: EntryTally = [
            "朱 朱 [Zhu1] /surname Zhu/",
            "朱 朱 [zhu1] /vermilion/",
            "# 朱 comment",
            "愛 爱 [ai4] {oi3}",
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.get("朱"), Some(2));
        assert_eq!(tally.get("愛"), Some(1));
        assert_eq!(tally.get("#"), None);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.total(), sum_per_key(&tally));
    }

    #[test]
    fn test_leading_whitespace_key() {
        let mut tally = EntryTally::new();
        tally.process_line("  工作 工作 [gong1 zuo4] /to work/");
        assert_eq!(tally.get("工作"), Some(1));
    }

    #[test]
    fn test_merge_adds_counts() {
        let a: EntryTally = ["葉 叶 [Ye4] /surname Ye/", "工作 工作 [gong1 zuo4] /to work/job/"]
            .into_iter()
            .collect();
        let b: EntryTally = ["葉 叶 [ye4] /leaf/page/"].into_iter().collect();

        let merged = a.merge(b);
        assert_eq!(merged.get("葉"), Some(3));
        assert_eq!(merged.get("工作"), Some(2));
        assert_eq!(merged.total(), 5);
        assert_eq!(merged.total(), sum_per_key(&merged));
    }
}
