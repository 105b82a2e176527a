//! 辞書行を 1 読み × 1 英訳のエントリへ展開する
//!
//! 対応する書式:
//!   CC-CEDICT:       TRAD SIMP [PINYIN] /ENG 1/ENG 2/.../ENG N/
//!   CC-Canto:        TRAD SIMP [PINYIN] {JYUTPING} /ENG 1/.../ENG N/ # COMMENT
//!   CC-CEDICT-Canto: TRAD SIMP [PINYIN] {JYUTPING}
//!
//! 件数の集計（`count`）とは独立した文法で、展開結果の件数は
//! 集計結果との突き合わせに使える。

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::fields::{COMMENT_MARKER, DELIMITER};

/// 1 つの読みと 1 つの英訳を対応づけたエントリ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: Option<String>,
    pub jyutping: Option<String>,
    pub english: Option<String>,
    pub comment: Option<String>,
}

fn dict_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<traditional>\S+)\s+(?P<simplified>\S+)\s+",
            r"\[(?P<pinyin>[^\]]*)\]\s+",
            r"(\{(?P<jyutping>[^}]+)\})?\s*",
            r"(/(?P<english>.*)/)?\s*",
            r"(#\s+(?P<comment>.*$))?",
        ))
        .unwrap()
    })
}

/// `/` 区切りの値を分割し、前後の空白を除いて空のものを捨てる
fn split_values(field: &str) -> impl Iterator<Item = &str> {
    field.split(DELIMITER).map(str::trim).filter(|s| !s.is_empty())
}

/// 辞書行をエントリに展開する
///
/// 読み × 英訳の直積を返す。欠けているグループは `None` 1 つとして扱う。
/// 文法に一致しない行は `None`。
#[must_use]
pub fn parse_dict_line(line: &str) -> Option<Vec<DictEntry>> {
    if line.trim_start().starts_with(COMMENT_MARKER) {
        return None;
    }
    let caps = dict_line_re().captures(line)?;

    let traditional = caps.name("traditional")?.as_str();
    let simplified = caps.name("simplified")?.as_str();
    let pinyin = caps
        .name("pinyin")
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);
    let comment = caps.name("comment").map(|m| m.as_str().to_owned());

    let jyutpings: Vec<Option<String>> = match caps.name("jyutping") {
        Some(m) => split_values(m.as_str())
            .map(|s| Some(s.to_lowercase()))
            .collect(),
        None => vec![None],
    };
    let glosses: Vec<Option<String>> = match caps.name("english") {
        Some(m) if !m.as_str().is_empty() => {
            split_values(m.as_str()).map(|s| Some(s.to_owned())).collect()
        }
        _ => vec![None],
    };

    let (pinyin, comment) = (&pinyin, &comment);
    let entries = jyutpings
        .iter()
        .flat_map(|jyutping| {
            glosses.iter().map(move |english| DictEntry {
                traditional: traditional.to_owned(),
                simplified: simplified.to_owned(),
                pinyin: pinyin.clone(),
                jyutping: jyutping.clone(),
                english: english.clone(),
                comment: comment.clone(),
            })
        })
        .collect();

    Some(entries)
}
