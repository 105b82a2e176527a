//! 辞書行の書式判定
//!
//! 3 つの文法を優先順に試し、最初に一致したものを採用する。
//! 文法同士は排他的ではないため、順序を変えてはならない。
//!
//! - CantoHybrid: `{...}` + 空白 + `/...`
//!   波括弧は最短一致。読みの中に余分な `}` を含む既知の不正行
//!   (`{can4 wai6} lam4} /...`) でも、空白と `/` が続く最初の `}` を境界とする。
//! - RomanizedGloss: `[...]` + 空白 + `/...`
//! - HybridBracketed: `[...]` + 空白 + `{...}` で行が終わる

use regex::Regex;
use std::sync::OnceLock;

use crate::format::LineFormat;

fn canto_hybrid_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{(.*?)\}\s+(/.*)").unwrap())
}

fn romanized_gloss_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]\s+(/.*)").unwrap())
}

fn hybrid_bracketed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\[[^\]]*\]\s+\{.*\}\s*$").unwrap())
}

/// 1 行を分類する
///
/// 全域関数: 一致しない行は `LineFormat::Unrecognized` を返す（エラーではない）。
/// コメント行の除外は呼び出し側の責務。
#[must_use]
pub fn classify(line: &str) -> LineFormat<'_> {
    if let Some(caps) = canto_hybrid_re().captures(line)
        && let (Some(pron), Some(gloss)) = (caps.get(1), caps.get(2))
    {
        return LineFormat::CantoHybrid {
            pronunciations: pron.as_str(),
            glosses: gloss.as_str(),
        };
    }

    if let Some(gloss) = romanized_gloss_re()
        .captures(line)
        .and_then(|caps| caps.get(1))
    {
        return LineFormat::RomanizedGloss {
            glosses: gloss.as_str(),
        };
    }

    if hybrid_bracketed_re().is_match(line) {
        return LineFormat::HybridBracketed;
    }

    LineFormat::Unrecognized
}
