//! 辞書行の書式定義

use serde::{Deserialize, Serialize};

/// 辞書行の書式タグ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatTag {
    /// CC-Canto: `[PINYIN] {JYUTPING} /ENG/.../`
    CantoHybrid,
    /// CC-CEDICT: `[PINYIN] /ENG/.../`
    RomanizedGloss,
    /// CC-CEDICT-Canto: `[PINYIN] {JYUTPING}`
    HybridBracketed,
    /// どの書式にも一致しない
    Unrecognized,
}

impl FormatTag {
    /// 判定の優先順（`Unrecognized` は最後のフォールバック）
    pub const ALL: [Self; 4] = [
        Self::CantoHybrid,
        Self::RomanizedGloss,
        Self::HybridBracketed,
        Self::Unrecognized,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CantoHybrid => "canto-hybrid",
            Self::RomanizedGloss => "romanized-gloss",
            Self::HybridBracketed => "hybrid-bracketed",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for FormatTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 分類結果。書式ごとに捕捉した生の部分文字列を保持する（未分割）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat<'a> {
    CantoHybrid {
        /// 波括弧の中身
        pronunciations: &'a str,
        /// 先頭の `/` から行末まで
        glosses: &'a str,
    },
    RomanizedGloss {
        glosses: &'a str,
    },
    HybridBracketed,
    Unrecognized,
}

impl LineFormat<'_> {
    #[must_use]
    pub const fn tag(&self) -> FormatTag {
        match self {
            Self::CantoHybrid { .. } => FormatTag::CantoHybrid,
            Self::RomanizedGloss { .. } => FormatTag::RomanizedGloss,
            Self::HybridBracketed => FormatTag::HybridBracketed,
            Self::Unrecognized => FormatTag::Unrecognized,
        }
    }
}
