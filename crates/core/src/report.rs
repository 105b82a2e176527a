//! 集計結果のテキスト出力
//!
//! 詳細モードでは `見出し語\t件数` を 1 行ずつ出力し、最後に合計を出す。
//! 見出し語の順序は既定では未定義（`KeyOrder::Unordered`）。

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::tally::EntryTally;

/// 詳細出力での見出し語の並び
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyOrder {
    /// ハッシュマップの反復順（保証なし）
    #[default]
    Unordered,
    /// 見出し語の昇順
    Sorted,
}

/// レポートを行の列として生成する
#[must_use]
pub fn report_lines(tally: &EntryTally, verbose: bool, order: KeyOrder) -> Vec<String> {
    let mut lines = Vec::with_capacity(if verbose { tally.len() + 1 } else { 1 });

    if verbose {
        let mut entries: Vec<_> = tally.iter().collect();
        if order == KeyOrder::Sorted {
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        lines.extend(entries.into_iter().map(|(key, count)| format!("{key}\t{count}")));
    }

    lines.push(tally.total().to_string());
    lines
}

/// レポートを書き出す
///
/// # Errors
/// 書き込みに失敗した場合
pub fn write_report<W: Write>(
    writer: &mut W,
    tally: &EntryTally,
    verbose: bool,
    order: KeyOrder,
) -> io::Result<()> {
    for line in report_lines(tally, verbose, order) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
