#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

//! CC-CEDICT / CC-Canto 辞書ソース行の分類とエントリ数集計
//!
//! 1 行の辞書ソースは複数の読み × 複数の英訳を含みうるため、
//! 行ごとに書式を判定し、その行が表すエントリ数を数える。

pub mod classifier;
pub mod count;
pub mod entry;
pub mod fields;
pub mod format;
pub mod report;
pub mod tally;

pub use classifier::classify;
pub use count::{entry_count, line_entry_count};
pub use entry::{DictEntry, parse_dict_line};
pub use format::{FormatTag, LineFormat};
pub use report::{KeyOrder, report_lines, write_report};
pub use tally::{EntryTally, LineOutcome, headword_key};
