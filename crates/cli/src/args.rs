// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueHint};

use crate::options::OutputFormat;
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "ccdict_count",
    version = crate::VERSION,
    about = "CC-CEDICT / CC-Canto 辞書ソースのエントリ数集計ツール"
)]
pub struct Args {
    /// 辞書ソースファイル（省略時または `-` で標準入力）
    #[arg(value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,
}

/// Output-related options
#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// 見出し語ごとの件数を出力してから合計を出力
    #[arg(short, long, help_heading = "出力")]
    pub verbose: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,

    /// 見出し語を昇順に並べる（既定では順序不定）
    #[arg(long, help_heading = "出力")]
    pub sort_keys: bool,

    /// 集計せず、各行を 1 読み × 1 英訳のエントリに展開して JSON Lines で出力
    #[arg(long, conflicts_with = "check", help_heading = "モード")]
    pub entries: bool,

    /// 集計結果とエントリ展開結果の件数を行ごとに突き合わせる（不一致があれば失敗）
    #[arg(long, help_heading = "モード")]
    pub check: bool,
}

/// Execution behavior options
#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// 並列度（既定: CPU 数）
    #[arg(short, long, value_parser = parsers::parse_positive_usize, help_heading = "動作")]
    pub jobs: Option<usize>,

    /// 読み込めない入力があれば即座に失敗
    #[arg(long, help_heading = "動作")]
    pub strict: bool,

    /// ソースごとに処理する行数の上限（--entries のみ）
    #[arg(long, requires = "entries", value_parser = parsers::parse_positive_usize, help_heading = "動作")]
    pub max_entries: Option<usize>,
}
