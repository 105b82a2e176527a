//! 複合フィールド（読み・英訳）の分割とコメント判定

/// サブフィールドの区切り文字
pub const DELIMITER: char = '/';

/// コメント開始文字
pub const COMMENT_MARKER: char = '#';

/// 複合フィールドを区切り文字で分割する
///
/// 空文字列は空のサブフィールド 1 つになる。
pub fn split_on_delimiter(field: &str) -> impl Iterator<Item = &str> {
    field.split(DELIMITER)
}

/// サブフィールドがエントリとして数えられるか
///
/// 先頭の空白を除いた結果が空でなく、かつ `#` で始まらないもの。
/// 空白のみのサブフィールドは数えない。
#[must_use]
pub fn is_countable(subfield: &str) -> bool {
    subfield
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c != COMMENT_MARKER)
}

/// 数えられるサブフィールドの個数
#[must_use]
pub fn count_countable(field: &str) -> usize {
    split_on_delimiter(field).filter(|s| is_countable(s)).count()
}

/// 行全体がコメントか（最初の非空白文字が `#`）
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}
