use super::types::SearchMatch;
use crate::buffer::LINE_BREAK;
use regex::RegexBuilder;

pub type RegexError = regex::Error;

/// 正規表現で検索し、文字単位の位置と行・列を返す
///
/// 複数行モードで評価する。空マッチは報告しない。
pub fn find_regex(text: &str, pattern: &str) -> Result<Vec<SearchMatch>, RegexError> {
    let regex = RegexBuilder::new(pattern)
        .multi_line(true)
        .dot_matches_new_line(false)
        .build()?;

    let mut results = Vec::new();
    let mut scanned_bytes = 0usize;
    let mut scanned_chars = 0usize;
    let mut line = 0usize;
    let mut column = 0usize;

    for mat in regex.find_iter(text) {
        if mat.start() == mat.end() {
            continue;
        }
        // 前回のマッチ位置から行・列を進める
        for ch in text[scanned_bytes..mat.start()].chars() {
            scanned_chars += 1;
            if ch == LINE_BREAK {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }
        scanned_bytes = mat.start();

        let start = scanned_chars;
        results.push(SearchMatch {
            start,
            end: start + mat.as_str().chars().count(),
            line,
            column,
        });
    }

    Ok(results)
}
