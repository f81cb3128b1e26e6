//! リテラル検索

use super::types::SearchMatch;
use crate::buffer::LINE_BREAK;
use std::str::CharIndices;

/// テキスト中の `needle` をすべて列挙する遅延イテレータを返す
///
/// 大文字小文字を区別する。空の `needle` はマッチなし。
/// 各位置で前方一致を試すため、重なったマッチもそれぞれ報告される。
pub fn search<'a>(text: &'a str, needle: &'a str) -> Matches<'a> {
    Matches {
        text,
        needle,
        needle_len: needle.chars().count(),
        chars: text.char_indices(),
        offset: 0,
        line: 0,
        column: 0,
    }
}

/// 検索結果のイテレータ（一度走査したら再利用できない）
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text: &'a str,
    needle: &'a str,
    needle_len: usize,
    chars: CharIndices<'a>,
    offset: usize,
    line: usize,
    column: usize,
}

impl Iterator for Matches<'_> {
    type Item = SearchMatch;

    fn next(&mut self) -> Option<Self::Item> {
        if self.needle.is_empty() {
            return None;
        }

        for (byte_idx, ch) in self.chars.by_ref() {
            let (start, line, column) = (self.offset, self.line, self.column);

            self.offset += 1;
            if ch == LINE_BREAK {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }

            if self.text[byte_idx..].starts_with(self.needle) {
                return Some(SearchMatch {
                    start,
                    end: start + self.needle_len,
                    line,
                    column,
                });
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::search;

    #[test]
    fn finds_matches_on_each_line() {
        let result: Vec<_> = search("xaby\nzaby", "ab").collect();
        assert_eq!(result.len(), 2);
        assert_eq!((result[0].line, result[0].column), (0, 1));
        assert_eq!((result[1].line, result[1].column), (1, 1));
        assert_eq!(result[1].start, 6);
        assert_eq!(result[1].len(), 2);
    }

    #[test]
    fn empty_needle_has_no_matches() {
        assert_eq!(search("abc", "").count(), 0);
        assert_eq!(search("", "").count(), 0);
    }

    #[test]
    fn returns_empty_for_non_match() {
        assert_eq!(search("abc", "z").count(), 0);
        assert_eq!(search("ab", "abc").count(), 0);
    }

    #[test]
    fn is_case_sensitive() {
        assert_eq!(search("Hello hello", "hello").count(), 1);
    }

    #[test]
    fn reports_overlapping_matches() {
        let starts: Vec<_> = search("aaaa", "aa").map(|m| m.start).collect();
        assert_eq!(starts, vec![0, 1, 2]);
    }

    #[test]
    fn matches_across_line_break() {
        let result: Vec<_> = search("ab\ncd", "b\nc").collect();
        assert_eq!(result.len(), 1);
        assert_eq!((result[0].line, result[0].column), (0, 1));
    }

    #[test]
    fn handles_multibyte_columns() {
        let result: Vec<_> = search("あいう\nいい", "い").collect();
        let positions: Vec<_> = result.iter().map(|m| (m.line, m.column)).collect();
        assert_eq!(positions, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn is_lazy_and_single_pass() {
        let mut matches = search("ab ab ab", "ab");
        assert_eq!(matches.next().map(|m| m.start), Some(0));
        assert_eq!(matches.count(), 2);
    }
}
