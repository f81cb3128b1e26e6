//! 座標解決
//!
//! (行, 行内シンボル位置) の組をバッファ先頭からの絶対オフセットへ変換する。
//! すべての編集操作はこのモジュールを経由して位置を求める。

use crate::error::{buffer::Result, BufferError};

/// 改行文字
pub const LINE_BREAK: char = '\n';

/// 行と行内シンボル位置で表す座標
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    /// 行番号（0ベース）
    pub line: usize,
    /// 行内のシンボル位置（0ベース）
    pub symbol_index: usize,
}

impl Coordinate {
    pub fn new(line: usize, symbol_index: usize) -> Self {
        Self { line, symbol_index }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.symbol_index)
    }
}

/// 座標を文字オフセットに解決する
///
/// 先頭から走査し、改行ごとに行を進めて列を0に戻す。
/// 座標が一致した最初の位置を返す。末尾（`len`）も位置として扱うため、
/// 最終行の長さや最後の改行の直後 `(行数, 0)` も解決できる。
pub fn resolve(text: &str, at: Coordinate) -> Result<usize> {
    let mut line = 0usize;
    let mut column = 0usize;
    let mut offset = 0usize;

    for ch in text.chars() {
        if line == at.line && column == at.symbol_index {
            return Ok(offset);
        }
        if line > at.line {
            break;
        }
        if ch == LINE_BREAK {
            line += 1;
            column = 0;
        } else {
            column += 1;
        }
        offset += 1;
    }

    if line == at.line && column == at.symbol_index {
        return Ok(offset);
    }

    Err(BufferError::PositionNotFound {
        line: at.line,
        symbol_index: at.symbol_index,
    })
}

/// 文字オフセットから座標を逆算する（オフセットは末尾で打ち切り）
pub fn coordinate_of(text: &str, offset: usize) -> Coordinate {
    let mut coordinate = Coordinate::default();

    for ch in text.chars().take(offset) {
        if ch == LINE_BREAK {
            coordinate.line += 1;
            coordinate.symbol_index = 0;
        } else {
            coordinate.symbol_index += 1;
        }
    }

    coordinate
}

/// バッファ末尾を指す座標
pub fn end_coordinate(text: &str) -> Coordinate {
    coordinate_of(text, usize::MAX)
}

/// 文字オフセットをバイト位置に変換
pub(crate) fn char_to_byte(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
