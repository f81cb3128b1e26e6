//! テキストバッファ
//!
//! 文字列本体・編集履歴・クリップボードを所有し、座標指定の編集操作を提供する。
//! 成功した編集はすべて編集前スナップショットを1件だけ履歴に積む。
//! 失敗した編集は本体・履歴のどちらも変更しない。

use super::clipboard::Clipboard;
use super::coordinate::{self, char_to_byte, Coordinate, LINE_BREAK};
use super::history::HistoryStack;
use crate::error::{buffer::Result, BufferError};

/// テキストバッファのメイン構造体
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    /// 文書全体（改行を内容として含む）
    text: String,
    /// 編集履歴
    history: HistoryStack,
    /// クリップボード
    clipboard: Clipboard,
}

impl TextBuffer {
    /// 空のバッファを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 文字列からバッファを作成（その内容が履歴の起点になる）
    pub fn from_str(s: &str) -> Self {
        Self {
            text: s.to_string(),
            history: HistoryStack::new(s),
            clipboard: Clipboard::new(),
        }
    }

    /// 現在の内容のコピーを取得
    pub fn snapshot(&self) -> String {
        self.text.clone()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// 文字数
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// 行数（空バッファでも1行）
    pub fn line_count(&self) -> usize {
        self.text.matches(LINE_BREAK).count() + 1
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// 座標を文字オフセットに解決
    pub fn resolve(&self, at: Coordinate) -> Result<usize> {
        coordinate::resolve(&self.text, at)
    }

    /// 末尾の座標
    pub fn end_coordinate(&self) -> Coordinate {
        coordinate::end_coordinate(&self.text)
    }

    /// 指定座標に文字列を挿入
    pub fn insert(&mut self, at: Coordinate, text: &str) -> Result<()> {
        let offset = self.resolve(at).map_err(|e| rejected("insert", e))?;
        self.splice_insert(offset, text);
        log::debug!("insert {} symbols at {}", text.chars().count(), at);
        Ok(())
    }

    /// 指定座標から `count` 文字を削除し、削除した文字列を返す
    pub fn delete(&mut self, at: Coordinate, count: usize) -> Result<String> {
        if count == 0 {
            return Err(rejected("delete", BufferError::InvalidCount { count: 0 }));
        }
        let offset = self.resolve(at).map_err(|e| rejected("delete", e))?;
        let len = self.len_chars();
        if offset.checked_add(count).map_or(true, |end| end > len) {
            return Err(rejected(
                "delete",
                BufferError::RangeTooLarge { offset, count, len },
            ));
        }

        let removed = self.splice_remove(offset, count);
        log::debug!("delete {} symbols at {}", count, at);
        Ok(removed)
    }

    /// 指定座標から `new_text` の文字数分を上書き
    ///
    /// 上書き範囲が末尾を超える場合はバッファを延長する。
    /// 座標が解決できない場合は末尾扱いとなり `InvalidPosition` で失敗する。
    pub fn replace(&mut self, at: Coordinate, new_text: &str) -> Result<()> {
        let len = self.len_chars();
        let offset = self.resolve(at).unwrap_or(len);
        if offset >= len {
            return Err(rejected(
                "replace",
                BufferError::InvalidPosition { offset, len },
            ));
        }

        let end = (offset + new_text.chars().count()).min(len);
        let start_byte = char_to_byte(&self.text, offset);
        let end_byte = char_to_byte(&self.text, end);

        let mut updated = self.text.clone();
        updated.replace_range(start_byte..end_byte, new_text);
        self.commit(updated);
        log::debug!("replace {} symbols at {}", end - offset, at);
        Ok(())
    }

    /// 範囲をクリップボードに移して削除
    ///
    /// 範囲外・件数0の場合は何も変更せず `None`。
    pub fn cut(&mut self, at: Coordinate, count: usize) -> Option<String> {
        let offset = self.checked_span(at, count)?;
        let removed = self.splice_remove(offset, count);
        self.clipboard.store(removed.clone());
        log::debug!("cut {} symbols at {}", count, at);
        Some(removed)
    }

    /// 範囲をクリップボードにコピー（履歴は変化しない）
    pub fn copy(&mut self, at: Coordinate, count: usize) -> Option<String> {
        let offset = self.checked_span(at, count)?;
        let start = char_to_byte(&self.text, offset);
        let end = char_to_byte(&self.text, offset + count);
        let copied = self.text[start..end].to_string();
        self.clipboard.store(copied.clone());
        log::debug!("copy {} symbols at {}", count, at);
        Some(copied)
    }

    /// クリップボードの内容を挿入
    ///
    /// クリップボードが空なら何もせず `Ok(false)`。
    pub fn paste(&mut self, at: Coordinate) -> Result<bool> {
        let Some(content) = self.clipboard.content().map(str::to_string) else {
            return Ok(false);
        };
        let offset = self.resolve(at).map_err(|e| rejected("paste", e))?;
        self.splice_insert(offset, &content);
        log::debug!("paste {} symbols at {}", content.chars().count(), at);
        Ok(true)
    }

    /// 末尾に追記
    pub fn append(&mut self, text: &str) {
        let mut updated = self.text.clone();
        updated.push_str(text);
        self.commit(updated);
        log::debug!("append {} symbols", text.chars().count());
    }

    /// 末尾に改行を追加
    pub fn append_new_line(&mut self) {
        let mut line_break = [0u8; 4];
        self.append(LINE_BREAK.encode_utf8(&mut line_break));
    }

    /// 内容全体を置き換える（1回の編集として記録）
    pub fn replace_all(&mut self, content: String) {
        log::debug!("replace whole text with {} bytes", content.len());
        self.commit(content);
    }

    /// 一段取り消す（取り消せなければ `false`）
    pub fn undo(&mut self) -> bool {
        let current = self.text.clone();
        match self.history.undo_once(current) {
            Some(previous) => {
                self.text = previous;
                log::debug!("undo (remaining {})", self.history.undo_depth());
                true
            }
            None => false,
        }
    }

    /// 一段やり直す（やり直せなければ `false`）
    pub fn redo(&mut self) -> bool {
        let current = self.text.clone();
        match self.history.redo_once(current) {
            Some(next) => {
                self.text = next;
                log::debug!("redo (remaining {})", self.history.redo_depth());
                true
            }
            None => false,
        }
    }

    /// 編集前の状態を履歴に積み、新しい内容を反映
    fn commit(&mut self, updated: String) {
        let before = std::mem::replace(&mut self.text, updated);
        self.history.record(before);
    }

    fn splice_insert(&mut self, offset: usize, text: &str) {
        let byte_idx = char_to_byte(&self.text, offset);
        let mut updated = self.text.clone();
        updated.insert_str(byte_idx, text);
        self.commit(updated);
    }

    fn splice_remove(&mut self, offset: usize, count: usize) -> String {
        let start = char_to_byte(&self.text, offset);
        let end = char_to_byte(&self.text, offset + count);
        let mut updated = self.text.clone();
        let removed: String = updated.drain(start..end).collect();
        self.commit(updated);
        removed
    }

    /// カット・コピー用の範囲検査
    fn checked_span(&self, at: Coordinate, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let offset = self.resolve(at).ok()?;
        if offset
            .checked_add(count)
            .map_or(true, |end| end > self.len_chars())
        {
            return None;
        }
        Some(offset)
    }
}

fn rejected(operation: &str, error: BufferError) -> BufferError {
    log::warn!("{} rejected: {}", operation, error);
    error
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize, symbol_index: usize) -> Coordinate {
        Coordinate::new(line, symbol_index)
    }

    #[test]
    fn test_insert_at_end_of_line() {
        let mut buffer = TextBuffer::from_str("foo");
        buffer.insert(at(0, 3), "X").unwrap();
        assert_eq!(buffer.snapshot(), "fooX");
    }

    #[test]
    fn test_insert_uses_line_scan() {
        let mut buffer = TextBuffer::from_str("abc\ndef");
        buffer.insert(at(1, 1), "X").unwrap();
        assert_eq!(buffer.snapshot(), "abc\ndXef");
    }

    #[test]
    fn test_insert_unresolvable_keeps_state() {
        let mut buffer = TextBuffer::from_str("foo");
        let result = buffer.insert(at(5, 0), "X");
        assert_eq!(
            result,
            Err(BufferError::PositionNotFound {
                line: 5,
                symbol_index: 0
            })
        );
        assert_eq!(buffer.snapshot(), "foo");
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_delete_validations() {
        let mut buffer = TextBuffer::from_str("abc");
        assert_eq!(
            buffer.delete(at(0, 0), 10),
            Err(BufferError::RangeTooLarge {
                offset: 0,
                count: 10,
                len: 3
            })
        );
        assert_eq!(
            buffer.delete(at(0, 0), 0),
            Err(BufferError::InvalidCount { count: 0 })
        );
        assert!(matches!(
            buffer.delete(at(1, 0), 1),
            Err(BufferError::PositionNotFound { .. })
        ));
        assert_eq!(buffer.snapshot(), "abc");
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_delete_across_line_break() {
        let mut buffer = TextBuffer::from_str("ab\ncd");
        assert_eq!(buffer.delete(at(0, 1), 3).unwrap(), "b\nc");
        assert_eq!(buffer.snapshot(), "ad");
    }

    #[test]
    fn test_replace_overwrites_and_extends() {
        let mut buffer = TextBuffer::from_str("hello\nworld");
        buffer.replace(at(1, 0), "W").unwrap();
        assert_eq!(buffer.snapshot(), "hello\nWorld");

        buffer.replace(at(1, 3), "LDWIDE").unwrap();
        assert_eq!(buffer.snapshot(), "hello\nWorLDWIDE");
    }

    #[test]
    fn test_replace_invalid_position() {
        let mut buffer = TextBuffer::from_str("abc");
        assert_eq!(
            buffer.replace(at(0, 3), "x"),
            Err(BufferError::InvalidPosition { offset: 3, len: 3 })
        );
        // 解決できない座標は先頭ではなく末尾扱い
        assert_eq!(
            buffer.replace(at(4, 0), "x"),
            Err(BufferError::InvalidPosition { offset: 3, len: 3 })
        );
        assert_eq!(buffer.snapshot(), "abc");
    }

    #[test]
    fn test_cut_and_paste_restore() {
        let mut buffer = TextBuffer::from_str("one\ntwo");
        assert_eq!(buffer.cut(at(1, 0), 2).as_deref(), Some("tw"));
        assert_eq!(buffer.snapshot(), "one\no");
        assert_eq!(buffer.paste(at(1, 0)), Ok(true));
        assert_eq!(buffer.snapshot(), "one\ntwo");
    }

    #[test]
    fn test_cut_copy_fail_silently() {
        let mut buffer = TextBuffer::from_str("abc");
        assert_eq!(buffer.cut(at(0, 1), 0), None);
        assert_eq!(buffer.copy(at(0, 1), 5), None);
        assert_eq!(buffer.cut(at(3, 0), 1), None);
        assert_eq!(buffer.snapshot(), "abc");
        assert!(buffer.clipboard().is_empty());
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_copy_does_not_record_history() {
        let mut buffer = TextBuffer::from_str("abc");
        assert_eq!(buffer.copy(at(0, 0), 2).as_deref(), Some("ab"));
        assert!(!buffer.can_undo());
        buffer.paste(at(0, 3)).unwrap();
        assert_eq!(buffer.snapshot(), "abcab");
        assert_eq!(buffer.clipboard().content(), Some("ab"));
    }

    #[test]
    fn test_paste_empty_clipboard_is_noop() {
        let mut buffer = TextBuffer::from_str("abc");
        assert_eq!(buffer.paste(at(9, 9)), Ok(false));
        assert!(!buffer.can_undo());
    }

    #[test]
    fn test_append_and_new_line() {
        let mut buffer = TextBuffer::new();
        buffer.append("first");
        buffer.append_new_line();
        buffer.append("second");
        assert_eq!(buffer.snapshot(), "first\nsecond");
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.end_coordinate(), at(1, 6));
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut buffer = TextBuffer::new();
        buffer.append("a");
        buffer.append("b");

        assert!(buffer.undo());
        assert_eq!(buffer.snapshot(), "a");
        assert!(buffer.undo());
        assert_eq!(buffer.snapshot(), "");
        assert!(!buffer.undo());

        assert!(buffer.redo());
        assert!(buffer.redo());
        assert_eq!(buffer.snapshot(), "ab");
        assert!(!buffer.redo());
    }

    #[test]
    fn test_new_edit_clears_redo() {
        let mut buffer = TextBuffer::new();
        buffer.append("a");
        buffer.undo();
        buffer.append("x");
        assert!(!buffer.redo());
        assert_eq!(buffer.snapshot(), "x");
    }

    #[test]
    fn test_replace_all_is_one_edit() {
        let mut buffer = TextBuffer::from_str("old");
        buffer.replace_all("new\ncontent".to_string());
        assert_eq!(buffer.snapshot(), "new\ncontent");
        assert!(buffer.undo());
        assert_eq!(buffer.snapshot(), "old");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut buffer = TextBuffer::from_str("あいう\nえお");
        buffer.insert(at(1, 1), "X").unwrap();
        assert_eq!(buffer.snapshot(), "あいう\nえXお");
        assert_eq!(buffer.delete(at(0, 1), 2).unwrap(), "いう");
        assert_eq!(buffer.snapshot(), "あ\nえXお");
    }

    #[test]
    fn test_huge_count_is_rejected_without_overflow() {
        let mut buffer = TextBuffer::from_str("abc");
        assert_eq!(
            buffer.delete(at(0, 1), usize::MAX),
            Err(BufferError::RangeTooLarge {
                offset: 1,
                count: usize::MAX,
                len: 3
            })
        );
        assert_eq!(buffer.cut(at(0, 1), usize::MAX), None);
        assert_eq!(buffer.copy(at(0, 1), usize::MAX), None);
        assert_eq!(buffer.snapshot(), "abc");
        assert!(!buffer.can_undo());
        assert!(buffer.clipboard().is_empty());
    }
}
