//! 編集履歴スタック
//!
//! バッファ全体のスナップショットを積む線形履歴。
//! 先頭には初期状態の番兵スナップショットが常に残り、それより前には戻れない。

/// 編集履歴スタック
#[derive(Debug, Clone)]
pub struct HistoryStack {
    /// 編集前スナップショット（古い順、先頭は番兵）
    undo: Vec<String>,
    /// やり直し用スナップショット（新しいものが末尾）
    redo: Vec<String>,
}

impl HistoryStack {
    /// 初期スナップショットを番兵として持つ履歴を作成
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            undo: vec![initial.into()],
            redo: Vec::new(),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.undo.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// 取り消し可能な件数（番兵は含まない）
    pub fn undo_depth(&self) -> usize {
        self.undo.len() - 1
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// スナップショットを積む（やり直し列はそのまま）
    pub fn push_snapshot(&mut self, state: String) {
        self.undo.push(state);
    }

    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    /// 新しい編集を記録する
    ///
    /// 編集前の状態を積み、やり直し列を破棄する。
    pub fn record(&mut self, before: String) {
        self.push_snapshot(before);
        self.clear_redo();
    }

    /// 一段取り消す
    ///
    /// `current` をやり直し列へ移し、直前のスナップショットを返す。
    /// 番兵しか残っていなければ何もせず `None`。
    pub fn undo_once(&mut self, current: String) -> Option<String> {
        if !self.can_undo() {
            return None;
        }
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// 一段やり直す
    ///
    /// `current` を履歴へ戻し、直近のやり直しスナップショットを返す。
    pub fn redo_once(&mut self, current: String) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_sentinel_only() {
        let history = HistoryStack::default();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo_depth(), 0);
    }

    #[test]
    fn undo_blocked_at_sentinel() {
        let mut history = HistoryStack::default();
        assert_eq!(history.undo_once("abc".to_string()), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_then_redo_moves_one_state() {
        let mut history = HistoryStack::default();
        history.record(String::new());
        history.record("a".to_string());

        assert_eq!(history.undo_once("ab".to_string()).as_deref(), Some("a"));
        assert_eq!(history.redo_depth(), 1);
        assert_eq!(history.undo_once("a".to_string()).as_deref(), Some(""));
        assert!(!history.can_undo());

        assert_eq!(history.redo_once(String::new()).as_deref(), Some("a"));
        assert_eq!(history.redo_once("a".to_string()).as_deref(), Some("ab"));
        assert_eq!(history.redo_once("ab".to_string()), None);
        assert_eq!(history.undo_depth(), 2);
    }

    #[test]
    fn record_discards_redo_branch() {
        let mut history = HistoryStack::default();
        history.record(String::new());
        history.undo_once("x".to_string());
        assert!(history.can_redo());

        history.record(String::new());
        assert!(!history.can_redo());
    }
}
