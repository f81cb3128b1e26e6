//! クリップボード実装

/// 単一スロットのクリップボード。
///
/// コピー・カットで上書きされ、貼り付けでは消費されない。
#[derive(Debug, Default, Clone)]
pub struct Clipboard {
    content: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 内容を上書き
    pub fn store(&mut self, text: String) {
        self.content = text;
    }

    /// 現在の内容（空なら `None`）
    pub fn content(&self) -> Option<&str> {
        if self.content.is_empty() {
            None
        } else {
            Some(&self.content)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
