//! バッファ管理モジュール
//!
//! テキスト本体、座標解決、編集履歴、クリップボードを提供

pub mod clipboard;
pub mod coordinate;
pub mod history;
pub mod text_buffer;

// 公開API
pub use clipboard::Clipboard;
pub use coordinate::{coordinate_of, end_coordinate, resolve, Coordinate, LINE_BREAK};
pub use history::HistoryStack;
pub use text_buffer::TextBuffer;
pub use crate::error::BufferError;
