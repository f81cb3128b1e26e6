//! linepad - 行・シンボル位置指定のテキストバッファエディタ
//!
//! 単一バッファに対する座標指定の編集、線形の取り消し・やり直し履歴、
//! クリップボード操作、行単位の検索を提供する。

// コアモジュール
pub mod config;
pub mod error;
pub mod logging;

// データ層
pub mod buffer;
pub mod file;

// ロジック層
pub mod command;
pub mod search;

// 表示層
pub mod app;

// 公開API
pub use app::App;
pub use buffer::{Coordinate, TextBuffer};
pub use config::EditorConfig;
pub use error::{LinepadError, Result};
