//! ファイル操作モジュール
//!
//! バッファ内容の保存・読み込みとパス展開

pub mod io;

pub use io::{expand_path, load, save, FileBridge, FsBridge};
