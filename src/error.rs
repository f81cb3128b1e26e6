//! エラーハンドリングシステム
//!
//! linepad 全体で使用される統一されたエラー型を定義
//! コア操作の失敗はすべて呼び出し側で回復可能（致命的エラーは存在しない）

use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinepadError {
    /// バッファ操作エラー
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// ファイル操作エラー
    #[error(transparent)]
    File(#[from] FileError),

    /// 入力処理エラー
    #[error(transparent)]
    Input(#[from] InputError),

    /// 設定エラー
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// バッファ操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("Position not found: line {line}, symbol {symbol_index}")]
    PositionNotFound { line: usize, symbol_index: usize },

    #[error("Invalid count: {count}")]
    InvalidCount { count: i64 },

    #[error("Range too large: {count} symbols from offset {offset} exceeds length {len}")]
    RangeTooLarge {
        offset: usize,
        count: usize,
        len: usize,
    },

    #[error("Invalid position: offset {offset} is outside text of length {len}")]
    InvalidPosition { offset: usize, len: usize },
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    #[error("Encoding error: {message}")]
    Encoding { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// 入力処理固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid argument: {arg}")]
    InvalidArgument { arg: String },

    #[error("Command not found: {command}")]
    CommandNotFound { command: String },

    #[error("Unexpected end of input")]
    EndOfInput,
}

/// 設定固有のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration file {path}: {message}")]
    InvalidFile { path: String, message: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, LinepadError>;

/// 各モジュール固有のResult型
pub mod file {
    pub type Result<T> = std::result::Result<T, super::FileError>;
}

pub mod buffer {
    pub type Result<T> = std::result::Result<T, super::BufferError>;
}

// std::io::Error から LinepadError への変換
impl From<std::io::Error> for LinepadError {
    fn from(error: std::io::Error) -> Self {
        LinepadError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

impl FileError {
    /// I/Oエラーを対象パス付きのファイルエラーに分類
    pub fn from_io(error: &std::io::Error, path: &str) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => FileError::NotFound {
                path: path.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => FileError::PermissionDenied {
                path: path.to_string(),
            },
            _ => FileError::Io {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_error_message() {
        let error = LinepadError::from(BufferError::PositionNotFound {
            line: 5,
            symbol_index: 0,
        });
        assert_eq!(error.to_string(), "Position not found: line 5, symbol 0");
    }

    #[test]
    fn test_io_error_classification() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(
            FileError::from_io(&not_found, "a.txt"),
            FileError::NotFound {
                path: "a.txt".to_string()
            }
        );

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            FileError::from_io(&denied, "b.txt"),
            FileError::PermissionDenied { .. }
        ));

        let other = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert!(matches!(FileError::from_io(&other, "c.txt"), FileError::Io { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let error: LinepadError = io_error.into();
        assert!(matches!(error, LinepadError::File(FileError::Io { .. })));
    }
}
