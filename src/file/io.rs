//! ファイルI/O操作
//!
//! バッファ内容の保存と読み込み。内容はバイト単位でそのまま書き出し、
//! 末尾に改行を追加しない。

use crate::error::{file::Result, FileError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// ファイル入出力の境界
pub trait FileBridge {
    /// 内容をファイルへ保存（既存内容は切り詰める）
    fn save(&self, path: &Path, content: &str) -> Result<()>;

    /// ファイル全体を読み込む
    fn load(&self, path: &Path) -> Result<String>;
}

/// ローカルファイルシステムによる実装
#[derive(Debug, Default, Clone, Copy)]
pub struct FsBridge;

impl FileBridge for FsBridge {
    fn save(&self, path: &Path, content: &str) -> Result<()> {
        let display = path.display().to_string();

        let mut file = fs::File::create(path).map_err(|e| FileError::from_io(&e, &display))?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| FileError::from_io(&e, &display))?;

        log::info!("saved {} bytes to {}", content.len(), display);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<String> {
        let display = path.display().to_string();

        if path.is_dir() {
            return Err(FileError::InvalidPath { path: display });
        }

        let bytes = fs::read(path).map_err(|e| FileError::from_io(&e, &display))?;
        let content = String::from_utf8(bytes).map_err(|e| FileError::Encoding {
            message: format!("{}: not valid UTF-8 at byte {}", display, e.utf8_error().valid_up_to()),
        })?;

        log::info!("loaded {} bytes from {}", content.len(), display);
        Ok(content)
    }
}

/// `~` と環境変数を展開したパスを返す
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FileError::InvalidPath {
            path: input.to_string(),
        });
    }

    shellexpand::full(trimmed)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .map_err(|e| FileError::InvalidPath {
            path: format!("{} ({})", trimmed, e),
        })
}

/// 保存の便利関数
pub fn save<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    FsBridge.save(path.as_ref(), content)
}

/// 読み込みの便利関数
pub fn load<P: AsRef<Path>>(path: P) -> Result<String> {
    FsBridge.load(path.as_ref())
}
