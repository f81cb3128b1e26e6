//! 設定管理
//!
//! `<設定ディレクトリ>/linepad/config.json` から読み込む。ファイルが無ければ既定値。

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// ログレベルを上書きする環境変数
pub const LOG_ENV_VAR: &str = "LINEPAD_LOG";

/// エディタ設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// ログレベル（off/error/warn/info/debug/trace）
    pub log_level: String,
    /// ログの追記先ファイル
    pub log_file: Option<PathBuf>,
    /// コマンド入力前にメニューを表示するか
    pub show_menu: bool,
    /// 入力プロンプト
    pub prompt: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_file: None,
            show_menu: true,
            prompt: "> ".to_string(),
        }
    }
}

impl EditorConfig {
    /// 既定の設定ファイルパス
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("linepad").join("config.json"))
    }

    /// 既定パスから読み込み、環境変数の上書きを適用
    pub fn load() -> Result<Self, ConfigError> {
        let config = match Self::default_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// 指定パスから読み込む（存在しなければ既定値）
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let invalid = |message: String| ConfigError::InvalidFile {
            path: path.display().to_string(),
            message,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| invalid(e.to_string()))
    }

    /// 環境変数でログレベルを上書き
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(level) = std::env::var(LOG_ENV_VAR) {
            if !level.trim().is_empty() {
                self.log_level = level.trim().to_string();
            }
        }
        self
    }

    /// ログレベルのフィルタ（解釈できなければ warn）
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(self.log_level.trim()).unwrap_or(log::LevelFilter::Warn)
    }
}
