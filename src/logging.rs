//! ロギングシステム
//!
//! `log` クレートのバックエンド。標準エラー出力と任意のファイルへ書き出す。

use crate::config::EditorConfig;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// ロガー
#[derive(Debug, Clone)]
pub struct Logger {
    level: LevelFilter,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// 設定から構築
    pub fn from_config(config: &EditorConfig) -> Self {
        let mut logger = Self::new(config.level_filter());
        if let Some(path) = &config.log_file {
            logger = logger.with_file_output(path.clone());
        }
        logger
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化（テスト向け）
    #[cfg(test)]
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", message);
            }
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        self.write_line(&format!(
            "{}: {} [{}]",
            record.level(),
            record.args(),
            record.target()
        ));
    }

    fn flush(&self) {}
}

/// グローバルロガーを設定から初期化する
///
/// 二回目以降の呼び出しは無視する。
pub fn init(config: &EditorConfig) {
    let logger = Logger::from_config(config);
    let level = logger.level();
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(level);
    }
}
