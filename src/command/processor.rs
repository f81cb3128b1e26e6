//! コマンド実行
//!
//! 単一の `TextBuffer` を所有し、リクエストをバッファ操作・ファイル操作へ振り分ける。
//! 失敗はすべて `CommandResult` のメッセージとして返し、セッションは継続する。

use super::{positive_count, Request};
use crate::buffer::{Coordinate, TextBuffer};
use crate::error::{FileError, Result};
use crate::file::{expand_path, FileBridge, FsBridge};
use crate::search::{find_regex, search, SearchMatch};
use std::path::{Path, PathBuf};

/// コマンド実行の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// 実行が成功したか
    pub success: bool,
    /// 結果メッセージ
    pub message: Option<String>,
    /// コンソールを消去するか
    pub clear_screen: bool,
    /// ループを終了するか
    pub should_quit: bool,
}

impl CommandResult {
    /// 成功結果を作成
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
            clear_screen: false,
            should_quit: false,
        }
    }

    /// メッセージ付き成功結果を作成
    pub fn success_with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success()
        }
    }

    /// エラー結果を作成
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            clear_screen: false,
            should_quit: false,
        }
    }

    /// コンソール消去
    pub fn clear() -> Self {
        Self {
            clear_screen: true,
            ..Self::success()
        }
    }

    /// 終了結果を作成
    pub fn quit() -> Self {
        Self {
            should_quit: true,
            ..Self::success()
        }
    }
}

/// コマンドプロセッサ
pub struct CommandProcessor<F: FileBridge = FsBridge> {
    buffer: TextBuffer,
    files: F,
    /// 最後に読み込み・保存したファイル
    current_file: Option<PathBuf>,
}

impl CommandProcessor<FsBridge> {
    pub fn new() -> Self {
        Self::with_bridge(FsBridge)
    }
}

impl Default for CommandProcessor<FsBridge> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileBridge> CommandProcessor<F> {
    pub fn with_bridge(files: F) -> Self {
        Self {
            buffer: TextBuffer::new(),
            files,
            current_file: None,
        }
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    /// リクエストを実行
    pub fn execute(&mut self, request: Request) -> CommandResult {
        match self.try_execute(request) {
            Ok(result) => result,
            Err(error) => {
                log::warn!("command failed: {}", error);
                CommandResult::error(error.to_string())
            }
        }
    }

    fn try_execute(&mut self, request: Request) -> Result<CommandResult> {
        let result = match request {
            Request::Append(text) => {
                self.buffer.append(&text);
                CommandResult::success()
            }
            Request::NewLine => {
                self.buffer.append_new_line();
                CommandResult::success()
            }
            Request::Save(name) => {
                let path = self.save(name.as_deref())?;
                CommandResult::success_with_message(format!(
                    "Text successfully saved to {}",
                    path.display()
                ))
            }
            Request::Load(name) => {
                let path = self.load(name.as_deref())?;
                CommandResult::success_with_message(format!(
                    "Text successfully loaded from {}",
                    path.display()
                ))
            }
            Request::Print => {
                CommandResult::success_with_message(format!("Current Text:\n{}", self.buffer.as_str()))
            }
            Request::Insert { at, text } => {
                self.buffer.insert(at, &text)?;
                CommandResult::success()
            }
            Request::Search(needle) => {
                CommandResult::success_with_message(report_matches(search(self.buffer.as_str(), &needle)))
            }
            Request::RegexSearch(pattern) => match find_regex(self.buffer.as_str(), &pattern) {
                Ok(matches) => CommandResult::success_with_message(report_matches(matches)),
                Err(error) => CommandResult::error(format!("Invalid pattern: {}", error)),
            },
            Request::Clear => CommandResult::clear(),
            Request::Delete { at, count } => {
                self.buffer.delete(at, positive_count(count)?)?;
                CommandResult::success()
            }
            Request::Undo => {
                if self.buffer.undo() {
                    CommandResult::success()
                } else {
                    CommandResult::success_with_message("Nothing to undo.")
                }
            }
            Request::Redo => {
                if self.buffer.redo() {
                    CommandResult::success()
                } else {
                    CommandResult::success_with_message("Nothing to redo.")
                }
            }
            Request::Cut { at, count } => self.clip(at, count, true),
            Request::Copy { at, count } => self.clip(at, count, false),
            Request::Paste { at } => {
                if self.buffer.paste(at)? {
                    CommandResult::success()
                } else {
                    CommandResult::success_with_message("Clipboard is empty.")
                }
            }
            Request::Replace { at, text } => {
                self.buffer.replace(at, &text)?;
                CommandResult::success()
            }
            Request::Quit => CommandResult::quit(),
        };

        Ok(result)
    }

    /// ファイルを開いて内容を置き換える（1回の編集として記録）
    pub fn open(&mut self, name: &str) -> Result<PathBuf> {
        self.load(Some(name))
    }

    fn save(&mut self, name: Option<&str>) -> Result<PathBuf> {
        let path = self.target_path(name)?;
        self.files.save(&path, self.buffer.as_str())?;
        self.current_file = Some(path.clone());
        Ok(path)
    }

    fn load(&mut self, name: Option<&str>) -> Result<PathBuf> {
        let path = self.target_path(name)?;
        let content = self.files.load(&path)?;
        self.buffer.replace_all(content);
        self.current_file = Some(path.clone());
        Ok(path)
    }

    fn target_path(&self, name: Option<&str>) -> Result<PathBuf> {
        match name {
            Some(name) => Ok(expand_path(name)?),
            None => self.current_file.clone().ok_or_else(|| {
                FileError::InvalidPath {
                    path: "(no current file)".to_string(),
                }
                .into()
            }),
        }
    }

    /// カット・コピー（範囲外は何もしない）
    fn clip(&mut self, at: Coordinate, count: i64, remove: bool) -> CommandResult {
        let Ok(count) = positive_count(count) else {
            return CommandResult::success_with_message("Nothing selected.");
        };

        let clipped = if remove {
            self.buffer.cut(at, count)
        } else {
            self.buffer.copy(at, count)
        };

        match clipped {
            Some(_) => CommandResult::success(),
            None => CommandResult::success_with_message("Nothing selected."),
        }
    }
}

fn report_matches(matches: impl IntoIterator<Item = SearchMatch>) -> String {
    let lines: Vec<String> = matches
        .into_iter()
        .map(|m| format!("Text found at line {}, position {}", m.line, m.column))
        .collect();

    if lines.is_empty() {
        "Text not found.".to_string()
    } else {
        lines.join("\n")
    }
}
