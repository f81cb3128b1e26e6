//! コマンドシステム
//!
//! メニュー番号（または名前）で選ぶコマンドの定義と、引数の解釈

pub mod processor;

pub use processor::{CommandProcessor, CommandResult};

use crate::buffer::Coordinate;
use crate::error::{BufferError, InputError, Result};

/// コマンドの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Append,
    NewLine,
    Save,
    Load,
    Print,
    Insert,
    Search,
    Clear,
    Delete,
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
    Replace,
    RegexSearch,
    Quit,

    // 未知のコマンド
    Unknown(String),
}

const LINE_PROMPT: &str = "Enter line index: ";
const SYMBOL_PROMPT: &str = "Enter symbol index: ";

/// メニューに表示する順序
pub const MENU: [Command; 17] = [
    Command::Append,
    Command::NewLine,
    Command::Save,
    Command::Load,
    Command::Print,
    Command::Insert,
    Command::Search,
    Command::Clear,
    Command::Delete,
    Command::Undo,
    Command::Redo,
    Command::Cut,
    Command::Copy,
    Command::Paste,
    Command::Replace,
    Command::RegexSearch,
    Command::Quit,
];

impl Command {
    /// 文字列からコマンドを作成
    pub fn from_string(cmd: &str) -> Self {
        match cmd.trim() {
            "1" | "append" => Command::Append,
            "2" | "newline" => Command::NewLine,
            "3" | "save" => Command::Save,
            "4" | "load" => Command::Load,
            "5" | "print" => Command::Print,
            "6" | "insert" => Command::Insert,
            "7" | "search" => Command::Search,
            "8" | "clear" => Command::Clear,
            "9" | "delete" => Command::Delete,
            "10" | "undo" => Command::Undo,
            "11" | "redo" => Command::Redo,
            "12" | "cut" => Command::Cut,
            "13" | "copy" => Command::Copy,
            "14" | "paste" => Command::Paste,
            "15" | "replace" => Command::Replace,
            "16" | "regex-search" => Command::RegexSearch,
            "0" | "q" | "exit" | "quit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// メニュー番号
    pub fn menu_number(&self) -> Option<u8> {
        let number = match self {
            Command::Append => 1,
            Command::NewLine => 2,
            Command::Save => 3,
            Command::Load => 4,
            Command::Print => 5,
            Command::Insert => 6,
            Command::Search => 7,
            Command::Clear => 8,
            Command::Delete => 9,
            Command::Undo => 10,
            Command::Redo => 11,
            Command::Cut => 12,
            Command::Copy => 13,
            Command::Paste => 14,
            Command::Replace => 15,
            Command::RegexSearch => 16,
            Command::Quit => 0,
            Command::Unknown(_) => return None,
        };
        Some(number)
    }

    /// コマンドの説明を取得
    pub fn description(&self) -> &'static str {
        match self {
            Command::Append => "Enter text to append",
            Command::NewLine => "Start a new line",
            Command::Save => "Save text to a file",
            Command::Load => "Load text from a file",
            Command::Print => "Print current text",
            Command::Insert => "Insert text by line and symbol index",
            Command::Search => "Search for text",
            Command::Clear => "Clear the console",
            Command::Delete => "Delete text by line, symbol index and count",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::Cut => "Cut text by line, symbol index and count",
            Command::Copy => "Copy text by line, symbol index and count",
            Command::Paste => "Paste text by line and symbol index",
            Command::Replace => "Replace text by line and symbol index",
            Command::RegexSearch => "Search with a regular expression",
            Command::Quit => "Exit",
            Command::Unknown(_) => "Unknown command",
        }
    }

    /// 実行前に入力を求める引数のプロンプト
    pub fn prompts(&self) -> &'static [&'static str] {
        match self {
            Command::Append => &["Enter text to add: "],
            Command::Save => &["Enter the filename to save current text: "],
            Command::Load => &["Enter the filename to load text from: "],
            Command::Insert => &[LINE_PROMPT, SYMBOL_PROMPT, "Enter text to insert: "],
            Command::Search => &["Enter text to search for: "],
            Command::RegexSearch => &["Enter pattern to search for: "],
            Command::Delete | Command::Cut | Command::Copy => {
                &[LINE_PROMPT, SYMBOL_PROMPT, "Enter number of symbols: "]
            }
            Command::Paste => &[LINE_PROMPT, SYMBOL_PROMPT],
            Command::Replace => &[LINE_PROMPT, SYMBOL_PROMPT, "Enter replacement text: "],
            _ => &[],
        }
    }

    /// 入力された引数からリクエストを組み立てる
    pub fn with_args(&self, args: &[String]) -> Result<Request> {
        let arg = |index: usize| nth_arg(args, index);

        let request = match self {
            Command::Append => Request::Append(arg(0)?.to_string()),
            Command::NewLine => Request::NewLine,
            Command::Save => Request::Save(file_name(arg(0)?)),
            Command::Load => Request::Load(file_name(arg(0)?)),
            Command::Print => Request::Print,
            Command::Insert => Request::Insert {
                at: parse_coordinate(arg(0)?, arg(1)?)?,
                text: arg(2)?.to_string(),
            },
            Command::Search => Request::Search(arg(0)?.to_string()),
            Command::RegexSearch => Request::RegexSearch(arg(0)?.to_string()),
            Command::Clear => Request::Clear,
            Command::Delete => Request::Delete {
                at: parse_coordinate(arg(0)?, arg(1)?)?,
                count: parse_count(arg(2)?)?,
            },
            Command::Undo => Request::Undo,
            Command::Redo => Request::Redo,
            Command::Cut => Request::Cut {
                at: parse_coordinate(arg(0)?, arg(1)?)?,
                count: parse_count(arg(2)?)?,
            },
            Command::Copy => Request::Copy {
                at: parse_coordinate(arg(0)?, arg(1)?)?,
                count: parse_count(arg(2)?)?,
            },
            Command::Paste => Request::Paste {
                at: parse_coordinate(arg(0)?, arg(1)?)?,
            },
            Command::Replace => Request::Replace {
                at: parse_coordinate(arg(0)?, arg(1)?)?,
                text: arg(2)?.to_string(),
            },
            Command::Quit => Request::Quit,
            Command::Unknown(command) => {
                return Err(InputError::CommandNotFound {
                    command: command.clone(),
                }
                .into())
            }
        };

        Ok(request)
    }
}

/// 引数が確定した実行要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Append(String),
    NewLine,
    /// `None` は現在のファイル名を使う
    Save(Option<String>),
    Load(Option<String>),
    Print,
    Insert { at: Coordinate, text: String },
    Search(String),
    RegexSearch(String),
    Clear,
    Delete { at: Coordinate, count: i64 },
    Undo,
    Redo,
    Cut { at: Coordinate, count: i64 },
    Copy { at: Coordinate, count: i64 },
    Paste { at: Coordinate },
    Replace { at: Coordinate, text: String },
    Quit,
}

fn nth_arg(args: &[String], index: usize) -> Result<&str> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| InputError::EndOfInput.into())
}

fn file_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_index(raw: &str) -> Result<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        InputError::InvalidArgument {
            arg: raw.trim().to_string(),
        }
        .into()
    })
}

fn parse_coordinate(line: &str, symbol_index: &str) -> Result<Coordinate> {
    Ok(Coordinate::new(parse_index(line)?, parse_index(symbol_index)?))
}

/// 件数を解釈する（負数もそのまま返し、判定は実行側で行う）
fn parse_count(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        InputError::InvalidArgument {
            arg: raw.trim().to_string(),
        }
        .into()
    })
}

/// 実行時に件数を検証する
pub(crate) fn positive_count(count: i64) -> std::result::Result<usize, BufferError> {
    usize::try_from(count)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(BufferError::InvalidCount { count })
}
