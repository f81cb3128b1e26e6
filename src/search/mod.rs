//! 検索モジュール
//!
//! 行を意識した部分文字列検索と正規表現検索

pub mod matcher;
pub mod regex;
pub mod types;

pub use matcher::{search, Matches};
pub use self::regex::{find_regex, RegexError};
pub use types::SearchMatch;
