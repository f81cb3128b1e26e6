//! メインアプリケーション構造体
//!
//! 番号付きメニューのコマンドループ。入力と出力は任意のリーダー・ライターを受け取る。

use crate::command::{Command, CommandProcessor, CommandResult, MENU};
use crate::config::EditorConfig;
use crate::error::Result;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use std::io::{BufRead, Write};

/// メインアプリケーション構造体
pub struct App {
    processor: CommandProcessor,
    config: EditorConfig,
}

impl App {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            processor: CommandProcessor::new(),
            config,
        }
    }

    pub fn processor(&self) -> &CommandProcessor {
        &self.processor
    }

    pub fn processor_mut(&mut self) -> &mut CommandProcessor {
        &mut self.processor
    }

    /// 入力が尽きるか終了コマンドまでループする
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        loop {
            if self.config.show_menu {
                write_menu(&mut output)?;
            }
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let Some(token) = read_line(&mut input)? else {
                break;
            };
            if token.trim().is_empty() {
                continue;
            }

            let command = Command::from_string(&token);
            let mut args = Vec::with_capacity(command.prompts().len());
            for prompt in command.prompts() {
                write!(output, "{}", prompt)?;
                output.flush()?;
                match read_line(&mut input)? {
                    Some(line) => args.push(line),
                    None => return Ok(()),
                }
            }

            let result = match command.with_args(&args) {
                Ok(request) => self.processor.execute(request),
                Err(error) => CommandResult::error(error.to_string()),
            };
            render(&result, &mut output)?;

            if result.should_quit {
                break;
            }
        }

        log::info!("command loop finished");
        Ok(())
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "Choose the command:")?;
    for command in MENU.iter() {
        if let Some(number) = command.menu_number() {
            writeln!(output, "{}. {}", number, command.description())?;
        }
    }
    Ok(())
}

fn render<W: Write>(result: &CommandResult, output: &mut W) -> Result<()> {
    if result.clear_screen {
        crossterm::execute!(output, Clear(ClearType::All), MoveTo(0, 0))?;
    }

    if let Some(message) = &result.message {
        if result.success {
            writeln!(output, "{}", message)?;
        } else {
            writeln!(output, "Error: {}", message)?;
        }
    }
    Ok(())
}

/// 1行読み込み、末尾の改行を取り除く（入力終端なら `None`）
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
