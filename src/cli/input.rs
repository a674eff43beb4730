use std::io::{self, StdinLock};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::core::{CliError, CliMode};

/// One answer read from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Interrupted,
    EndOfInput,
}

/// Line source for the shell: a `rustyline` editor or plain stdin lines.
pub enum InputSource {
    Interactive(DefaultEditor),
    Script(io::Lines<StdinLock<'static>>),
}

impl InputSource {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        match mode {
            CliMode::Interactive => Ok(InputSource::Interactive(DefaultEditor::new()?)),
            CliMode::Script => Ok(InputSource::Script(io::stdin().lines())),
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<InputEvent, CliError> {
        match self {
            InputSource::Interactive(editor) => match editor.readline(&format!("{prompt}: ")) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }
                    Ok(InputEvent::Line(trimmed.to_string()))
                }
                Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
                Err(ReadlineError::Eof) => Ok(InputEvent::EndOfInput),
                Err(err) => Err(err.into()),
            },
            InputSource::Script(lines) => match lines.next() {
                Some(line) => Ok(InputEvent::Line(line?.trim().to_string())),
                None => Ok(InputEvent::EndOfInput),
            },
        }
    }
}
