//! Terminal implementation of the interactive I/O port.
//!
//! Uses dialoguer when both stdin and stdout are terminals, and falls back to
//! plain line reads otherwise so answers can be piped in.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};

use crate::domain::AppError;
use crate::ports::{InteractiveIo, Notice, Question};

pub struct TerminalIo {
    interactive: bool,
}

impl Default for TerminalIo {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalIo {
    pub fn new() -> Self {
        Self { interactive: io::stdin().is_terminal() && io::stdout().is_terminal() }
    }

    fn ask_terminal(&self, question: &Question<'_>) -> Result<Option<String>, AppError> {
        let result = if question.masked {
            Password::new().with_prompt(question.text).allow_empty_password(true).interact()
        } else if !question.choices.is_empty() {
            let default = question
                .default
                .and_then(|d| question.choices.iter().position(|choice| choice == d))
                .unwrap_or(0);
            return Select::new()
                .with_prompt(question.text)
                .items(question.choices)
                .default(default)
                .interact_opt()
                .map(|index| index.map(|i| question.choices[i].clone()))
                .or_else(interrupted_as_none);
        } else {
            let mut input = Input::<String>::new().with_prompt(question.text).allow_empty(true);
            if let Some(default) = question.default {
                input = input.default(default.to_string()).show_default(true);
            }
            input.interact_text()
        };

        result.map(Some).or_else(interrupted_as_none)
    }

    fn ask_line(&self, question: &Question<'_>) -> Result<Option<String>, AppError> {
        let mut label = question.text.to_string();
        if !question.choices.is_empty() {
            label.push_str(&format!(" [{}]", question.choices.join("/")));
        }
        match question.default {
            Some(default) if !question.masked && !default.is_empty() => {
                label.push_str(&format!(" ({})", default));
            }
            _ => {}
        }
        read_line(&format!("{}: ", label))
    }
}

fn interrupted_as_none<T>(err: DialoguerError) -> Result<Option<T>, AppError> {
    match err {
        DialoguerError::IO(io_err) if io_err.kind() == ErrorKind::Interrupted => Ok(None),
        other => Err(AppError::Interaction(other.to_string())),
    }
}

/// Print `prompt` and read one line from stdin. `None` at end of input.
fn read_line(prompt: &str) -> Result<Option<String>, AppError> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

impl InteractiveIo for TerminalIo {
    fn ask(&mut self, question: &Question<'_>) -> Result<Option<String>, AppError> {
        if self.interactive { self.ask_terminal(question) } else { self.ask_line(question) }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<Option<bool>, AppError> {
        if self.interactive {
            return Confirm::new()
                .with_prompt(message)
                .default(default)
                .interact_opt()
                .or_else(interrupted_as_none);
        }

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            let Some(answer) = read_line(&format!("{} {}: ", message, hint))? else {
                return Ok(None);
            };
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(Some(default)),
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => eprintln!("Please answer y or n."),
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Title(title) => println!("\n{}", title),
            Notice::Subtitle(subtitle) => println!("{}", subtitle),
            Notice::Section { title, subtitle } => {
                println!("\n{}", title);
                if let Some(subtitle) = subtitle {
                    println!("  {}\n", subtitle);
                }
            }
            Notice::Invalid(message) => eprintln!("❌ {}", message),
            Notice::Error(message) => eprintln!("❌ Error: {}", message),
            Notice::Warning(message) => eprintln!("⚠️  {}", message),
            Notice::Success(message) => println!("\n✅ {}", message),
            Notice::Note(message) => println!("\nNote: {}", message),
            Notice::Cancelled(message) => println!("\n{}", message),
        }
    }
}
