use std::io::{self, BufRead, Write};

use crate::application::Prompter;
use crate::domain::DomainError;

/// Prompts on stdout and reads answers from stdin.
#[derive(Debug, Default)]
pub struct ConsolePrompter;

impl ConsolePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for ConsolePrompter {
    fn prompt(&self, message: &str) -> Result<String, DomainError> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", message)
            .and_then(|_| stdout.flush())
            .map_err(|e| DomainError::IoFailure(format!("stdout: {}", e)))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| DomainError::IoFailure(format!("stdin: {}", e)))?;
        if read == 0 {
            return Err(DomainError::invalid_input(
                "input ended before all fields were entered",
            ));
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
