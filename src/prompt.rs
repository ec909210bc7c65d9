use std::collections::VecDeque;
use std::io;
use std::io::{BufRead, Write};

/// Shows a prompt and reads one line of operator input, without the line ending
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
}

pub struct StdinReader;

impl LineReader for StdinReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

/// Feeds pre-recorded answers and keeps the prompts it was shown.
/// Running out of answers reads as an empty line.
#[derive(Default)]
pub struct ScriptedReader {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedReader {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            prompts: vec![],
        }
    }
}

impl LineReader for ScriptedReader {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
