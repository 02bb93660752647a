//! The outer read–parse–execute loop.

use crate::error::ShellError;
use crate::executor::{Executor, Flow, OsSpawner, Spawner};
use crate::parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// Prompt printed before every read.
const PROMPT: &str = "x > ";

/// The interactive session: one reader, one executor, nothing carried
/// across iterations.
///
/// Example
/// ```no_run
/// use xsh::Interpreter;
/// let mut sh = Interpreter::new();
/// sh.repl().unwrap();
/// ```
pub struct Interpreter<S: Spawner = OsSpawner> {
    executor: Executor<S>,
}

impl Interpreter<OsSpawner> {
    /// Creates a session that spawns real processes.
    pub fn new() -> Self {
        Self {
            executor: Executor::default(),
        }
    }
}

impl Default for Interpreter<OsSpawner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Spawner> Interpreter<S> {
    /// Builds a session around a custom spawner; tests use this to observe
    /// process creation.
    pub fn with_spawner(spawner: S) -> Self {
        Self {
            executor: Executor::new(spawner),
        }
    }

    /// Parses and executes a single line.
    ///
    /// A line holding no tokens is skipped without touching the executor.
    pub fn eval_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        match parser::parse_line(line) {
            Some(command) => self.executor.execute(&command),
            None => Ok(Flow::Continue),
        }
    }

    /// Runs the session until end-of-input or the `exit` built-in.
    ///
    /// Each iteration reads one full line, evaluates it, and drops the
    /// line together with its command before the next read.
    pub fn repl(&mut self) -> Result<(), ShellError> {
        let mut editor = DefaultEditor::new()?;
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if self.eval_line(&line)? == Flow::Exit {
                        break;
                    }
                }
                // End-of-input is the normal way out.
                Err(ReadlineError::Eof) => break,
                // Ctrl-C drops the pending line and prompts again.
                Err(ReadlineError::Interrupted) => continue,
                Err(err) => return Err(ShellError::Read(err)),
            }
        }
        Ok(())
    }
}
