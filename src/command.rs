/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// One parsed command line: the executable or built-in name plus its
/// arguments.
///
/// The name is always element 0 of the argument vector, the way `argv`
/// works for a process. Tokens are owned, so a `Command` never borrows
/// from the line buffer it was parsed out of; both are dropped together
/// at the end of a loop iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
}

impl Command {
    /// Builds a command from an argument vector.
    ///
    /// Returns `None` for an empty vector; a command with no name is not a
    /// command, and callers are expected to skip that iteration.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            None
        } else {
            Some(Self { argv })
        }
    }

    /// The executable or built-in name, always equal to `argv()[0]`.
    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    /// The full argument vector, name included as element 0.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The arguments after the name.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// Number of tokens, name included. Always at least 1.
    pub fn arg_count(&self) -> usize {
        self.argv.len()
    }
}
