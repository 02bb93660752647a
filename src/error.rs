use std::io;
use thiserror::Error;

/// Conditions that tear the whole session down.
///
/// Everything here maps to process exit code 1. A child process failing —
/// including a name that resolves to nothing — is never fatal and never
/// shows up in this enum.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The input stream failed for a reason other than end-of-input.
    #[error("failed to read input: {0}")]
    Read(#[from] rustyline::error::ReadlineError),

    /// Process creation itself failed: the fork class, not a missing
    /// executable.
    #[error("failed to spawn {name}: {source}")]
    Spawn { name: String, source: io::Error },
}
