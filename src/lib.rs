//! A minimal interactive command shell.
//!
//! `xsh` reads one line at a time from standard input, splits it into an
//! argument vector on whitespace, and either handles it in-process (the
//! `exit` built-in) or spawns the named executable and waits for it to
//! finish. There are no pipelines, no redirection, no quoting and no job
//! control; the whole machine is the read–parse–execute loop.
//!
//! The main entry point is [`Interpreter`], which owns the loop. The
//! [`command`], [`parser`] and [`executor`] modules expose the individual
//! stages so they can be driven and tested in isolation.

mod builtin;
pub mod command;
pub mod error;
pub mod executor;
mod interpreter;
pub mod parser;

/// Just a convenient re-export of the interactive session runner.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;
