use crate::command::Command;
use crate::executor::Flow;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and executed
/// directly in-process, before any process-creation work happens.
pub(crate) trait Builtin: Sized + FromArgs {
    /// Canonical name of the command, e.g. "exit". Matching is exact and
    /// case-sensitive.
    fn name() -> &'static str;

    /// Executes the command and reports whether the outer loop should keep
    /// going.
    fn execute(self) -> Result<Flow>;
}

/// Matches `cmd` against `B` by name and runs it on a hit.
///
/// An argh `EarlyExit` (e.g. `--help`) prints the generated output and
/// keeps the loop alive instead of tearing the shell down.
pub(crate) fn try_builtin<B: Builtin>(cmd: &Command) -> Option<Result<Flow>> {
    if cmd.name() != B::name() {
        return None;
    }
    let args: Vec<&str> = cmd.args().iter().map(String::as_str).collect();
    Some(match B::from_args(&[B::name()], &args) {
        Ok(builtin) => builtin.execute(),
        Err(EarlyExit { output, .. }) => {
            println!("{output}");
            Ok(Flow::Continue)
        }
    })
}

#[derive(FromArgs)]
/// Leave the shell without spawning a process.
pub(crate) struct Exit {
    #[argh(positional, greedy)]
    /// accepted and ignored; exit takes no meaningful arguments
    pub _args: Vec<String>,
}

impl Builtin for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(self) -> Result<Flow> {
        log::debug!("exit requested, stopping the session");
        Ok(Flow::Exit)
    }
}
