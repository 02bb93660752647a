use std::process::ExitCode;
use xsh::Interpreter;

fn main() -> ExitCode {
    env_logger::init();

    // Both end-of-input and a user-requested exit are clean shutdowns;
    // anything else is a fatal condition already classified by the library.
    match Interpreter::new().repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("xsh: {err}");
            ExitCode::FAILURE
        }
    }
}
