use std::process::ExitCode;

mod args;

fn main() -> ExitCode {
    args::run()
}
