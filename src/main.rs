use std::process::ExitCode;

fn main() -> ExitCode {
    langchooser_lib::run()
}
