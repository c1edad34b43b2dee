use clap::Parser;
use csv_labeler_cli::app;
use csv_labeler_cli::cli_args::Args;
use csv_labeler_cli::console::TerminalConsole;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let mut console = TerminalConsole;

    match app::run(&args, &mut console) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
