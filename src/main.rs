use readme_pulse::cli::Cli;
use readme_pulse::logging::enable_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    enable_logging(cli.verbose, cli.quiet);

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
