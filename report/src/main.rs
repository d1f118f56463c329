use std::process::ExitCode;

mod log;

fn main() -> ExitCode {
    log::init();

    let datasets = anscombe_datasets::quartet();
    tracing::info!(datasets = datasets.len(), "analysing Anscombe's quartet");

    match anscombe_report::render(&datasets) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "could not fit the quartet");
            ExitCode::FAILURE
        }
    }
}
