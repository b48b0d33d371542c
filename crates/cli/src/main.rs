use clap::Parser;
use cli::{
    commands::ConvertArgs,
    error::CliError,
    exit::{ExitCode, report_parse_error},
    logging, output,
};
use engine_config::report::summary::BatchReport;
use engine_runtime::execution::process_directory_with;
use tracing::{error, info};

fn main() -> std::process::ExitCode {
    let args = match ConvertArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return report_parse_error(err).into(),
    };

    logging::init(args.log_level.as_deref());

    let code = match run(&args) {
        Ok(report) if report.is_success() => ExitCode::Success,
        Ok(_) => ExitCode::Failure,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::Failure
        }
    };
    code.into()
}

fn run(args: &ConvertArgs) -> Result<BatchReport, CliError> {
    let settings = args.settings()?;
    info!(
        "Converting {} with settings {:?}",
        args.directory.display(),
        settings
    );

    let report = process_directory_with(&args.directory, &settings, output::print_processed)?;

    output::print_failures(&report);
    if let Some(path) = &args.report {
        output::write_report(&report, path)?;
    }
    Ok(report)
}
