use clap::Parser;
use cli::{
    commands::SortArgs,
    error::CliError,
    exit::{ExitCode, report_parse_error},
    logging,
};
use resources::{check_file, sort_file};
use tracing::error;

fn main() -> std::process::ExitCode {
    let args = match SortArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return report_parse_error(err).into(),
    };

    logging::init(args.log_level.as_deref());

    let code = match run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            ExitCode::Failure
        }
    };
    code.into()
}

fn run(args: &SortArgs) -> Result<ExitCode, CliError> {
    if args.check {
        if check_file(&args.path)? {
            println!("{} is sorted", args.path.display());
            return Ok(ExitCode::Success);
        }
        println!("{} is not sorted", args.path.display());
        return Ok(ExitCode::Unsorted);
    }

    sort_file(&args.path)?;
    println!("Sorted {} successfully!", args.path.display());
    Ok(ExitCode::Success)
}
