use crate::error::CliError;
use clap::Parser;
use engine_config::settings::{
    ConvertSettings, parse_column_override,
    policy::{ErrorPolicy, RowPolicy},
};
use model::core::value::LiteralStyle;
use planner::query::dialect::DialectKind;
use resources::DEFAULT_STRINGS_PATH;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "csv-to-sql",
    version,
    about = "Convert every CSV file in a directory into an SQL INSERT script"
)]
pub struct ConvertArgs {
    /// Directory containing the `.csv` files
    pub directory: PathBuf,

    #[arg(long, help = "TOML settings file; flags given here override it")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Field delimiter of the CSV files [default: ;]")]
    pub delimiter: Option<char>,

    #[arg(
        long,
        value_name = "STYLE",
        help = "How values are rendered: quoted, escaped or typed [default: quoted]"
    )]
    pub values: Option<LiteralStyle>,

    #[arg(
        long = "column",
        value_name = "COLUMN=STYLE",
        help = "Per-column value style, may be repeated"
    )]
    pub columns: Vec<String>,

    #[arg(
        long,
        help = "Identifier and string quoting: plain, mysql or postgres [default: plain]"
    )]
    pub dialect: Option<DialectKind>,

    #[arg(long, help = "Keep converting the remaining files after one fails")]
    pub continue_on_error: bool,

    #[arg(long, help = "Skip rows whose field count differs from the header")]
    pub skip_malformed_rows: bool,

    #[arg(long, help = "Process files in file name order")]
    pub sorted: bool,

    #[arg(long, help = "Write the JSON batch report to this file")]
    pub report: Option<PathBuf>,

    #[arg(long, help = "Log filter, e.g. `info` or `engine_runtime=debug` [default: warn]")]
    pub log_level: Option<String>,
}

impl ConvertArgs {
    /// Defaults, then the config file, then command-line flags.
    pub fn settings(&self) -> Result<ConvertSettings, CliError> {
        let mut settings = match &self.config {
            Some(path) => ConvertSettings::load(path)?,
            None => ConvertSettings::default(),
        };

        if let Some(delimiter) = self.delimiter {
            settings.csv.delimiter = delimiter;
        }
        if let Some(style) = self.values {
            settings.values.default = style;
        }
        for raw in &self.columns {
            let (column, style) = parse_column_override(raw)?;
            settings.values.columns.insert(column, style);
        }
        if let Some(dialect) = self.dialect {
            settings.dialect = dialect;
        }
        if self.continue_on_error {
            settings.on_error = ErrorPolicy::Continue;
        }
        if self.skip_malformed_rows {
            settings.on_malformed_row = RowPolicy::Skip;
        }
        if self.sorted {
            settings.sort_files = true;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "sort-strings",
    version,
    about = "Sort the <string> entries of a strings.xml resource file by name"
)]
pub struct SortArgs {
    /// Resource file to sort in place
    #[arg(default_value = DEFAULT_STRINGS_PATH)]
    pub path: PathBuf,

    #[arg(long, help = "Only report whether the file is sorted; never write")]
    pub check: bool,

    #[arg(long, help = "Log filter [default: warn]")]
    pub log_level: Option<String>,
}
