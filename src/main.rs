use clap::Parser;
use dashboard_data::cli;
use dashboard_data::config::{
    ConvertConfig, DEFAULT_INPUT, DEFAULT_LEGEND_SHEET, DEFAULT_OUTPUT, DEFAULT_RECORD_LAST_ROW,
    DEFAULT_RECORD_SHEET, DEFAULT_VARIABLE,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "dashboard-data")]
#[command(about = "Convert the dashboard workbook into a JavaScript data file.")]
#[command(long_about = "dashboard-data - Spreadsheet to dashboard data converter

Reads the 'Record' and 'Legend' sheets of a workbook (cached values, never
formulas), keys every row by the header in row 1, drops rows with no data and
writes the result as:

  const dashboardData = { \"records\": [...], \"legends\": [...], \"generatedAt\": \"...\" };

ROWS:
  Record  - rows 2 through 149 (fixed bound, see --record-last-row)
  Legend  - rows 2 through the last row of the sheet

EXAMPLES:
  dashboard-data                                  # 2048 Robots.xlsx → dashboard_data.js
  dashboard-data -i robots.xlsx -o web/data.js
  dashboard-data --record-last-row 0              # read Record to the sheet end

Logging goes to stderr; set RUST_LOG=debug for details.")]
#[command(version)]
struct Cli {
    /// Workbook to read (.xlsx, .xlsm, .xlsb, .xls, .ods)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// JavaScript data file to write (overwritten)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Name of the JavaScript const holding the data
    #[arg(long = "var", default_value = DEFAULT_VARIABLE)]
    variable: String,

    /// Sheet holding the records
    #[arg(long, default_value = DEFAULT_RECORD_SHEET)]
    record_sheet: String,

    /// Sheet holding the legends
    #[arg(long, default_value = DEFAULT_LEGEND_SHEET)]
    legend_sheet: String,

    /// Last 1-based Record row to read (0 reads to the end of the sheet)
    #[arg(long, default_value_t = DEFAULT_RECORD_LAST_ROW)]
    record_last_row: u32,

    /// Show verbose extraction steps
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for ConvertConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            output: cli.output,
            variable: cli.variable,
            record_sheet: cli.record_sheet,
            legend_sheet: cli.legend_sheet,
            record_last_row: (cli.record_last_row > 0).then_some(cli.record_last_row),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let verbose = args.verbose;
    let config = ConvertConfig::from(args);

    match cli::convert(&config, verbose) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error extracting data: {}", e);
            ExitCode::FAILURE
        }
    }
}
