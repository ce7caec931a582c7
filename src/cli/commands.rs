use crate::config::ConvertConfig;
use crate::error::ExtractResult;
use crate::excel::WorkbookExtractor;
use crate::writer;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

/// What a conversion run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub output: PathBuf,
    pub records: usize,
    pub legends: usize,
}

/// Execute the convert command
///
/// Extracts both sheets, then writes the data file. Nothing is written unless
/// both sheets were read successfully.
pub fn convert(config: &ConvertConfig, verbose: bool) -> ExtractResult<ConversionSummary> {
    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
        println!("   Input:  {}", config.input.display());
        println!("   Output: {}\n", config.output.display());
    }

    let result = {
        let mut extractor = WorkbookExtractor::open(&config.input)?;
        if verbose {
            println!("   Sheets: {}", extractor.sheet_names().join(", "));
            match config.record_last_row {
                Some(last) => println!(
                    "   {}: rows 2-{}",
                    config.record_sheet.bright_blue(),
                    last
                ),
                None => println!("   {}: rows 2-end", config.record_sheet.bright_blue()),
            }
            println!("   {}: rows 2-end\n", config.legend_sheet.bright_blue());
        }
        extractor.extract(config)?
    };

    if verbose {
        println!("{}", "💾 Writing dashboard data...".cyan());
    }
    writer::write_js(&config.output, &config.variable, &result)?;
    info!(
        output = %config.output.display(),
        records = result.records.len(),
        legends = result.legends.len(),
        "conversion complete"
    );

    let summary = ConversionSummary {
        output: config.output.clone(),
        records: result.records.len(),
        legends: result.legends.len(),
    };

    println!(
        "{}",
        format!("Successfully extracted data to {}", summary.output.display()).green()
    );
    println!(
        "Extracted {} records and {} legends.",
        summary.records, summary.legends
    );

    Ok(summary)
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
