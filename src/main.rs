use std::{io, path::PathBuf};

use clap::{ArgEnum, Parser};
use payouts::{logging, AliasTable};

#[derive(ArgEnum, Clone, Copy, Debug, PartialEq)]
enum ReportKind {
    Payout,
}

/// Read and process employee payout reports.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to one or more CSV files.
    #[clap(required = true, parse(from_os_str))]
    files: Vec<PathBuf>,
    /// Type of report to generate.
    #[clap(long, arg_enum)]
    report: ReportKind,
    /// Log more to stderr (repeat for more detail).
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let aliases = AliasTable::builtin()?;
    match cli.report {
        ReportKind::Payout => {
            payouts::run(&cli.files, &aliases, io::stdout().lock())?;
        }
    }
    Ok(())
}
