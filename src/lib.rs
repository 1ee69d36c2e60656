//! Employee payout reports over loosely formatted CSV files.
//!
//! Each file goes through the same one-way pipeline: its header row is
//! normalized against an [`AliasTable`], data rows become [`Employee`]s, the
//! employees are grouped into a [`DepartmentReport`] and the report is rendered
//! as fixed-width text. A failing file never stops the files after it.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

pub mod alias;
pub mod employee;
pub mod error;
pub mod header;
pub mod logging;
pub mod parser;
pub mod render;
pub mod report;

pub use alias::{AliasTable, Field};
pub use employee::{Employee, Payout};
pub use error::{AliasError, DataError, Error};
pub use report::{Department, DepartmentReport};

/// Read, group and total a single file.
pub fn build_report(path: &Path, aliases: &AliasTable) -> Result<DepartmentReport, Error> {
    let employees = parser::read_file(path, aliases)?;
    if employees.is_empty() {
        return Err(Error::EmptyFile(path.to_path_buf()));
    }
    DepartmentReport::from_employees(employees).map_err(|e| e.in_file(path))
}

/// Report on every file in turn. A failed file gets a single line in place of
/// its report, so `output` follows the order of `paths`.
/// Returns how many files were reported on.
pub fn run(paths: &[PathBuf], aliases: &AliasTable, mut output: impl Write) -> io::Result<usize> {
    let mut reported = 0;
    for path in paths {
        match build_report(path, aliases) {
            Ok(report) => {
                info!(
                    file = %path.display(),
                    departments = report.departments().len(),
                    employees = report.employee_count(),
                    "report built"
                );
                render::render(&report, &mut output)?;
                reported += 1;
            }
            Err(error) => {
                debug!(?error, "skipping file");
                writeln!(output, "{}", error)?;
            }
        }
    }
    Ok(reported)
}
