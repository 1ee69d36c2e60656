use std::{
    fmt,
    io::{self, Write},
};

use crate::report::DepartmentReport;

const NAME_WIDTH: usize = 40;
const CELL_WIDTH: usize = 20;
const CURRENCY: &str = "$";

/// Subtotals line up with the right edge of the hours and payout columns.
const HOURS_EDGE: usize = NAME_WIDTH + 1 + CELL_WIDTH;
const PAYOUT_SPAN: usize = CELL_WIDTH + 1 + CELL_WIDTH;

/// An employee without a name gets a blank name cell.
impl fmt::Display for DepartmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>name$} {:>cell$} {:>cell$} {:>cell$}",
            "name",
            "hours_worked",
            "hourly_rate",
            "payout",
            name = NAME_WIDTH,
            cell = CELL_WIDTH,
        )?;
        for department in self.departments() {
            writeln!(f, "{}", department.name)?;
            for employee in &department.employees {
                writeln!(
                    f,
                    "{:>name$} {:>cell$} {:>cell$} {:>cell$}{}",
                    employee.name.as_deref().unwrap_or_default(),
                    employee.hours_worked,
                    employee.hourly_rate,
                    employee.payout,
                    CURRENCY,
                    name = NAME_WIDTH,
                    cell = CELL_WIDTH,
                )?;
            }
            writeln!(
                f,
                "{:>hours$} {:>payout$}{}",
                department.total_hours,
                department.total_payout,
                CURRENCY,
                hours = HOURS_EDGE,
                payout = PAYOUT_SPAN,
            )?;
        }
        Ok(())
    }
}

/// Write the formatted report to `output`.
pub fn render(report: &DepartmentReport, mut output: impl Write) -> io::Result<()> {
    write!(output, "{}", report)?;
    output.flush()
}
