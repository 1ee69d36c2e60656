use std::{fs::File, io, path::Path};

use csv::StringRecord;
use tracing::{debug, trace};

use crate::{
    alias::{AliasTable, Field},
    employee::Employee,
    error::{DataError, Error},
    header::{canonical_names, normalize, Column},
};

/// Plain comma splitting: no quoting, ragged rows allowed, every cell trimmed.
/// The first record is the header row, so headers are not consumed by `csv` itself.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

/// Read every employee record of the file at `path`.
/// A file with no data rows yields an empty vector.
pub fn read_file(path: &Path, aliases: &AliasTable) -> Result<Vec<Employee>, Error> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => unknown(path, e),
    })?;
    parse(reader_builder().from_reader(file), aliases, path)
}

/// Parse employee records, `file` only names the input in errors.
pub fn parse<R>(
    rdr: csv::Reader<R>,
    aliases: &AliasTable,
    file: &Path,
) -> Result<Vec<Employee>, Error>
where
    R: io::Read,
{
    let mut records = rdr.into_records();
    let columns = match records.next() {
        None => return Ok(Vec::new()),
        Some(header) => normalize(aliases, &header.map_err(|e| unknown(file, e))?),
    };
    trace!(
        file = %file.display(),
        columns = ?canonical_names(&columns),
        "normalized header row"
    );

    let mut employees = Vec::new();
    for record in records {
        let record = record.map_err(|e| unknown(file, e))?;
        // whitespace-only line; `csv` already skips truly empty ones
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if columns.iter().all(|column| *column == Column::Drop) {
            return Err(DataError::MissingHeader.in_file(file));
        }
        let line = record.position().map_or(0, |pos| pos.line());
        employees.push(coerce(&columns, &record, line).map_err(|e| e.in_file(file))?);
    }
    debug!(file = %file.display(), count = employees.len(), "parsed employee records");
    Ok(employees)
}

/// Build an employee out of the cells under kept columns.
/// Cells missing from a short row leave the field at its default.
fn coerce(columns: &[Column], record: &StringRecord, line: u64) -> Result<Employee, DataError> {
    let mut employee = Employee::default();
    let cells = columns
        .iter()
        .zip(record.iter())
        .filter_map(|(column, value)| column.field().map(|field| (field, value)));
    for (field, value) in cells {
        match field {
            Field::Id => employee.id = integer(field, value, line)?,
            Field::Name => employee.name = Some(value.to_string()),
            Field::HoursWorked => employee.hours_worked = integer(field, value, line)?,
            Field::HourlyRate => employee.hourly_rate = integer(field, value, line)?,
            Field::Department => employee.department = Some(value.to_string()),
        }
    }
    Ok(employee)
}

fn integer(field: Field, value: &str, line: u64) -> Result<i64, DataError> {
    value.parse().map_err(|_| DataError::InvalidNumber {
        field,
        value: value.to_string(),
        line,
    })
}

fn unknown(file: &Path, e: impl ToString) -> Error {
    Error::UnknownFailure {
        file: file.to_path_buf(),
        reason: e.to_string(),
    }
}
