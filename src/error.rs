use std::path::PathBuf;

use thiserror::Error;

use crate::alias::Field;

/// Failure of a single input file. The display string is the line shown to the user.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("File {} not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("File {} data error: {reason}.", .file.display())]
    Data { file: PathBuf, reason: DataError },
    #[error("The file {} is empty.", .0.display())]
    EmptyFile(PathBuf),
    #[error("Failed to process the file: {}.", .file.display())]
    UnknownFailure { file: PathBuf, reason: String },
}

#[derive(Error, Debug, PartialEq)]
pub enum DataError {
    #[error("no recognised column in the header row")]
    MissingHeader,
    #[error("invalid {field} value `{value}` on line {line}")]
    InvalidNumber {
        field: Field,
        value: String,
        line: u64,
    },
    #[error("employee `{id}` has no department")]
    MissingDepartment { id: i64 },
    #[error("payout of employee `{id}` overflows")]
    Overflow { id: i64 },
}

impl DataError {
    pub fn in_file(self, file: impl Into<PathBuf>) -> Error {
        Error::Data {
            file: file.into(),
            reason: self,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum AliasError {
    #[error("header spelling `{spelling}` is claimed by both `{first}` and `{second}`")]
    Ambiguous {
        spelling: String,
        first: Field,
        second: Field,
    },
}
