use std::collections::HashSet;

use crate::alias::{AliasTable, Field};

/// What to do with the data column found at a given header position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Keep(Field),
    Drop,
}

impl Column {
    pub fn field(&self) -> Option<Field> {
        match self {
            Column::Keep(field) => Some(*field),
            Column::Drop => None,
        }
    }
}

/// Map a raw header row onto canonical fields.
///
/// The result has one entry per input position, so it can be zipped against
/// data rows directly. Unknown headers become [`Column::Drop`], and so does
/// every repeat of a field after its first occurrence.
pub fn normalize<I, S>(aliases: &AliasTable, raw_headers: I) -> Vec<Column>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    raw_headers
        .into_iter()
        .map(|raw| match aliases.lookup(raw.as_ref()) {
            Some(field) if seen.insert(field) => Column::Keep(field),
            _ => Column::Drop,
        })
        .collect()
}

/// Canonical header names, with an empty name in place of dropped columns.
pub fn canonical_names(columns: &[Column]) -> Vec<&'static str> {
    columns
        .iter()
        .map(|column| column.field().map_or("", |field| field.as_str()))
        .collect()
}
