use std::{
    collections::{hash_map::Entry, HashMap},
    fmt,
};

use crate::error::AliasError;

/// Canonical name of a column the payout report understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    HoursWorked,
    HourlyRate,
    Department,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::HoursWorked => "hours_worked",
            Field::HourlyRate => "hourly_rate",
            Field::Department => "department",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Header spellings accepted out of the box.
/// Every canonical name is listed as a spelling of itself, so already
/// normalized headers map back onto themselves.
pub const BUILTIN_ALIASES: &[(Field, &[&str])] = &[
    (Field::Id, &["id"]),
    (Field::Name, &["name"]),
    (Field::HoursWorked, &["hours_worked", "hours"]),
    (Field::HourlyRate, &["hourly_rate", "rate", "salary"]),
    (Field::Department, &["department"]),
];

/// Case-insensitive mapping from a header spelling to its canonical field.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    spellings: HashMap<String, Field>,
}

impl AliasTable {
    /// Build a table, rejecting any spelling shared by two different fields.
    pub fn new(entries: &[(Field, &[&str])]) -> Result<Self, AliasError> {
        let mut spellings = HashMap::new();
        for (field, aliases) in entries {
            for alias in aliases.iter() {
                match spellings.entry(fold(alias)) {
                    Entry::Vacant(slot) => {
                        slot.insert(*field);
                    }
                    Entry::Occupied(taken) if taken.get() == field => {}
                    Entry::Occupied(taken) => {
                        return Err(AliasError::Ambiguous {
                            spelling: taken.key().clone(),
                            first: *taken.get(),
                            second: *field,
                        })
                    }
                }
            }
        }
        Ok(Self { spellings })
    }

    pub fn builtin() -> Result<Self, AliasError> {
        Self::new(BUILTIN_ALIASES)
    }

    /// Canonical field for a raw header cell, if the spelling is known.
    pub fn lookup(&self, raw: &str) -> Option<Field> {
        self.spellings.get(&fold(raw)).copied()
    }
}

fn fold(spelling: &str) -> String {
    spelling.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    mod lookup {
        use crate::alias::{AliasTable, Field};

        macro_rules! test_lookup {
            ($($name:ident: $raw:literal => $expected:expr,)*) => {
            $(
                paste::paste! {
                #[test]
                fn [<lookup_ $name>]() {
                    let table = AliasTable::builtin().unwrap();
                    assert_eq!($expected, table.lookup($raw));
                }
            }
            )*
            }
        }

        test_lookup! {
            id: "ID" => Some(Field::Id),
            name_padded: "  Name " => Some(Field::Name),
            hours: "Hours" => Some(Field::HoursWorked),
            hours_worked: "HOURS_WORKED" => Some(Field::HoursWorked),
            rate: "Rate" => Some(Field::HourlyRate),
            salary: "salary" => Some(Field::HourlyRate),
            hourly_rate: "hourly_rate" => Some(Field::HourlyRate),
            department: "Department" => Some(Field::Department),
            unknown: "email" => None,
            empty: "" => None,
            partial: "hour" => None,
        }
    }

    mod construction {
        use crate::alias::{AliasTable, Field, BUILTIN_ALIASES};
        use crate::error::AliasError;

        #[test]
        fn builtin_is_unambiguous() {
            assert!(AliasTable::new(BUILTIN_ALIASES).is_ok());
        }

        #[test]
        fn canonical_names_are_their_own_aliases() {
            let table = AliasTable::builtin().unwrap();
            for field in [
                Field::Id,
                Field::Name,
                Field::HoursWorked,
                Field::HourlyRate,
                Field::Department,
            ] {
                assert_eq!(Some(field), table.lookup(field.as_str()));
            }
        }

        #[test]
        fn overlapping_spellings_are_rejected() {
            let entries: &[(Field, &[&str])] = &[
                (Field::HoursWorked, &["hours"]),
                (Field::HourlyRate, &["rate", "HOURS "]),
            ];
            assert_eq!(
                Err(AliasError::Ambiguous {
                    spelling: "hours".to_string(),
                    first: Field::HoursWorked,
                    second: Field::HourlyRate,
                }),
                AliasTable::new(entries)
            );
        }

        #[test]
        fn repeated_spelling_of_same_field_is_allowed() {
            let entries: &[(Field, &[&str])] = &[(Field::Name, &["name", "Name"])];
            let table = AliasTable::new(entries).unwrap();
            assert_eq!(Some(Field::Name), table.lookup("NAME"));
        }
    }
}
