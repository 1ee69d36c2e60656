/// One data row of an input file, with numeric columns already coerced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub name: Option<String>,
    pub hours_worked: i64,
    pub hourly_rate: i64,
    pub department: Option<String>,
}

/// An employee after grouping: the department became the group key and the
/// payout has been computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payout {
    pub id: i64,
    pub name: Option<String>,
    pub hours_worked: i64,
    pub hourly_rate: i64,
    pub payout: i64,
}
