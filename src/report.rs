use itertools::Itertools;

use crate::{
    employee::{Employee, Payout},
    error::DataError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub name: String,
    /// In input order.
    pub employees: Vec<Payout>,
    pub total_hours: i64,
    pub total_payout: i64,
}

impl Department {
    fn new(name: String, employees: Vec<Payout>) -> Result<Self, DataError> {
        let (total_hours, total_payout) = employees.iter().try_fold(
            (0i64, 0i64),
            |(hours, payout), employee| -> Result<_, DataError> {
                let overflow = || DataError::Overflow { id: employee.id };
                Ok((
                    hours.checked_add(employee.hours_worked).ok_or_else(overflow)?,
                    payout.checked_add(employee.payout).ok_or_else(overflow)?,
                ))
            },
        )?;
        Ok(Self {
            name,
            employees,
            total_hours,
            total_payout,
        })
    }
}

/// Employees grouped by department, departments in the order they were first seen.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DepartmentReport {
    departments: Vec<Department>,
}

impl DepartmentReport {
    /// Compute every payout and group the employees by department.
    pub fn from_employees(employees: Vec<Employee>) -> Result<Self, DataError> {
        let keyed = employees
            .into_iter()
            .map(into_payout)
            .collect::<Result<Vec<_>, _>>()?;
        let order = keyed.iter().map(|(name, _)| name.clone()).unique().collect_vec();
        let mut groups = keyed.into_iter().into_group_map();

        let departments = order
            .into_iter()
            .map(|name| {
                let employees = groups.remove(&name).unwrap_or_default();
                Department::new(name, employees)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { departments })
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn employee_count(&self) -> usize {
        self.departments.iter().map(|d| d.employees.len()).sum()
    }
}

/// Split an employee into its department and its payout line.
fn into_payout(employee: Employee) -> Result<(String, Payout), DataError> {
    let department = employee
        .department
        .ok_or(DataError::MissingDepartment { id: employee.id })?;
    let payout = employee
        .hours_worked
        .checked_mul(employee.hourly_rate)
        .ok_or(DataError::Overflow { id: employee.id })?;
    Ok((
        department,
        Payout {
            id: employee.id,
            name: employee.name,
            hours_worked: employee.hours_worked,
            hourly_rate: employee.hourly_rate,
            payout,
        },
    ))
}
