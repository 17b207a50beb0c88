//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for representing
//! workers in the HRMS. The salary structure is embedded in the employee
//! record: it is created null at signup, edited only through the HR salary
//! flow, and deleted with the record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryStructure;

/// The role a user holds in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Regular employee: attendance, own payroll, leave requests.
    Employee,
    /// HR officer: all-employee payroll, structure edits, leave approval.
    #[serde(rename = "HR")]
    Hr,
}

/// Represents an employee record as read from the identity collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The role held by this user.
    pub role: Role,
    /// The monthly gross wage.
    #[serde(default)]
    pub wage: Decimal,
    /// The custom salary structure, if HR has configured one. `None` means
    /// the default structure applies.
    #[serde(default)]
    pub salary_structure: Option<SalaryStructure>,
}

impl Employee {
    /// Returns true if this user is an HR officer.
    pub fn is_hr(&self) -> bool {
        self.role == Role::Hr
    }
}
