//! Calculation logic for the Salary Component Computation Engine.
//!
//! This module contains the pure calculation functions: component resolution
//! in the fixed dependency order, deduction resolution, aggregation into
//! salary totals, structure validation, and the secondary attendance
//! computations (working hours and payable days). Every function here is
//! synchronous, side-effect-free, and safe to run in parallel across
//! employees and requests.

mod aggregate;
mod components;
mod deductions;
mod payable_days;
mod salary;
mod validate;
mod working_hours;

pub use aggregate::{aggregate, round_currency};
pub use components::{ComponentAmounts, effective_percentage, resolve_components};
pub use deductions::{DeductionAmounts, resolve_deductions};
pub use payable_days::{PayableDays, compute_payable_days};
pub use salary::calculate_salary_components;
pub use validate::{OVER_COMMIT_EPSILON, validate_structure};
pub use working_hours::{DEFAULT_BREAK_TIME_HOURS, compute_working_hours};
