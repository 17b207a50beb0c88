//! Core data models for the Salary Component Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod resolved;
mod structure;

pub use attendance::{AttendanceRecord, AttendanceStatus, LeaveRequest, LeaveStatus, LeaveType};
pub use employee::{Employee, Role};
pub use resolved::{
    ComponentBreakdown, DeductionBreakdown, ResolvedBasis, ResolvedComponent, ResolvedDeduction,
    ResolvedSalary, SalaryTotals,
};
pub use structure::{ComponentRule, DEFAULT_PROFESSIONAL_TAX, RuleKind, SalaryStructure};
