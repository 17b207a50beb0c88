//! Salary Component Computation Engine
//!
//! This crate decomposes a monthly wage into named salary components (Basic,
//! HRA, Standard Allowance, Performance Bonus, LTA, Fixed Allowance) and
//! deductions (Provident Fund, Professional Tax) according to a configurable
//! salary structure, and validates that a structure never overcommits the
//! wage. It also provides the attendance working-hours and payable-days
//! computations used by the payroll views of the HRMS.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
