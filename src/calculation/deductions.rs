//! Deduction resolution functionality.
//!
//! Provident Fund is a percentage of the resolved Basic component, applied
//! identically to the employee and employer contribution (one rate, two equal
//! outputs). Professional tax is a fixed monthly amount taken straight from
//! the structure, never recomputed.

use rust_decimal::Decimal;

use crate::models::SalaryStructure;

/// The unrounded deduction amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeductionAmounts {
    /// Employee Provident Fund contribution.
    pub pf_employee: Decimal,
    /// Employer Provident Fund contribution.
    pub pf_employer: Decimal,
    /// Professional tax, the configured fixed amount.
    pub professional_tax: Decimal,
}

/// Resolves the deductions from the resolved Basic amount.
///
/// No error conditions. A zero basic yields zero PF on both sides while the
/// professional tax keeps its configured value.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_deductions;
/// use salary_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let deductions = resolve_deductions(Decimal::from(25000), &SalaryStructure::default());
/// assert_eq!(deductions.pf_employee, Decimal::from(3000));
/// assert_eq!(deductions.pf_employer, Decimal::from(3000));
/// assert_eq!(deductions.professional_tax, Decimal::from(200));
/// ```
pub fn resolve_deductions(resolved_basic: Decimal, structure: &SalaryStructure) -> DeductionAmounts {
    let pf = resolved_basic * structure.pf_rate / Decimal::ONE_HUNDRED;

    DeductionAmounts {
        pf_employee: pf,
        pf_employer: pf,
        professional_tax: structure.professional_tax,
    }
}
