//! Resolved salary models.
//!
//! This module contains the [`ResolvedSalary`] type and its associated
//! structures that capture the full output of a salary computation: the
//! per-component breakdown, the deduction breakdown, and the totals. The JSON
//! field names are the external contract that HR clients and reports depend
//! on. A resolved salary is ephemeral: it is recomputed on every read and
//! never persisted independently of the structure that produced it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::SalaryStructure;

/// How a resolved component's amount was derived.
///
/// Mirrors [`RuleKind`](super::RuleKind) with the additional `Calculated`
/// variant for Fixed Allowance, which is never configured directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedBasis {
    /// Derived as a percentage of the reference base.
    Percentage,
    /// Configured as a fixed monthly amount.
    Fixed,
    /// Computed as the residual wage (Fixed Allowance only).
    Calculated,
}

/// One resolved salary component.
///
/// # Example
///
/// ```
/// use salary_engine::models::{ResolvedBasis, ResolvedComponent};
/// use rust_decimal::Decimal;
///
/// let basic = ResolvedComponent {
///     amount: Decimal::from(25000),
///     percentage: Decimal::from(50),
///     basis: ResolvedBasis::Percentage,
///     value: Decimal::from(50),
/// };
/// assert_eq!(serde_json::to_value(&basic).unwrap()["type"], "percentage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    /// The resolved monthly amount, rounded to 2 decimal places.
    pub amount: Decimal,
    /// The effective percentage of the reference base. Configured percentages
    /// are echoed; fixed amounts carry a back-computed percentage for display
    /// only, which must never feed back into resolution.
    pub percentage: Decimal,
    /// How the amount was derived.
    #[serde(rename = "type")]
    pub basis: ResolvedBasis,
    /// The configured rule value, or the resolved amount for Fixed Allowance.
    pub value: Decimal,
}

/// The six resolved salary components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentBreakdown {
    /// Base salary component, foundation for HRA and PF.
    pub basic: ResolvedComponent,
    /// House Rent Allowance.
    pub hra: ResolvedComponent,
    /// Standard Allowance.
    pub standard_allowance: ResolvedComponent,
    /// Performance Bonus.
    pub performance_bonus: ResolvedComponent,
    /// Leave Travel Allowance.
    pub lta: ResolvedComponent,
    /// Residual wage after all other components; never configured directly.
    pub fixed_allowance: ResolvedComponent,
}

/// One resolved deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDeduction {
    /// The resolved monthly amount, rounded to 2 decimal places.
    pub amount: Decimal,
    /// The rate the amount was derived from, or zero for fixed deductions.
    pub percentage: Decimal,
}

/// The resolved deductions.
///
/// Employer PF is reported alongside the employee share but is an
/// employer-side cost: it is excluded from `totalDeductions` and `netSalary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionBreakdown {
    /// Employee Provident Fund contribution.
    pub pf_employee: ResolvedDeduction,
    /// Employer Provident Fund contribution (employer-side cost).
    pub pf_employer: ResolvedDeduction,
    /// Professional tax, a fixed monthly amount.
    pub professional_tax: ResolvedDeduction,
}

/// Aggregated totals for a salary computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryTotals {
    /// Sum of all six component amounts.
    pub total_components: Decimal,
    /// Gross salary. By definition equal to the wage: components are a
    /// decomposition of the wage, not an addition to it.
    pub gross_salary: Decimal,
    /// Employee-side deductions: employee PF plus professional tax.
    pub total_deductions: Decimal,
    /// Gross salary minus employee-side deductions.
    pub net_salary: Decimal,
}

/// The complete output of a salary computation.
///
/// # Example
///
/// ```
/// use salary_engine::calculation::calculate_salary_components;
/// use rust_decimal::Decimal;
///
/// let resolved = calculate_salary_components(Decimal::from(50000), None);
/// assert_eq!(resolved.yearly_wage, Decimal::from(600000));
/// assert_eq!(resolved.totals.gross_salary, Decimal::from(50000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSalary {
    /// The monthly wage the computation was performed against.
    pub wage: Decimal,
    /// The yearly wage (wage x 12).
    pub yearly_wage: Decimal,
    /// The per-component breakdown.
    pub components: ComponentBreakdown,
    /// The deduction breakdown.
    pub deductions: DeductionBreakdown,
    /// Aggregated totals.
    pub totals: SalaryTotals,
    /// The structure the computation was performed with (the default
    /// structure when the employee has none).
    pub structure: SalaryStructure,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_salary_components;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_resolved_basis_serialization() {
        assert_eq!(
            serde_json::to_string(&ResolvedBasis::Percentage).unwrap(),
            "\"percentage\""
        );
        assert_eq!(
            serde_json::to_string(&ResolvedBasis::Fixed).unwrap(),
            "\"fixed\""
        );
        assert_eq!(
            serde_json::to_string(&ResolvedBasis::Calculated).unwrap(),
            "\"calculated\""
        );
    }

    #[test]
    fn test_wire_field_names() {
        let resolved = calculate_salary_components(dec("50000"), None);
        let json = serde_json::to_value(&resolved).unwrap();

        assert!(json["yearlyWage"].is_string());
        assert!(json["components"]["standardAllowance"]["amount"].is_string());
        assert!(json["components"]["fixedAllowance"]["type"].is_string());
        assert!(json["deductions"]["pfEmployee"]["amount"].is_string());
        assert!(json["deductions"]["professionalTax"]["percentage"].is_string());
        assert!(json["totals"]["totalComponents"].is_string());
        assert!(json["totals"]["netSalary"].is_string());
        assert!(json["structure"]["pfRate"].is_string());
    }

    #[test]
    fn test_resolved_salary_round_trip() {
        let resolved = calculate_salary_components(dec("50000"), None);
        let json = serde_json::to_string(&resolved).unwrap();
        let deserialized: ResolvedSalary = serde_json::from_str(&json).unwrap();
        assert_eq!(resolved, deserialized);
    }

    #[test]
    fn test_component_serializes_rule_type() {
        let component = ResolvedComponent {
            amount: dec("4167"),
            percentage: dec("8.334"),
            basis: ResolvedBasis::Fixed,
            value: dec("4167"),
        };
        let json = serde_json::to_string(&component).unwrap();
        assert!(json.contains("\"type\":\"fixed\""));
        assert!(!json.contains("\"basis\""));
    }
}
