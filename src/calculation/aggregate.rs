//! Aggregation of resolved amounts into salary totals.
//!
//! Totals are computed from unrounded intermediates and rounded once, so
//! per-field rounding never compounds beyond the 2-decimal tolerance.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::SalaryTotals;

use super::components::ComponentAmounts;
use super::deductions::DeductionAmounts;

/// Rounds a monetary amount to 2 decimal places, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregates resolved components and deductions into the salary totals.
///
/// Gross salary equals the wage by definition: the components are a
/// decomposition of the wage, not an addition to it. Employer PF is an
/// employer-side cost and is excluded from `total_deductions` and
/// `net_salary`.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{aggregate, resolve_components, resolve_deductions};
/// use salary_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let wage = Decimal::from(50000);
/// let structure = SalaryStructure::default();
/// let components = resolve_components(wage, &structure);
/// let deductions = resolve_deductions(components.basic, &structure);
///
/// let totals = aggregate(wage, &components, &deductions);
/// assert_eq!(totals.net_salary, Decimal::from(46800));
/// ```
pub fn aggregate(
    wage: Decimal,
    components: &ComponentAmounts,
    deductions: &DeductionAmounts,
) -> SalaryTotals {
    let total_deductions = deductions.pf_employee + deductions.professional_tax;

    SalaryTotals {
        total_components: round_currency(components.total()),
        gross_salary: round_currency(wage),
        total_deductions: round_currency(total_deductions),
        net_salary: round_currency(wage - total_deductions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{resolve_components, resolve_deductions};
    use crate::models::SalaryStructure;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn totals_for(wage: &str) -> SalaryTotals {
        let wage = dec(wage);
        let structure = SalaryStructure::default();
        let components = resolve_components(wage, &structure);
        let deductions = resolve_deductions(components.basic, &structure);
        aggregate(wage, &components, &deductions)
    }

    /// AG-001: totals at 50000 with the default structure
    #[test]
    fn test_totals_at_50000() {
        let totals = totals_for("50000");
        assert_eq!(totals.total_components, dec("50000"));
        assert_eq!(totals.gross_salary, dec("50000"));
        assert_eq!(totals.total_deductions, dec("3200"));
        assert_eq!(totals.net_salary, dec("46800"));
    }

    /// AG-002: gross equals wage even when components overcommit
    #[test]
    fn test_gross_is_wage_not_component_sum() {
        let totals = totals_for("5000");
        // Standard allowance alone (4167 fixed) plus percentages exceed 5000.
        assert_eq!(totals.gross_salary, dec("5000"));
        assert!(totals.total_components > totals.gross_salary);
    }

    /// AG-003: employer PF is excluded from deductions and net
    ///
    /// Intentional per the component model: employer PF is an employer-side
    /// cost, not an employee deduction. Pinned so it is not "fixed" later.
    #[test]
    fn test_employer_pf_excluded_from_net() {
        let wage = dec("50000");
        let structure = SalaryStructure::default();
        let components = resolve_components(wage, &structure);
        let deductions = resolve_deductions(components.basic, &structure);
        let totals = aggregate(wage, &components, &deductions);

        assert_eq!(deductions.pf_employer, dec("3000"));
        assert_eq!(totals.total_deductions, dec("3200"));
        assert_eq!(
            totals.net_salary,
            wage - deductions.pf_employee - deductions.professional_tax
        );
    }

    /// AG-004: zero wage can go net-negative on fixed deductions
    ///
    /// Expected, not a bug: professional tax is fixed and still applies.
    #[test]
    fn test_zero_wage_net_is_negative() {
        let totals = totals_for("0");
        assert_eq!(totals.gross_salary, Decimal::ZERO);
        assert_eq!(totals.total_deductions, dec("200"));
        assert_eq!(totals.net_salary, dec("-200"));
    }

    /// AG-005: totals are rounded once, from unrounded intermediates
    #[test]
    fn test_totals_rounded_to_currency_precision() {
        let totals = totals_for("33333.333");
        assert_eq!(totals.gross_salary, dec("33333.33"));
        assert!(totals.total_deductions.scale() <= 2);
        assert!(totals.net_salary.scale() <= 2);
    }

    #[test]
    fn test_round_currency_half_away_from_zero() {
        assert_eq!(round_currency(dec("1.005")), dec("1.01"));
        assert_eq!(round_currency(dec("-1.005")), dec("-1.01"));
        assert_eq!(round_currency(dec("2.004")), dec("2.00"));
    }
}
