//! Component resolution functionality.
//!
//! This module resolves the six salary components from a wage and a salary
//! structure, in the fixed dependency order Basic, HRA, Standard Allowance,
//! Performance Bonus, LTA, Fixed Allowance. The order is load-bearing: HRA
//! percentages are taken against the resolved Basic amount, not the wage, and
//! Fixed Allowance is the residual after everything else.

use rust_decimal::Decimal;

use crate::models::{ComponentRule, SalaryStructure};

/// The unrounded amounts of the six salary components.
///
/// Intermediate pipeline value: amounts are kept at full precision so totals
/// can be computed before any per-field rounding compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentAmounts {
    /// Base salary component.
    pub basic: Decimal,
    /// House Rent Allowance.
    pub hra: Decimal,
    /// Standard Allowance.
    pub standard_allowance: Decimal,
    /// Performance Bonus.
    pub performance_bonus: Decimal,
    /// Leave Travel Allowance.
    pub lta: Decimal,
    /// Residual wage after the other five components, clamped at zero.
    pub fixed_allowance: Decimal,
}

impl ComponentAmounts {
    /// Sum of all six component amounts.
    pub fn total(&self) -> Decimal {
        self.basic
            + self.hra
            + self.standard_allowance
            + self.performance_bonus
            + self.lta
            + self.fixed_allowance
    }
}

/// Resolves one rule against its reference base.
fn resolve_rule(rule: &ComponentRule, base: Decimal) -> Decimal {
    if rule.is_percentage() {
        base * rule.value / Decimal::ONE_HUNDRED
    } else {
        rule.value
    }
}

/// Resolves the six salary components for a wage.
///
/// Always returns a value; there are no error conditions. A zero wage
/// resolves every percentage-based component to zero while fixed amounts keep
/// their configured value, which can push the component total past the wage.
/// That situation is surfaced by
/// [`validate_structure`](crate::calculation::validate_structure), not
/// prevented here: read-only display of an over-committed structure must
/// still succeed.
///
/// # Arguments
///
/// * `wage` - The non-negative monthly gross wage
/// * `structure` - The structure with every rule populated (callers resolve
///   "no custom structure" to the default before this point)
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::resolve_components;
/// use salary_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let amounts = resolve_components(Decimal::from(50000), &SalaryStructure::default());
/// assert_eq!(amounts.basic, Decimal::from(25000));
/// assert_eq!(amounts.hra, Decimal::from(12500));
/// ```
pub fn resolve_components(wage: Decimal, structure: &SalaryStructure) -> ComponentAmounts {
    let basic = resolve_rule(&structure.basic, wage);
    // HRA's reference base is the resolved basic, not the wage.
    let hra = resolve_rule(&structure.hra, basic);
    let standard_allowance = resolve_rule(&structure.standard_allowance, wage);
    let performance_bonus = resolve_rule(&structure.performance_bonus, wage);
    let lta = resolve_rule(&structure.lta, wage);

    let committed = basic + hra + standard_allowance + performance_bonus + lta;
    let fixed_allowance = (wage - committed).max(Decimal::ZERO);

    ComponentAmounts {
        basic,
        hra,
        standard_allowance,
        performance_bonus,
        lta,
        fixed_allowance,
    }
}

/// The effective percentage of `amount` relative to `base`.
///
/// Used to annotate fixed-amount components with a percentage-of-base for
/// display. A zero base yields zero rather than a division error, so a zero
/// wage (or zero basic, for HRA) never poisons the output.
pub fn effective_percentage(amount: Decimal, base: Decimal) -> Decimal {
    if base.is_zero() {
        Decimal::ZERO
    } else {
        amount / base * Decimal::ONE_HUNDRED
    }
}
