//! The full salary computation pipeline.
//!
//! Resolves components, resolves deductions, aggregates totals, and assembles
//! the [`ResolvedSalary`] wire shape. This is the single shared implementation
//! behind every payroll view; the service boundary and any client-side
//! preview both call it, so the formula cannot drift between them.

use rust_decimal::Decimal;

use crate::models::{
    ComponentBreakdown, ComponentRule, DeductionBreakdown, ResolvedBasis, ResolvedComponent,
    ResolvedDeduction, ResolvedSalary, RuleKind, SalaryStructure,
};

use super::aggregate::{aggregate, round_currency};
use super::components::{effective_percentage, resolve_components};
use super::deductions::resolve_deductions;

/// Builds the wire representation of one configured component.
///
/// Percentage rules echo their configured percentage; fixed rules carry a
/// back-computed percentage of their reference base, informational only.
fn resolved_component(rule: &ComponentRule, amount: Decimal, base: Decimal) -> ResolvedComponent {
    let percentage = if rule.is_percentage() {
        rule.value
    } else {
        effective_percentage(amount, base)
    };

    ResolvedComponent {
        amount: round_currency(amount),
        percentage,
        basis: match rule.kind {
            RuleKind::Percentage => ResolvedBasis::Percentage,
            RuleKind::Fixed => ResolvedBasis::Fixed,
        },
        value: rule.value,
    }
}

/// Computes the full salary breakdown for a monthly wage.
///
/// This is the primary entry point of the engine. `structure` is the
/// employee's custom structure if HR has configured one; `None` resolves to
/// [`SalaryStructure::default`] here, at the boundary, so the resolver itself
/// never sees a partially-populated structure.
///
/// The function is pure and infallible: it never blocks, shares no state, and
/// always produces a value. A negative wage is clamped to zero before
/// resolution (the HTTP layer additionally rejects negative wages up front).
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_salary_components;
/// use rust_decimal::Decimal;
///
/// let resolved = calculate_salary_components(Decimal::from(50000), None);
/// assert_eq!(resolved.components.basic.amount, Decimal::from(25000));
/// assert_eq!(resolved.totals.net_salary, Decimal::from(46800));
/// ```
pub fn calculate_salary_components(
    wage: Decimal,
    structure: Option<&SalaryStructure>,
) -> ResolvedSalary {
    let structure = structure.cloned().unwrap_or_default();
    let wage = wage.max(Decimal::ZERO);

    let amounts = resolve_components(wage, &structure);
    let deductions = resolve_deductions(amounts.basic, &structure);
    let totals = aggregate(wage, &amounts, &deductions);

    let fixed_allowance_amount = round_currency(amounts.fixed_allowance);
    let components = ComponentBreakdown {
        basic: resolved_component(&structure.basic, amounts.basic, wage),
        hra: resolved_component(&structure.hra, amounts.hra, amounts.basic),
        standard_allowance: resolved_component(
            &structure.standard_allowance,
            amounts.standard_allowance,
            wage,
        ),
        performance_bonus: resolved_component(
            &structure.performance_bonus,
            amounts.performance_bonus,
            wage,
        ),
        lta: resolved_component(&structure.lta, amounts.lta, wage),
        fixed_allowance: ResolvedComponent {
            amount: fixed_allowance_amount,
            percentage: round_currency(effective_percentage(amounts.fixed_allowance, wage)),
            basis: ResolvedBasis::Calculated,
            value: fixed_allowance_amount,
        },
    };

    let deduction_breakdown = DeductionBreakdown {
        pf_employee: ResolvedDeduction {
            amount: round_currency(deductions.pf_employee),
            percentage: structure.pf_rate,
        },
        pf_employer: ResolvedDeduction {
            amount: round_currency(deductions.pf_employer),
            percentage: structure.pf_rate,
        },
        professional_tax: ResolvedDeduction {
            amount: deductions.professional_tax,
            percentage: Decimal::ZERO,
        },
    };

    ResolvedSalary {
        wage,
        yearly_wage: wage * Decimal::from(12),
        components,
        deductions: deduction_breakdown,
        totals,
        structure,
    }
}
