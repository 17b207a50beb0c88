//! Salary structure configuration models.
//!
//! This module defines the [`SalaryStructure`] describing how each salary
//! component and deduction is derived, and the [`ComponentRule`] / [`RuleKind`]
//! types for the individual component rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a component rule derives its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// The rule value is a percentage of the reference base.
    Percentage,
    /// The rule value is a fixed monthly amount.
    Fixed,
}

impl Default for RuleKind {
    fn default() -> Self {
        RuleKind::Fixed
    }
}

/// Describes how one salary component is derived.
///
/// A rule is either a percentage of its reference base or a fixed monthly
/// amount. The reference base depends on the component: HRA percentages are
/// taken against the resolved Basic amount, every other percentage is taken
/// against the monthly wage.
///
/// A rule with a missing `type` or `value` fails closed to `fixed 0` during
/// deserialization rather than propagating an unusable value.
///
/// # Example
///
/// ```
/// use salary_engine::models::{ComponentRule, RuleKind};
/// use rust_decimal::Decimal;
///
/// let rule: ComponentRule = serde_json::from_str(r#"{"type":"percentage","value":"50"}"#).unwrap();
/// assert_eq!(rule.kind, RuleKind::Percentage);
/// assert_eq!(rule.value, Decimal::from(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ComponentRule {
    /// Whether the value is a percentage or a fixed amount.
    #[serde(rename = "type", default)]
    pub kind: RuleKind,
    /// The percentage (of the reference base) or the fixed monthly amount.
    #[serde(default)]
    pub value: Decimal,
}

impl ComponentRule {
    /// Creates a percentage-based rule.
    pub fn percentage(value: Decimal) -> Self {
        Self {
            kind: RuleKind::Percentage,
            value,
        }
    }

    /// Creates a fixed-amount rule.
    pub fn fixed(value: Decimal) -> Self {
        Self {
            kind: RuleKind::Fixed,
            value,
        }
    }

    /// Returns true if this rule is percentage-based.
    pub fn is_percentage(&self) -> bool {
        self.kind == RuleKind::Percentage
    }
}

/// The configuration describing how a monthly wage is decomposed.
///
/// One rule per configurable component plus the deduction parameters. Fixed
/// Allowance carries no rule: it is always the residual wage after the other
/// five components. A structure is owned by (embedded in) the employee record;
/// employees without a custom structure use [`SalaryStructure::default`].
///
/// # Example
///
/// ```
/// use salary_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let structure = SalaryStructure::default();
/// assert_eq!(structure.basic.value, Decimal::from(50));
/// assert_eq!(structure.pf_rate, Decimal::from(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryStructure {
    /// Rule for the Basic component. Percentage base: wage.
    #[serde(default)]
    pub basic: ComponentRule,
    /// Rule for House Rent Allowance. Percentage base: resolved Basic.
    #[serde(default)]
    pub hra: ComponentRule,
    /// Rule for the Standard Allowance. Percentage base: wage.
    #[serde(default)]
    pub standard_allowance: ComponentRule,
    /// Rule for the Performance Bonus. Percentage base: wage.
    #[serde(default)]
    pub performance_bonus: ComponentRule,
    /// Rule for Leave Travel Allowance. Percentage base: wage.
    #[serde(default)]
    pub lta: ComponentRule,
    /// Provident Fund rate, applied to resolved Basic for both the employee
    /// and the employer contribution.
    #[serde(default)]
    pub pf_rate: Decimal,
    /// Professional tax, a fixed monthly amount (not a percentage).
    #[serde(default = "default_professional_tax")]
    pub professional_tax: Decimal,
}

/// Default professional tax amount per month.
pub const DEFAULT_PROFESSIONAL_TAX: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

fn default_professional_tax() -> Decimal {
    DEFAULT_PROFESSIONAL_TAX
}

impl Default for SalaryStructure {
    /// The default salary structure used whenever an employee has no custom
    /// structure: Basic 50% of wage, HRA 50% of basic, Standard Allowance
    /// 4167 fixed, Performance Bonus 8.33% of wage, LTA 8.333% of wage,
    /// PF rate 12%, professional tax 200.
    fn default() -> Self {
        Self {
            basic: ComponentRule::percentage(Decimal::from(50)),
            hra: ComponentRule::percentage(Decimal::from(50)),
            standard_allowance: ComponentRule::fixed(Decimal::from(4167)),
            performance_bonus: ComponentRule::percentage(Decimal::new(833, 2)),
            lta: ComponentRule::percentage(Decimal::new(8333, 3)),
            pf_rate: Decimal::from(12),
            professional_tax: DEFAULT_PROFESSIONAL_TAX,
        }
    }
}
