//! Salary structure validation.
//!
//! Runs the full resolve + aggregate pipeline and rejects structures whose
//! resolved component total exceeds the wage. This check is mandatory before
//! persisting any HR-edited structure. It is deliberately bypassed for
//! read-only display of an already-stored structure: display renders whatever
//! is stored, even historically over-committed, and never fails.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{ResolvedSalary, SalaryStructure};

use super::salary::calculate_salary_components;

/// Tolerance for floating rounding when comparing the component total against
/// the wage, in currency units.
pub const OVER_COMMIT_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Validates a salary structure against a wage.
///
/// Resolves the full salary breakdown and checks that the rounded component
/// total does not exceed the rounded wage by more than
/// [`OVER_COMMIT_EPSILON`]. On success the computed breakdown is returned so
/// the editor can preview exactly what will be stored; on failure the error
/// carries both totals so the caller can render
/// "Total components (X) exceed wage (Y)".
///
/// # Errors
///
/// - [`EngineError::InvalidWage`] if the wage is negative
/// - [`EngineError::OverCommitted`] if the resolved total exceeds the wage
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::validate_structure;
/// use salary_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let resolved = validate_structure(Decimal::from(50000), &SalaryStructure::default()).unwrap();
/// assert_eq!(resolved.totals.total_components, Decimal::from(50000));
/// ```
pub fn validate_structure(
    wage: Decimal,
    structure: &SalaryStructure,
) -> EngineResult<ResolvedSalary> {
    if wage < Decimal::ZERO {
        return Err(EngineError::InvalidWage {
            message: format!("wage must not be negative, got {}", wage),
        });
    }

    let resolved = calculate_salary_components(wage, Some(structure));

    let total = resolved.totals.total_components;
    let wage = resolved.totals.gross_salary;
    if total > wage + OVER_COMMIT_EPSILON {
        return Err(EngineError::OverCommitted { total, wage });
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentRule;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn all_fixed(basic: &str, hra: &str) -> SalaryStructure {
        SalaryStructure {
            basic: ComponentRule::fixed(dec(basic)),
            hra: ComponentRule::fixed(dec(hra)),
            standard_allowance: ComponentRule::fixed(Decimal::ZERO),
            performance_bonus: ComponentRule::fixed(Decimal::ZERO),
            lta: ComponentRule::fixed(Decimal::ZERO),
            pf_rate: dec("12"),
            professional_tax: dec("200"),
        }
    }

    /// SV-001: the default structure is valid once the fixed standard
    /// allowance fits inside the wage
    #[test]
    fn test_default_structure_is_valid_at_realistic_wages() {
        for wage in ["50000", "75000", "987654.32"] {
            let result = validate_structure(dec(wage), &SalaryStructure::default());
            assert!(result.is_ok(), "default structure rejected at wage {}", wage);
        }
    }

    /// SV-001b: at low wages the default structure's fixed standard
    /// allowance overcommits, and the validator says so
    #[test]
    fn test_default_structure_overcommits_low_wages() {
        let result = validate_structure(dec("10000"), &SalaryStructure::default());
        assert!(matches!(
            result.unwrap_err(),
            EngineError::OverCommitted { .. }
        ));
    }

    /// SV-002: fixed 9000 + 2000 against a 10000 wage
    #[test]
    fn test_over_commit_is_rejected_with_totals() {
        let structure = all_fixed("9000", "2000");
        let result = validate_structure(dec("10000"), &structure);

        match result.unwrap_err() {
            EngineError::OverCommitted { total, wage } => {
                assert_eq!(total, dec("11000"));
                assert_eq!(wage, dec("10000"));
            }
            other => panic!("Expected OverCommitted, got {:?}", other),
        }
    }

    /// SV-003: the error message cites both totals
    #[test]
    fn test_error_message_cites_totals() {
        let structure = all_fixed("9000", "2000");
        let error = validate_structure(dec("10000"), &structure).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("11000"), "message was: {}", message);
        assert!(message.contains("10000"), "message was: {}", message);
    }

    /// SV-004: exactly-committed structures pass
    #[test]
    fn test_exact_commit_passes() {
        let structure = all_fixed("8000", "2000");
        let resolved = validate_structure(dec("10000"), &structure).unwrap();
        assert_eq!(resolved.totals.total_components, dec("10000"));
    }

    /// SV-005: an excess within the rounding epsilon passes
    #[test]
    fn test_epsilon_tolerance() {
        let structure = all_fixed("8000", "2000.01");
        assert!(validate_structure(dec("10000"), &structure).is_ok());

        let structure = all_fixed("8000", "2000.02");
        assert!(validate_structure(dec("10000"), &structure).is_err());
    }

    /// SV-006: negative wage fails fast with a distinguishable error
    #[test]
    fn test_negative_wage_rejected() {
        let result = validate_structure(dec("-1"), &SalaryStructure::default());
        match result.unwrap_err() {
            EngineError::InvalidWage { message } => {
                assert!(message.contains("-1"));
            }
            other => panic!("Expected InvalidWage, got {:?}", other),
        }
    }

    /// SV-007: fixed amounts that overcommit a zero wage are rejected
    #[test]
    fn test_zero_wage_with_fixed_amounts_rejected() {
        let result = validate_structure(Decimal::ZERO, &SalaryStructure::default());
        // Standard allowance is fixed 4167 against a zero wage.
        match result.unwrap_err() {
            EngineError::OverCommitted { total, wage } => {
                assert_eq!(total, dec("4167"));
                assert_eq!(wage, Decimal::ZERO);
            }
            other => panic!("Expected OverCommitted, got {:?}", other),
        }
    }

    /// SV-008: successful validation returns the computed breakdown
    #[test]
    fn test_valid_structure_returns_breakdown() {
        let resolved = validate_structure(dec("50000"), &SalaryStructure::default()).unwrap();
        assert_eq!(resolved.components.basic.amount, dec("25000"));
        assert_eq!(resolved.totals.net_salary, dec("46800"));
    }
}
