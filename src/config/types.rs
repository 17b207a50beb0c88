//! Configuration types for the salary engine.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::models::SalaryStructure;

/// Engine configuration.
///
/// Deployments override the shipped default salary structure here without a
/// rebuild; any field omitted from the file falls back to the built-in
/// default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryConfig {
    /// The structure applied to employees without a custom one.
    #[serde(default)]
    pub default_structure: SalaryStructure,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_empty_config_falls_back_to_defaults() {
        let config: SalaryConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.default_structure, SalaryStructure::default());
    }

    #[test]
    fn test_config_overrides_default_structure() {
        let yaml = r#"
defaultStructure:
  basic: { type: percentage, value: "40" }
  hra: { type: percentage, value: "50" }
  standardAllowance: { type: fixed, value: "4167" }
  performanceBonus: { type: percentage, value: "8.33" }
  lta: { type: percentage, value: "8.333" }
  pfRate: "10"
  professionalTax: "200"
"#;
        let config: SalaryConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_structure.basic.value, Decimal::from(40));
        assert_eq!(config.default_structure.pf_rate, Decimal::from(10));
    }
}
