//! Configuration for audit passes.

use crate::error::{AuditError, Result};
use crate::report::RenderOptions;
use crate::rules::RuleCode;
use crate::utils::date_utils::{DEFAULT_DATE_FORMAT, DateComparator};
use serde::Deserialize;
use std::path::Path;

/// Configuration for an audit pass
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// chrono format string record dates are written in
    pub date_format: String,
    /// Text shown for an unset name or unset spouse id
    pub missing_name: String,
    /// Text shown as the name of a reference missing from the store
    pub unknown_reference: String,
    /// Rules to run, in report order
    pub rules: Vec<RuleCode>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        let render = RenderOptions::default();
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            missing_name: render.missing_name,
            unknown_reference: render.unknown_reference,
            rules: RuleCode::ALL.to_vec(),
        }
    }
}

impl AuditConfig {
    /// Load a JSON config file; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| AuditError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        log::debug!("Loaded audit config from {}", path.display());
        Ok(config)
    }

    /// Reject values a pass cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.date_format.trim().is_empty() {
            return Err(AuditError::Config("date_format must not be empty".to_string()));
        }
        if self.rules.is_empty() {
            return Err(AuditError::Config("no rules selected".to_string()));
        }
        Ok(())
    }

    /// Replace the rule selection from a comma-separated list of codes
    pub fn select_rules(&mut self, codes: &str) -> Result<()> {
        let rules = codes
            .split(',')
            .filter(|code| !code.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<RuleCode>>>()?;
        if rules.is_empty() {
            return Err(AuditError::Config("no rules selected".to_string()));
        }
        self.rules = rules;
        Ok(())
    }

    #[must_use]
    pub fn date_comparator(&self) -> DateComparator {
        DateComparator::new(self.date_format.clone())
    }

    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            missing_name: self.missing_name.clone(),
            unknown_reference: self.unknown_reference.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AuditConfig::default();
        assert_eq!(config.date_format, "%m/%d/%Y");
        assert_eq!(config.missing_name, "null");
        assert_eq!(config.rules, RuleCode::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AuditConfig =
            serde_json::from_str(r#"{"rules": ["US24", "US03"], "missing_name": ""}"#).unwrap();
        assert_eq!(config.rules, vec![RuleCode::Us24, RuleCode::Us03]);
        assert_eq!(config.missing_name, "");
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(serde_json::from_str::<AuditConfig>(r#"{"colour": true}"#).is_err());
    }

    #[test]
    fn test_select_rules() {
        let mut config = AuditConfig::default();
        config.select_rules("us16, US04").unwrap();
        assert_eq!(config.rules, vec![RuleCode::Us16, RuleCode::Us04]);

        assert!(config.select_rules("US16,US77").is_err());
        assert!(matches!(config.select_rules(" , "), Err(AuditError::Config(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.json");
        std::fs::write(&path, r#"{"date_format": "%Y-%m-%d"}"#).unwrap();
        let config = AuditConfig::from_file(&path).unwrap();
        assert_eq!(config.date_format, "%Y-%m-%d");

        std::fs::write(&path, r#"{"rules": []}"#).unwrap();
        assert!(matches!(
            AuditConfig::from_file(&path),
            Err(AuditError::Config(_))
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            AuditConfig::from_file(&path),
            Err(AuditError::Parse { .. })
        ));
    }
}
