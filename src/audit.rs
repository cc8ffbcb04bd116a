//! Audit pass
//!
//! Runs the configured rules one after another against a single immutable
//! snapshot and reports each rule's findings before starting the next.

use crate::collections::RecordStore;
use crate::config::AuditConfig;
use crate::error::Result;
use crate::report::{ReportSink, Reporter};
use crate::rules::{Finding, RuleCode};
use crate::utils::date_utils::DateComparator;
use crate::utils::logging::{log_operation_complete, log_operation_start};
use std::time::Instant;

/// Finding counts of a completed pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Findings per rule, in the order the rules ran
    pub per_rule: Vec<(RuleCode, usize)>,
}

impl PassSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.per_rule.iter().map(|(_, count)| count).sum()
    }

    /// Findings reported by one rule, zero if it did not run
    #[must_use]
    pub fn count(&self, rule: RuleCode) -> usize {
        self.per_rule
            .iter()
            .filter(|(code, _)| *code == rule)
            .map(|(_, count)| count)
            .sum()
    }
}

/// A validation pass over one record store snapshot
#[derive(Debug)]
pub struct AuditPass<'a> {
    store: &'a RecordStore,
    rules: Vec<RuleCode>,
    dates: DateComparator,
}

impl<'a> AuditPass<'a> {
    #[must_use]
    pub fn new(store: &'a RecordStore, config: &AuditConfig) -> Self {
        Self {
            store,
            rules: config.rules.clone(),
            dates: config.date_comparator(),
        }
    }

    /// Findings of a single rule, without reporting them
    #[must_use]
    pub fn findings(&self, rule: RuleCode) -> Vec<Finding> {
        rule.evaluate(self.store, &self.dates)
    }

    /// Run every configured rule in order, reporting as it goes
    ///
    /// Stops at the first sink failure.
    pub fn run<S: ReportSink>(&self, reporter: &mut Reporter<S>) -> Result<PassSummary> {
        let start = Instant::now();
        let mut summary = PassSummary::default();

        for &rule in &self.rules {
            log_operation_start("Running rule", rule.code());
            let findings = self.findings(rule);
            let count = reporter.report_all(&findings)?;
            summary.per_rule.push((rule, count));
        }

        log_operation_complete(
            "audit pass over",
            &format!(
                "{} individuals and {} families",
                self.store.individual_count(),
                self.store.family_count()
            ),
            summary.total(),
            Some(start.elapsed()),
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;
    use crate::report::{RenderOptions, WriterSink, render};
    use crate::utils::test::{family, individual, male, store};
    use std::io::{self, Write};

    /// Accepts a fixed number of writes, then fails every later one
    struct FillingWriter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl Write for FillingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::other("full"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn sample_store() -> RecordStore {
        store(
            vec![
                male("I1", "John Doe"),
                individual("I2").with_birth("01/01/2000").with_death("01/01/1990"),
                male("I3", "Jake Roe").with_birth("01/01/1980"),
            ],
            vec![
                family("F1", "I1", "I2")
                    .with_marriage("01/01/1990")
                    .with_children(["I3"]),
            ],
        )
    }

    #[test]
    fn test_pass_runs_rules_in_config_order() {
        let store = sample_store();
        let mut config = AuditConfig::default();
        config.select_rules("US16,US03").unwrap();

        let mut reporter = Reporter::new(String::new(), config.render_options());
        let summary = AuditPass::new(&store, &config).run(&mut reporter).unwrap();

        assert_eq!(summary.per_rule, vec![(RuleCode::Us16, 1), (RuleCode::Us03, 1)]);
        assert_eq!(summary.total(), 2);
        assert_eq!(summary.count(RuleCode::Us08), 0);

        let text = reporter.into_sink();
        let us16 = text.find("US16").unwrap();
        let us03 = text.find("US03").unwrap();
        assert!(us16 < us03);
    }

    #[test]
    fn test_full_catalog() {
        let store = sample_store();
        let config = AuditConfig::default();
        let mut reporter = Reporter::with_defaults(String::new());
        let summary = AuditPass::new(&store, &config).run(&mut reporter).unwrap();
        assert_eq!(
            summary.per_rule,
            vec![
                (RuleCode::Us03, 1),
                (RuleCode::Us04, 0),
                (RuleCode::Us08, 1),
                (RuleCode::Us16, 1),
                (RuleCode::Us24, 0),
            ]
        );
        assert_eq!(reporter.findings_written(), 3);
    }

    #[test]
    fn test_sink_failure_stops_pass_and_keeps_earlier_text() {
        let store = sample_store();
        let config = AuditConfig::default();
        let pass = AuditPass::new(&store, &config);
        let writer = FillingWriter {
            remaining: 1,
            written: Vec::new(),
        };
        let mut reporter = Reporter::with_defaults(WriterSink::new(writer, "report"));

        let err = pass.run(&mut reporter).unwrap_err();
        assert!(matches!(&err, AuditError::Sink { target, .. } if target == "report"));
        assert_eq!(reporter.findings_written(), 1);

        let first = render(&pass.findings(RuleCode::Us03)[0], &RenderOptions::default());
        let kept = reporter.into_sink().into_inner().written;
        assert_eq!(String::from_utf8(kept).unwrap(), first);
    }
}
