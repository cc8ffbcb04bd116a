//! Reporter
//!
//! Renders findings through the template table and appends them to a sink
//! in the order they are handed over.

pub mod sink;
pub mod templates;

pub use sink::{FileSink, ReportSink, WriterSink};
pub use templates::{RenderOptions, TEMPLATES, Template, render, render_body};

use crate::error::Result;
use crate::rules::Finding;

/// Formats findings and appends them to a sink
#[derive(Debug)]
pub struct Reporter<S: ReportSink> {
    sink: S,
    options: RenderOptions,
    written: usize,
}

impl<S: ReportSink> Reporter<S> {
    /// Create a reporter with explicit placeholder text
    pub const fn new(sink: S, options: RenderOptions) -> Self {
        Self {
            sink,
            options,
            written: 0,
        }
    }

    /// Create a reporter with the default placeholders
    pub fn with_defaults(sink: S) -> Self {
        Self::new(sink, RenderOptions::default())
    }

    /// Render one finding and append it
    pub fn report(&mut self, finding: &Finding) -> Result<()> {
        let text = render(finding, &self.options);
        self.sink.append(&text)?;
        self.written += 1;
        log::debug!("Reported {} for {:?}", finding.rule(), finding.entity_ids());
        Ok(())
    }

    /// Report findings in order, stopping at the first sink failure
    pub fn report_all<'a, I>(&mut self, findings: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Finding>,
    {
        let mut count = 0;
        for finding in findings {
            self.report(finding)?;
            count += 1;
        }
        Ok(count)
    }

    /// Number of findings appended so far
    #[must_use]
    pub const fn findings_written(&self) -> usize {
        self.written
    }

    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
