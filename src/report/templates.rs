//! Report templates
//!
//! All report text lives here. Downstream consumers compare reports
//! verbatim, so headers keep their exact spacing and punctuation, including
//! trailing spaces and the per-rule number of separator lines.

use crate::collections::{PersonName, PersonRef};
use crate::rules::{Finding, FindingDetail, RuleCode, SpousePair};

/// Fixed parts of a rule's report block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub rule: RuleCode,
    /// First line, without its newline
    pub header: &'static str,
    /// Text appended after the body lines
    pub separator: &'static str,
}

/// One template per rule, in catalog order
pub const TEMPLATES: [Template; 5] = [
    Template {
        rule: RuleCode::Us03,
        header: "ERROR:INDIVIDUAL: User Story US03: Birth Before Death ",
        separator: "\n",
    },
    Template {
        rule: RuleCode::Us04,
        header: "ERROR:FAMILY: User Story US04: Marriage Before Divorce ",
        separator: "\n",
    },
    Template {
        rule: RuleCode::Us08,
        header: "ERROR: User Story US08: Birth Before Marriage Date ",
        separator: "\n\n",
    },
    Template {
        rule: RuleCode::Us16,
        header: "ERROR: User Story US16:Male last name ",
        separator: "\n\n",
    },
    Template {
        rule: RuleCode::Us24,
        header: "ERROR: User Story US24: Unique Families By Spouse :",
        separator: "\n",
    },
];

/// Template for a rule
#[must_use]
pub fn template(rule: RuleCode) -> &'static Template {
    // TEMPLATES is indexed in catalog order
    &TEMPLATES[rule as usize]
}

/// Placeholders used where a record has no value to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shown for an unset name or an unset spouse id
    pub missing_name: String,
    /// Shown as the name of a reference that is not in the store
    pub unknown_reference: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            missing_name: "null".to_string(),
            unknown_reference: "unknown".to_string(),
        }
    }
}

impl RenderOptions {
    fn id<'a>(&'a self, person: &'a PersonRef) -> &'a str {
        person
            .id
            .as_ref()
            .map_or(self.missing_name.as_str(), |id| id.as_str())
    }

    fn name<'a>(&'a self, person: &'a PersonRef) -> &'a str {
        match &person.name {
            PersonName::Known(name) => name,
            PersonName::Unnamed => &self.missing_name,
            PersonName::Dangling => &self.unknown_reference,
        }
    }

    fn spouses(&self, pair: &SpousePair) -> String {
        format!(
            "{}: Husbund Name: {},Wife Name: {}",
            pair.family,
            self.name(&pair.husband),
            self.name(&pair.wife)
        )
    }
}

/// Render the full report block for a finding
#[must_use]
pub fn render(finding: &Finding, options: &RenderOptions) -> String {
    let template = template(finding.rule());
    let mut out = String::with_capacity(160);
    out.push_str(template.header);
    out.push('\n');
    out.push_str(&render_body(finding, options));
    out.push_str(template.separator);
    out
}

/// Render the body lines of a finding, each terminated by a newline
#[must_use]
pub fn render_body(finding: &Finding, options: &RenderOptions) -> String {
    match finding.detail() {
        FindingDetail::BirthAfterDeath {
            individual,
            birth,
            death,
        } => format!(
            "Individual: {} - {} was born after death\nDOB: {birth} DOD: {death}\n",
            options.id(individual),
            options.name(individual),
        ),
        FindingDetail::MarriageAfterDivorce {
            family,
            husband,
            wife,
            marriage,
            divorce,
        } => format!(
            "Family: {family}\nIndividual: {}: {}{}: {} marriage date is before divorce date.\nMarriage Date: {marriage} Divorce Date: {divorce}\n",
            options.id(husband),
            options.name(husband),
            options.id(wife),
            options.name(wife),
        ),
        FindingDetail::BirthBeforeParentsMarriage {
            family,
            child,
            birth,
            marriage,
        } => format!(
            "Family ID: {family}\nIndividual: {}: {} Has been born before parents' marriage\nDOB: {birth} Parents Marriage Date: {marriage}\n",
            options.id(child),
            options.name(child),
        ),
        FindingDetail::MaleLastNameMismatch { family, .. } => format!(
            "Family ID: {family}   family members don't have same last name \n"
        ),
        FindingDetail::DuplicateSpouses {
            first,
            second,
            marriage,
        } => format!(
            "{} and {}\n have same spouses and marriage dates :{marriage}\n",
            options.spouses(first),
            options.spouses(second),
        ),
    }
}
