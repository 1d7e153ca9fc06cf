//! Text rendering of grouped facts.
//!
//! Mirrors the labeled list a front end renders: one header per group
//! key, one line per fact, groups separated by a blank line.

use crate::fact::Fact;
use indexmap::IndexMap;
use std::fmt;

/// Borrowed view over grouped facts with a section-per-group Display.
pub struct GroupedReport<'a> {
    grouped: &'a IndexMap<String, Vec<&'a Fact>>,
}

impl<'a> GroupedReport<'a> {
    #[must_use]
    pub fn new(grouped: &'a IndexMap<String, Vec<&'a Fact>>) -> Self {
        Self { grouped }
    }
}

impl fmt::Display for GroupedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, facts) in self.grouped {
            writeln!(f, "{key}")?;
            writeln!(f, "{}", "-".repeat(45))?;
            for fact in facts {
                writeln!(f, "{fact}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
