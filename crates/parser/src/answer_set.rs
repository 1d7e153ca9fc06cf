//! Answer set parsing and summary queries.
//!
//! An [`AnswerSet`] holds the ordered ground facts of ONE reported solver
//! answer. The framing text printed around the atoms (`Answer: <n>`
//! before them, `SATISFIABLE` after them) is stripped before tokenizing;
//! everything in between is whitespace-separated facts.

use crate::error::ParseError;
use crate::fact::Fact;
use crate::Result;
use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;
use tracing::warn;

/// Marker the solver prints before each reported answer.
const ANSWER_MARKER: &str = "Answer:";

fn answer_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Answer:\s*([0-9]+)\s+").expect("static pattern compiles"))
}

fn satisfiable_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+SATISFIABLE").expect("static pattern compiles"))
}

/// One parsed solver answer: the ordered facts plus the original text.
///
/// Built once from raw text and read-only afterwards; the pipeline in
/// [`crate::filter`] works on borrowed views and never mutates the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    raw: String,
    answer_number: Option<u32>,
    facts: Vec<Fact>,
}

impl AnswerSet {
    /// Parse a raw solver-output blob.
    ///
    /// Strips the first `Answer: <n>` header (keeping `<n>` and dropping
    /// any banner text before it) and cuts at the first `SATISFIABLE`
    /// trailer, then parses every whitespace-separated token as a
    /// [`Fact`] in order of appearance. Malformed tokens are recovered
    /// best-effort and logged at warn level.
    ///
    /// # Errors
    /// [`ParseError::MultipleAnswerSets`] when the input reports more
    /// than one answer; only one answer set can be processed at a time.
    pub fn parse(raw_input: &str) -> Result<Self> {
        let raw = raw_input.trim().to_string();

        let markers = raw.matches(ANSWER_MARKER).count();
        if markers > 1 {
            return Err(ParseError::MultipleAnswerSets(markers));
        }

        let mut trimmed = raw.as_str();
        let mut answer_number = None;
        if let Some(header) = answer_header_re().captures(trimmed) {
            answer_number = header[1].parse::<u32>().ok();
            let end = header.get(0).expect("regex always has a whole match").end();
            trimmed = &trimmed[end..];
        }

        if let Some(trailer) = satisfiable_re().find(trimmed) {
            trimmed = &trimmed[..trailer.start()];
        }

        let mut facts = Vec::new();
        for token in trimmed.split_whitespace() {
            let (fact, diagnostics) = Fact::parse(token);
            for diagnostic in diagnostics {
                warn!("{diagnostic}: {token}");
            }
            facts.push(fact);
        }

        Ok(Self {
            raw,
            answer_number,
            facts,
        })
    }

    /// Full original input (trimmed).
    #[must_use]
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The `<n>` of the `Answer: <n>` header, when present.
    #[must_use]
    #[inline]
    pub fn answer_number(&self) -> Option<u32> {
        self.answer_number
    }

    /// Facts in order of appearance.
    #[must_use]
    #[inline]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Distinct `name/arity` labels, ordered for a filter menu.
    ///
    /// Two stable passes: arity ascending first, then name. The name
    /// pass wins overall; arity only decides among facts sharing a name.
    #[must_use]
    pub fn signatures(&self) -> Vec<String> {
        let mut pairs: Vec<(&str, usize)> = self
            .facts
            .iter()
            .map(|fact| (fact.name(), fact.arity()))
            .unique()
            .collect();
        pairs.sort_by_key(|&(_, arity)| arity);
        pairs.sort_by(|a, b| a.0.cmp(b.0));

        pairs
            .into_iter()
            .map(|(name, arity)| format!("{name}/{arity}"))
            .collect()
    }

    /// Maximum argument count across all facts, 0 when empty.
    #[must_use]
    pub fn max_arity(&self) -> usize {
        self.facts.iter().map(Fact::arity).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_framing_and_captures_answer_number() {
        let set = AnswerSet::parse("Answer: 12\np(1) q\nSATISFIABLE").expect("single answer");
        assert_eq!(set.answer_number(), Some(12));
        assert_eq!(set.facts().len(), 2);
        assert_eq!(set.facts()[0].signature(), "p/1");
        assert_eq!(set.facts()[1].signature(), "q/0");
    }

    #[test]
    fn leading_solver_banner_is_dropped() {
        let set = AnswerSet::parse("clingo version 5.6.2\nSolving...\nAnswer: 1\np(1)")
            .expect("single answer");
        assert_eq!(set.answer_number(), Some(1));
        assert_eq!(set.facts().len(), 1);
    }

    #[test]
    fn bare_facts_without_framing() {
        let set = AnswerSet::parse("  p(1)   q(a,b)\n").expect("no framing");
        assert_eq!(set.answer_number(), None);
        assert_eq!(set.raw(), "p(1)   q(a,b)");
        assert_eq!(set.facts().len(), 2);
    }

    #[test]
    fn rejects_multiple_answer_sets() {
        let err = AnswerSet::parse("Answer: 1\np\nAnswer: 2\nq").unwrap_err();
        assert_eq!(err, ParseError::MultipleAnswerSets(2));
    }

    #[test]
    fn signature_listing_is_name_major() {
        let set = AnswerSet::parse("p(1) p(2) q").expect("parse");
        assert_eq!(set.signatures(), ["p/1", "q/0"]);
    }

    #[test]
    fn signature_listing_breaks_name_ties_by_arity() {
        let set = AnswerSet::parse("p(1,2) p(1) q(a)").expect("parse");
        assert_eq!(set.signatures(), ["p/1", "p/2", "q/1"]);
    }

    #[test]
    fn max_arity_spans_all_facts() {
        let set = AnswerSet::parse("p(a,b,c) q").expect("parse");
        assert_eq!(set.max_arity(), 3);
    }

    #[test]
    fn empty_input_is_an_empty_set() {
        let set = AnswerSet::parse("").expect("empty input");
        assert!(set.facts().is_empty());
        assert_eq!(set.max_arity(), 0);
        assert!(set.signatures().is_empty());
    }
}
