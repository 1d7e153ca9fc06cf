//! Filtering, grouping and sorting over parsed facts.
//!
//! All operations work on borrowed fact views; the owning
//! [`AnswerSet`](crate::AnswerSet) is never mutated. Grouping returns an
//! insertion-ordered map so section order tracks first appearance, and
//! sorting reorders each group in place.

use crate::error::ParseError;
use crate::fact::Fact;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

/// Group key used when no grouping is requested.
pub const UNGROUPED_KEY: &str = "*/*";

/// How facts are bucketed into labeled groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupMode {
    /// Single `*/*` bucket holding everything.
    None,
    /// One bucket per predicate name, keyed `name/*`.
    ByName,
    /// One bucket per full signature, keyed `name/arity`.
    BySignature,
}

impl GroupMode {
    /// Build a mode from the two UI toggles.
    ///
    /// Grouping by arity without grouping by name is not a meaningful
    /// request, so `by_arity` is ignored unless `by_name` is set.
    #[must_use]
    pub fn from_flags(by_name: bool, by_arity: bool) -> Self {
        match (by_name, by_arity) {
            (false, _) => Self::None,
            (true, false) => Self::ByName,
            (true, true) => Self::BySignature,
        }
    }
}

/// Which argument a sort compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Leave groups in their current order.
    None,
    /// Compare argument `n`, clamped to each fact's last argument.
    Argument(usize),
    /// Always compare the final argument.
    Last,
}

impl FromStr for SortKey {
    type Err = ParseError;

    /// Parse the selector a front end hands over: the empty string,
    /// an argument index, or `last`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::None),
            "last" => Ok(Self::Last),
            _ => s
                .parse::<usize>()
                .map(Self::Argument)
                .map_err(|_| ParseError::InvalidSortKey(s.to_string())),
        }
    }
}

/// Keep facts whose signature is in `allowed`, preserving order.
#[must_use]
pub fn filter_by_signature<'a>(facts: &[&'a Fact], allowed: &HashSet<String>) -> Vec<&'a Fact> {
    facts
        .iter()
        .filter(|fact| allowed.contains(&fact.signature()))
        .copied()
        .collect()
}

/// Keep facts whose argument at `arg_index` equals `value` exactly.
///
/// An empty `value` means "no constraint": the input comes back as-is.
/// Facts with too few arguments never match a non-empty `value`.
#[must_use]
pub fn filter_by_argument<'a>(
    facts: Vec<&'a Fact>,
    arg_index: usize,
    value: &str,
) -> Vec<&'a Fact> {
    if value.is_empty() {
        return facts;
    }

    facts
        .into_iter()
        .filter(|fact| fact.arity() > arg_index && fact.arguments()[arg_index] == value)
        .collect()
}

/// Bucket facts into an insertion-ordered map of labeled groups.
///
/// Key order is first-occurrence order; facts keep their relative input
/// order within each group.
#[must_use]
pub fn group(facts: Vec<&Fact>, mode: GroupMode) -> IndexMap<String, Vec<&Fact>> {
    let mut grouped: IndexMap<String, Vec<&Fact>> = IndexMap::new();

    match mode {
        GroupMode::None => {
            grouped.insert(UNGROUPED_KEY.to_string(), facts);
        }
        GroupMode::ByName => {
            for fact in facts {
                grouped
                    .entry(format!("{}/*", fact.name()))
                    .or_default()
                    .push(fact);
            }
        }
        GroupMode::BySignature => {
            for fact in facts {
                grouped.entry(fact.signature()).or_default().push(fact);
            }
        }
    }

    grouped
}

/// In-place sort of every group by the requested key.
///
/// Each group is first ordered by full raw text so ties always resolve
/// the same way, then stable-sorted by the key comparator. Applying the
/// same key twice yields the same order as once.
pub fn sort_groups(grouped: &mut IndexMap<String, Vec<&Fact>>, key: SortKey) {
    if key == SortKey::None {
        return;
    }

    for facts in grouped.values_mut() {
        facts.sort_by(|a, b| a.raw().cmp(b.raw()));
        facts.sort_by(|a, b| compare_by_key(a, b, key));
    }
}

fn compare_by_key(a: &Fact, b: &Fact, key: SortKey) -> Ordering {
    match (sort_operand(a, key), sort_operand(b, key)) {
        (Some(a), Some(b)) => compare_values(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

/// The argument a fact contributes to the comparison, clamped to its
/// last argument. A fact without arguments has no operand and sorts
/// ahead of everything that has one.
fn sort_operand(fact: &Fact, key: SortKey) -> Option<&str> {
    let last = fact.arity().checked_sub(1)?;
    let index = match key {
        SortKey::Argument(n) => n.min(last),
        SortKey::Last => last,
        SortKey::None => return None,
    };
    Some(fact.arguments()[index].as_str())
}

/// Numeric comparison when both operands parse as numbers, lexicographic
/// otherwise.
fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(token: &str) -> Fact {
        Fact::parse(token).0
    }

    fn refs(facts: &[Fact]) -> Vec<&Fact> {
        facts.iter().collect()
    }

    fn raws<'a>(facts: &[&'a Fact]) -> Vec<&'a str> {
        facts.iter().map(|fact| fact.raw()).collect()
    }

    #[test]
    fn signature_filter_keeps_order() {
        let facts = [f("p(1)"), f("q(a,b)"), f("p(2)"), f("r")];
        let allowed: HashSet<String> = ["p/1", "r/0"].iter().map(ToString::to_string).collect();
        let kept = filter_by_signature(&refs(&facts), &allowed);
        assert_eq!(raws(&kept), ["p(1)", "p(2)", "r"]);
    }

    #[test]
    fn empty_argument_value_means_no_constraint() {
        let facts = [f("p(1)"), f("q")];
        let all = filter_by_argument(refs(&facts), 0, "");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn argument_filter_requires_position_and_exact_equality() {
        let facts = [f("holds(alive,1)"), f("holds(alive,2)"), f("tick")];
        let kept = filter_by_argument(refs(&facts), 1, "2");
        assert_eq!(raws(&kept), ["holds(alive,2)"]);
    }

    #[test]
    fn ungrouped_is_a_single_star_bucket() {
        let facts = [f("p(1)"), f("q")];
        let grouped = group(refs(&facts), GroupMode::from_flags(false, true));
        assert_eq!(grouped.len(), 1);
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["p(1)", "q"]);
    }

    #[test]
    fn group_keys_follow_first_occurrence() {
        let facts = [f("q(a)"), f("p(1)"), f("q(b,c)"), f("p(2)")];

        let by_name = group(refs(&facts), GroupMode::ByName);
        assert_eq!(by_name.keys().collect::<Vec<_>>(), ["q/*", "p/*"]);
        assert_eq!(raws(&by_name["q/*"]), ["q(a)", "q(b,c)"]);

        let by_signature = group(refs(&facts), GroupMode::BySignature);
        assert_eq!(
            by_signature.keys().collect::<Vec<_>>(),
            ["q/1", "p/1", "q/2"]
        );
    }

    #[test]
    fn sort_key_selector_parsing() {
        assert_eq!("".parse::<SortKey>().expect("empty"), SortKey::None);
        assert_eq!("2".parse::<SortKey>().expect("index"), SortKey::Argument(2));
        assert_eq!("last".parse::<SortKey>().expect("last"), SortKey::Last);
        assert!("frst".parse::<SortKey>().is_err());
    }

    #[test]
    fn numeric_operands_sort_numerically() {
        let facts = [f("t(10)"), f("t(9)"), f("t(b)"), f("t(a)")];
        let mut grouped = group(refs(&facts), GroupMode::None);
        sort_groups(&mut grouped, SortKey::Argument(0));
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["t(9)", "t(10)", "t(a)", "t(b)"]);
    }

    #[test]
    fn out_of_range_index_clamps_to_last_argument() {
        let facts = [f("p(9)"), f("p(a,b,2)"), f("p(5,5)")];
        let mut grouped = group(refs(&facts), GroupMode::None);
        sort_groups(&mut grouped, SortKey::Argument(9));
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["p(a,b,2)", "p(5,5)", "p(9)"]);
    }

    #[test]
    fn last_key_compares_final_arguments() {
        let facts = [f("h(x,3)"), f("h(y)"), f("h(z,1,2)")];
        let mut grouped = group(refs(&facts), GroupMode::None);
        sort_groups(&mut grouped, SortKey::Last);
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["h(z,1,2)", "h(x,3)", "h(y)"]);
    }

    #[test]
    fn ties_break_on_full_raw_text() {
        let facts = [f("e(b,1)"), f("e(a,1)")];
        let mut grouped = group(refs(&facts), GroupMode::None);
        sort_groups(&mut grouped, SortKey::Last);
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["e(a,1)", "e(b,1)"]);
    }

    #[test]
    fn facts_without_arguments_sort_first() {
        let facts = [f("p(1)"), f("tick")];
        let mut grouped = group(refs(&facts), GroupMode::None);
        sort_groups(&mut grouped, SortKey::Last);
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["tick", "p(1)"]);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let facts = [f("h(b,2)"), f("h(a,2)"), f("h(c,1)")];
        let mut once = group(refs(&facts), GroupMode::None);
        sort_groups(&mut once, SortKey::Last);
        let mut twice = once.clone();
        sort_groups(&mut twice, SortKey::Last);
        assert_eq!(raws(&once[UNGROUPED_KEY]), raws(&twice[UNGROUPED_KEY]));
    }

    #[test]
    fn none_key_keeps_input_order() {
        let facts = [f("z(9)"), f("a(1)")];
        let mut grouped = group(refs(&facts), GroupMode::None);
        sort_groups(&mut grouped, SortKey::None);
        assert_eq!(raws(&grouped[UNGROUPED_KEY]), ["z(9)", "a(1)"]);
    }
}
