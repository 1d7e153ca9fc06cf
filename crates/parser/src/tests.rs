#[cfg(test)]
mod pipeline_tests {
    use crate::error::ParseError;
    use crate::filter::{self, GroupMode, SortKey};
    use crate::{AnswerSet, Fact, GroupedReport};
    use std::collections::HashSet;

    const BLOB: &str = "Answer: 3\n\
        holds(alive,0) happens(shoot,1) holds(alive,1) edge(start,t1) edge(t1,t2)\n\
        SATISFIABLE";

    fn signature_set(labels: &[&str]) -> HashSet<String> {
        labels.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn full_pipeline_filter_group_sort() {
        let set = AnswerSet::parse(BLOB).expect("parse answer set");
        assert_eq!(set.answer_number(), Some(3));
        assert_eq!(set.facts().len(), 5);
        assert_eq!(set.signatures(), ["edge/2", "happens/2", "holds/2"]);
        assert_eq!(set.max_arity(), 2);

        let facts: Vec<&Fact> = set.facts().iter().collect();
        let filtered =
            filter::filter_by_signature(&facts, &signature_set(&["holds/2", "happens/2"]));
        assert_eq!(filtered.len(), 3);

        let narrowed = filter::filter_by_argument(filtered, 1, "1");
        assert_eq!(narrowed.len(), 2);

        let mut grouped = filter::group(narrowed, GroupMode::ByName);
        assert_eq!(grouped.keys().collect::<Vec<_>>(), ["happens/*", "holds/*"]);

        filter::sort_groups(&mut grouped, SortKey::Last);
        let report = GroupedReport::new(&grouped).to_string();
        assert!(report.contains("happens(shoot,1)"));
        assert!(report.contains("holds(alive,1)"));
    }

    #[test]
    fn multiple_answer_sets_never_build_a_collection() {
        let err = AnswerSet::parse("Answer: 1\na b\nAnswer: 2\na c").unwrap_err();
        assert_eq!(err, ParseError::MultipleAnswerSets(2));
    }

    #[test]
    fn grouping_with_everything_off_is_one_bucket() {
        let set = AnswerSet::parse("p(1) q(2) r").expect("parse");
        let facts: Vec<&Fact> = set.facts().iter().collect();
        let grouped = filter::group(facts, GroupMode::from_flags(false, false));
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[filter::UNGROUPED_KEY].len(), 3);
    }
}
