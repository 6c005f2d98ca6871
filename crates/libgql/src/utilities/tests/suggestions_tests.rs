use crate::utilities::did_you_mean;
use crate::utilities::natural_compare;
use crate::utilities::suggestion_list;
use std::cmp::Ordering;

mod suggestion_list {
    use super::*;

    #[test]
    fn exact_and_case_only_matches_come_first() {
        assert_eq!(suggestion_list("name", &["NAME", "name", "nam"]), vec!["name", "NAME", "nam"]);
    }

    #[test]
    fn options_beyond_the_threshold_are_dropped() {
        assert!(suggestion_list("abc", &["xyz", "abcdef"]).is_empty());
        assert_eq!(suggestion_list("", &["a"]), vec!["a"]);
    }

    #[test]
    fn transpositions_count_as_one_edit() {
        assert_eq!(suggestion_list("aprent", &["parent", "apple"]), vec!["parent"]);
    }

    #[test]
    fn ties_sort_naturally() {
        assert_eq!(suggestion_list("file", &["fi10", "fi9x"]), vec!["fi9x", "fi10"]);
    }
}

mod did_you_mean {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn lists_up_to_five_with_an_oxford_or() {
        assert_eq!(did_you_mean(None, &names(&["a", "b", "c"])), " Did you mean \"a\", \"b\", or \"c\"?");
        assert_eq!(
            did_you_mean(None, &names(&["a", "b", "c", "d", "e", "f"])),
            " Did you mean \"a\", \"b\", \"c\", \"d\", or \"e\"?",
        );
    }

    #[test]
    fn sub_message_precedes_the_suggestions() {
        assert_eq!(
            did_you_mean(Some("to use an inline fragment on"), &names(&["Dog"])),
            " Did you mean to use an inline fragment on \"Dog\"?",
        );
    }
}

#[test]
fn natural_compare_orders_digit_runs_numerically() {
    assert_eq!(natural_compare("a2", "a10"), Ordering::Less);
    assert_eq!(natural_compare("a10", "a10"), Ordering::Equal);
    assert_eq!(natural_compare("b", "a10"), Ordering::Greater);
    assert_eq!(natural_compare("a", "a1"), Ordering::Less);
}
