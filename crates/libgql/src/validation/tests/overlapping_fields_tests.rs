use crate::validation::rules::OverlappingFieldsCanBeMergedRule;
use crate::validation::tests::locations;
use crate::validation::tests::messages;
use crate::validation::tests::rule_errors;

fn overlap_errors(query: &str) -> Vec<crate::error::GraphQLError> {
    rule_errors(OverlappingFieldsCanBeMergedRule::default(), query)
}

mod mergeable {
    use super::*;

    #[test]
    fn identical_fields_and_aliases_pass() {
        let errors = overlap_errors(
            r#"
            fragment mergeIdenticalFields on Dog { name name otherName: name otherName: name }
            fragment mergeIdenticalArgs on Dog {
              doesKnowCommand(dogCommand: SIT)
              doesKnowCommand(dogCommand: SIT)
            }
            fragment differentAliases on Dog { name nickname: name barks: name }
            "#,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn same_response_name_on_disjoint_objects_passes() {
        let errors = overlap_errors(
            "{ catOrDog { ... on Dog { name: nickname } ... on Cat { name } } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn argument_order_does_not_matter() {
        let errors = overlap_errors(
            "{ dog { isAtLocation(x: 1, y: 2) isAtLocation(y: 2, x: 1) } }",
        );
        assert!(errors.is_empty());
    }
}

mod conflicts {
    use super::*;

    #[test]
    fn alias_of_different_field_conflicts() {
        let errors = overlap_errors("fragment f on Dog { name: nickname name }");
        assert_eq!(
            messages(&errors),
            vec![
                "Fields \"name\" conflict because \"nickname\" and \"name\" are different \
                 fields. Use different aliases on the fields to fetch both if this was \
                 intentional.",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 21), (1, 36)]);
    }

    #[test]
    fn differing_arguments_conflict() {
        let errors = overlap_errors(
            "fragment f on Dog { doesKnowCommand(dogCommand: SIT) doesKnowCommand(dogCommand: HEEL) }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fields \"doesKnowCommand\" conflict because they have differing arguments. Use \
                 different aliases on the fields to fetch both if this was intentional.",
            ],
        );
    }

    #[test]
    fn argument_against_no_argument_conflicts() {
        let errors = overlap_errors(
            "fragment f on Dog { isHouseTrained isHouseTrained(atOtherHomes: false) }",
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn conflicting_return_types_on_disjoint_objects() {
        let errors = overlap_errors(
            "{ catOrDog { ... on Dog { x: barkVolume } ... on Cat { x: name } } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fields \"x\" conflict because they return conflicting types \"Int\" and \
                 \"String\". Use different aliases on the fields to fetch both if this was \
                 intentional.",
            ],
        );
    }

    #[test]
    fn nested_conflicts_name_their_subfields() {
        let errors = overlap_errors("{ dog { x: name } dog { x: barks } }");
        assert_eq!(
            messages(&errors),
            vec![
                "Fields \"dog\" conflict because subfields \"x\" conflict because \"name\" and \
                 \"barks\" are different fields. Use different aliases on the fields to fetch \
                 both if this was intentional.",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 3), (1, 9), (1, 19), (1, 25)]);
    }

    #[test]
    fn conflicts_through_fragments_are_found() {
        let errors = overlap_errors(
            concat!(
                "{ dog { ...A ...B } }\n",
                "fragment A on Dog { x: name }\n",
                "fragment B on Dog { x: barks }\n",
            ),
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fields \"x\" conflict because \"name\" and \"barks\" are different fields. Use \
                 different aliases on the fields to fetch both if this was intentional.",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(2, 21), (3, 21)]);
    }
}
