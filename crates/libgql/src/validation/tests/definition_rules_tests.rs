use crate::validation::rules::ExecutableDefinitionsRule;
use crate::validation::rules::LoneAnonymousOperationRule;
use crate::validation::rules::SingleFieldSubscriptionsRule;
use crate::validation::rules::UniqueOperationNamesRule;
use crate::validation::tests::locations;
use crate::validation::tests::messages;
use crate::validation::tests::rule_errors;

mod executable_definitions {
    use super::*;

    #[test]
    fn operations_and_fragments_are_executable() {
        let errors = rule_errors(
            ExecutableDefinitionsRule,
            "query Foo { dog { name } } fragment Frag on Dog { name }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn type_definitions_are_not_executable() {
        let errors = rule_errors(
            ExecutableDefinitionsRule,
            concat!(
                "query Foo { dog { name } }\n",
                "type Cow { name: String }\n",
                "extend type Dog { color: String }\n",
                "schema { query: QueryRoot }\n",
                "directive @cow on FIELD\n",
            ),
        );
        assert_eq!(
            messages(&errors),
            vec![
                "The \"Cow\" definition is not executable.",
                "The \"Dog\" definition is not executable.",
                "The \"schema\" definition is not executable.",
                "The \"cow\" definition is not executable.",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(2, 1)]);
    }
}

mod unique_operation_names {
    use super::*;

    #[test]
    fn distinct_names_and_anonymous_operations_pass() {
        let errors = rule_errors(
            UniqueOperationNamesRule::default(),
            "query Foo { dog { name } } mutation Bar { dog { name } } { cat { name } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn duplicate_names_across_operation_types_fail() {
        let errors = rule_errors(
            UniqueOperationNamesRule::default(),
            "query Foo { dog { name } }\nsubscription Foo { dogSubscribe { name } }",
        );
        assert_eq!(messages(&errors), vec!["There can be only one operation named \"Foo\"."]);
        assert_eq!(locations(&errors[0]), vec![(1, 1), (2, 1)]);
    }
}

mod lone_anonymous_operation {
    use super::*;

    #[test]
    fn single_anonymous_operation_passes() {
        let errors = rule_errors(
            LoneAnonymousOperationRule::default(),
            "{ dog { name } } fragment F on Dog { name }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn anonymous_operation_with_others_fails() {
        let errors = rule_errors(
            LoneAnonymousOperationRule::default(),
            "{ dog { name } } query Named { cat { name } } { pet { name } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "This anonymous operation must be the only defined operation.",
                "This anonymous operation must be the only defined operation.",
            ],
        );
    }
}

mod single_field_subscriptions {
    use super::*;

    #[test]
    fn one_root_field_passes() {
        let errors = rule_errors(
            SingleFieldSubscriptionsRule,
            "subscription Sub { catSubscribe { name } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn fields_from_fragments_count() {
        let errors = rule_errors(
            SingleFieldSubscriptionsRule,
            concat!(
                "subscription Sub { catSubscribe { name } ...Other }\n",
                "fragment Other on SubscriptionRoot { dogSubscribe { name } }",
            ),
        );
        assert_eq!(
            messages(&errors),
            vec!["Subscription \"Sub\" must select only one top level field."],
        );
        assert_eq!(locations(&errors[0]), vec![(2, 38)]);
    }

    #[test]
    fn introspection_root_field_fails() {
        let errors = rule_errors(SingleFieldSubscriptionsRule, "subscription { __typename }");
        assert_eq!(
            messages(&errors),
            vec!["Anonymous Subscription must not select an introspection top level field."],
        );
    }

    #[test]
    fn queries_are_ignored() {
        let errors = rule_errors(SingleFieldSubscriptionsRule, "{ dog { name } cat { name } }");
        assert!(errors.is_empty());
    }
}
