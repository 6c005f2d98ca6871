use crate::validation::rules::KnownDirectivesRule;
use crate::validation::rules::UniqueDirectivesPerLocationRule;
use crate::validation::tests::locations;
use crate::validation::tests::messages;
use crate::validation::tests::rule_errors;

mod known_directives {
    use super::*;

    #[test]
    fn directives_in_valid_locations_pass() {
        let errors = rule_errors(
            KnownDirectivesRule::default(),
            r#"
            query Foo($var: Boolean @onVariableDefinition) @onQuery {
              dog @include(if: true) { name @onField }
              ...Frag @onFragmentSpread
              ... @onInlineFragment { cat { name } }
            }
            fragment Frag on QueryRoot { human { name } }
            "#,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_directive_fails() {
        let errors = rule_errors(
            KnownDirectivesRule::default(),
            "{ dog @unknown(directive: \"value\") { name } }",
        );
        assert_eq!(messages(&errors), vec!["Unknown directive \"@unknown\"."]);
        assert_eq!(locations(&errors[0]), vec![(1, 7)]);
    }

    #[test]
    fn misplaced_directives_fail_in_document_order() {
        let errors = rule_errors(
            KnownDirectivesRule::default(),
            "query Foo($var: Boolean @onField) @onMutation { dog @onQuery { name } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Directive \"@onField\" may not be used on VARIABLE_DEFINITION.",
                "Directive \"@onMutation\" may not be used on QUERY.",
                "Directive \"@onQuery\" may not be used on FIELD.",
            ],
        );
    }

    #[test]
    fn type_system_locations_are_checked() {
        let errors = rule_errors(
            KnownDirectivesRule::default(),
            r#"
            directive @onObject on OBJECT
            type Obj @onObject { field(arg: Int @deprecated): String @onObject }
            input In @onObject { field: Int @deprecated }
            "#,
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Directive \"@onObject\" may not be used on FIELD_DEFINITION.",
                "Directive \"@onObject\" may not be used on INPUT_OBJECT.",
            ],
        );
    }
}

mod unique_directives_per_location {
    use super::*;

    #[test]
    fn distinct_and_repeatable_directives_pass() {
        let errors = rule_errors(
            UniqueDirectivesPerLocationRule::default(),
            "{ dog @onField @repeatable @repeatable { name @onField } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn duplicate_directive_fails() {
        let errors = rule_errors(
            UniqueDirectivesPerLocationRule::default(),
            "{ dog @onField @onField { name } }",
        );
        assert_eq!(
            messages(&errors),
            vec!["The directive \"@onField\" can only be used once at this location."],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 7), (1, 16)]);
    }

    #[test]
    fn type_extensions_share_a_location() {
        let errors = rule_errors(
            UniqueDirectivesPerLocationRule::default(),
            r#"
            directive @tag on OBJECT
            type Obj @tag { field: Int }
            extend type Obj @tag
            "#,
        );
        assert_eq!(
            messages(&errors),
            vec!["The directive \"@tag\" can only be used once at this location."],
        );
    }
}
