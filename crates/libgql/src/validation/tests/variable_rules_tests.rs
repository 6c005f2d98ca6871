use crate::validation::rules::NoUndefinedVariablesRule;
use crate::validation::rules::NoUnusedVariablesRule;
use crate::validation::rules::UniqueVariableNamesRule;
use crate::validation::rules::VariablesAreInputTypesRule;
use crate::validation::rules::VariablesInAllowedPositionRule;
use crate::validation::tests::locations;
use crate::validation::tests::messages;
use crate::validation::tests::rule_errors;

mod unique_variable_names {
    use super::*;

    #[test]
    fn duplicate_variables_fail_per_operation() {
        let errors = rule_errors(
            UniqueVariableNamesRule,
            "query A($x: Int, $x: String) { __typename }\nquery B($x: Int) { __typename }",
        );
        assert_eq!(messages(&errors), vec!["There can be only one variable named \"$x\"."]);
        assert_eq!(locations(&errors[0]), vec![(1, 9), (1, 18)]);
    }
}

mod no_undefined_variables {
    use super::*;

    #[test]
    fn variables_defined_by_the_operation_pass() {
        let errors = rule_errors(
            NoUndefinedVariablesRule,
            "query Foo($a: String, $b: String) { field(a: $a) { field(b: $b) } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn undefined_variable_in_named_operation_fails() {
        let errors = rule_errors(
            NoUndefinedVariablesRule,
            "query Foo($a: String) { field(a: $a, b: $b) }",
        );
        assert_eq!(
            messages(&errors),
            vec!["Variable \"$b\" is not defined by operation \"Foo\"."],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 41), (1, 1)]);
    }

    #[test]
    fn undefined_variable_in_anonymous_operation_fails() {
        let errors = rule_errors(NoUndefinedVariablesRule, "{ field(a: $a) }");
        assert_eq!(messages(&errors), vec!["Variable \"$a\" is not defined."]);
    }

    #[test]
    fn usages_inside_fragments_count_for_each_operation() {
        let errors = rule_errors(
            NoUndefinedVariablesRule,
            concat!(
                "query Foo($a: String) { ...FragA }\n",
                "query Bar { ...FragA }\n",
                "fragment FragA on QueryRoot { field(a: $a) }\n",
            ),
        );
        assert_eq!(
            messages(&errors),
            vec!["Variable \"$a\" is not defined by operation \"Bar\"."],
        );
        assert_eq!(locations(&errors[0]), vec![(3, 40), (2, 1)]);
    }
}

mod no_unused_variables {
    use super::*;

    #[test]
    fn variables_used_through_fragments_pass() {
        let errors = rule_errors(
            NoUnusedVariablesRule,
            "query Foo($a: String) { ...FragA }\nfragment FragA on QueryRoot { field(a: $a) }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn unused_variables_fail() {
        let errors = rule_errors(
            NoUnusedVariablesRule,
            "query Foo($a: String, $b: String) { field(a: $a) }\nquery ($c: Int) { __typename }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Variable \"$b\" is never used in operation \"Foo\".",
                "Variable \"$c\" is never used.",
            ],
        );
    }
}

mod variables_are_input_types {
    use super::*;

    #[test]
    fn input_types_pass() {
        let errors = rule_errors(
            VariablesAreInputTypesRule,
            "query Foo($a: String, $b: [Boolean!]!, $c: ComplexInput, $d: FurColor) { __typename }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn output_types_fail() {
        let errors = rule_errors(
            VariablesAreInputTypesRule,
            "query Foo($a: Dog, $b: [[CatOrDog!]]!, $c: Pet) { __typename }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Variable \"$a\" cannot be non-input type \"Dog\".",
                "Variable \"$b\" cannot be non-input type \"[[CatOrDog!]]!\".",
                "Variable \"$c\" cannot be non-input type \"Pet\".",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 15)]);
    }

    #[test]
    fn unknown_types_are_left_to_known_type_names() {
        let errors = rule_errors(VariablesAreInputTypesRule, "query Foo($a: Unknown) { __typename }");
        assert!(errors.is_empty());
    }
}

mod variables_in_allowed_position {
    use super::*;

    #[test]
    fn compatible_usages_pass() {
        let errors = rule_errors(
            VariablesInAllowedPositionRule,
            r#"
            query Q($nonNull: Int!, $withDefault: Int = 1, $nullable: Int, $strings: [String!]) {
              complicatedArgs {
                intArgField(intArg: $nonNull)
                nonNullIntArgField(nonNullIntArg: $withDefault)
                nonNullFieldWithDefault(arg: $nullable)
                stringListArgField(stringListArg: $strings)
              }
            }
            "#,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn nullable_into_non_null_fails() {
        let errors = rule_errors(
            VariablesInAllowedPositionRule,
            "query Q($intArg: Int) {\n  complicatedArgs { nonNullIntArgField(nonNullIntArg: $intArg) }\n}",
        );
        assert_eq!(
            messages(&errors),
            vec!["Variable \"$intArg\" of type \"Int\" used in position expecting type \"Int!\"."],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 9), (2, 55)]);
    }

    #[test]
    fn scalar_into_list_fails() {
        let errors = rule_errors(
            VariablesInAllowedPositionRule,
            "query Q($stringVar: String) { complicatedArgs { stringListArgField(stringListArg: $stringVar) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Variable \"$stringVar\" of type \"String\" used in position expecting type \
                 \"[String]\".",
            ],
        );
    }

    #[test]
    fn directive_arguments_are_checked() {
        let errors = rule_errors(
            VariablesInAllowedPositionRule,
            "query Q($boolVar: Boolean) { dog @include(if: $boolVar) { name } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Variable \"$boolVar\" of type \"Boolean\" used in position expecting type \
                 \"Boolean!\".",
            ],
        );
    }

    #[test]
    fn usages_in_fragments_are_checked() {
        let errors = rule_errors(
            VariablesInAllowedPositionRule,
            concat!(
                "query Q($boolVar: Boolean) { dog { ...DogFields } }\n",
                "fragment DogFields on Dog { isHouseTrained(atOtherHomes: $boolVar) }\n",
                "query R($intVar: Int) { dog { ...Located } }\n",
                "fragment Located on Dog { isAtLocation(x: $intVar) }\n",
            ),
        );
        assert!(errors.is_empty());
    }
}
