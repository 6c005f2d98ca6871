use crate::validation::rules::KnownArgumentNamesRule;
use crate::validation::rules::ProvidedRequiredArgumentsRule;
use crate::validation::rules::UniqueArgumentNamesRule;
use crate::validation::rules::UniqueInputFieldNamesRule;
use crate::validation::rules::ValuesOfCorrectTypeRule;
use crate::validation::tests::locations;
use crate::validation::tests::messages;
use crate::validation::tests::rule_errors;

mod known_argument_names {
    use super::*;

    #[test]
    fn known_field_and_directive_args_pass() {
        let errors = rule_errors(
            KnownArgumentNamesRule,
            "{ dog { doesKnowCommand(dogCommand: SIT) name @include(if: true) } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn unknown_field_arg_suggests_close_names() {
        let errors = rule_errors(
            KnownArgumentNamesRule,
            "{ dog { doesKnowCommand(DogCommand: SIT) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Unknown argument \"DogCommand\" on field \"Dog.doesKnowCommand\". Did you mean \
                 \"dogCommand\"?",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 25)]);
    }

    #[test]
    fn unknown_directive_arg_fails() {
        let errors = rule_errors(KnownArgumentNamesRule, "{ dog @skip(unless: true) { name } }");
        assert_eq!(
            messages(&errors),
            vec!["Unknown argument \"unless\" on directive \"@skip\"."],
        );
    }

    #[test]
    fn args_of_unknown_directives_are_ignored() {
        let errors = rule_errors(KnownArgumentNamesRule, "{ dog { name @unknown(arg: 1) } }");
        assert!(errors.is_empty());
    }
}

mod unique_argument_names {
    use super::*;

    #[test]
    fn repeated_argument_fails() {
        let errors = rule_errors(
            UniqueArgumentNamesRule,
            "{ dog { isAtLocation(x: 1, x: 2) } }",
        );
        assert_eq!(messages(&errors), vec!["There can be only one argument named \"x\"."]);
        assert_eq!(locations(&errors[0]), vec![(1, 22), (1, 28)]);
    }

    #[test]
    fn same_name_on_different_fields_passes() {
        let errors = rule_errors(
            UniqueArgumentNamesRule,
            "{ dog { isAtLocation(x: 1) @include(if: true) } human(id: 1) { name } }",
        );
        assert!(errors.is_empty());
    }
}

mod provided_required_arguments {
    use super::*;

    #[test]
    fn optional_and_defaulted_args_may_be_omitted() {
        let errors = rule_errors(
            ProvidedRequiredArgumentsRule::default(),
            "{ complicatedArgs { multipleOpts nonNullFieldWithDefault } dog { isHouseTrained } }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_field_args_fail() {
        let errors = rule_errors(
            ProvidedRequiredArgumentsRule::default(),
            "{ complicatedArgs { multipleReqs(req2: 1) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Field \"multipleReqs\" argument \"req1\" of type \"Int!\" is required, but it \
                 was not provided.",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 21)]);
    }

    #[test]
    fn missing_directive_args_fail() {
        let errors = rule_errors(
            ProvidedRequiredArgumentsRule::default(),
            "{ dog { name @include @withArgs(optional: 2) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Directive \"@include\" argument \"if\" of type \"Boolean!\" is required, but it \
                 was not provided.",
                "Directive \"@withArgs\" argument \"required\" of type \"Int!\" is required, but \
                 it was not provided.",
            ],
        );
    }
}

mod values_of_correct_type {
    use super::*;

    #[test]
    fn well_typed_literals_pass() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            r#"{
              complicatedArgs {
                intArgField(intArg: 2)
                floatArgField(floatArg: 1)
                idArgField(idArg: "someIdString")
                enumArgField(enumArg: BROWN)
                stringListArgField(stringListArg: "singleValue")
                complexArgField(complexArg: { requiredField: true, stringListField: ["a", null] })
              }
            }"#,
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn wrong_scalar_literals_fail() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            r#"{ complicatedArgs { intArgField(intArg: "3") booleanArgField(booleanArg: 2) } }"#,
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Expected value of type \"Int\", found \"3\"; Int cannot represent non-integer \
                 value: \"3\"",
                "Expected value of type \"Boolean\", found 2; Boolean cannot represent a non \
                 boolean value: 2",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 41)]);
    }

    #[test]
    fn out_of_range_int_fails() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            "{ complicatedArgs { intArgField(intArg: 2147483648) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Expected value of type \"Int\", found 2147483648; Int cannot represent non \
                 32-bit signed integer value: 2147483648",
            ],
        );
    }

    #[test]
    fn unknown_enum_value_suggests_close_values() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            "{ dog { doesKnowCommand(dogCommand: sit) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Expected value of type \"DogCommand\", found sit; Value \"sit\" does not exist \
                 in \"DogCommand\" enum. Did you mean \"SIT\"?",
            ],
        );
    }

    #[test]
    fn null_in_non_null_position_fails() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            "{ complicatedArgs { nonNullIntArgField(nonNullIntArg: null) } }",
        );
        assert_eq!(
            messages(&errors),
            vec!["Expected value of type \"Int!\", found null."],
        );
    }

    #[test]
    fn input_objects_report_missing_and_unknown_fields() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            "{ complicatedArgs { complexArgField(complexArg: { intField: 4, requierdField: true }) } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Field \"ComplexInput.requiredField\" of required type \"Boolean!\" was not \
                 provided.",
                "Field \"requierdField\" is not defined by type \"ComplexInput\". Did you mean \
                 \"requiredField\"?",
            ],
        );
    }

    #[test]
    fn list_item_values_are_checked() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            r#"{ complicatedArgs { stringListArgField(stringListArg: ["one", 2]) } }"#,
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Expected value of type \"String\", found 2; String cannot represent a non \
                 string value: 2",
            ],
        );
    }

    #[test]
    fn variables_are_not_checked_here() {
        let errors = rule_errors(
            ValuesOfCorrectTypeRule,
            "query ($x: Int) { complicatedArgs { stringArgField(stringArg: $x) } }",
        );
        assert!(errors.is_empty());
    }
}

mod unique_input_field_names {
    use super::*;

    #[test]
    fn nested_objects_have_separate_scopes() {
        let errors = rule_errors(
            UniqueInputFieldNamesRule,
            "{ field(arg: { f1: \"value\", f2: { f1: \"value\" } }) }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn duplicate_input_fields_fail() {
        let errors = rule_errors(
            UniqueInputFieldNamesRule,
            "{ field(arg: { f1: \"value\", f1: \"value\" }) }",
        );
        assert_eq!(messages(&errors), vec!["There can be only one input field named \"f1\"."]);
        assert_eq!(locations(&errors[0]), vec![(1, 16), (1, 29)]);
    }
}
