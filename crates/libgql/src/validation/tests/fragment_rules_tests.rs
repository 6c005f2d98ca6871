use crate::validation::rules::FragmentsOnCompositeTypesRule;
use crate::validation::rules::KnownFragmentNamesRule;
use crate::validation::rules::NoFragmentCyclesRule;
use crate::validation::rules::NoUnusedFragmentsRule;
use crate::validation::rules::PossibleFragmentSpreadsRule;
use crate::validation::rules::UniqueFragmentNamesRule;
use crate::validation::tests::locations;
use crate::validation::tests::messages;
use crate::validation::tests::rule_errors;

mod known_fragment_names {
    use super::*;

    #[test]
    fn unknown_fragment_is_reported_at_the_spread() {
        let errors = rule_errors(
            KnownFragmentNamesRule,
            "{ human(id: 4) { ...HumanFields ...UnknownFragment } }\nfragment HumanFields on Human { name }",
        );
        assert_eq!(messages(&errors), vec!["Unknown fragment \"UnknownFragment\"."]);
        assert_eq!(locations(&errors[0]), vec![(1, 33)]);
    }
}

mod unique_fragment_names {
    use super::*;

    #[test]
    fn duplicate_fragment_names_fail() {
        let errors = rule_errors(
            UniqueFragmentNamesRule::default(),
            "{ dog { ...fragA } }\nfragment fragA on Dog { name }\nfragment fragA on Dog { barks }",
        );
        assert_eq!(messages(&errors), vec!["There can be only one fragment named \"fragA\"."]);
        assert_eq!(locations(&errors[0]), vec![(2, 1), (3, 1)]);
    }
}

mod no_unused_fragments {
    use super::*;

    #[test]
    fn fragments_unreachable_from_operations_fail() {
        let errors = rule_errors(
            NoUnusedFragmentsRule,
            concat!(
                "query Foo { human(id: 4) { ...HumanFields1 } }\n",
                "fragment HumanFields1 on Human { name ...HumanFields3 }\n",
                "fragment HumanFields2 on Human { name }\n",
                "fragment HumanFields3 on Human { name }\n",
                "fragment Unused1 on Human { name ...Unused2 }\n",
                "fragment Unused2 on Human { name ...Unused1 }\n",
            ),
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fragment \"HumanFields2\" is never used.",
                "Fragment \"Unused1\" is never used.",
                "Fragment \"Unused2\" is never used.",
            ],
        );
    }
}

mod no_fragment_cycles {
    use super::*;

    #[test]
    fn repeated_spreads_without_cycle_pass() {
        let errors = rule_errors(
            NoFragmentCyclesRule::default(),
            "fragment fragA on Dog { ...fragB ...fragB } fragment fragB on Dog { name }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn spreading_itself_fails() {
        let errors = rule_errors(NoFragmentCyclesRule::default(), "fragment fragA on Dog { ...fragA }");
        assert_eq!(messages(&errors), vec!["Cannot spread fragment \"fragA\" within itself."]);
        assert_eq!(locations(&errors[0]), vec![(1, 25)]);
    }

    #[test]
    fn indirect_cycle_is_reported_once() {
        let errors = rule_errors(
            NoFragmentCyclesRule::default(),
            concat!(
                "fragment fragA on Dog { ...fragB }\n",
                "fragment fragB on Dog { ...fragC }\n",
                "fragment fragC on Dog { ...fragA }\n",
            ),
        );
        assert_eq!(
            messages(&errors),
            vec!["Cannot spread fragment \"fragA\" within itself via \"fragB\", \"fragC\"."],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 25), (2, 25), (3, 25)]);
    }
}

mod possible_fragment_spreads {
    use super::*;

    #[test]
    fn overlapping_types_pass() {
        let errors = rule_errors(
            PossibleFragmentSpreadsRule,
            concat!(
                "fragment objectWithinObject on Dog { ...dogFragment }\n",
                "fragment objectWithinInterface on Pet { ...dogFragment }\n",
                "fragment unionWithinObject on Dog { ...catOrDogFragment }\n",
                "fragment interfaceWithinUnion on CatOrDog { ... on Pet { name } }\n",
                "fragment dogFragment on Dog { barkVolume }\n",
                "fragment catOrDogFragment on CatOrDog { __typename }\n",
            ),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn disjoint_named_fragment_fails() {
        let errors = rule_errors(
            PossibleFragmentSpreadsRule,
            "fragment invalid on Cat { ...dogFragment }\nfragment dogFragment on Dog { barkVolume }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fragment \"dogFragment\" cannot be spread here as objects of type \"Cat\" can \
                 never be of type \"Dog\".",
            ],
        );
    }

    #[test]
    fn disjoint_inline_fragment_fails() {
        let errors = rule_errors(
            PossibleFragmentSpreadsRule,
            "fragment invalid on Cat { ... on Dog { barkVolume } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fragment cannot be spread here as objects of type \"Cat\" can never be of type \
                 \"Dog\".",
            ],
        );
    }

    #[test]
    fn interface_never_implemented_by_object_fails() {
        let errors = rule_errors(
            PossibleFragmentSpreadsRule,
            "fragment invalid on Human { ...petFragment }\nfragment petFragment on Pet { name }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fragment \"petFragment\" cannot be spread here as objects of type \"Human\" can \
                 never be of type \"Pet\".",
            ],
        );
    }
}

mod fragments_on_composite_types {
    use super::*;

    #[test]
    fn composite_conditions_pass() {
        let errors = rule_errors(
            FragmentsOnCompositeTypesRule,
            "fragment f on Pet { ... on Dog { barks } ... { name } } fragment g on CatOrDog { __typename }",
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn scalar_conditions_fail() {
        let errors = rule_errors(
            FragmentsOnCompositeTypesRule,
            "fragment scalarFragment on Boolean { bad }\nfragment f on Cat { ... on String { meows } }",
        );
        assert_eq!(
            messages(&errors),
            vec![
                "Fragment \"scalarFragment\" cannot condition on non composite type \"Boolean\".",
                "Fragment cannot condition on non composite type \"String\".",
            ],
        );
        assert_eq!(locations(&errors[0]), vec![(1, 28)]);
    }
}
