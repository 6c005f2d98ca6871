use crate::validation::ValidationRule;
use crate::validation::rules::*;

/// Every rule of the GraphQL specification's "Validation" section, in the
/// order the specification lists them.
pub fn specified_rules<'a>() -> Vec<ValidationRule<'a>> {
    vec![
        Box::new(ExecutableDefinitionsRule),
        Box::new(UniqueOperationNamesRule::default()),
        Box::new(LoneAnonymousOperationRule::default()),
        Box::new(SingleFieldSubscriptionsRule),
        Box::new(KnownTypeNamesRule::default()),
        Box::new(FragmentsOnCompositeTypesRule),
        Box::new(VariablesAreInputTypesRule),
        Box::new(ScalarLeafsRule),
        Box::new(FieldsOnCorrectTypeRule),
        Box::new(UniqueFragmentNamesRule::default()),
        Box::new(KnownFragmentNamesRule),
        Box::new(NoUnusedFragmentsRule),
        Box::new(PossibleFragmentSpreadsRule),
        Box::new(NoFragmentCyclesRule::default()),
        Box::new(UniqueVariableNamesRule),
        Box::new(NoUndefinedVariablesRule),
        Box::new(NoUnusedVariablesRule),
        Box::new(KnownDirectivesRule::default()),
        Box::new(UniqueDirectivesPerLocationRule::default()),
        Box::new(KnownArgumentNamesRule),
        Box::new(UniqueArgumentNamesRule),
        Box::new(ValuesOfCorrectTypeRule),
        Box::new(ProvidedRequiredArgumentsRule::default()),
        Box::new(VariablesInAllowedPositionRule),
        Box::new(OverlappingFieldsCanBeMergedRule::default()),
        Box::new(UniqueInputFieldNamesRule),
    ]
}
