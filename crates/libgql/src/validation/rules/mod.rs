//! The validation rules of the GraphQL specification, one visitor each.
//!
//! https://spec.graphql.org/October2021/#sec-Validation

mod executable_definitions;
mod fields_on_correct_type;
mod fragments_on_composite_types;
mod known_argument_names;
mod known_directives;
mod known_fragment_names;
mod known_type_names;
mod lone_anonymous_operation;
mod no_fragment_cycles;
mod no_undefined_variables;
mod no_unused_fragments;
mod no_unused_variables;
mod overlapping_fields_can_be_merged;
mod possible_fragment_spreads;
mod provided_required_arguments;
mod scalar_leafs;
mod single_field_subscriptions;
mod unique_argument_names;
mod unique_directives_per_location;
mod unique_fragment_names;
mod unique_input_field_names;
mod unique_operation_names;
mod unique_variable_names;
mod values_of_correct_type;
mod variables_are_input_types;
mod variables_in_allowed_position;

pub use executable_definitions::ExecutableDefinitionsRule;
pub use fields_on_correct_type::FieldsOnCorrectTypeRule;
pub use fragments_on_composite_types::FragmentsOnCompositeTypesRule;
pub use known_argument_names::KnownArgumentNamesRule;
pub use known_directives::KnownDirectivesRule;
pub use known_fragment_names::KnownFragmentNamesRule;
pub use known_type_names::KnownTypeNamesRule;
pub use lone_anonymous_operation::LoneAnonymousOperationRule;
pub use no_fragment_cycles::NoFragmentCyclesRule;
pub use no_undefined_variables::NoUndefinedVariablesRule;
pub use no_unused_fragments::NoUnusedFragmentsRule;
pub use no_unused_variables::NoUnusedVariablesRule;
pub use overlapping_fields_can_be_merged::OverlappingFieldsCanBeMergedRule;
pub use possible_fragment_spreads::PossibleFragmentSpreadsRule;
pub use provided_required_arguments::ProvidedRequiredArgumentsRule;
pub use scalar_leafs::ScalarLeafsRule;
pub use single_field_subscriptions::SingleFieldSubscriptionsRule;
pub use unique_argument_names::UniqueArgumentNamesRule;
pub use unique_directives_per_location::UniqueDirectivesPerLocationRule;
pub use unique_fragment_names::UniqueFragmentNamesRule;
pub use unique_input_field_names::UniqueInputFieldNamesRule;
pub use unique_operation_names::UniqueOperationNamesRule;
pub use unique_variable_names::UniqueVariableNamesRule;
pub use values_of_correct_type::ValuesOfCorrectTypeRule;
pub use variables_are_input_types::VariablesAreInputTypesRule;
pub use variables_in_allowed_position::VariablesInAllowedPositionRule;
