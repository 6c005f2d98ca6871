use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::DefaultValue;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::validation::TypeInfo;
use crate::validation::TypeInfoVisitor;
use libgql_parser::ast;
use libgql_parser::ast::Location;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use libgql_parser::visitor::visit_node;
use std::collections::HashMap;
use std::collections::HashSet;

/// A variable reference found while walking an operation, together with the
/// input type expected where it appears.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableUsage {
    pub name: String,
    pub loc: Option<Location>,
    /// `None` when the position doesn't resolve to an input type.
    pub type_ref: Option<TypeRef>,
    /// Whether the argument or input field holding the variable declares a
    /// default value.
    pub has_location_default: bool,
}

/// Shared state for one validation pass: the schema and document under
/// validation, a [`TypeInfo`] kept current by the traversal, and the
/// errors reported so far.
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    document: &'a ast::Document,
    type_info: TypeInfo<'a>,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    errors: Vec<GraphQLError>,
    max_errors: usize,
    aborted: bool,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document, max_errors: usize) -> Self {
        let mut fragments = HashMap::new();
        for fragment in document.fragments() {
            fragments.entry(fragment.name.as_str()).or_insert(fragment);
        }
        Self {
            schema,
            document,
            type_info: TypeInfo::new(schema),
            fragments,
            errors: vec![],
            max_errors,
            aborted: false,
        }
    }

    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    pub fn document(&self) -> &'a ast::Document {
        self.document
    }

    /// Records a validation error. Once the error limit is reached a final
    /// "too many errors" error is recorded instead and the pass is aborted.
    pub fn report_error(&mut self, error: GraphQLError) {
        if self.aborted {
            return;
        }
        if self.errors.len() >= self.max_errors {
            self.errors.push(GraphQLError::new(
                "Too many validation errors, error limit reached. Validation aborted.",
            ));
            self.aborted = true;
            return;
        }
        self.errors.push(error);
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    pub fn errors(&self) -> &[GraphQLError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }

    pub fn get_fragment(&self, name: &str) -> Option<&'a ast::FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// The fragment spreads directly inside `selection_set`, including those
    /// nested in fields and inline fragments but not those inside other
    /// fragments.
    pub fn get_fragment_spreads<'n>(
        &self,
        selection_set: &'n ast::SelectionSet,
    ) -> Vec<&'n ast::FragmentSpread> {
        let mut spreads = vec![];
        let mut sets_to_visit = vec![selection_set];
        while let Some(set) = sets_to_visit.pop() {
            for selection in &set.selections {
                match selection {
                    ast::Selection::FragmentSpread(spread) => spreads.push(spread),
                    ast::Selection::Field(field) => {
                        sets_to_visit.extend(field.selection_set.as_ref());
                    },
                    ast::Selection::InlineFragment(inline) => {
                        sets_to_visit.push(&inline.selection_set);
                    },
                }
            }
        }
        spreads
    }

    /// Every fragment the operation uses, directly or through other
    /// fragments, each listed once.
    pub fn get_recursively_referenced_fragments(
        &self,
        operation: &ast::OperationDefinition,
    ) -> Vec<&'a ast::FragmentDefinition> {
        let mut fragments = vec![];
        let mut collected_names = HashSet::new();
        let mut spreads = self.get_fragment_spreads(&operation.selection_set)
            .into_iter()
            .map(|spread| spread.name.clone())
            .collect::<Vec<_>>();
        while let Some(name) = spreads.pop() {
            let Some(fragment) = self.get_fragment(&name) else {
                continue;
            };
            if !collected_names.insert(fragment.name.as_str()) {
                continue;
            }
            fragments.push(fragment);
            spreads.extend(
                self.get_fragment_spreads(&fragment.selection_set)
                    .into_iter()
                    .map(|spread| spread.name.clone()),
            );
        }
        fragments
    }

    /// The variables used in the operation and every fragment it
    /// references, each with the input type expected at its position.
    pub fn get_recursive_variable_usages(
        &self,
        operation: &ast::OperationDefinition,
    ) -> Vec<VariableUsage> {
        let mut collector = TypeInfoVisitor::new(VariableUsageCollector::default());
        let mut type_info = TypeInfo::new(self.schema);
        let _ = visit_node(operation, &mut collector, &mut type_info);
        for fragment in self.get_recursively_referenced_fragments(operation) {
            let mut type_info = TypeInfo::new(self.schema);
            let _ = visit_node(fragment, &mut collector, &mut type_info);
        }
        collector.into_inner().usages
    }

    pub fn type_info(&self) -> &TypeInfo<'a> {
        &self.type_info
    }

    pub fn get_type(&self) -> Option<&TypeRef> {
        self.type_info.get_type()
    }

    pub fn get_parent_type(&self) -> Option<&'a GraphQLType> {
        self.type_info.get_parent_type()
    }

    pub fn get_input_type(&self) -> Option<&TypeRef> {
        self.type_info.get_input_type()
    }

    pub fn get_parent_input_type(&self) -> Option<&TypeRef> {
        self.type_info.get_parent_input_type()
    }

    pub fn get_field_def(&self) -> Option<&'a Field> {
        self.type_info.get_field_def()
    }

    pub fn get_default_value(&self) -> Option<&'a DefaultValue> {
        self.type_info.get_default_value()
    }

    pub fn get_directive(&self) -> Option<&'a Directive> {
        self.type_info.get_directive()
    }

    pub fn is_in_directive(&self) -> bool {
        self.type_info.is_in_directive()
    }

    pub fn get_argument(&self) -> Option<&'a InputValue> {
        self.type_info.get_argument()
    }

    pub fn get_enum_value(&self) -> Option<&'a EnumValue> {
        self.type_info.get_enum_value()
    }
}

impl<'a> AsMut<TypeInfo<'a>> for ValidationContext<'a> {
    fn as_mut(&mut self) -> &mut TypeInfo<'a> {
        &mut self.type_info
    }
}

#[derive(Default)]
struct VariableUsageCollector {
    usages: Vec<VariableUsage>,
}

impl<'s> Visitor<TypeInfo<'s>> for VariableUsageCollector {
    fn enter(&mut self, node: AstNodeRef<'_>, type_info: &mut TypeInfo<'s>) -> VisitAction {
        match node {
            // Defaults of variable definitions can't contain variables.
            AstNodeRef::VariableDefinition(_) => VisitAction::Skip,
            AstNodeRef::Value(ast::Value::Variable { name, loc }) => {
                self.usages.push(VariableUsage {
                    name: name.clone(),
                    loc: loc.clone(),
                    type_ref: type_info.get_input_type().cloned(),
                    has_location_default: type_info.get_default_value().is_some(),
                });
                VisitAction::Continue
            },
            _ => VisitAction::Continue,
        }
    }
}
