use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema::validate_schema;
use crate::validation::TypeInfoVisitor;
use crate::validation::ValidationContext;
use crate::validation::specified_rules;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::ParallelVisitor;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use libgql_parser::visitor::visit_with_context;

/// A validation rule: a visitor over the document that reports problems to
/// the shared [`ValidationContext`].
pub type ValidationRule<'a> = Box<dyn Visitor<ValidationContext<'a>> + 'a>;

#[derive(Clone, Debug)]
pub struct ValidationOptions {
    /// Validation stops once this many errors have been reported.
    pub max_errors: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self { max_errors: 100 }
    }
}

/// Checks an executable document against `schema` with every rule of the
/// GraphQL specification.
///
/// An invalid schema is reported instead of validating the document
/// against it. An empty result means the document is valid.
pub fn validate(schema: &Schema, document: &ast::Document) -> Vec<GraphQLError> {
    validate_with_rules(schema, document, specified_rules(), ValidationOptions::default())
}

/// Checks `document` with a custom set of rules.
///
/// All rules run in a single traversal of the document.
pub fn validate_with_rules<'a>(
    schema: &'a Schema,
    document: &'a ast::Document,
    rules: Vec<ValidationRule<'a>>,
    options: ValidationOptions,
) -> Vec<GraphQLError> {
    let schema_errors = validate_schema(schema);
    if !schema_errors.is_empty() {
        return schema_errors.to_vec();
    }

    let mut ctx = ValidationContext::new(schema, document, options.max_errors);
    let mut visitor = TypeInfoVisitor::new(AbortOnErrorLimit(ParallelVisitor::new(rules)));
    let _ = visit_with_context(document, &mut visitor, &mut ctx);

    let errors = ctx.into_errors();
    tracing::debug!(error_count = errors.len(), "validated document");
    errors
}

/// Stops the traversal once the context has hit its error limit.
struct AbortOnErrorLimit<V>(V);

impl<'a, V: Visitor<ValidationContext<'a>>> Visitor<ValidationContext<'a>> for AbortOnErrorLimit<V> {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let action = self.0.enter(node, ctx);
        if ctx.is_aborted() { VisitAction::Break } else { action }
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let action = self.0.leave(node, ctx);
        if ctx.is_aborted() { VisitAction::Break } else { action }
    }
}
