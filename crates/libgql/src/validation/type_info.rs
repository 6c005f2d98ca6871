use crate::introspection::SCHEMA_META_FIELD;
use crate::introspection::TYPE_META_FIELD;
use crate::introspection::TYPENAME_META_FIELD;
use crate::schema::Schema;
use crate::types::DefaultValue;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::utilities::type_from_ast;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::marker::PhantomData;

/// Looks up a field on a composite type, including the `__schema`,
/// `__type` and `__typename` meta fields where they apply.
pub fn get_field_def<'s>(
    schema: &'s Schema,
    parent_type: &'s GraphQLType,
    field_name: &str,
) -> Option<&'s Field> {
    let is_query_root = || {
        schema
            .query_type()
            .is_some_and(|query| query.name() == parent_type.name())
    };
    match field_name {
        "__schema" if is_query_root() => Some(&*SCHEMA_META_FIELD),
        "__type" if is_query_root() => Some(&*TYPE_META_FIELD),
        "__typename" if parent_type.is_composite_type() => Some(&*TYPENAME_META_FIELD),
        _ => parent_type.fields()?.get(field_name),
    }
}

/// Tracks where a traversal is relative to the schema: the type expected
/// at the current node, the enclosing composite type, the field,
/// directive and argument definitions in scope, and the input type a value
/// literal is expected to have.
///
/// Feed it every node on the way in and out (see [`TypeInfoVisitor`]).
/// Nodes that don't match anything in the schema push `None` so that the
/// stacks stay balanced.
#[derive(Debug)]
pub struct TypeInfo<'s> {
    schema: &'s Schema,
    type_stack: Vec<Option<TypeRef>>,
    parent_type_stack: Vec<Option<&'s GraphQLType>>,
    input_type_stack: Vec<Option<TypeRef>>,
    field_def_stack: Vec<Option<&'s Field>>,
    default_value_stack: Vec<Option<&'s DefaultValue>>,
    directive: Option<&'s Directive>,
    in_directive: bool,
    argument: Option<&'s InputValue>,
    enum_value: Option<&'s EnumValue>,
}

impl<'s> TypeInfo<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            type_stack: vec![],
            parent_type_stack: vec![],
            input_type_stack: vec![],
            field_def_stack: vec![],
            default_value_stack: vec![],
            directive: None,
            in_directive: false,
            argument: None,
            enum_value: None,
        }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// The output type expected at the current node.
    pub fn get_type(&self) -> Option<&TypeRef> {
        self.type_stack.last()?.as_ref()
    }

    /// The composite type whose selection set is being walked.
    pub fn get_parent_type(&self) -> Option<&'s GraphQLType> {
        *self.parent_type_stack.last()?
    }

    /// The input type expected of the value at the current node.
    pub fn get_input_type(&self) -> Option<&TypeRef> {
        self.input_type_stack.last()?.as_ref()
    }

    /// The input type of the list or input object enclosing the current
    /// value.
    pub fn get_parent_input_type(&self) -> Option<&TypeRef> {
        let len = self.input_type_stack.len();
        self.input_type_stack.get(len.checked_sub(2)?)?.as_ref()
    }

    pub fn get_field_def(&self) -> Option<&'s Field> {
        *self.field_def_stack.last()?
    }

    /// The default of the argument or input field whose value is being
    /// walked.
    pub fn get_default_value(&self) -> Option<&'s DefaultValue> {
        *self.default_value_stack.last()?
    }

    pub fn get_directive(&self) -> Option<&'s Directive> {
        self.directive
    }

    /// Whether the traversal is inside a directive, known or not.
    pub fn is_in_directive(&self) -> bool {
        self.in_directive
    }

    pub fn get_argument(&self) -> Option<&'s InputValue> {
        self.argument
    }

    pub fn get_enum_value(&self) -> Option<&'s EnumValue> {
        self.enum_value
    }

    fn named_type(&self, type_ref: &TypeRef) -> Option<&'s GraphQLType> {
        self.schema.get_named_type(type_ref)
    }

    fn output_type(&self, type_ref: TypeRef) -> Option<TypeRef> {
        self.named_type(&type_ref)
            .is_some_and(GraphQLType::is_output_type)
            .then_some(type_ref)
    }

    fn input_type(&self, type_ref: TypeRef) -> Option<TypeRef> {
        self.named_type(&type_ref)
            .is_some_and(GraphQLType::is_input_type)
            .then_some(type_ref)
    }

    pub fn enter(&mut self, node: AstNodeRef<'_>) {
        match node {
            AstNodeRef::SelectionSet(_) => {
                let parent_type = self
                    .get_type()
                    .and_then(|type_ref| self.named_type(type_ref))
                    .filter(|type_| type_.is_composite_type());
                self.parent_type_stack.push(parent_type);
            },
            AstNodeRef::Field(field) => {
                let field_def = self
                    .get_parent_type()
                    .and_then(|parent_type| get_field_def(self.schema, parent_type, &field.name));
                let field_type = field_def.and_then(|def| self.output_type(def.ty().clone()));
                self.field_def_stack.push(field_def);
                self.type_stack.push(field_type);
            },
            AstNodeRef::Directive(directive) => {
                self.directive = self.schema.get_directive(&directive.name);
                self.in_directive = true;
            },
            AstNodeRef::OperationDefinition(operation) => {
                let root_type = self
                    .schema
                    .get_root_type(operation.operation)
                    .map(|root| TypeRef::named(root.name()));
                self.type_stack.push(root_type);
            },
            AstNodeRef::InlineFragment(inline) => {
                let condition_type = match &inline.type_condition {
                    Some(condition) => Some(TypeRef::named(&condition.name)),
                    None => self.get_type().map(|type_ref| TypeRef::named(type_ref.named_type())),
                };
                let output_type = condition_type.and_then(|type_ref| self.output_type(type_ref));
                self.type_stack.push(output_type);
            },
            AstNodeRef::FragmentDefinition(fragment) => {
                let output_type = self.output_type(TypeRef::named(&fragment.type_condition.name));
                self.type_stack.push(output_type);
            },
            AstNodeRef::VariableDefinition(definition) => {
                let input_type = type_from_ast(self.schema, &definition.var_type)
                    .and_then(|type_ref| self.input_type(type_ref));
                self.input_type_stack.push(input_type);
            },
            AstNodeRef::Argument(argument) => {
                let arg_def = if self.in_directive {
                    self.directive.and_then(|directive| directive.arg(&argument.name))
                } else {
                    self.get_field_def().and_then(|field| field.arg(&argument.name))
                };
                self.argument = arg_def;
                self.default_value_stack
                    .push(arg_def.and_then(InputValue::get_default_value));
                let input_type = arg_def.and_then(|def| self.input_type(def.ty().clone()));
                self.input_type_stack.push(input_type);
            },
            AstNodeRef::Value(ast::Value::List { .. }) => {
                let item_type = self.get_input_type().map(|input_type| match input_type.nullable() {
                    TypeRef::List(item_type) => item_type.as_ref().clone(),
                    other => other.clone(),
                });
                let item_type = item_type.and_then(|type_ref| self.input_type(type_ref));
                // Items of a list have no default of their own.
                self.default_value_stack.push(None);
                self.input_type_stack.push(item_type);
            },
            AstNodeRef::ObjectField(object_field) => {
                let input_field = self
                    .get_input_type()
                    .and_then(|type_ref| self.named_type(type_ref))
                    .and_then(GraphQLType::as_input_object)
                    .and_then(|input_object| input_object.get_field(&object_field.name));
                self.default_value_stack
                    .push(input_field.and_then(InputValue::get_default_value));
                let input_type = input_field.and_then(|field| self.input_type(field.ty().clone()));
                self.input_type_stack.push(input_type);
            },
            AstNodeRef::Value(ast::Value::Enum { value, .. }) => {
                self.enum_value = self
                    .get_input_type()
                    .and_then(|type_ref| self.named_type(type_ref))
                    .and_then(GraphQLType::as_enum)
                    .and_then(|enum_type| enum_type.get_value(value));
            },
            _ => (),
        }
    }

    pub fn leave(&mut self, node: AstNodeRef<'_>) {
        match node {
            AstNodeRef::SelectionSet(_) => {
                self.parent_type_stack.pop();
            },
            AstNodeRef::Field(_) => {
                self.field_def_stack.pop();
                self.type_stack.pop();
            },
            AstNodeRef::Directive(_) => {
                self.directive = None;
                self.in_directive = false;
            },
            AstNodeRef::OperationDefinition(_)
            | AstNodeRef::InlineFragment(_)
            | AstNodeRef::FragmentDefinition(_) => {
                self.type_stack.pop();
            },
            AstNodeRef::VariableDefinition(_) => {
                self.input_type_stack.pop();
            },
            AstNodeRef::Argument(_) => {
                self.argument = None;
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            AstNodeRef::Value(ast::Value::List { .. }) | AstNodeRef::ObjectField(_) => {
                self.default_value_stack.pop();
                self.input_type_stack.pop();
            },
            AstNodeRef::Value(ast::Value::Enum { .. }) => {
                self.enum_value = None;
            },
            _ => (),
        }
    }
}

impl<'s> AsMut<TypeInfo<'s>> for TypeInfo<'s> {
    fn as_mut(&mut self) -> &mut TypeInfo<'s> {
        self
    }
}

/// Wraps a visitor so that the [`TypeInfo`] reachable from the traversal
/// context is updated before the visitor sees each node on the way in, and
/// after it sees the node on the way out.
pub struct TypeInfoVisitor<'s, V> {
    inner: V,
    _schema: PhantomData<&'s Schema>,
}

impl<'s, V> TypeInfoVisitor<'s, V> {
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            _schema: PhantomData,
        }
    }

    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<'s, C, V> Visitor<C> for TypeInfoVisitor<'s, V>
where
    C: AsMut<TypeInfo<'s>>,
    V: Visitor<C>,
{
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        ctx.as_mut().enter(node);
        let action = self.inner.enter(node, ctx);
        match &action {
            VisitAction::Skip | VisitAction::Remove => ctx.as_mut().leave(node),
            VisitAction::Replace(new_node) => {
                ctx.as_mut().leave(node);
                ctx.as_mut().enter(new_node.as_node_ref());
            },
            VisitAction::Continue | VisitAction::Break => (),
        }
        action
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        let action = self.inner.leave(node, ctx);
        ctx.as_mut().leave(node);
        action
    }
}
