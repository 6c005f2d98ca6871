use crate::error::GraphQLError;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::ResolveInfo;
use crate::execution::ResponsePath;
use crate::execution::collect_fields::CollectContext;
use crate::execution::collect_fields::GroupedFields;
use crate::execution::collect_fields::collect_fields;
use crate::execution::collect_fields::collect_subfields;
use crate::execution::values::get_argument_values;
use crate::execution::values::get_variable_values;
use crate::schema::Schema;
use crate::types::FieldResolver;
use crate::types::FieldResult;
use crate::types::GraphQLType;
use crate::types::IsTypeOfArgs;
use crate::types::ResolverArgs;
use crate::types::TypeRef;
use crate::types::TypeResolver;
use crate::types::TypeResolverArgs;
use crate::utilities::inspect_field_value;
use crate::validation::get_field_def;
use crate::value::FieldValue;
use crate::value::Variables;
use futures::FutureExt;
use futures::future::BoxFuture;
use futures::future::join_all;
use libgql_parser::ast;
use libgql_parser::ast::OperationType;
use serde_json::Map;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// A field failed and its error has been recorded; the nearest nullable
/// ancestor becomes `null`.
#[derive(Debug)]
struct PropagateNull;

type Completed = Result<JsonValue, PropagateNull>;

/// Per-request state shared by every field of one execution.
struct ExecutionContext<'a> {
    schema: &'a Schema,
    fragments: HashMap<&'a str, &'a ast::FragmentDefinition>,
    operation: &'a ast::OperationDefinition,
    root_value: &'a FieldValue,
    context_value: &'a FieldValue,
    variable_values: Variables,
    field_resolver: Option<&'a FieldResolver>,
    type_resolver: Option<&'a TypeResolver>,
    errors: Mutex<Vec<GraphQLError>>,
}

impl<'a> ExecutionContext<'a> {
    /// Selects the operation to run and coerces the variables.
    fn build(args: &'a ExecutionArgs<'_>) -> Result<Self, Vec<GraphQLError>> {
        let mut operation = None;
        let mut fragments = HashMap::new();
        for definition in &args.document.definitions {
            match definition {
                ast::Definition::Operation(op) => match &args.operation_name {
                    None if operation.is_some() => {
                        return Err(vec![GraphQLError::new(
                            "Must provide operation name if query contains multiple operations.",
                        )]);
                    },
                    None => operation = Some(op),
                    Some(name) => {
                        if op.name.as_deref() == Some(name.as_str()) {
                            operation = Some(op);
                        }
                    },
                },
                ast::Definition::Fragment(fragment) => {
                    fragments.insert(fragment.name.as_str(), fragment);
                },
                _ => (),
            }
        }

        let Some(operation) = operation else {
            let message = match &args.operation_name {
                Some(name) => format!("Unknown operation named \"{name}\"."),
                None => "Must provide an operation.".to_string(),
            };
            return Err(vec![GraphQLError::new(message)]);
        };

        let variable_values =
            get_variable_values(args.schema, &operation.variable_definitions, &args.variable_values)?;

        tracing::debug!(
            operation = operation.name.as_deref().unwrap_or("<anonymous>"),
            kind = %operation.operation,
            "executing operation",
        );

        Ok(Self {
            schema: args.schema,
            fragments,
            operation,
            root_value: &args.root_value,
            context_value: &args.context_value,
            variable_values,
            field_resolver: args.field_resolver.as_ref(),
            type_resolver: args.type_resolver.as_ref(),
            errors: Mutex::new(vec![]),
        })
    }

    fn collect_context(&self) -> CollectContext<'_, 'a> {
        CollectContext {
            schema: self.schema,
            fragments: &self.fragments,
            variables: &self.variable_values,
        }
    }

    /// Records an error raised while completing the field at `path`.
    fn field_error(
        &self,
        error: impl Into<GraphQLError>,
        field_nodes: &[&ast::Field],
        path: &ResponsePath,
    ) -> PropagateNull {
        let error = GraphQLError::located(
            error,
            field_nodes.iter().map(|node| node.loc.as_ref()),
            path.to_vec(),
        );
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error);
        PropagateNull
    }

    fn into_errors(self) -> Vec<GraphQLError> {
        self.errors.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Executes the selected operation of `args.document`.
///
/// Errors that prevent execution from starting (no matching operation,
/// invalid variables) are returned without `data`. Field errors are
/// collected alongside whatever data could still be produced.
///
/// https://spec.graphql.org/October2021/#sec-Executing-Requests
pub async fn execute(args: ExecutionArgs<'_>) -> ExecutionResult {
    let ctx = match ExecutionContext::build(&args) {
        Ok(ctx) => ctx,
        Err(errors) => {
            tracing::debug!(error_count = errors.len(), "execution rejected");
            return ExecutionResult::from_errors(errors);
        },
    };
    let data = execute_operation(&ctx).await;
    let errors = ctx.into_errors();
    tracing::debug!(error_count = errors.len(), "executed operation");
    ExecutionResult {
        errors,
        data: Some(data),
    }
}

async fn execute_operation(ctx: &ExecutionContext<'_>) -> JsonValue {
    let operation = ctx.operation;
    let root_type = ctx
        .schema
        .root_type_name(operation.operation)
        .and_then(|name| ctx.schema.get_type(name))
        .filter(|root_type| root_type.as_object().is_some());
    let Some(root_type) = root_type else {
        let error = GraphQLError::new(format!(
            "Schema is not configured to execute {} operation.",
            operation.operation,
        ))
        .with_node(operation.loc.as_ref());
        ctx.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error);
        return JsonValue::Null;
    };

    let fields = collect_fields(&ctx.collect_context(), root_type, &operation.selection_set);
    let result = match operation.operation {
        OperationType::Mutation => {
            execute_fields_serially(ctx, root_type, ctx.root_value, None, &fields).await
        },
        OperationType::Query | OperationType::Subscription => {
            execute_fields(ctx, root_type, ctx.root_value, None, &fields).await
        },
    };
    result.unwrap_or(JsonValue::Null)
}

fn field_path(
    parent: Option<&Arc<ResponsePath>>,
    key: &str,
    parent_type: &GraphQLType,
) -> Arc<ResponsePath> {
    match parent {
        Some(parent) => parent.child(key, Some(parent_type.name())),
        None => ResponsePath::root(key, Some(parent_type.name())),
    }
}

/// Runs each field in turn, fully completing one before starting the
/// next. Used for the fields of a mutation root.
fn execute_fields_serially<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    parent_type: &'a GraphQLType,
    source: &'c FieldValue,
    path: Option<&'c Arc<ResponsePath>>,
    fields: &'c GroupedFields<'a>,
) -> BoxFuture<'c, Completed> {
    async move {
        let mut results = Map::new();
        for (key, field_nodes) in fields {
            let path = field_path(path, key, parent_type);
            if let Some(value) = execute_field(ctx, parent_type, source, field_nodes, path).await? {
                results.insert(key.to_string(), value);
            }
        }
        Ok(JsonValue::Object(results))
    }
    .boxed()
}

/// Runs every field concurrently. The response keeps selection order
/// whatever order the fields complete in.
fn execute_fields<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    parent_type: &'a GraphQLType,
    source: &'c FieldValue,
    path: Option<&'c Arc<ResponsePath>>,
    fields: &'c GroupedFields<'a>,
) -> BoxFuture<'c, Completed> {
    async move {
        let pending = fields.iter().map(|(key, field_nodes)| {
            let path = field_path(path, key, parent_type);
            execute_field(ctx, parent_type, source, field_nodes, path)
                .map(move |result| (*key, result))
        });
        let mut results = Map::new();
        // Every sibling settles before a propagated null is reported.
        for (key, result) in join_all(pending).await {
            if let Some(value) = result? {
                results.insert(key.to_string(), value);
            }
        }
        Ok(JsonValue::Object(results))
    }
    .boxed()
}

/// Resolves one field and completes its value. Fields not defined on
/// `parent_type` produce nothing.
fn execute_field<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    parent_type: &'a GraphQLType,
    source: &'c FieldValue,
    field_nodes: &'c [&'a ast::Field],
    path: Arc<ResponsePath>,
) -> BoxFuture<'c, Result<Option<JsonValue>, PropagateNull>> {
    async move {
        let (Some(field_node), Some(object_type)) = (field_nodes.first(), parent_type.as_object())
        else {
            return Ok(None);
        };
        let Some(field_def) = get_field_def(ctx.schema, parent_type, &field_node.name) else {
            return Ok(None);
        };
        let return_type = field_def.ty();

        let info = ResolveInfo {
            field_name: field_def.name(),
            field_nodes,
            return_type,
            parent_type: object_type,
            path: Arc::clone(&path),
            schema: ctx.schema,
            fragments: &ctx.fragments,
            root_value: ctx.root_value,
            operation: ctx.operation,
            variable_values: &ctx.variable_values,
        };

        let args = match get_argument_values(
            ctx.schema,
            field_def.args(),
            &field_node.arguments,
            field_node.loc.as_ref(),
            &ctx.variable_values,
        ) {
            Ok(args) => args,
            Err(error) => {
                let propagated = ctx.field_error(error, field_nodes, &path);
                return try_nullify(return_type, Err(propagated)).map(Some);
            },
        };

        tracing::trace!(
            parent_type = object_type.name(),
            field = field_def.name(),
            "resolving field",
        );
        let resolver_args = ResolverArgs {
            source,
            args: &args,
            context: ctx.context_value,
            info: &info,
        };
        let resolved = match field_def.get_resolver().or(ctx.field_resolver) {
            Some(resolver) => resolver.call(resolver_args).resolve().await,
            None => default_field_resolver(resolver_args),
        };
        let completed = match resolved {
            Ok(value) => complete_value(ctx, return_type, field_nodes, &info, &path, value).await,
            Err(error) => Err(ctx.field_error(error, field_nodes, &path)),
        };
        try_nullify(return_type, completed).map(Some)
    }
    .boxed()
}

/// Turns a propagating null into a `null` value when `type_ref` allows
/// one.
fn try_nullify(type_ref: &TypeRef, completed: Completed) -> Completed {
    match completed {
        Err(PropagateNull) if !type_ref.is_non_null() => Ok(JsonValue::Null),
        other => other,
    }
}

/// Shapes a resolved value to the field's declared type.
///
/// https://spec.graphql.org/October2021/#CompleteValue()
fn complete_value<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    return_type: &'c TypeRef,
    field_nodes: &'c [&'a ast::Field],
    info: &'c ResolveInfo<'c>,
    path: &'c Arc<ResponsePath>,
    result: FieldValue,
) -> BoxFuture<'c, Completed> {
    async move {
        match return_type {
            TypeRef::NonNull(inner) => {
                let completed =
                    complete_value(ctx, inner, field_nodes, info, path, result).await?;
                if completed.is_null() {
                    let message = format!(
                        "Cannot return null for non-nullable field {}.{}.",
                        info.parent_type.name(),
                        info.field_name,
                    );
                    return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
                }
                Ok(completed)
            },
            _ if result.is_null() => Ok(JsonValue::Null),
            TypeRef::List(item_type) => {
                complete_list_value(ctx, item_type, field_nodes, info, path, result).await
            },
            TypeRef::Named(name) => {
                let Some(named_type) = ctx.schema.get_type(name) else {
                    let message = format!("Cannot complete value of unexpected output type: \"{name}\".");
                    return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
                };
                match named_type {
                    GraphQLType::Scalar(_) | GraphQLType::Enum(_) => {
                        complete_leaf_value(ctx, named_type, field_nodes, path, &result)
                    },
                    GraphQLType::Object(_) => {
                        complete_object_value(ctx, named_type, field_nodes, info, path, result).await
                    },
                    GraphQLType::Interface(_) | GraphQLType::Union(_) => {
                        complete_abstract_value(ctx, named_type, field_nodes, info, path, result)
                            .await
                    },
                    GraphQLType::InputObject(_) => {
                        let message =
                            format!("Cannot complete value of unexpected output type: \"{name}\".");
                        Err(ctx.field_error(GraphQLError::new(message), field_nodes, path))
                    },
                }
            },
        }
    }
    .boxed()
}

async fn complete_list_value<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    item_type: &'c TypeRef,
    field_nodes: &'c [&'a ast::Field],
    info: &'c ResolveInfo<'c>,
    path: &'c Arc<ResponsePath>,
    result: FieldValue,
) -> Completed {
    let Some(items) = result.list_items() else {
        let message = format!(
            "Expected Iterable, but did not find one for field \"{}.{}\".",
            info.parent_type.name(),
            info.field_name,
        );
        return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
    };

    let pending = items.into_iter().enumerate().map(move |(idx, item)| async move {
        let item_path = path.child(idx, None);
        let completed = complete_value(ctx, item_type, field_nodes, info, &item_path, item).await;
        try_nullify(item_type, completed)
    });
    join_all(pending)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map(JsonValue::Array)
}

fn complete_leaf_value(
    ctx: &ExecutionContext<'_>,
    leaf_type: &GraphQLType,
    field_nodes: &[&ast::Field],
    path: &ResponsePath,
    result: &FieldValue,
) -> Completed {
    let serialized = match leaf_type {
        GraphQLType::Scalar(scalar) => scalar.serialize(result),
        GraphQLType::Enum(enum_type) => enum_type.serialize(result),
        _ => Err(format!("Expected a leaf type, found \"{}\".", leaf_type.name())),
    };
    match serialized {
        Ok(JsonValue::Null) => {
            let message = format!(
                "Expected `{}.serialize({})` to return non-nullable value, returned: null",
                leaf_type.name(),
                inspect_field_value(result),
            );
            Err(ctx.field_error(GraphQLError::new(message), field_nodes, path))
        },
        Ok(value) => Ok(value),
        Err(message) => Err(ctx.field_error(GraphQLError::new(message), field_nodes, path)),
    }
}

/// Picks the concrete object type of a value of an interface or union
/// type, then completes it as that object.
async fn complete_abstract_value<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    abstract_type: &'a GraphQLType,
    field_nodes: &'c [&'a ast::Field],
    info: &'c ResolveInfo<'c>,
    path: &'c Arc<ResponsePath>,
    result: FieldValue,
) -> Completed {
    let own_resolver = match abstract_type {
        GraphQLType::Interface(iface) => iface.get_resolve_type(),
        GraphQLType::Union(union_type) => union_type.get_resolve_type(),
        _ => None,
    };
    let type_resolver_args = TypeResolverArgs {
        value: &result,
        context: ctx.context_value,
        info,
        abstract_type: abstract_type.name(),
    };
    let runtime_type_name = match own_resolver.or(ctx.type_resolver) {
        Some(resolver) => resolver.call(type_resolver_args).resolve().await,
        None => default_type_resolver(type_resolver_args).await,
    };

    let abstract_name = abstract_type.name();
    let Some(runtime_type_name) = runtime_type_name else {
        let message = format!(
            "Abstract type \"{abstract_name}\" must resolve to an Object type at runtime for \
             field \"{}.{}\". Either the \"{abstract_name}\" type should provide a \
             \"resolveType\" function or each possible type should provide an \"isTypeOf\" \
             function.",
            info.parent_type.name(),
            info.field_name,
        );
        return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
    };
    let Some(runtime_type) = ctx.schema.get_type(&runtime_type_name) else {
        let message = format!(
            "Abstract type \"{abstract_name}\" was resolved to a type \"{runtime_type_name}\" \
             that does not exist inside the schema.",
        );
        return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
    };
    if runtime_type.as_object().is_none() {
        let message = format!(
            "Abstract type \"{abstract_name}\" was resolved to a non-object type \
             \"{runtime_type_name}\".",
        );
        return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
    }
    if !ctx.schema.is_sub_type(abstract_type, &runtime_type_name) {
        let message = format!(
            "Runtime Object type \"{runtime_type_name}\" is not a possible type for \
             \"{abstract_name}\".",
        );
        return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
    }
    complete_object_value(ctx, runtime_type, field_nodes, info, path, result).await
}

/// Checks `is_type_of` where the object type has one, then executes the
/// merged sub-selections against the value.
async fn complete_object_value<'c, 'a: 'c>(
    ctx: &'c ExecutionContext<'a>,
    object_type: &'a GraphQLType,
    field_nodes: &'c [&'a ast::Field],
    info: &'c ResolveInfo<'c>,
    path: &'c Arc<ResponsePath>,
    result: FieldValue,
) -> Completed {
    if let Some(is_type_of) = object_type.as_object().and_then(|object| object.get_is_type_of()) {
        let is_type_of_args = IsTypeOfArgs {
            value: &result,
            context: ctx.context_value,
            info,
        };
        if !is_type_of.call(is_type_of_args).resolve().await {
            let message = format!(
                "Expected value of type \"{}\" but got: {}.",
                object_type.name(),
                inspect_field_value(&result),
            );
            return Err(ctx.field_error(GraphQLError::new(message), field_nodes, path));
        }
    }
    let subfields = collect_subfields(&ctx.collect_context(), object_type, field_nodes);
    execute_fields(ctx, object_type, &result, Some(path), &subfields).await
}

/// Reads the property named after the field from the source value,
/// evaluating it if it is lazy.
pub fn default_field_resolver(args: ResolverArgs<'_>) -> FieldResult {
    Ok(args.source.property(args.info.field_name))
}

/// Names the concrete type of `args.value` from its `__typename` (or type
/// tag), falling back to asking each possible type's `is_type_of` check in
/// turn.
pub async fn default_type_resolver(args: TypeResolverArgs<'_>) -> Option<String> {
    if let Some(type_name) = args.value.type_name() {
        return Some(type_name.to_string());
    }
    let schema = args.info.schema;
    let abstract_type = schema.get_type(args.abstract_type)?;
    for possible_type in schema.get_possible_types(abstract_type) {
        let Some(is_type_of) = possible_type.get_is_type_of() else {
            continue;
        };
        let is_type_of_args = IsTypeOfArgs {
            value: args.value,
            context: args.context,
            info: args.info,
        };
        if is_type_of.call(is_type_of_args).resolve().await {
            return Some(possible_type.name().to_string());
        }
    }
    None
}
