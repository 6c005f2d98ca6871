use crate::error::FieldError;
use crate::execution::ResolveInfo;
use crate::value::FieldValue;
use crate::value::MaybeAsync;
use crate::value::Variables;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

pub type FieldResult = Result<FieldValue, FieldError>;

/// Everything a field resolver is handed.
pub struct ResolverArgs<'a> {
    /// The value the parent field resolved to (or the root value).
    pub source: &'a FieldValue,
    /// Coerced argument values, including defaults.
    pub args: &'a Variables,
    pub context: &'a FieldValue,
    pub info: &'a ResolveInfo<'a>,
}

impl ResolverArgs<'_> {
    pub fn arg(&self, name: &str) -> Option<&JsonValue> {
        self.args.get(name)
    }
}

type FieldResolverFn =
    dyn for<'a> Fn(ResolverArgs<'a>) -> MaybeAsync<'a, FieldResult> + Send + Sync;

/// Produces a field's value from its parent value, arguments and context.
#[derive(Clone)]
pub struct FieldResolver(Arc<FieldResolverFn>);

impl FieldResolver {
    pub fn new<F>(resolve: F) -> Self
    where
        F: for<'a> Fn(ResolverArgs<'a>) -> MaybeAsync<'a, FieldResult> + Send + Sync + 'static,
    {
        FieldResolver(Arc::new(resolve))
    }

    /// A resolver whose answer is always immediately available.
    pub fn sync<F>(resolve: F) -> Self
    where
        F: for<'a> Fn(ResolverArgs<'a>) -> FieldResult + Send + Sync + 'static,
    {
        FieldResolver::new(move |args| MaybeAsync::Ready(resolve(args)))
    }

    pub fn call<'a>(&self, args: ResolverArgs<'a>) -> MaybeAsync<'a, FieldResult> {
        (self.0)(args)
    }
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldResolver(..)")
    }
}

/// What a type resolver is handed when completing an abstract-typed value.
pub struct TypeResolverArgs<'a> {
    pub value: &'a FieldValue,
    pub context: &'a FieldValue,
    pub info: &'a ResolveInfo<'a>,
    /// The interface or union being resolved.
    pub abstract_type: &'a str,
}

type TypeResolverFn =
    dyn for<'a> Fn(TypeResolverArgs<'a>) -> MaybeAsync<'a, Option<String>> + Send + Sync;

/// Names the concrete object type of a value of an interface or union type.
#[derive(Clone)]
pub struct TypeResolver(Arc<TypeResolverFn>);

impl TypeResolver {
    pub fn new<F>(resolve: F) -> Self
    where
        F: for<'a> Fn(TypeResolverArgs<'a>) -> MaybeAsync<'a, Option<String>> + Send + Sync + 'static,
    {
        TypeResolver(Arc::new(resolve))
    }

    pub fn sync<F>(resolve: F) -> Self
    where
        F: for<'a> Fn(TypeResolverArgs<'a>) -> Option<String> + Send + Sync + 'static,
    {
        TypeResolver::new(move |args| MaybeAsync::Ready(resolve(args)))
    }

    pub fn call<'a>(&self, args: TypeResolverArgs<'a>) -> MaybeAsync<'a, Option<String>> {
        (self.0)(args)
    }
}

impl fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TypeResolver(..)")
    }
}

pub struct IsTypeOfArgs<'a> {
    pub value: &'a FieldValue,
    pub context: &'a FieldValue,
    pub info: &'a ResolveInfo<'a>,
}

type IsTypeOfFn = dyn for<'a> Fn(IsTypeOfArgs<'a>) -> MaybeAsync<'a, bool> + Send + Sync;

/// An object type's own check that a runtime value belongs to it.
#[derive(Clone)]
pub struct IsTypeOf(Arc<IsTypeOfFn>);

impl IsTypeOf {
    pub fn new<F>(check: F) -> Self
    where
        F: for<'a> Fn(IsTypeOfArgs<'a>) -> MaybeAsync<'a, bool> + Send + Sync + 'static,
    {
        IsTypeOf(Arc::new(check))
    }

    pub fn sync<F>(check: F) -> Self
    where
        F: for<'a> Fn(IsTypeOfArgs<'a>) -> bool + Send + Sync + 'static,
    {
        IsTypeOf::new(move |args| MaybeAsync::Ready(check(args)))
    }

    pub fn call<'a>(&self, args: IsTypeOfArgs<'a>) -> MaybeAsync<'a, bool> {
        (self.0)(args)
    }
}

impl fmt::Debug for IsTypeOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IsTypeOf(..)")
    }
}
