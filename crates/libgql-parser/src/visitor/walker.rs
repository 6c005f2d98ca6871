//! The depth-first walk behind [`visit()`](crate::visitor::visit).
//!
//! Every node is rebuilt bottom-up only when something beneath it changed;
//! untouched subtrees are never cloned.

use crate::ast;
use crate::visitor::AstNode;
use crate::visitor::AstNodeRef;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

/// Outcome of walking one node.
pub(crate) enum Walked<T> {
    Unchanged,
    Replaced(T),
    Removed,
}

/// Drives a [`Visitor`] over a tree. Only constructed by the `visit*`
/// functions.
#[doc(hidden)]
pub struct Walker<'w, V: ?Sized, C> {
    visitor: &'w mut V,
    ctx: &'w mut C,
    broken: bool,
}

impl<'w, V: Visitor<C> + ?Sized, C> Walker<'w, V, C> {
    pub(crate) fn new(visitor: &'w mut V, ctx: &'w mut C) -> Self {
        Self {
            visitor,
            ctx,
            broken: false,
        }
    }

    pub(crate) fn walk<T: VisitableNode>(&mut self, node: &T) -> Walked<T> {
        if self.broken {
            return Walked::Unchanged;
        }

        let mut replacement = None;
        match self.visitor.enter(node.as_node_ref(), self.ctx) {
            VisitAction::Continue => (),
            VisitAction::Skip => return Walked::Unchanged,
            VisitAction::Break => {
                self.broken = true;
                return Walked::Unchanged;
            },
            VisitAction::Remove => return Walked::Removed,
            VisitAction::Replace(new_node) => {
                replacement = Some(T::from_node(new_node));
            },
        }

        // Traversal continues into the replacement when there is one.
        let rebuilt = match &replacement {
            Some(new_node) => new_node.walk_children(self),
            None => node.walk_children(self),
        };
        let edited = rebuilt.or(replacement);
        if self.broken {
            return edited.map_or(Walked::Unchanged, Walked::Replaced);
        }

        let current = edited.as_ref().unwrap_or(node);
        match self.visitor.leave(current.as_node_ref(), self.ctx) {
            VisitAction::Continue | VisitAction::Skip => {
                edited.map_or(Walked::Unchanged, Walked::Replaced)
            },
            VisitAction::Break => {
                self.broken = true;
                edited.map_or(Walked::Unchanged, Walked::Replaced)
            },
            VisitAction::Remove => Walked::Removed,
            VisitAction::Replace(new_node) => Walked::Replaced(T::from_node(new_node)),
        }
    }

    /// Walks a list of children, returning the rebuilt list if any element
    /// was replaced or removed.
    fn walk_vec<T: VisitableNode>(&mut self, items: &[T]) -> Option<Vec<T>> {
        let mut out: Option<Vec<T>> = None;
        for (idx, item) in items.iter().enumerate() {
            match self.walk(item) {
                Walked::Unchanged => {
                    if let Some(out) = out.as_mut() {
                        out.push(item.clone());
                    }
                },
                Walked::Replaced(new_item) => {
                    out.get_or_insert_with(|| items[..idx].to_vec()).push(new_item);
                },
                Walked::Removed => {
                    out.get_or_insert_with(|| items[..idx].to_vec());
                },
            }
        }
        out
    }

    fn walk_optional<T: VisitableNode>(&mut self, item: &Option<T>) -> Option<Option<T>> {
        let item = item.as_ref()?;
        match self.walk(item) {
            Walked::Unchanged => None,
            Walked::Replaced(new_item) => Some(Some(new_item)),
            Walked::Removed => Some(None),
        }
    }

    /// # Panics
    ///
    /// Removing a child the parent cannot exist without (the value of an
    /// argument, the selection set of an operation...) is a programmer error.
    fn walk_required<T: VisitableNode>(&mut self, item: &T, parent: &str) -> Option<T> {
        match self.walk(item) {
            Walked::Unchanged => None,
            Walked::Replaced(new_item) => Some(new_item),
            Walked::Removed => panic!(
                "cannot remove the required {} child of a {parent}",
                item.as_node_ref().kind_name(),
            ),
        }
    }
}

/// An AST node the walker knows how to descend into.
pub trait VisitableNode: Clone + Sized {
    fn as_node_ref(&self) -> AstNodeRef<'_>;

    /// Converts a replacement node into this slot's type.
    ///
    /// # Panics
    ///
    /// Panics when `node` is of a kind that cannot occupy this slot.
    fn from_node(node: AstNode) -> Self;

    #[doc(hidden)]
    fn walk_children<V: Visitor<C> + ?Sized, C>(
        &self,
        walker: &mut Walker<'_, V, C>,
    ) -> Option<Self>;
}

fn mismatched_replacement(slot: &str, node: &AstNode) -> ! {
    panic!("a {} node cannot replace a {slot} node", node.kind_name())
}

/// Shorthand for "clone the parent on first change, then assign".
macro_rules! rebuild {
    ($out:ident, $this:expr, $field:ident = $changed:expr) => {
        if let Some(changed) = $changed {
            $out.get_or_insert_with(|| $this.clone()).$field = changed;
        }
    };
}

impl VisitableNode for ast::Document {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::Document(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::Document(doc) => doc,
            other => mismatched_replacement("Document", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, definitions = w.walk_vec(&self.definitions));
        out
    }
}

impl VisitableNode for ast::Definition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        match self {
            ast::Definition::Operation(def) => AstNodeRef::OperationDefinition(def),
            ast::Definition::Fragment(def) => AstNodeRef::FragmentDefinition(def),
            ast::Definition::Schema(def) => AstNodeRef::SchemaDefinition(def),
            ast::Definition::Type(def) => AstNodeRef::TypeDefinition(def),
            ast::Definition::Directive(def) => AstNodeRef::DirectiveDefinition(def),
            ast::Definition::SchemaExtension(def) => AstNodeRef::SchemaExtension(def),
            ast::Definition::TypeExtension(def) => AstNodeRef::TypeExtension(def),
        }
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::OperationDefinition(def) => ast::Definition::Operation(def),
            AstNode::FragmentDefinition(def) => ast::Definition::Fragment(def),
            AstNode::SchemaDefinition(def) => ast::Definition::Schema(def),
            AstNode::TypeDefinition(def) => ast::Definition::Type(def),
            AstNode::DirectiveDefinition(def) => ast::Definition::Directive(def),
            AstNode::SchemaExtension(def) => ast::Definition::SchemaExtension(def),
            AstNode::TypeExtension(def) => ast::Definition::TypeExtension(def),
            other => mismatched_replacement("Definition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        match self {
            ast::Definition::Operation(def) => def.walk_children(w).map(ast::Definition::Operation),
            ast::Definition::Fragment(def) => def.walk_children(w).map(ast::Definition::Fragment),
            ast::Definition::Schema(def) => def.walk_children(w).map(ast::Definition::Schema),
            ast::Definition::Type(def) => def.walk_children(w).map(ast::Definition::Type),
            ast::Definition::Directive(def) => def.walk_children(w).map(ast::Definition::Directive),
            ast::Definition::SchemaExtension(def) => {
                def.walk_children(w).map(ast::Definition::SchemaExtension)
            },
            ast::Definition::TypeExtension(def) => {
                def.walk_children(w).map(ast::Definition::TypeExtension)
            },
        }
    }
}

impl VisitableNode for ast::OperationDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::OperationDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::OperationDefinition(def) => def,
            other => mismatched_replacement("OperationDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, variable_definitions = w.walk_vec(&self.variable_definitions));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        rebuild!(out, self, selection_set = w.walk_required(&self.selection_set, "OperationDefinition"));
        out
    }
}

impl VisitableNode for ast::VariableDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::VariableDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::VariableDefinition(def) => def,
            other => mismatched_replacement("VariableDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, var_type = w.walk_required(&self.var_type, "VariableDefinition"));
        rebuild!(out, self, default_value = w.walk_optional(&self.default_value));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        out
    }
}

impl VisitableNode for ast::SelectionSet {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::SelectionSet(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::SelectionSet(set) => set,
            other => mismatched_replacement("SelectionSet", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, selections = w.walk_vec(&self.selections));
        out
    }
}

impl VisitableNode for ast::Selection {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        match self {
            ast::Selection::Field(field) => AstNodeRef::Field(field),
            ast::Selection::FragmentSpread(spread) => AstNodeRef::FragmentSpread(spread),
            ast::Selection::InlineFragment(inline) => AstNodeRef::InlineFragment(inline),
        }
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::Field(field) => ast::Selection::Field(field),
            AstNode::FragmentSpread(spread) => ast::Selection::FragmentSpread(spread),
            AstNode::InlineFragment(inline) => ast::Selection::InlineFragment(inline),
            other => mismatched_replacement("Selection", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        match self {
            ast::Selection::Field(field) => field.walk_children(w).map(ast::Selection::Field),
            ast::Selection::FragmentSpread(spread) => {
                spread.walk_children(w).map(ast::Selection::FragmentSpread)
            },
            ast::Selection::InlineFragment(inline) => {
                inline.walk_children(w).map(ast::Selection::InlineFragment)
            },
        }
    }
}

impl VisitableNode for ast::Field {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::Field(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::Field(field) => field,
            other => mismatched_replacement("Field", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, arguments = w.walk_vec(&self.arguments));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        rebuild!(out, self, selection_set = w.walk_optional(&self.selection_set));
        out
    }
}

impl VisitableNode for ast::Argument {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::Argument(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::Argument(arg) => arg,
            other => mismatched_replacement("Argument", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, value = w.walk_required(&self.value, "Argument"));
        out
    }
}

impl VisitableNode for ast::FragmentSpread {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::FragmentSpread(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::FragmentSpread(spread) => spread,
            other => mismatched_replacement("FragmentSpread", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        out
    }
}

impl VisitableNode for ast::InlineFragment {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::InlineFragment(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::InlineFragment(inline) => inline,
            other => mismatched_replacement("InlineFragment", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, type_condition = w.walk_optional(&self.type_condition));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        rebuild!(out, self, selection_set = w.walk_required(&self.selection_set, "InlineFragment"));
        out
    }
}

impl VisitableNode for ast::FragmentDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::FragmentDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::FragmentDefinition(def) => def,
            other => mismatched_replacement("FragmentDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, type_condition = w.walk_required(&self.type_condition, "FragmentDefinition"));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        rebuild!(out, self, selection_set = w.walk_required(&self.selection_set, "FragmentDefinition"));
        out
    }
}

impl VisitableNode for ast::Value {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::Value(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::Value(value) => value,
            other => mismatched_replacement("Value", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        match self {
            ast::Value::List { values, loc } => w.walk_vec(values).map(|values| ast::Value::List {
                values,
                loc: loc.clone(),
            }),
            ast::Value::Object { fields, loc } => w.walk_vec(fields).map(|fields| ast::Value::Object {
                fields,
                loc: loc.clone(),
            }),
            _ => None,
        }
    }
}

impl VisitableNode for ast::ObjectField {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::ObjectField(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::ObjectField(field) => field,
            other => mismatched_replacement("ObjectField", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, value = w.walk_required(&self.value, "ObjectField"));
        out
    }
}

impl VisitableNode for ast::Directive {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::Directive(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::Directive(directive) => directive,
            other => mismatched_replacement("Directive", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, arguments = w.walk_vec(&self.arguments));
        out
    }
}

impl VisitableNode for ast::TypeAnnotation {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::TypeAnnotation(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::TypeAnnotation(type_ann) => type_ann,
            AstNode::NamedType(named) => ast::TypeAnnotation::Named(named),
            other => mismatched_replacement("TypeAnnotation", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        match self {
            ast::TypeAnnotation::Named(named) => {
                w.walk_required(named, "TypeAnnotation").map(ast::TypeAnnotation::Named)
            },
            ast::TypeAnnotation::List(list) => {
                w.walk_required(&*list.inner, "ListType").map(|inner| {
                    ast::TypeAnnotation::List(ast::ListType {
                        inner: Box::new(inner),
                        loc: list.loc.clone(),
                    })
                })
            },
            ast::TypeAnnotation::NonNull(non_null) => {
                w.walk_required(&*non_null.inner, "NonNullType").map(|inner| {
                    ast::TypeAnnotation::NonNull(ast::NonNullType {
                        inner: Box::new(inner),
                        loc: non_null.loc.clone(),
                    })
                })
            },
        }
    }
}

impl VisitableNode for ast::NamedType {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::NamedType(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::NamedType(named) => named,
            other => mismatched_replacement("NamedType", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, _w: &mut Walker<'_, V, C>) -> Option<Self> {
        None
    }
}

// =============================================================================
// Type-system nodes
// =============================================================================

impl VisitableNode for ast::SchemaDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::SchemaDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::SchemaDefinition(def) | AstNode::SchemaExtension(def) => def,
            other => mismatched_replacement("SchemaDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        rebuild!(out, self, operation_types = w.walk_vec(&self.operation_types));
        out
    }
}

impl VisitableNode for ast::OperationTypeDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::OperationTypeDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::OperationTypeDefinition(def) => def,
            other => mismatched_replacement("OperationTypeDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, named_type = w.walk_required(&self.named_type, "OperationTypeDefinition"));
        out
    }
}

impl VisitableNode for ast::TypeDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::TypeDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::TypeDefinition(def) | AstNode::TypeExtension(def) => def,
            other => mismatched_replacement("TypeDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        match self {
            ast::TypeDefinition::Scalar(def) => {
                let mut out = None;
                rebuild!(out, def, directives = w.walk_vec(&def.directives));
                out.map(ast::TypeDefinition::Scalar)
            },
            ast::TypeDefinition::Object(def) => {
                let mut out = None;
                rebuild!(out, def, interfaces = w.walk_vec(&def.interfaces));
                rebuild!(out, def, directives = w.walk_vec(&def.directives));
                rebuild!(out, def, fields = w.walk_vec(&def.fields));
                out.map(ast::TypeDefinition::Object)
            },
            ast::TypeDefinition::Interface(def) => {
                let mut out = None;
                rebuild!(out, def, interfaces = w.walk_vec(&def.interfaces));
                rebuild!(out, def, directives = w.walk_vec(&def.directives));
                rebuild!(out, def, fields = w.walk_vec(&def.fields));
                out.map(ast::TypeDefinition::Interface)
            },
            ast::TypeDefinition::Union(def) => {
                let mut out = None;
                rebuild!(out, def, directives = w.walk_vec(&def.directives));
                rebuild!(out, def, types = w.walk_vec(&def.types));
                out.map(ast::TypeDefinition::Union)
            },
            ast::TypeDefinition::Enum(def) => {
                let mut out = None;
                rebuild!(out, def, directives = w.walk_vec(&def.directives));
                rebuild!(out, def, values = w.walk_vec(&def.values));
                out.map(ast::TypeDefinition::Enum)
            },
            ast::TypeDefinition::InputObject(def) => {
                let mut out = None;
                rebuild!(out, def, directives = w.walk_vec(&def.directives));
                rebuild!(out, def, fields = w.walk_vec(&def.fields));
                out.map(ast::TypeDefinition::InputObject)
            },
        }
    }
}

impl VisitableNode for ast::FieldDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::FieldDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::FieldDefinition(def) => def,
            other => mismatched_replacement("FieldDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, arguments = w.walk_vec(&self.arguments));
        rebuild!(out, self, field_type = w.walk_required(&self.field_type, "FieldDefinition"));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        out
    }
}

impl VisitableNode for ast::InputValueDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::InputValueDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::InputValueDefinition(def) => def,
            other => mismatched_replacement("InputValueDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, value_type = w.walk_required(&self.value_type, "InputValueDefinition"));
        rebuild!(out, self, default_value = w.walk_optional(&self.default_value));
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        out
    }
}

impl VisitableNode for ast::EnumValueDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::EnumValueDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::EnumValueDefinition(def) => def,
            other => mismatched_replacement("EnumValueDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, directives = w.walk_vec(&self.directives));
        out
    }
}

impl VisitableNode for ast::DirectiveDefinition {
    fn as_node_ref(&self) -> AstNodeRef<'_> {
        AstNodeRef::DirectiveDefinition(self)
    }

    fn from_node(node: AstNode) -> Self {
        match node {
            AstNode::DirectiveDefinition(def) => def,
            other => mismatched_replacement("DirectiveDefinition", &other),
        }
    }

    fn walk_children<V: Visitor<C> + ?Sized, C>(&self, w: &mut Walker<'_, V, C>) -> Option<Self> {
        let mut out = None;
        rebuild!(out, self, arguments = w.walk_vec(&self.arguments));
        out
    }
}
