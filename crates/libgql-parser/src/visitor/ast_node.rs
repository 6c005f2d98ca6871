use crate::ast;
use crate::ast::Location;

/// A borrowed reference to any visitable AST node.
///
/// This is what [`Visitor`](crate::visitor::Visitor) callbacks receive.
/// `Definition` and `Selection` never appear on their own: the walker hands
/// out the concrete node they wrap.
#[derive(Clone, Copy, Debug)]
pub enum AstNodeRef<'a> {
    Document(&'a ast::Document),
    OperationDefinition(&'a ast::OperationDefinition),
    VariableDefinition(&'a ast::VariableDefinition),
    SelectionSet(&'a ast::SelectionSet),
    Field(&'a ast::Field),
    Argument(&'a ast::Argument),
    FragmentSpread(&'a ast::FragmentSpread),
    InlineFragment(&'a ast::InlineFragment),
    FragmentDefinition(&'a ast::FragmentDefinition),
    Value(&'a ast::Value),
    ObjectField(&'a ast::ObjectField),
    Directive(&'a ast::Directive),
    TypeAnnotation(&'a ast::TypeAnnotation),
    NamedType(&'a ast::NamedType),
    SchemaDefinition(&'a ast::SchemaDefinition),
    SchemaExtension(&'a ast::SchemaDefinition),
    OperationTypeDefinition(&'a ast::OperationTypeDefinition),
    TypeDefinition(&'a ast::TypeDefinition),
    TypeExtension(&'a ast::TypeDefinition),
    FieldDefinition(&'a ast::FieldDefinition),
    InputValueDefinition(&'a ast::InputValueDefinition),
    EnumValueDefinition(&'a ast::EnumValueDefinition),
    DirectiveDefinition(&'a ast::DirectiveDefinition),
}

impl<'a> AstNodeRef<'a> {
    pub fn kind_name(&self) -> &'static str {
        match self {
            AstNodeRef::Document(_) => "Document",
            AstNodeRef::OperationDefinition(_) => "OperationDefinition",
            AstNodeRef::VariableDefinition(_) => "VariableDefinition",
            AstNodeRef::SelectionSet(_) => "SelectionSet",
            AstNodeRef::Field(_) => "Field",
            AstNodeRef::Argument(_) => "Argument",
            AstNodeRef::FragmentSpread(_) => "FragmentSpread",
            AstNodeRef::InlineFragment(_) => "InlineFragment",
            AstNodeRef::FragmentDefinition(_) => "FragmentDefinition",
            AstNodeRef::Value(_) => "Value",
            AstNodeRef::ObjectField(_) => "ObjectField",
            AstNodeRef::Directive(_) => "Directive",
            AstNodeRef::TypeAnnotation(_) => "TypeAnnotation",
            AstNodeRef::NamedType(_) => "NamedType",
            AstNodeRef::SchemaDefinition(_) => "SchemaDefinition",
            AstNodeRef::SchemaExtension(_) => "SchemaExtension",
            AstNodeRef::OperationTypeDefinition(_) => "OperationTypeDefinition",
            AstNodeRef::TypeDefinition(_) => "TypeDefinition",
            AstNodeRef::TypeExtension(_) => "TypeExtension",
            AstNodeRef::FieldDefinition(_) => "FieldDefinition",
            AstNodeRef::InputValueDefinition(_) => "InputValueDefinition",
            AstNodeRef::EnumValueDefinition(_) => "EnumValueDefinition",
            AstNodeRef::DirectiveDefinition(_) => "DirectiveDefinition",
        }
    }

    pub fn loc(&self) -> Option<&'a Location> {
        match *self {
            AstNodeRef::Document(node) => node.loc(),
            AstNodeRef::OperationDefinition(node) => node.loc(),
            AstNodeRef::VariableDefinition(node) => node.loc(),
            AstNodeRef::SelectionSet(node) => node.loc(),
            AstNodeRef::Field(node) => node.loc(),
            AstNodeRef::Argument(node) => node.loc(),
            AstNodeRef::FragmentSpread(node) => node.loc(),
            AstNodeRef::InlineFragment(node) => node.loc(),
            AstNodeRef::FragmentDefinition(node) => node.loc(),
            AstNodeRef::Value(node) => node.loc(),
            AstNodeRef::ObjectField(node) => node.loc(),
            AstNodeRef::Directive(node) => node.loc(),
            AstNodeRef::TypeAnnotation(node) => node.loc(),
            AstNodeRef::NamedType(node) => node.loc(),
            AstNodeRef::SchemaDefinition(node) | AstNodeRef::SchemaExtension(node) => node.loc(),
            AstNodeRef::OperationTypeDefinition(node) => node.loc(),
            AstNodeRef::TypeDefinition(node) | AstNodeRef::TypeExtension(node) => node.loc(),
            AstNodeRef::FieldDefinition(node) => node.loc(),
            AstNodeRef::InputValueDefinition(node) => node.loc(),
            AstNodeRef::EnumValueDefinition(node) => node.loc(),
            AstNodeRef::DirectiveDefinition(node) => node.loc(),
        }
    }

    /// Clones the referenced node into an owned [`AstNode`].
    pub fn to_owned_node(&self) -> AstNode {
        match *self {
            AstNodeRef::Document(node) => AstNode::Document(node.clone()),
            AstNodeRef::OperationDefinition(node) => AstNode::OperationDefinition(node.clone()),
            AstNodeRef::VariableDefinition(node) => AstNode::VariableDefinition(node.clone()),
            AstNodeRef::SelectionSet(node) => AstNode::SelectionSet(node.clone()),
            AstNodeRef::Field(node) => AstNode::Field(node.clone()),
            AstNodeRef::Argument(node) => AstNode::Argument(node.clone()),
            AstNodeRef::FragmentSpread(node) => AstNode::FragmentSpread(node.clone()),
            AstNodeRef::InlineFragment(node) => AstNode::InlineFragment(node.clone()),
            AstNodeRef::FragmentDefinition(node) => AstNode::FragmentDefinition(node.clone()),
            AstNodeRef::Value(node) => AstNode::Value(node.clone()),
            AstNodeRef::ObjectField(node) => AstNode::ObjectField(node.clone()),
            AstNodeRef::Directive(node) => AstNode::Directive(node.clone()),
            AstNodeRef::TypeAnnotation(node) => AstNode::TypeAnnotation(node.clone()),
            AstNodeRef::NamedType(node) => AstNode::NamedType(node.clone()),
            AstNodeRef::SchemaDefinition(node) => AstNode::SchemaDefinition(node.clone()),
            AstNodeRef::SchemaExtension(node) => AstNode::SchemaExtension(node.clone()),
            AstNodeRef::OperationTypeDefinition(node) => AstNode::OperationTypeDefinition(node.clone()),
            AstNodeRef::TypeDefinition(node) => AstNode::TypeDefinition(node.clone()),
            AstNodeRef::TypeExtension(node) => AstNode::TypeExtension(node.clone()),
            AstNodeRef::FieldDefinition(node) => AstNode::FieldDefinition(node.clone()),
            AstNodeRef::InputValueDefinition(node) => AstNode::InputValueDefinition(node.clone()),
            AstNodeRef::EnumValueDefinition(node) => AstNode::EnumValueDefinition(node.clone()),
            AstNodeRef::DirectiveDefinition(node) => AstNode::DirectiveDefinition(node.clone()),
        }
    }
}

/// An owned AST node, used as the payload of
/// [`VisitAction::Replace`](crate::visitor::VisitAction::Replace).
///
/// A replacement must be of a kind that fits the slot it replaces: a
/// `Field` can stand in for any selection and a `NamedType` for any type
/// annotation, but putting a `Value` where a `Field` was is a programmer
/// error and panics.
#[derive(Clone, Debug, PartialEq)]
pub enum AstNode {
    Document(ast::Document),
    OperationDefinition(ast::OperationDefinition),
    VariableDefinition(ast::VariableDefinition),
    SelectionSet(ast::SelectionSet),
    Field(ast::Field),
    Argument(ast::Argument),
    FragmentSpread(ast::FragmentSpread),
    InlineFragment(ast::InlineFragment),
    FragmentDefinition(ast::FragmentDefinition),
    Value(ast::Value),
    ObjectField(ast::ObjectField),
    Directive(ast::Directive),
    TypeAnnotation(ast::TypeAnnotation),
    NamedType(ast::NamedType),
    SchemaDefinition(ast::SchemaDefinition),
    SchemaExtension(ast::SchemaDefinition),
    OperationTypeDefinition(ast::OperationTypeDefinition),
    TypeDefinition(ast::TypeDefinition),
    TypeExtension(ast::TypeDefinition),
    FieldDefinition(ast::FieldDefinition),
    InputValueDefinition(ast::InputValueDefinition),
    EnumValueDefinition(ast::EnumValueDefinition),
    DirectiveDefinition(ast::DirectiveDefinition),
}

impl AstNode {
    pub fn as_node_ref(&self) -> AstNodeRef<'_> {
        match self {
            AstNode::Document(node) => AstNodeRef::Document(node),
            AstNode::OperationDefinition(node) => AstNodeRef::OperationDefinition(node),
            AstNode::VariableDefinition(node) => AstNodeRef::VariableDefinition(node),
            AstNode::SelectionSet(node) => AstNodeRef::SelectionSet(node),
            AstNode::Field(node) => AstNodeRef::Field(node),
            AstNode::Argument(node) => AstNodeRef::Argument(node),
            AstNode::FragmentSpread(node) => AstNodeRef::FragmentSpread(node),
            AstNode::InlineFragment(node) => AstNodeRef::InlineFragment(node),
            AstNode::FragmentDefinition(node) => AstNodeRef::FragmentDefinition(node),
            AstNode::Value(node) => AstNodeRef::Value(node),
            AstNode::ObjectField(node) => AstNodeRef::ObjectField(node),
            AstNode::Directive(node) => AstNodeRef::Directive(node),
            AstNode::TypeAnnotation(node) => AstNodeRef::TypeAnnotation(node),
            AstNode::NamedType(node) => AstNodeRef::NamedType(node),
            AstNode::SchemaDefinition(node) => AstNodeRef::SchemaDefinition(node),
            AstNode::SchemaExtension(node) => AstNodeRef::SchemaExtension(node),
            AstNode::OperationTypeDefinition(node) => AstNodeRef::OperationTypeDefinition(node),
            AstNode::TypeDefinition(node) => AstNodeRef::TypeDefinition(node),
            AstNode::TypeExtension(node) => AstNodeRef::TypeExtension(node),
            AstNode::FieldDefinition(node) => AstNodeRef::FieldDefinition(node),
            AstNode::InputValueDefinition(node) => AstNodeRef::InputValueDefinition(node),
            AstNode::EnumValueDefinition(node) => AstNodeRef::EnumValueDefinition(node),
            AstNode::DirectiveDefinition(node) => AstNodeRef::DirectiveDefinition(node),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        self.as_node_ref().kind_name()
    }
}

macro_rules! impl_from_for_ast_node {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AstNode {
                fn from(node: $ty) -> Self {
                    AstNode::$variant(node)
                }
            }
        )*
    };
}

impl_from_for_ast_node!(
    Document => ast::Document,
    OperationDefinition => ast::OperationDefinition,
    VariableDefinition => ast::VariableDefinition,
    SelectionSet => ast::SelectionSet,
    Field => ast::Field,
    Argument => ast::Argument,
    FragmentSpread => ast::FragmentSpread,
    InlineFragment => ast::InlineFragment,
    FragmentDefinition => ast::FragmentDefinition,
    Value => ast::Value,
    ObjectField => ast::ObjectField,
    Directive => ast::Directive,
    TypeAnnotation => ast::TypeAnnotation,
    NamedType => ast::NamedType,
    OperationTypeDefinition => ast::OperationTypeDefinition,
    TypeDefinition => ast::TypeDefinition,
    FieldDefinition => ast::FieldDefinition,
    InputValueDefinition => ast::InputValueDefinition,
    EnumValueDefinition => ast::EnumValueDefinition,
    DirectiveDefinition => ast::DirectiveDefinition,
);
