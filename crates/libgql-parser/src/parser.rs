//! Recursive descent parser for GraphQL documents.
//!
//! [`GraphQLParser`] pulls tokens from a [`GraphQLLexer`] and builds the
//! [AST](crate::ast). Every grammar production has a `parse_*` method that
//! returns `Result<Node, GraphQLSyntaxError>`; the first malformed token
//! aborts the whole parse.
//!
//! Most callers want one of the free functions: [`parse()`],
//! [`parse_value()`], [`parse_const_value()`] or [`parse_type()`].

use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::Source;
use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ListType;
use crate::ast::Location;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::token::GraphQLToken;
use crate::token::TokenKind;
use std::sync::Arc;

pub type ParseResult<T> = Result<T, GraphQLSyntaxError>;

/// Options controlling a parse.
#[derive(Clone, Debug, Default)]
pub struct ParseOptions {
    /// Skip attaching [`Location`]s to AST nodes.
    pub no_location: bool,

    /// Abort with a syntax error once more than this many tokens have been
    /// read. Guards services against pathologically large documents.
    pub max_tokens: Option<usize>,
}

/// Parses a complete document (executable definitions, type-system
/// definitions or a mix of both).
pub fn parse(text: &str) -> ParseResult<Document> {
    parse_with_options(Source::new(text), ParseOptions::default())
}

pub fn parse_with_options(
    source: Source,
    options: ParseOptions,
) -> ParseResult<Document> {
    let source = source.into_shared();
    GraphQLParser::new(&source, options).parse_document()
}

/// Parses a single value literal, which may reference variables.
pub fn parse_value(text: &str) -> ParseResult<Value> {
    let source = Source::new(text).into_shared();
    let mut parser = GraphQLParser::new(&source, ParseOptions::default());
    parser.expect_token(TokenKind::Sof)?;
    let value = parser.parse_value_literal(false)?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a single constant value literal (no variables).
pub fn parse_const_value(text: &str) -> ParseResult<Value> {
    let source = Source::new(text).into_shared();
    let mut parser = GraphQLParser::new(&source, ParseOptions::default());
    parser.expect_token(TokenKind::Sof)?;
    let value = parser.parse_value_literal(true)?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(value)
}

/// Parses a type reference such as `[String!]!`.
pub fn parse_type(text: &str) -> ParseResult<TypeAnnotation> {
    let source = Source::new(text).into_shared();
    let mut parser = GraphQLParser::new(&source, ParseOptions::default());
    parser.expect_token(TokenKind::Sof)?;
    let type_ann = parser.parse_type_reference()?;
    parser.expect_token(TokenKind::Eof)?;
    Ok(type_ann)
}

pub struct GraphQLParser<'src> {
    lexer: GraphQLLexer<'src>,
    options: ParseOptions,
    token_count: usize,
    depth: usize,
}

impl<'src> GraphQLParser<'src> {
    /// Nesting limit for selection sets, list/object values and list types.
    pub const MAX_DEPTH: usize = 512;

    pub fn new(source: &'src Arc<Source>, options: ParseOptions) -> Self {
        Self {
            lexer: GraphQLLexer::new(source),
            options,
            token_count: 0,
            depth: 0,
        }
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// ```text
    /// Document : Definition+
    /// ```
    pub fn parse_document(&mut self) -> ParseResult<Document> {
        let start = self.lexer.token().start;
        let definitions = self.many(
            TokenKind::Sof,
            Self::parse_definition,
            TokenKind::Eof,
        )?;
        Ok(Document {
            definitions,
            loc: self.loc(start),
        })
    }

    /// Dispatches on the leading keyword (looking past a description when
    /// one is present).
    fn parse_definition(&mut self) -> ParseResult<Definition> {
        if self.peek(TokenKind::BraceL) {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }

        let has_description = self.peek_description();
        let (keyword_kind, keyword, keyword_token) = {
            let token = if has_description {
                self.lexer.lookahead()?
            } else {
                self.lexer.token()
            };
            (token.kind, token.value_str().to_string(), token.clone())
        };

        if keyword_kind == TokenKind::Name {
            match keyword.as_str() {
                "schema" => return Ok(Definition::Schema(self.parse_schema_definition()?)),
                "scalar" | "type" | "interface" | "union" | "enum" | "input" => {
                    return Ok(Definition::Type(self.parse_type_definition(&keyword)?));
                },
                "directive" => {
                    return Ok(Definition::Directive(self.parse_directive_definition()?));
                },
                _ => (),
            }

            if has_description {
                return Err(self.error_at(
                    self.lexer.token().start,
                    "Unexpected description, descriptions are supported only on type definitions.",
                ));
            }

            match keyword.as_str() {
                "query" | "mutation" | "subscription" => {
                    return Ok(Definition::Operation(self.parse_operation_definition()?));
                },
                "fragment" => {
                    return Ok(Definition::Fragment(self.parse_fragment_definition()?));
                },
                "extend" => return self.parse_type_system_extension(),
                _ => (),
            }
        }

        Err(self.unexpected(&keyword_token))
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(&mut self) -> ParseResult<OperationDefinition> {
        let start = self.lexer.token().start;
        if self.peek(TokenKind::BraceL) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: vec![],
                directives: vec![],
                selection_set,
                loc: self.loc(start),
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek(TokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type(&mut self) -> ParseResult<OperationType> {
        let token = self.expect_token(TokenKind::Name)?;
        OperationType::from_keyword(token.value_str())
            .ok_or_else(|| self.unexpected(&token))
    }

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<VariableDefinition>> {
        self.optional_many(
            TokenKind::ParenL,
            Self::parse_variable_definition,
            TokenKind::ParenR,
        )
    }

    /// ```text
    /// VariableDefinition : Variable : Type DefaultValue? Directives[Const]?
    /// ```
    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition> {
        let start = self.lexer.token().start;
        self.expect_token(TokenKind::Dollar)?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let var_type = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(VariableDefinition {
            name,
            var_type,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_selection_set(&mut self) -> ParseResult<SelectionSet> {
        let start = self.lexer.token().start;
        self.enter_nesting()?;
        let selections = self.many(
            TokenKind::BraceL,
            Self::parse_selection,
            TokenKind::BraceR,
        )?;
        self.depth -= 1;
        Ok(SelectionSet {
            selections,
            loc: self.loc(start),
        })
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.peek(TokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// ```text
    /// Field : Alias? Name Arguments? Directives? SelectionSet?
    /// ```
    fn parse_field(&mut self) -> ParseResult<Field> {
        let start = self.lexer.token().start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.expect_optional_token(TokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments(false)?;
        let directives = self.parse_directives(false)?;
        let selection_set = if self.peek(TokenKind::BraceL) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    fn parse_arguments(&mut self, is_const: bool) -> ParseResult<Vec<Argument>> {
        self.optional_many(
            TokenKind::ParenL,
            |parser| parser.parse_argument(is_const),
            TokenKind::ParenR,
        )
    }

    fn parse_argument(&mut self, is_const: bool) -> ParseResult<Argument> {
        let start = self.lexer.token().start;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Argument {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses either a fragment spread or an inline fragment, both of which
    /// begin with `...`.
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        let start = self.lexer.token().start;
        self.expect_token(TokenKind::Spread)?;

        let has_type_condition = self.expect_optional_keyword("on")?;
        if !has_type_condition && self.peek(TokenKind::Name) {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives(false)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            }));
        }

        let type_condition = if has_type_condition {
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    fn parse_fragment_definition(&mut self) -> ParseResult<FragmentDefinition> {
        let start = self.lexer.token().start;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives(false)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })
    }

    /// A fragment name is any Name except `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<String> {
        if self.lexer.token().value_str() == "on" {
            let token = self.lexer.token().clone();
            return Err(self.unexpected(&token));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. When `is_const` is set, variables are
    /// rejected.
    pub fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<Value> {
        let token = self.lexer.token().clone();
        let start = token.start;
        match token.kind {
            TokenKind::BracketL => {
                self.enter_nesting()?;
                let values = self.any(
                    TokenKind::BracketL,
                    |parser| parser.parse_value_literal(is_const),
                    TokenKind::BracketR,
                )?;
                self.depth -= 1;
                Ok(Value::List { values, loc: self.loc(start) })
            },
            TokenKind::BraceL => {
                self.enter_nesting()?;
                let fields = self.any(
                    TokenKind::BraceL,
                    |parser| parser.parse_object_field(is_const),
                    TokenKind::BraceR,
                )?;
                self.depth -= 1;
                Ok(Value::Object { fields, loc: self.loc(start) })
            },
            TokenKind::Int => {
                self.advance_lexer()?;
                Ok(Value::Int {
                    value: token.value_str().to_string(),
                    loc: self.loc(start),
                })
            },
            TokenKind::Float => {
                self.advance_lexer()?;
                Ok(Value::Float {
                    value: token.value_str().to_string(),
                    loc: self.loc(start),
                })
            },
            TokenKind::String | TokenKind::BlockString => {
                self.advance_lexer()?;
                Ok(Value::String {
                    value: token.value_str().to_string(),
                    block: token.kind == TokenKind::BlockString,
                    loc: self.loc(start),
                })
            },
            TokenKind::Name => {
                self.advance_lexer()?;
                let loc = self.loc(start);
                Ok(match token.value_str() {
                    "true" => Value::Boolean { value: true, loc },
                    "false" => Value::Boolean { value: false, loc },
                    "null" => Value::Null { loc },
                    other => Value::Enum { value: other.to_string(), loc },
                })
            },
            TokenKind::Dollar => {
                if is_const {
                    self.expect_token(TokenKind::Dollar)?;
                    let next = self.lexer.token().clone();
                    if next.kind == TokenKind::Name {
                        return Err(self.error_at(next.start, format!(
                            "Unexpected variable \"${}\" in constant value.",
                            next.value_str(),
                        )));
                    }
                    return Err(self.unexpected(&next));
                }
                self.expect_token(TokenKind::Dollar)?;
                let name = self.parse_name()?;
                Ok(Value::Variable { name, loc: self.loc(start) })
            },
            _ => Err(self.unexpected(&token)),
        }
    }

    fn parse_object_field(&mut self, is_const: bool) -> ParseResult<ObjectField> {
        let start = self.lexer.token().start;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(ObjectField {
            name,
            value,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self, is_const: bool) -> ParseResult<Vec<Directive>> {
        let mut directives = vec![];
        while self.peek(TokenKind::At) {
            directives.push(self.parse_directive(is_const)?);
        }
        Ok(directives)
    }

    fn parse_directive(&mut self, is_const: bool) -> ParseResult<Directive> {
        let start = self.lexer.token().start;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments(is_const)?;
        Ok(Directive {
            name,
            arguments,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// ```text
    /// Type : NamedType | ListType | NonNullType
    /// ```
    pub fn parse_type_reference(&mut self) -> ParseResult<TypeAnnotation> {
        let start = self.lexer.token().start;
        let type_ann = if self.expect_optional_token(TokenKind::BracketL)? {
            self.enter_nesting()?;
            let inner = self.parse_type_reference()?;
            self.depth -= 1;
            self.expect_token(TokenKind::BracketR)?;
            TypeAnnotation::List(ListType {
                inner: Box::new(inner),
                loc: self.loc(start),
            })
        } else {
            TypeAnnotation::Named(self.parse_named_type()?)
        };

        if self.expect_optional_token(TokenKind::Bang)? {
            return Ok(TypeAnnotation::NonNull(NonNullType {
                inner: Box::new(type_ann),
                loc: self.loc(start),
            }));
        }
        Ok(type_ann)
    }

    fn parse_named_type(&mut self) -> ParseResult<NamedType> {
        let start = self.lexer.token().start;
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            loc: self.loc(start),
        })
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn peek_description(&self) -> bool {
        self.peek(TokenKind::String) || self.peek(TokenKind::BlockString)
    }

    fn parse_description(&mut self) -> ParseResult<Option<Description>> {
        if !self.peek_description() {
            return Ok(None);
        }
        let token = self.lexer.token().clone();
        self.advance_lexer()?;
        Ok(Some(Description {
            value: token.value_str().to_string(),
            block: token.kind == TokenKind::BlockString,
            loc: self.loc(token.start),
        }))
    }

    /// ```text
    /// SchemaDefinition : Description? schema Directives[Const]? { RootOperationTypeDefinition+ }
    /// ```
    fn parse_schema_definition(&mut self) -> ParseResult<SchemaDefinition> {
        let start = self.lexer.token().start;
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            loc: self.loc(start),
        })
    }

    fn parse_operation_type_definition(&mut self) -> ParseResult<OperationTypeDefinition> {
        let start = self.lexer.token().start;
        let operation = self.parse_operation_type()?;
        self.expect_token(TokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(OperationTypeDefinition {
            operation,
            named_type,
            loc: self.loc(start),
        })
    }

    fn parse_type_definition(&mut self, keyword: &str) -> ParseResult<TypeDefinition> {
        let start = self.lexer.token().start;
        let description = self.parse_description()?;
        self.expect_keyword(keyword)?;
        let name = self.parse_name()?;

        Ok(match keyword {
            "scalar" => {
                let directives = self.parse_directives(true)?;
                TypeDefinition::Scalar(ScalarTypeDefinition {
                    description,
                    name,
                    directives,
                    loc: self.loc(start),
                })
            },
            "type" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                TypeDefinition::Object(ObjectTypeDefinition {
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                    loc: self.loc(start),
                })
            },
            "interface" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                TypeDefinition::Interface(InterfaceTypeDefinition {
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                    loc: self.loc(start),
                })
            },
            "union" => {
                let directives = self.parse_directives(true)?;
                let types = self.parse_union_member_types()?;
                TypeDefinition::Union(UnionTypeDefinition {
                    description,
                    name,
                    directives,
                    types,
                    loc: self.loc(start),
                })
            },
            "enum" => {
                let directives = self.parse_directives(true)?;
                let values = self.parse_enum_values_definition()?;
                TypeDefinition::Enum(EnumTypeDefinition {
                    description,
                    name,
                    directives,
                    values,
                    loc: self.loc(start),
                })
            },
            _ => {
                let directives = self.parse_directives(true)?;
                let fields = self.parse_input_fields_definition()?;
                TypeDefinition::InputObject(InputObjectTypeDefinition {
                    description,
                    name,
                    directives,
                    fields,
                    loc: self.loc(start),
                })
            },
        })
    }

    /// ```text
    /// ImplementsInterfaces : implements &? NamedType (& NamedType)*
    /// ```
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<NamedType>> {
        if self.expect_optional_keyword("implements")? {
            self.delimited_many(TokenKind::Amp, Self::parse_named_type)
        } else {
            Ok(vec![])
        }
    }

    fn parse_fields_definition(&mut self) -> ParseResult<Vec<FieldDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_field_definition,
            TokenKind::BraceR,
        )
    }

    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition> {
        let start = self.lexer.token().start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_token(TokenKind::Colon)?;
        let field_type = self.parse_type_reference()?;
        let directives = self.parse_directives(true)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_argument_defs(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::ParenL,
            Self::parse_input_value_def,
            TokenKind::ParenR,
        )
    }

    fn parse_input_value_def(&mut self) -> ParseResult<InputValueDefinition> {
        let start = self.lexer.token().start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect_token(TokenKind::Colon)?;
        let value_type = self.parse_type_reference()?;
        let default_value = if self.expect_optional_token(TokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives(true)?;
        Ok(InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            loc: self.loc(start),
        })
    }

    /// ```text
    /// UnionMemberTypes : = |? NamedType (| NamedType)*
    /// ```
    fn parse_union_member_types(&mut self) -> ParseResult<Vec<NamedType>> {
        if self.expect_optional_token(TokenKind::Equals)? {
            self.delimited_many(TokenKind::Pipe, Self::parse_named_type)
        } else {
            Ok(vec![])
        }
    }

    fn parse_enum_values_definition(&mut self) -> ParseResult<Vec<EnumValueDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_enum_value_definition,
            TokenKind::BraceR,
        )
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition> {
        let start = self.lexer.token().start;
        let description = self.parse_description()?;
        let token = self.lexer.token().clone();
        if matches!(token.value_str(), "true" | "false" | "null") {
            return Err(self.error_at(token.start, format!(
                "{} is reserved and cannot be used for an enum value.",
                token.description(),
            )));
        }
        let name = self.parse_name()?;
        let directives = self.parse_directives(true)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            loc: self.loc(start),
        })
    }

    fn parse_input_fields_definition(&mut self) -> ParseResult<Vec<InputValueDefinition>> {
        self.optional_many(
            TokenKind::BraceL,
            Self::parse_input_value_def,
            TokenKind::BraceR,
        )
    }

    /// ```text
    /// DirectiveDefinition :
    ///   Description? directive @ Name ArgumentsDefinition? repeatable? on DirectiveLocations
    /// ```
    fn parse_directive_definition(&mut self) -> ParseResult<DirectiveDefinition> {
        let start = self.lexer.token().start;
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect_token(TokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        let repeatable = self.expect_optional_keyword("repeatable")?;
        self.expect_keyword("on")?;
        let locations = self.delimited_many(TokenKind::Pipe, Self::parse_directive_location)?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            loc: self.loc(start),
        })
    }

    fn parse_directive_location(&mut self) -> ParseResult<DirectiveLocation> {
        let token = self.lexer.token().clone();
        let name = self.parse_name()?;
        name.parse::<DirectiveLocation>()
            .map_err(|_| self.unexpected(&token))
    }

    // =========================================================================
    // Type-system extensions
    // =========================================================================

    fn parse_type_system_extension(&mut self) -> ParseResult<Definition> {
        let keyword_token = self.lexer.lookahead()?.clone();
        if keyword_token.kind == TokenKind::Name {
            match keyword_token.value_str() {
                "schema" => return self.parse_schema_extension(),
                keyword @ ("scalar" | "type" | "interface" | "union" | "enum" | "input") => {
                    let keyword = keyword.to_string();
                    return self.parse_type_extension(&keyword);
                },
                _ => (),
            }
        }
        Err(self.unexpected(&keyword_token))
    }

    fn parse_schema_extension(&mut self) -> ParseResult<Definition> {
        let start = self.lexer.token().start;
        self.expect_keyword("extend")?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(true)?;
        let operation_types = self.optional_many(
            TokenKind::BraceL,
            Self::parse_operation_type_definition,
            TokenKind::BraceR,
        )?;
        if directives.is_empty() && operation_types.is_empty() {
            let token = self.lexer.token().clone();
            return Err(self.unexpected(&token));
        }
        Ok(Definition::SchemaExtension(SchemaDefinition {
            description: None,
            directives,
            operation_types,
            loc: self.loc(start),
        }))
    }

    /// Parses `extend <keyword> Name ...`. An extension must add at least
    /// one directive, field, interface, member or value.
    fn parse_type_extension(&mut self, keyword: &str) -> ParseResult<Definition> {
        let start = self.lexer.token().start;
        self.expect_keyword("extend")?;
        self.expect_keyword(keyword)?;
        let name = self.parse_name()?;

        let (definition, is_empty) = match keyword {
            "scalar" => {
                let directives = self.parse_directives(true)?;
                let is_empty = directives.is_empty();
                (TypeDefinition::Scalar(ScalarTypeDefinition {
                    description: None,
                    name,
                    directives,
                    loc: None,
                }), is_empty)
            },
            "type" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                let is_empty = interfaces.is_empty() && directives.is_empty() && fields.is_empty();
                (TypeDefinition::Object(ObjectTypeDefinition {
                    description: None,
                    name,
                    interfaces,
                    directives,
                    fields,
                    loc: None,
                }), is_empty)
            },
            "interface" => {
                let interfaces = self.parse_implements_interfaces()?;
                let directives = self.parse_directives(true)?;
                let fields = self.parse_fields_definition()?;
                let is_empty = interfaces.is_empty() && directives.is_empty() && fields.is_empty();
                (TypeDefinition::Interface(InterfaceTypeDefinition {
                    description: None,
                    name,
                    interfaces,
                    directives,
                    fields,
                    loc: None,
                }), is_empty)
            },
            "union" => {
                let directives = self.parse_directives(true)?;
                let types = self.parse_union_member_types()?;
                let is_empty = directives.is_empty() && types.is_empty();
                (TypeDefinition::Union(UnionTypeDefinition {
                    description: None,
                    name,
                    directives,
                    types,
                    loc: None,
                }), is_empty)
            },
            "enum" => {
                let directives = self.parse_directives(true)?;
                let values = self.parse_enum_values_definition()?;
                let is_empty = directives.is_empty() && values.is_empty();
                (TypeDefinition::Enum(EnumTypeDefinition {
                    description: None,
                    name,
                    directives,
                    values,
                    loc: None,
                }), is_empty)
            },
            _ => {
                let directives = self.parse_directives(true)?;
                let fields = self.parse_input_fields_definition()?;
                let is_empty = directives.is_empty() && fields.is_empty();
                (TypeDefinition::InputObject(InputObjectTypeDefinition {
                    description: None,
                    name,
                    directives,
                    fields,
                    loc: None,
                }), is_empty)
            },
        };

        if is_empty {
            let token = self.lexer.token().clone();
            return Err(self.unexpected(&token));
        }

        Ok(Definition::TypeExtension(with_loc(definition, self.loc(start))))
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn parse_name(&mut self) -> ParseResult<String> {
        let token = self.expect_token(TokenKind::Name)?;
        Ok(token.value_str().to_string())
    }

    fn peek(&self, kind: TokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    fn advance_lexer(&mut self) -> ParseResult<()> {
        let kind = self.lexer.advance()?.kind;
        if let Some(max_tokens) = self.options.max_tokens
            && kind != TokenKind::Eof {
            self.token_count += 1;
            if self.token_count > max_tokens {
                return Err(self.error_at(self.lexer.token().start, format!(
                    "Document contains more than {max_tokens} tokens. Parsing aborted.",
                )));
            }
        }
        Ok(())
    }

    /// Consumes the current token if it has the given kind, otherwise
    /// fails with `Expected <kind>, found <token>.`
    fn expect_token(&mut self, kind: TokenKind) -> ParseResult<GraphQLToken<'src>> {
        let token = self.lexer.token().clone();
        if token.kind == kind {
            self.advance_lexer()?;
            return Ok(token);
        }
        Err(self.error_at(token.start, format!(
            "Expected {}, found {}.",
            kind.description(),
            token.description(),
        )))
    }

    fn expect_optional_token(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.peek(kind) {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if !self.expect_optional_keyword(keyword)? {
            let token = self.lexer.token();
            return Err(self.error_at(token.start, format!(
                "Expected \"{keyword}\", found {}.",
                token.description(),
            )));
        }
        Ok(())
    }

    fn expect_optional_keyword(&mut self, keyword: &str) -> ParseResult<bool> {
        let token = self.lexer.token();
        if token.kind == TokenKind::Name && token.value_str() == keyword {
            self.advance_lexer()?;
            return Ok(true);
        }
        Ok(false)
    }

    /// `open item* close`: zero or more items between delimiters.
    fn any<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect_token(open)?;
        let mut nodes = vec![];
        while !self.expect_optional_token(close)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    /// `(open item+ close)?`: nothing at all, or one or more items between
    /// delimiters.
    fn optional_many<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        if !self.expect_optional_token(open)? {
            return Ok(vec![]);
        }
        let mut nodes = vec![];
        loop {
            nodes.push(parse_fn(self)?);
            if self.expect_optional_token(close)? {
                return Ok(nodes);
            }
        }
    }

    /// `open item+ close`: one or more items between delimiters.
    fn many<T>(
        &mut self,
        open: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> ParseResult<T>,
        close: TokenKind,
    ) -> ParseResult<Vec<T>> {
        self.expect_token(open)?;
        let mut nodes = vec![];
        loop {
            nodes.push(parse_fn(self)?);
            if self.expect_optional_token(close)? {
                return Ok(nodes);
            }
        }
    }

    /// `delimiter? item (delimiter item)*`
    fn delimited_many<T>(
        &mut self,
        delimiter: TokenKind,
        mut parse_fn: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.expect_optional_token(delimiter)?;
        let mut nodes = vec![parse_fn(self)?];
        while self.expect_optional_token(delimiter)? {
            nodes.push(parse_fn(self)?);
        }
        Ok(nodes)
    }

    fn enter_nesting(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > Self::MAX_DEPTH {
            return Err(self.error_at(self.lexer.token().start, format!(
                "Document exceeds the maximum nesting depth of {}.",
                Self::MAX_DEPTH,
            )));
        }
        Ok(())
    }

    fn loc(&self, start: usize) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        Some(Location::new(
            start,
            self.lexer.last_token_end(),
            self.lexer.source().clone(),
        ))
    }

    fn unexpected(&self, token: &GraphQLToken<'_>) -> GraphQLSyntaxError {
        self.error_at(token.start, format!("Unexpected {}.", token.description()))
    }

    fn error_at(&self, position: usize, description: impl Into<String>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(self.lexer.source().clone(), position, description)
    }
}

fn with_loc(definition: TypeDefinition, loc: Option<Location>) -> TypeDefinition {
    match definition {
        TypeDefinition::Scalar(def) => TypeDefinition::Scalar(ScalarTypeDefinition { loc, ..def }),
        TypeDefinition::Object(def) => TypeDefinition::Object(ObjectTypeDefinition { loc, ..def }),
        TypeDefinition::Interface(def) => TypeDefinition::Interface(InterfaceTypeDefinition { loc, ..def }),
        TypeDefinition::Union(def) => TypeDefinition::Union(UnionTypeDefinition { loc, ..def }),
        TypeDefinition::Enum(def) => TypeDefinition::Enum(EnumTypeDefinition { loc, ..def }),
        TypeDefinition::InputObject(def) => TypeDefinition::InputObject(InputObjectTypeDefinition { loc, ..def }),
    }
}
