use crate::error::GraphQLError;
use libgql_parser::GraphQLSyntaxError;
use std::path::PathBuf;

/// Fatal problems encountered while constructing a
/// [`Schema`](crate::schema::Schema), either programmatically or from SDL.
///
/// These are distinct from the errors returned by
/// [`validate_schema`](crate::schema::validate_schema): a `SchemaBuildError`
/// means no schema could be produced at all.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaBuildError {
    #[error("Failed to read schema file `{}`: {message}", .file_path.display())]
    FileRead {
        file_path: PathBuf,
        message: String,
    },

    #[error("{}", .0.print())]
    Syntax(#[from] GraphQLSyntaxError),

    #[error("Schema must contain uniquely named types but contains multiple types named \"{type_name}\".")]
    DuplicateTypeName {
        type_name: String,
    },

    #[error("Unknown type \"{type_name}\" referenced by {referenced_by}.")]
    UnknownType {
        type_name: String,
        referenced_by: String,
    },

    #[error("Must provide only one schema definition.")]
    DuplicateSchemaDefinition,

    #[error("Cannot extend type \"{type_name}\" because it is not defined.")]
    ExtensionOfUndefinedType {
        type_name: String,
    },

    #[error("Cannot extend non-{expected_kind} type \"{type_name}\".")]
    ExtensionKindMismatch {
        type_name: String,
        expected_kind: &'static str,
    },

    /// The SDL document failed validation; every problem found is listed.
    #[error("{}", .errors.iter().map(GraphQLError::message).collect::<Vec<_>>().join("\n\n"))]
    InvalidSdl {
        errors: Vec<GraphQLError>,
    },
}
