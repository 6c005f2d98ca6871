use crate::error::SchemaBuildError;
use crate::schema::Schema;
use crate::schema_builder::BuildSchemaOptions;
use crate::schema_builder::schema_extender::SchemaExtender;
use crate::schema_builder::sdl_validator::SdlValidator;
use libgql_parser::ParseOptions;
use libgql_parser::Source;
use libgql_parser::ast;
use libgql_parser::parse_with_options;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Builds a schema from SDL text.
///
/// ```rust
/// let schema = libgql::build_schema("type Query { hello: String }").unwrap();
/// assert!(schema.get_type("Query").is_some());
/// ```
pub fn build_schema(sdl: &str) -> Result<Schema> {
    build_schema_with_options(sdl, BuildSchemaOptions::default())
}

pub fn build_schema_with_options(sdl: &str, options: BuildSchemaOptions) -> Result<Schema> {
    let document = libgql_parser::parse(sdl)?;
    build_ast_schema(&document, options)
}

/// Builds a schema from an already-parsed SDL document.
///
/// Unless `assume_valid` or `assume_valid_sdl` is set, the document is
/// checked first and every problem found is reported together in
/// [`SchemaBuildError::InvalidSdl`].
pub fn build_ast_schema(document: &ast::Document, options: BuildSchemaOptions) -> Result<Schema> {
    assert_valid_sdl(document, None, &options)?;
    SchemaExtender::new(None, document, &options)?.extend()
}

/// Produces a new schema holding everything in `schema` plus the
/// definitions and extensions in `document`. `schema` is left untouched.
pub fn extend_schema(
    schema: &Schema,
    document: &ast::Document,
    options: BuildSchemaOptions,
) -> Result<Schema> {
    assert_valid_sdl(document, Some(schema), &options)?;
    SchemaExtender::new(Some(schema), document, &options)?.extend()
}

fn assert_valid_sdl(
    document: &ast::Document,
    base: Option<&Schema>,
    options: &BuildSchemaOptions,
) -> Result<()> {
    if options.assume_valid || options.assume_valid_sdl {
        return Ok(());
    }
    let errors = SdlValidator::new(document, base).validate();
    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(error_count = errors.len(), "SDL document failed validation");
        Err(SchemaBuildError::InvalidSdl { errors })
    }
}

/// Utility for building a [`Schema`] out of several SDL sources, such as a
/// schema split across files.
///
/// Each source is parsed as it is loaded, so syntax errors name the file
/// they occurred in. Definitions from all sources are then built together.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    definitions: Vec<ast::Definition>,
    options: BuildSchemaOptions,
    str_load_counter: u16,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: BuildSchemaOptions) -> Self {
        self.options = options;
        self
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(mut self, file_paths: Vec<impl AsRef<Path>>) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = std::fs::read_to_string(file_path).map_err(|err| {
                SchemaBuildError::FileRead {
                    file_path: file_path.to_path_buf(),
                    message: err.to_string(),
                }
            })?;
            self = self.load_str(Some(file_path), &content)?;
        }
        Ok(self)
    }

    /// Parses `content` and queues its definitions. Without a path the
    /// source is named `str://N`, N counting up from 0.
    pub fn load_str(mut self, file_path: Option<&Path>, content: &str) -> Result<Self> {
        let source_name = match file_path {
            Some(file_path) => file_path.display().to_string(),
            None => {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                format!("str://{ctr}")
            },
        };
        tracing::trace!(source = %source_name, "loading SDL source");

        let document = parse_with_options(
            Source::with_name(content, source_name),
            ParseOptions::default(),
        )?;
        self.definitions.extend(document.definitions);
        Ok(self)
    }

    pub fn build(self) -> Result<Schema> {
        let document = ast::Document {
            definitions: self.definitions,
            loc: None,
        };
        build_ast_schema(&document, self.options)
    }

    /// Applies the loaded definitions as extensions of `schema`.
    pub fn extend(self, schema: &Schema) -> Result<Schema> {
        let document = ast::Document {
            definitions: self.definitions,
            loc: None,
        };
        extend_schema(schema, &document, self.options)
    }
}
