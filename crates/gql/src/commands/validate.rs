use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_schema;
use crate::file_utils;
use crate::output_utils;
use libgql::introspection::is_introspection_type;
use libgql::types::is_specified_directive;
use libgql::types::is_specified_scalar_type;
use libgql::validate;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files or directories containing SDL \
             files which together define the schema.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to executable documents (or directories of them) to \
             validate against the schema.",
        name="DOCUMENTS",
    )]
    document_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let graphql_file_exts = file_utils::normalize_exts(&self.graphql_file_exts);

        let (schema, schema_files) = match load_schema(&self.schema, &graphql_file_exts) {
            Ok(loaded) => loaded,
            Err(err) => return CommandResult::from_anyhow(err),
        };

        let document_files = if self.document_paths.is_empty() {
            file_utils::FoundFiles::default()
        } else {
            match file_utils::find_graphql_files(&self.document_paths, &graphql_file_exts) {
                Ok(found) => found,
                Err(err) => return CommandResult::from_anyhow(err),
            }
        };

        let mut failures = vec![];
        let mut num_operations = 0;
        for path in &document_files.file_paths {
            let document = match file_utils::parse_document_file(path) {
                Ok(document) => document,
                Err(err) => {
                    failures.push(format!("{err:#}"));
                    continue;
                },
            };
            num_operations += document.operations().count();
            let errors = validate(&schema, &document);
            log::debug!("Validated {path:#?}: {} errors.", errors.len());
            if !errors.is_empty() {
                failures.push(format!(
                    "{path:#?}:\n\n{}",
                    output_utils::format_errors(&errors),
                ));
            }
        }

        if !failures.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} GraphQL validation errors:\n\n{}",
                output_utils::RED_X,
                failures.join("\n\n"),
            ));
        }

        let num_types = schema
            .type_map()
            .keys()
            .filter(|name| !is_specified_scalar_type(name) && !is_introspection_type(name))
            .count();
        let num_directives = schema
            .directives()
            .iter()
            .filter(|directive| !is_specified_directive(directive.name()))
            .count();

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Analyzed {} schema files.\n",
                "  * Analyzed {} document files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            schema_files.file_paths.len(),
            document_files.file_paths.len(),
            schema_files.num_skipped_files + document_files.num_skipped_files,
            num_types,
            num_directives,
            num_operations,
        ))
    }
}
