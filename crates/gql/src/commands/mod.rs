mod execute;
mod print;
mod validate;

use crate::Cli;
use crate::CommandResult;
use crate::file_utils;
use crate::file_utils::FoundFiles;
use crate::output_utils;
use anyhow::Context;
use execute::ExecuteCmd;
use libgql::Schema;
use libgql::SchemaBuilder;
use print::PrintCmd;
use std::collections::HashSet;
use std::path::PathBuf;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gql")]
pub(crate) enum CommandEnum {
    /// Validate a schema and, optionally, executable documents against it.
    Validate(Box<ValidateCmd>),

    /// Parse a document and print it in canonical form.
    Print(Box<PrintCmd>),

    /// Execute an operation against a JSON root value.
    Execute(Box<ExecuteCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
            Self::Execute(cmd) => cmd.run(cli).await,
        }
    }
}

/// Builds the schema defined by the SDL files at or under `paths` and
/// checks it, failing with every schema validation error.
fn load_schema(
    paths: &[PathBuf],
    exts: &HashSet<String>,
) -> anyhow::Result<(Schema, FoundFiles)> {
    let found = file_utils::find_graphql_files(paths, exts)?;
    anyhow::ensure!(
        !found.file_paths.is_empty(),
        "No schema files found at {paths:#?}",
    );

    let schema = SchemaBuilder::new()
        .load_files(found.file_paths.clone())
        .and_then(SchemaBuilder::build)
        .context("Errors building schema")?;

    let errors = schema.validation_errors();
    if !errors.is_empty() {
        anyhow::bail!(
            "Schema has {} validation errors:\n\n{}",
            errors.len(),
            output_utils::format_errors(errors),
        );
    }
    log::debug!(
        "Built schema with {} types from {} files.",
        schema.type_map().len(),
        found.file_paths.len(),
    );
    Ok((schema, found))
}
