use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::load_schema;
use crate::file_utils;
use anyhow::Context;
use libgql::ExecutionResult;
use libgql::FieldValue;
use libgql::GraphQLArgs;
use libgql::Variables;
use libgql::graphql;
use serde_json::Value as JsonValue;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecuteCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
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
        help="Path to the document holding the operation to execute.",
        long,
        short='q',
    )]
    query: PathBuf,

    #[arg(
        help="Variable values, as a JSON object.",
        long,
    )]
    variables: Option<String>,

    #[arg(
        help="Path to a JSON file whose contents become the root value. \
             Fields resolve by reading same-named properties.",
        long,
    )]
    root_value: Option<PathBuf>,

    #[arg(
        help="Which operation to run when the document holds several.",
        long,
    )]
    operation_name: Option<String>,
}

impl ExecuteCmd {
    async fn execute(&self) -> anyhow::Result<ExecutionResult> {
        let graphql_file_exts = file_utils::normalize_exts(&self.graphql_file_exts);
        let (schema, _) = load_schema(&self.schema, &graphql_file_exts)?;

        let source = std::fs::read_to_string(&self.query)
            .with_context(|| format!("Failed to read {:#?}", self.query))?;
        let variable_values = self.variable_values()?;
        let root_value = match &self.root_value {
            Some(path) => FieldValue::from(file_utils::read_json_file(path)?),
            None => FieldValue::from(JsonValue::Object(serde_json::Map::new())),
        };

        let mut args = GraphQLArgs::new(&schema, &source)
            .root_value(root_value)
            .variable_values(variable_values);
        if let Some(operation_name) = &self.operation_name {
            args = args.operation_name(operation_name.clone());
        }
        Ok(graphql(args).await)
    }

    fn variable_values(&self) -> anyhow::Result<Variables> {
        let Some(variables) = &self.variables else {
            return Ok(Variables::new());
        };
        match serde_json::from_str(variables).context("--variables is not valid JSON")? {
            JsonValue::Object(variables) => Ok(variables),
            other => anyhow::bail!("--variables must be a JSON object, got: {other}"),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecuteCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let result = match self.execute().await {
            Ok(result) => result,
            Err(err) => return CommandResult::from_anyhow(err),
        };
        log::debug!("Execution finished with {} errors.", result.errors.len());

        let response = match serde_json::to_string_pretty(&result) {
            Ok(response) => response,
            Err(err) => return CommandResult::from_anyhow(err.into()),
        };
        if result.errors.is_empty() {
            CommandResult::stdout(format_args!("{response}"))
        } else {
            CommandResult::failed_stdout(format_args!("{response}"))
        }
    }
}
