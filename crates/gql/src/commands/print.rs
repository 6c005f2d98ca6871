use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::file_utils;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Path to the GraphQL document to print.",
        name="FILE",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match file_utils::parse_document_file(&self.file_path) {
            Ok(document) => CommandResult::stdout(format_args!(
                "{}",
                libgql::parser::print(&document),
            )),
            Err(err) => CommandResult::from_anyhow(err),
        }
    }
}
