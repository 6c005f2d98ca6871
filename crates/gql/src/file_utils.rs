use anyhow::Context;
use libgql::parser::ParseOptions;
use libgql::parser::Source;
use libgql::parser::ast;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The files found under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped_files: usize,
}

/// Normalizes extensions to their dotted form (`graphql` -> `.graphql`).
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Finds every file with one of `exts` at or under each of `paths`.
///
/// A lone file argument is kept even when its extension doesn't match, on
/// the presumption that the user named it explicitly.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &HashSet<String>,
) -> anyhow::Result<FoundFiles> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to read filesystem entries at/under {path:#?}")
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            let ext = entry_path
                .extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()));
            if ext.is_some_and(|ext| exts.contains(&ext)) {
                log::trace!("Found file at {entry_path:#?}.");
                found.file_paths.push(canonicalize(entry_path)?);
            } else {
                log::trace!("Skipping non-graphql file: {entry_path:#?}.");
                found.num_skipped_files += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && let [only_path] = paths
        && only_path.is_file() {
        let only_path = canonicalize(only_path)?;
        log::warn!(
            "Proceeding with {only_path:#?} even though it doesn't match any \
            of the expected file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped_files = 0;
        found.file_paths.push(only_path);
    }

    log::debug!("Found {} GraphQL files.", found.file_paths.len());
    Ok(found)
}

/// Reads and parses one executable or SDL document, naming the source
/// after its path so syntax errors point at the file.
pub(crate) fn parse_document_file(path: &Path) -> anyhow::Result<ast::Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:#?}"))?;
    let source = Source::with_name(content, path.display().to_string());
    libgql::parser::parse_with_options(source, ParseOptions::default())
        .map_err(|err| anyhow::anyhow!(err.print()))
}

pub(crate) fn read_json_file(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {path:#?}"))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{path:#?} does not contain valid JSON"))
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to resolve {path:#?}"))
}
