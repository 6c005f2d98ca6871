use libgql::GraphQLError;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// Renders each error with its source excerpts, separated by blank lines.
pub(crate) fn format_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(GraphQLError::print)
        .collect::<Vec<_>>()
        .join("\n\n")
}
