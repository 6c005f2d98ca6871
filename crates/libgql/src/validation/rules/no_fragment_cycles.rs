use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;
use std::collections::HashSet;

/// Fragment spreads must not form cycles.
///
/// Each fragment is explored once; a cycle is reported from the first
/// fragment on it that is reached.
#[derive(Debug, Default)]
pub struct NoFragmentCyclesRule {
    visited_fragments: HashSet<String>,
}

impl<'a> Visitor<ValidationContext<'a>> for NoFragmentCyclesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::OperationDefinition(_) => VisitAction::Skip,
            AstNodeRef::FragmentDefinition(fragment) => {
                if let Some(fragment) = ctx.get_fragment(&fragment.name) {
                    let mut search = CycleSearch {
                        ctx,
                        visited_fragments: &mut self.visited_fragments,
                        spread_path: vec![],
                        spread_path_index_by_name: HashMap::new(),
                        errors: vec![],
                    };
                    search.detect_cycles(fragment);
                    let errors = search.errors;
                    for error in errors {
                        ctx.report_error(error);
                    }
                }
                VisitAction::Skip
            },
            _ => VisitAction::Continue,
        }
    }
}

struct CycleSearch<'c, 'a> {
    ctx: &'c ValidationContext<'a>,
    visited_fragments: &'c mut HashSet<String>,
    spread_path: Vec<&'a ast::FragmentSpread>,
    spread_path_index_by_name: HashMap<&'a str, usize>,
    errors: Vec<GraphQLError>,
}

impl<'a> CycleSearch<'_, 'a> {
    fn detect_cycles(&mut self, fragment: &'a ast::FragmentDefinition) {
        if !self.visited_fragments.insert(fragment.name.clone()) {
            return;
        }
        let spreads = self.ctx.get_fragment_spreads(&fragment.selection_set);
        if spreads.is_empty() {
            return;
        }

        self.spread_path_index_by_name
            .insert(&fragment.name, self.spread_path.len());
        for spread in spreads {
            let cycle_index = self.spread_path_index_by_name.get(spread.name.as_str()).copied();
            self.spread_path.push(spread);
            match cycle_index {
                None => {
                    if let Some(spread_fragment) = self.ctx.get_fragment(&spread.name) {
                        self.detect_cycles(spread_fragment);
                    }
                },
                Some(cycle_index) => {
                    let cycle_path = &self.spread_path[cycle_index..];
                    let via = cycle_path[..cycle_path.len() - 1]
                        .iter()
                        .map(|spread| format!("\"{}\"", spread.name))
                        .collect::<Vec<_>>()
                        .join(", ");
                    let message = if via.is_empty() {
                        format!("Cannot spread fragment \"{}\" within itself.", spread.name)
                    } else {
                        format!(
                            "Cannot spread fragment \"{}\" within itself via {via}.",
                            spread.name,
                        )
                    };
                    self.errors.push(
                        GraphQLError::new(message)
                            .with_nodes(cycle_path.iter().map(|spread| spread.loc.as_ref())),
                    );
                },
            }
            self.spread_path.pop();
        }
        self.spread_path_index_by_name.remove(fragment.name.as_str());
    }
}
