use crate::visitor::AstNodeRef;
use crate::visitor::VisitAction;
use crate::visitor::Visitor;

#[derive(Clone, Copy, Debug, PartialEq)]
enum VisitorState {
    Active,
    /// Skipped the node entered at this depth; resumes once it is left.
    SkippingUntil(usize),
    Broken,
}

/// Runs several visitors in a single traversal.
///
/// Each visitor keeps its own skip/break state: one visitor returning
/// [`VisitAction::Skip`] or [`VisitAction::Break`] has no effect on the
/// others. The first visitor to return `Replace` or `Remove` for a node
/// decides that node's fate, and the remaining visitors are not called for
/// it.
pub struct ParallelVisitor<'v, C> {
    visitors: Vec<Box<dyn Visitor<C> + 'v>>,
    states: Vec<VisitorState>,
    depth: usize,
}

impl<'v, C> ParallelVisitor<'v, C> {
    pub fn new(visitors: Vec<Box<dyn Visitor<C> + 'v>>) -> Self {
        let states = vec![VisitorState::Active; visitors.len()];
        Self {
            visitors,
            states,
            depth: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }

    fn release_skips_at(&mut self, depth: usize) {
        for state in self.states.iter_mut() {
            if *state == VisitorState::SkippingUntil(depth) {
                *state = VisitorState::Active;
            }
        }
    }
}

impl<C> Visitor<C> for ParallelVisitor<'_, C> {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        let depth = self.depth + 1;
        for idx in 0..self.visitors.len() {
            if self.states[idx] != VisitorState::Active {
                continue;
            }
            match self.visitors[idx].enter(node, ctx) {
                VisitAction::Continue => (),
                VisitAction::Skip => self.states[idx] = VisitorState::SkippingUntil(depth),
                VisitAction::Break => self.states[idx] = VisitorState::Broken,
                VisitAction::Remove => {
                    // No `leave` follows a removal.
                    self.release_skips_at(depth);
                    return VisitAction::Remove;
                },
                replace @ VisitAction::Replace(_) => {
                    self.depth = depth;
                    return replace;
                },
            }
        }

        if self.states.iter().all(|state| *state == VisitorState::Broken) {
            return VisitAction::Break;
        }
        self.depth = depth;
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        let depth = self.depth;
        self.depth = depth.saturating_sub(1);
        for idx in 0..self.visitors.len() {
            match self.states[idx] {
                VisitorState::Active => match self.visitors[idx].leave(node, ctx) {
                    VisitAction::Continue | VisitAction::Skip => (),
                    VisitAction::Break => self.states[idx] = VisitorState::Broken,
                    edit @ (VisitAction::Replace(_) | VisitAction::Remove) => {
                        self.release_skips_at(depth);
                        return edit;
                    },
                },
                VisitorState::SkippingUntil(skip_depth) if skip_depth == depth => {
                    self.states[idx] = VisitorState::Active;
                },
                _ => (),
            }
        }
        VisitAction::Continue
    }
}
