//! Depth-first AST traversal with enter/leave callbacks and
//! edit-by-rebuild.
//!
//! A [`Visitor`] sees every node twice, once on the way down ([`enter`]) and
//! once on the way back up ([`leave`]), and steers the walk through the
//! [`VisitAction`] it returns. Edits never mutate the visited tree: a
//! `Replace` or `Remove` causes the affected parents to be rebuilt, and the
//! edited tree is returned from [`visit()`].
//!
//! ```rust
//! use libgql_parser::parse;
//! use libgql_parser::visitor::AstNodeRef;
//! use libgql_parser::visitor::VisitAction;
//! use libgql_parser::visitor::Visitor;
//! use libgql_parser::visitor::visit;
//!
//! struct FieldCounter(usize);
//! impl Visitor for FieldCounter {
//!     fn enter(&mut self, node: AstNodeRef<'_>, _: &mut ()) -> VisitAction {
//!         if let AstNodeRef::Field(_) = node {
//!             self.0 += 1;
//!         }
//!         VisitAction::Continue
//!     }
//! }
//!
//! let doc = parse("{ a b { c } }").unwrap();
//! let mut counter = FieldCounter(0);
//! visit(&doc, &mut counter);
//! assert_eq!(counter.0, 3);
//! ```
//!
//! [`enter`]: Visitor::enter
//! [`leave`]: Visitor::leave

mod ast_node;
mod parallel_visitor;
mod walker;

pub use ast_node::AstNode;
pub use ast_node::AstNodeRef;
pub use parallel_visitor::ParallelVisitor;
pub use walker::VisitableNode;
pub use walker::Walker;

use crate::ast::Document;
use std::borrow::Cow;
use walker::Walked;

/// What the walker should do after a callback.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum VisitAction {
    /// Keep going.
    #[default]
    Continue,

    /// On `enter`: do not descend into this node, and do not call `leave`
    /// for it. On `leave`: same as `Continue`.
    Skip,

    /// Stop the whole traversal. Edits made so far are kept.
    Break,

    /// Substitute this node. On `enter` the walk continues into the
    /// replacement.
    Replace(AstNode),

    /// Delete this node from its parent list (or clear an optional slot).
    Remove,
}

/// Callbacks invoked while walking an AST.
///
/// `C` is a context threaded through every call; validation uses it to
/// share a `ValidationContext` between rules. Both callbacks default to
/// [`VisitAction::Continue`], so implementors override only what they need
/// and match on the node kinds they care about.
pub trait Visitor<C = ()> {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        let _ = (node, ctx);
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        let _ = (node, ctx);
        VisitAction::Continue
    }
}

impl<C, V: Visitor<C> + ?Sized> Visitor<C> for &mut V {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        (**self).enter(node, ctx)
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        (**self).leave(node, ctx)
    }
}

impl<C, V: Visitor<C> + ?Sized> Visitor<C> for Box<V> {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        (**self).enter(node, ctx)
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut C) -> VisitAction {
        (**self).leave(node, ctx)
    }
}

/// Walks `document` with a context-free visitor and returns the (possibly
/// edited) document.
///
/// Removing the document itself yields an empty document.
pub fn visit<'d, V: Visitor + ?Sized>(
    document: &'d Document,
    visitor: &mut V,
) -> Cow<'d, Document> {
    visit_with_context(document, visitor, &mut ())
}

pub fn visit_with_context<'d, C, V: Visitor<C> + ?Sized>(
    document: &'d Document,
    visitor: &mut V,
    ctx: &mut C,
) -> Cow<'d, Document> {
    visit_node(document, visitor, ctx).unwrap_or_else(|| {
        Cow::Owned(Document {
            definitions: vec![],
            loc: document.loc.clone(),
        })
    })
}

/// Walks any node, returning `None` if the visitor removed the root.
pub fn visit_node<'n, T, C, V>(
    node: &'n T,
    visitor: &mut V,
    ctx: &mut C,
) -> Option<Cow<'n, T>>
where
    T: VisitableNode,
    V: Visitor<C> + ?Sized,
{
    let mut walker = Walker::new(visitor, ctx);
    match walker.walk(node) {
        Walked::Unchanged => Some(Cow::Borrowed(node)),
        Walked::Replaced(new_node) => Some(Cow::Owned(new_node)),
        Walked::Removed => None,
    }
}
