use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::validation::ValidationContext;
use indexmap::IndexMap;
use indexmap::IndexSet;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;
use std::rc::Rc;

/// Fields selected under the same response key, wherever they come from in
/// the document, must be mergeable into a single response entry: the same
/// field with the same arguments (unless their parents are distinct object
/// types), compatible return types, and mergeable subselections.
#[derive(Debug, Default)]
pub struct OverlappingFieldsCanBeMergedRule {
    compared_fragment_pairs: PairSet,
}

impl<'a> Visitor<ValidationContext<'a>> for OverlappingFieldsCanBeMergedRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::SelectionSet(selection_set) = node else {
            return VisitAction::Continue;
        };
        let errors = {
            let mut finder = ConflictFinder {
                ctx: &*ctx,
                compared_fragment_pairs: &mut self.compared_fragment_pairs,
                cached_fields: HashMap::new(),
            };
            let parent_type = ctx.get_parent_type();
            finder
                .find_conflicts_within_selection_set(parent_type, selection_set)
                .into_iter()
                .map(Conflict::into_error)
                .collect::<Vec<_>>()
        };
        for error in errors {
            ctx.report_error(error);
        }
        VisitAction::Continue
    }
}

/// Fragment pairs already compared, and whether that comparison assumed
/// mutually exclusive parents.
#[derive(Debug, Default)]
struct PairSet {
    data: HashMap<(String, String), bool>,
}

impl PairSet {
    fn key(a: &str, b: &str) -> (String, String) {
        if a < b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    fn has(&self, a: &str, b: &str, are_mutually_exclusive: bool) -> bool {
        match self.data.get(&Self::key(a, b)) {
            None => false,
            // A comparison that didn't assume exclusivity covers one that
            // does, but not the other way around.
            Some(&was_exclusive) => are_mutually_exclusive || !was_exclusive,
        }
    }

    fn add(&mut self, a: &str, b: &str, are_mutually_exclusive: bool) {
        self.data.insert(Self::key(a, b), are_mutually_exclusive);
    }
}

#[derive(Clone, Copy)]
struct FieldEntry<'n> {
    parent_type: Option<&'n GraphQLType>,
    node: &'n ast::Field,
    def: Option<&'n Field>,
}

type FieldMap<'n> = IndexMap<&'n str, Vec<FieldEntry<'n>>>;

struct FieldsAndFragmentNames<'n> {
    fields: FieldMap<'n>,
    fragment_names: Vec<&'n str>,
}

#[derive(Debug)]
enum ConflictMessage {
    Reason(String),
    Subfields(Vec<ConflictReason>),
}

#[derive(Debug)]
struct ConflictReason {
    response_name: String,
    message: ConflictMessage,
}

impl ConflictReason {
    fn describe(message: &ConflictMessage) -> String {
        match message {
            ConflictMessage::Reason(reason) => reason.clone(),
            ConflictMessage::Subfields(reasons) => reasons
                .iter()
                .map(|reason| {
                    format!(
                        "subfields \"{}\" conflict because {}",
                        reason.response_name,
                        Self::describe(&reason.message),
                    )
                })
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

struct Conflict<'n> {
    reason: ConflictReason,
    fields1: Vec<&'n ast::Field>,
    fields2: Vec<&'n ast::Field>,
}

impl Conflict<'_> {
    fn into_error(self) -> GraphQLError {
        GraphQLError::new(format!(
            "Fields \"{}\" conflict because {}. Use different aliases on the fields to fetch both \
             if this was intentional.",
            self.reason.response_name,
            ConflictReason::describe(&self.reason.message),
        ))
        .with_nodes(
            self.fields1
                .iter()
                .chain(&self.fields2)
                .map(|field| field.loc.as_ref()),
        )
    }
}

struct ConflictFinder<'c, 'a: 'n, 'n> {
    ctx: &'c ValidationContext<'a>,
    compared_fragment_pairs: &'c mut PairSet,
    /// Fields and fragment names per selection set, keyed by address.
    cached_fields: HashMap<*const ast::SelectionSet, Rc<FieldsAndFragmentNames<'n>>>,
}

impl<'a: 'n, 'n> ConflictFinder<'_, 'a, 'n> {
    fn schema(&self) -> &'a Schema {
        self.ctx.schema()
    }

    fn find_conflicts_within_selection_set(
        &mut self,
        parent_type: Option<&'n GraphQLType>,
        selection_set: &'n ast::SelectionSet,
    ) -> Vec<Conflict<'n>> {
        let mut conflicts = vec![];
        let field_map = self.get_fields_and_fragment_names(parent_type, selection_set);

        self.collect_conflicts_within(&mut conflicts, &field_map.fields);
        let fragment_names = &field_map.fragment_names;
        for (idx, fragment_name) in fragment_names.iter().enumerate() {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                false,
                &field_map,
                fragment_name,
            );
            for other_fragment_name in &fragment_names[idx + 1..] {
                self.collect_conflicts_between_fragments(
                    &mut conflicts,
                    false,
                    fragment_name,
                    other_fragment_name,
                );
            }
        }
        conflicts
    }

    fn collect_conflicts_between_fields_and_fragment(
        &mut self,
        conflicts: &mut Vec<Conflict<'n>>,
        are_mutually_exclusive: bool,
        field_map: &Rc<FieldsAndFragmentNames<'n>>,
        fragment_name: &str,
    ) {
        let Some(fragment) = self.ctx.get_fragment(fragment_name) else {
            return;
        };
        let fragment_fields = self.get_referenced_fields_and_fragment_names(fragment);
        // A fragment's fields never conflict with themselves.
        if Rc::ptr_eq(field_map, &fragment_fields) {
            return;
        }

        self.collect_conflicts_between(
            conflicts,
            are_mutually_exclusive,
            &field_map.fields,
            &fragment_fields.fields,
        );
        for referenced_name in &fragment_fields.fragment_names {
            if self
                .compared_fragment_pairs
                .has(referenced_name, fragment_name, are_mutually_exclusive)
            {
                continue;
            }
            self.compared_fragment_pairs
                .add(referenced_name, fragment_name, are_mutually_exclusive);
            self.collect_conflicts_between_fields_and_fragment(
                conflicts,
                are_mutually_exclusive,
                field_map,
                referenced_name,
            );
        }
    }

    fn collect_conflicts_between_fragments(
        &mut self,
        conflicts: &mut Vec<Conflict<'n>>,
        are_mutually_exclusive: bool,
        fragment_name1: &str,
        fragment_name2: &str,
    ) {
        if fragment_name1 == fragment_name2 {
            return;
        }
        if self
            .compared_fragment_pairs
            .has(fragment_name1, fragment_name2, are_mutually_exclusive)
        {
            return;
        }
        self.compared_fragment_pairs
            .add(fragment_name1, fragment_name2, are_mutually_exclusive);

        let (Some(fragment1), Some(fragment2)) = (
            self.ctx.get_fragment(fragment_name1),
            self.ctx.get_fragment(fragment_name2),
        ) else {
            return;
        };
        let fields1 = self.get_referenced_fields_and_fragment_names(fragment1);
        let fields2 = self.get_referenced_fields_and_fragment_names(fragment2);

        self.collect_conflicts_between(
            conflicts,
            are_mutually_exclusive,
            &fields1.fields,
            &fields2.fields,
        );
        for referenced_name2 in &fields2.fragment_names {
            self.collect_conflicts_between_fragments(
                conflicts,
                are_mutually_exclusive,
                fragment_name1,
                referenced_name2,
            );
        }
        for referenced_name1 in &fields1.fragment_names {
            self.collect_conflicts_between_fragments(
                conflicts,
                are_mutually_exclusive,
                referenced_name1,
                fragment_name2,
            );
        }
    }

    fn find_conflicts_between_sub_selection_sets(
        &mut self,
        are_mutually_exclusive: bool,
        parent_type1: Option<&'n GraphQLType>,
        selection_set1: &'n ast::SelectionSet,
        parent_type2: Option<&'n GraphQLType>,
        selection_set2: &'n ast::SelectionSet,
    ) -> Vec<Conflict<'n>> {
        let mut conflicts = vec![];
        let fields1 = self.get_fields_and_fragment_names(parent_type1, selection_set1);
        let fields2 = self.get_fields_and_fragment_names(parent_type2, selection_set2);

        self.collect_conflicts_between(
            &mut conflicts,
            are_mutually_exclusive,
            &fields1.fields,
            &fields2.fields,
        );
        for fragment_name2 in &fields2.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                are_mutually_exclusive,
                &fields1,
                fragment_name2,
            );
        }
        for fragment_name1 in &fields1.fragment_names {
            self.collect_conflicts_between_fields_and_fragment(
                &mut conflicts,
                are_mutually_exclusive,
                &fields2,
                fragment_name1,
            );
        }
        for fragment_name1 in &fields1.fragment_names {
            for fragment_name2 in &fields2.fragment_names {
                self.collect_conflicts_between_fragments(
                    &mut conflicts,
                    are_mutually_exclusive,
                    fragment_name1,
                    fragment_name2,
                );
            }
        }
        conflicts
    }

    fn collect_conflicts_within(&mut self, conflicts: &mut Vec<Conflict<'n>>, fields: &FieldMap<'n>) {
        for (response_name, entries) in fields {
            for (idx, entry1) in entries.iter().enumerate() {
                for entry2 in &entries[idx + 1..] {
                    if let Some(conflict) = self.find_conflict(false, response_name, entry1, entry2) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn collect_conflicts_between(
        &mut self,
        conflicts: &mut Vec<Conflict<'n>>,
        parent_fields_are_mutually_exclusive: bool,
        fields1: &FieldMap<'n>,
        fields2: &FieldMap<'n>,
    ) {
        for (response_name, entries1) in fields1 {
            let Some(entries2) = fields2.get(response_name) else {
                continue;
            };
            for entry1 in entries1 {
                for entry2 in entries2 {
                    if let Some(conflict) = self.find_conflict(
                        parent_fields_are_mutually_exclusive,
                        response_name,
                        entry1,
                        entry2,
                    ) {
                        conflicts.push(conflict);
                    }
                }
            }
        }
    }

    fn find_conflict(
        &mut self,
        parent_fields_are_mutually_exclusive: bool,
        response_name: &str,
        entry1: &FieldEntry<'n>,
        entry2: &FieldEntry<'n>,
    ) -> Option<Conflict<'n>> {
        let (node1, node2) = (entry1.node, entry2.node);
        let simple_conflict = |reason: String| Conflict {
            reason: ConflictReason {
                response_name: response_name.to_string(),
                message: ConflictMessage::Reason(reason),
            },
            fields1: vec![node1],
            fields2: vec![node2],
        };

        // Fields on distinct object types can never both apply to one
        // value, so only their shapes need to agree.
        let are_mutually_exclusive = parent_fields_are_mutually_exclusive
            || match (entry1.parent_type, entry2.parent_type) {
                (Some(type1), Some(type2)) => {
                    type1.name() != type2.name()
                        && type1.as_object().is_some()
                        && type2.as_object().is_some()
                },
                _ => false,
            };

        if !are_mutually_exclusive {
            if node1.name != node2.name {
                return Some(simple_conflict(format!(
                    "\"{}\" and \"{}\" are different fields",
                    node1.name, node2.name,
                )));
            }
            if !same_arguments(&node1.arguments, &node2.arguments) {
                return Some(simple_conflict("they have differing arguments".to_string()));
            }
        }

        let type1 = entry1.def.map(Field::ty);
        let type2 = entry2.def.map(Field::ty);
        if let (Some(type1), Some(type2)) = (type1, type2)
            && do_types_conflict(self.schema(), type1, type2)
        {
            return Some(simple_conflict(format!(
                "they return conflicting types \"{type1}\" and \"{type2}\"",
            )));
        }

        let (Some(selection_set1), Some(selection_set2)) =
            (&node1.selection_set, &node2.selection_set)
        else {
            return None;
        };
        let schema = self.schema();
        let conflicts = self.find_conflicts_between_sub_selection_sets(
            are_mutually_exclusive,
            type1.and_then(|type_ref| schema.get_named_type(type_ref)),
            selection_set1,
            type2.and_then(|type_ref| schema.get_named_type(type_ref)),
            selection_set2,
        );
        if conflicts.is_empty() {
            return None;
        }

        let mut fields1 = vec![node1];
        let mut fields2 = vec![node2];
        let mut reasons = vec![];
        for conflict in conflicts {
            reasons.push(conflict.reason);
            fields1.extend(conflict.fields1);
            fields2.extend(conflict.fields2);
        }
        Some(Conflict {
            reason: ConflictReason {
                response_name: response_name.to_string(),
                message: ConflictMessage::Subfields(reasons),
            },
            fields1,
            fields2,
        })
    }

    fn get_fields_and_fragment_names(
        &mut self,
        parent_type: Option<&'n GraphQLType>,
        selection_set: &'n ast::SelectionSet,
    ) -> Rc<FieldsAndFragmentNames<'n>> {
        let key = selection_set as *const ast::SelectionSet;
        if let Some(cached) = self.cached_fields.get(&key) {
            return Rc::clone(cached);
        }
        let mut fields = FieldMap::new();
        let mut fragment_names = IndexSet::new();
        self.collect_fields_and_fragment_names(
            parent_type,
            selection_set,
            &mut fields,
            &mut fragment_names,
        );
        let collected = Rc::new(FieldsAndFragmentNames {
            fields,
            fragment_names: fragment_names.into_iter().collect(),
        });
        self.cached_fields.insert(key, Rc::clone(&collected));
        collected
    }

    fn get_referenced_fields_and_fragment_names(
        &mut self,
        fragment: &'a ast::FragmentDefinition,
    ) -> Rc<FieldsAndFragmentNames<'n>> {
        let fragment_type = self.schema().get_type(&fragment.type_condition.name);
        self.get_fields_and_fragment_names(fragment_type, &fragment.selection_set)
    }

    fn collect_fields_and_fragment_names(
        &self,
        parent_type: Option<&'n GraphQLType>,
        selection_set: &'n ast::SelectionSet,
        fields: &mut FieldMap<'n>,
        fragment_names: &mut IndexSet<&'n str>,
    ) {
        for selection in &selection_set.selections {
            match selection {
                ast::Selection::Field(field) => {
                    let def = parent_type
                        .and_then(GraphQLType::fields)
                        .and_then(|type_fields| type_fields.get(&field.name));
                    fields.entry(field.response_key()).or_default().push(FieldEntry {
                        parent_type,
                        node: field,
                        def,
                    });
                },
                ast::Selection::FragmentSpread(spread) => {
                    fragment_names.insert(spread.name.as_str());
                },
                ast::Selection::InlineFragment(inline) => {
                    let inline_type = match &inline.type_condition {
                        Some(condition) => self.schema().get_type(&condition.name),
                        None => parent_type,
                    };
                    self.collect_fields_and_fragment_names(
                        inline_type,
                        &inline.selection_set,
                        fields,
                        fragment_names,
                    );
                },
            }
        }
    }
}

fn same_arguments(args1: &[ast::Argument], args2: &[ast::Argument]) -> bool {
    if args1.len() != args2.len() {
        return false;
    }
    args1.iter().all(|arg1| {
        args2
            .iter()
            .find(|arg2| arg2.name == arg1.name)
            .is_some_and(|arg2| stringify_value(&arg1.value) == stringify_value(&arg2.value))
    })
}

/// Prints a value with object fields in name order, so that literals
/// differing only in field order compare equal.
fn stringify_value(value: &ast::Value) -> String {
    fn sorted(value: &ast::Value) -> ast::Value {
        match value {
            ast::Value::List { values, loc } => ast::Value::List {
                values: values.iter().map(sorted).collect(),
                loc: loc.clone(),
            },
            ast::Value::Object { fields, loc } => {
                let mut fields = fields
                    .iter()
                    .map(|field| ast::ObjectField {
                        name: field.name.clone(),
                        value: sorted(&field.value),
                        loc: field.loc.clone(),
                    })
                    .collect::<Vec<_>>();
                fields.sort_by(|a, b| a.name.cmp(&b.name));
                ast::Value::Object { fields, loc: loc.clone() }
            },
            other => other.clone(),
        }
    }
    sorted(value).to_string()
}

/// Whether two field types could produce differently shaped values: list
/// and non-null wrappers must match, and leaf types must be identical.
fn do_types_conflict(schema: &Schema, type1: &TypeRef, type2: &TypeRef) -> bool {
    match (type1, type2) {
        (TypeRef::List(inner1), TypeRef::List(inner2))
        | (TypeRef::NonNull(inner1), TypeRef::NonNull(inner2)) => {
            do_types_conflict(schema, inner1, inner2)
        },
        (TypeRef::List(_), _) | (_, TypeRef::List(_)) => true,
        (TypeRef::NonNull(_), _) | (_, TypeRef::NonNull(_)) => true,
        (TypeRef::Named(name1), TypeRef::Named(name2)) => {
            let is_leaf = |name: &str| schema.get_type(name).is_some_and(GraphQLType::is_leaf_type);
            (is_leaf(name1.as_str()) || is_leaf(name2.as_str())) && name1 != name2
        },
    }
}
