use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::types::UnionType;
use indexmap::IndexMap;

fn all_kinds() -> Vec<GraphQLType> {
    vec![
        ScalarType::new("Date").into(),
        ObjectType::new("User").into(),
        InterfaceType::new("Node").into(),
        UnionType::new("Result").into(),
        EnumType::new("Role").into(),
        InputObjectType::new("Filter").into(),
    ]
}

#[test]
fn kinds_classify_input_and_output_positions() {
    let kinds = all_kinds()
        .iter()
        .map(|type_| (type_.kind(), type_.is_input_type(), type_.is_output_type()))
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            (TypeKind::Scalar, true, true),
            (TypeKind::Object, false, true),
            (TypeKind::Interface, false, true),
            (TypeKind::Union, false, true),
            (TypeKind::Enum, true, true),
            (TypeKind::InputObject, true, false),
        ],
    );
}

#[test]
fn leaf_composite_and_abstract_predicates() {
    let names_where = |predicate: fn(&GraphQLType) -> bool| {
        all_kinds()
            .iter()
            .filter(|type_| predicate(type_))
            .map(|type_| type_.name().to_string())
            .collect::<Vec<_>>()
    };

    assert_eq!(names_where(GraphQLType::is_leaf_type), vec!["Date", "Role"]);
    assert_eq!(names_where(GraphQLType::is_composite_type), vec!["User", "Node", "Result"]);
    assert_eq!(names_where(GraphQLType::is_abstract_type), vec!["Node", "Result"]);
}

#[test]
fn fields_thunk_defers_field_construction() {
    let user = ObjectType::new("User").fields_thunk(|| {
        let mut fields = IndexMap::new();
        fields.insert(
            "friends".to_string(),
            Field::new("friends", TypeRef::list(TypeRef::named("User"))),
        );
        fields
    });
    let user = GraphQLType::from(user);

    let friends = user.fields().and_then(|fields| fields.get("friends")).unwrap();

    assert_eq!(friends.ty().to_string(), "[User]");
}

#[test]
fn clones_share_the_same_type_object() {
    let filter = GraphQLType::from(
        InputObjectType::new("Filter").field(InputValue::new("limit", TypeRef::named("Int"))),
    );
    let other = GraphQLType::from(InputObjectType::new("Filter"));

    assert!(filter.ptr_eq(&filter.clone()));
    assert!(!filter.ptr_eq(&other));
    assert_eq!(filter.to_string(), "Filter");
    assert_eq!(TypeKind::InputObject.to_string(), "INPUT_OBJECT");
}
