use crate::types::Field;
use crate::types::Thunk;
use indexmap::IndexMap;

/// The shape shared by object and interface types: a name, a set of fields
/// and the interfaces implemented.
pub trait ObjectOrInterfaceType {
    fn name(&self) -> &str;
    fn get_description(&self) -> Option<&str>;

    /// Fields in definition order. Forces the field thunk on first call.
    fn fields(&self) -> &IndexMap<String, Field>;

    fn get_field(&self, name: &str) -> Option<&Field>;

    /// Names of the implemented interfaces, in definition order.
    fn interfaces(&self) -> &[String];
}

/// Storage shared by [`ObjectType`](crate::types::ObjectType) and
/// [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug)]
pub(crate) struct ObjectOrInterfaceTypeData {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
    pub(crate) fields: Thunk<IndexMap<String, Field>>,
    pub(crate) interfaces: Thunk<Vec<String>>,
}

impl ObjectOrInterfaceTypeData {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            fields: Thunk::default(),
            interfaces: Thunk::default(),
        }
    }

    pub(crate) fn add_field(&mut self, field: Field) {
        let mut fields = std::mem::take(&mut self.fields).into_value();
        fields.insert(field.name().to_string(), field);
        self.fields = Thunk::ready(fields);
    }

    pub(crate) fn add_interface(&mut self, name: String) {
        let mut interfaces = std::mem::take(&mut self.interfaces).into_value();
        interfaces.push(name);
        self.interfaces = Thunk::ready(interfaces);
    }
}
