use crate::error::PathSegment;
use std::sync::Arc;

/// A field's position in the response: a chain of response keys and list
/// indices running from the field back to the root.
///
/// Links are shared, so extending a path never copies its ancestors.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponsePath {
    pub prev: Option<Arc<ResponsePath>>,
    pub key: PathSegment,
    /// The object type the field was selected on. Unset for list items.
    pub typename: Option<String>,
}

impl ResponsePath {
    pub fn root(key: impl Into<PathSegment>, typename: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            prev: None,
            key: key.into(),
            typename: typename.map(str::to_string),
        })
    }

    pub fn child(
        self: &Arc<Self>,
        key: impl Into<PathSegment>,
        typename: Option<&str>,
    ) -> Arc<Self> {
        Arc::new(Self {
            prev: Some(Arc::clone(self)),
            key: key.into(),
            typename: typename.map(str::to_string),
        })
    }

    /// The segments from the root down to this one.
    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = vec![self.key.clone()];
        let mut current = self.prev.as_deref();
        while let Some(path) = current {
            segments.push(path.key.clone());
            current = path.prev.as_deref();
        }
        segments.reverse();
        segments
    }
}
