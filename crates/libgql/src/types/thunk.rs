use std::fmt;
use std::sync::Arc;
use std::sync::OnceLock;

/// A value computed on first access and memoized thereafter.
///
/// Field maps, implemented interfaces and union members are held in thunks
/// so that mutually-referencing types can be declared in any order.
pub struct Thunk<T> {
    value: OnceLock<T>,
    init: Option<Arc<dyn Fn() -> T + Send + Sync>>,
}

impl<T: Default> Thunk<T> {
    pub fn ready(value: T) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(value);
        Self {
            value: cell,
            init: None,
        }
    }

    pub fn lazy(init: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            value: OnceLock::new(),
            init: Some(Arc::new(init)),
        }
    }

    /// Forces the thunk. The initializer runs at most once.
    pub fn get(&self) -> &T {
        self.value.get_or_init(|| match &self.init {
            Some(init) => init(),
            None => T::default(),
        })
    }

    pub fn is_evaluated(&self) -> bool {
        self.value.get().is_some()
    }

    /// Forces the thunk and takes its value.
    pub fn into_value(self) -> T {
        match self.value.into_inner() {
            Some(value) => value,
            None => self.init.map(|init| init()).unwrap_or_default(),
        }
    }
}

impl<T: Default> Default for Thunk<T> {
    fn default() -> Self {
        Thunk::ready(T::default())
    }
}

impl<T: Clone> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            init: self.init.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value.get() {
            Some(value) => value.fmt(f),
            None => f.write_str("<unevaluated>"),
        }
    }
}
