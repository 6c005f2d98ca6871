use futures::future::BoxFuture;
use std::future::Future;

/// An answer that is either available now or arrives later.
///
/// Field resolvers, type resolvers and `is_type_of` checks all return one of
/// these so synchronous resolvers never pay for a heap-allocated future.
pub enum MaybeAsync<'a, T> {
    Ready(T),
    Pending(BoxFuture<'a, T>),
}

impl<'a, T> MaybeAsync<'a, T> {
    pub fn pending(future: impl Future<Output = T> + Send + 'a) -> Self {
        MaybeAsync::Pending(Box::pin(future))
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, MaybeAsync::Ready(_))
    }

    /// Waits for the answer.
    pub async fn resolve(self) -> T {
        match self {
            MaybeAsync::Ready(value) => value,
            MaybeAsync::Pending(future) => future.await,
        }
    }
}

impl<T> From<T> for MaybeAsync<'_, T> {
    fn from(value: T) -> Self {
        MaybeAsync::Ready(value)
    }
}
