use crate::{prelude::RouterContext, utils::use_router_internal::consume_router, RouterError};

/// A hook that provides access to the innermost router.
///
/// # Panics
/// Panics when no [`RouterProvider`](crate::components::RouterProvider) is mounted. Using the
/// router outside a provider is a programming error; use [`try_use_router`] to check first.
///
/// ```rust,should_panic
/// # use katas_router::prelude::*;
/// // no provider mounted
/// let router = use_router();
/// ```
#[track_caller]
#[must_use]
pub fn use_router() -> RouterContext {
    match consume_router("use_router") {
        Ok(router) => router,
        Err(err) => panic!("{err}"),
    }
}

/// Like [`use_router`], but returns an error instead of panicking outside a provider.
pub fn try_use_router() -> Result<RouterContext, RouterError> {
    consume_router("use_router")
}
