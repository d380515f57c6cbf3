use std::cell::RefCell;

use crate::{prelude::RouterContext, RouterError};

thread_local! {
    // innermost provider last
    static ROUTERS: RefCell<Vec<RouterContext>> = const { RefCell::new(Vec::new()) };
}

/// Make `router` the innermost router for the current thread.
pub(crate) fn provide_router_context(router: RouterContext) {
    ROUTERS.with(|routers| routers.borrow_mut().push(router));
}

/// Forget `router`. Providers may be dropped out of order, so this searches from the top.
pub(crate) fn remove_router_context(router: &RouterContext) {
    ROUTERS.with(|routers| {
        let mut routers = routers.borrow_mut();
        if let Some(index) = routers.iter().rposition(|r| r == router) {
            routers.remove(index);
        }
    });
}

/// The innermost router registered on this thread's provider stack.
///
/// # Return values
/// - [`None`], when no [`RouterProvider`](crate::components::RouterProvider) is mounted.
/// - Otherwise [`Some`].
pub(crate) fn use_router_internal() -> Option<RouterContext> {
    ROUTERS.with(|routers| routers.borrow().last().cloned())
}

/// Like [`use_router_internal`], but names the calling hook in the error.
pub(crate) fn consume_router(hook: &'static str) -> Result<RouterContext, RouterError> {
    use_router_internal().ok_or(RouterError::OutsideProvider { hook })
}
