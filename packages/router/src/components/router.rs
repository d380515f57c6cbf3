use katas_history::UpdaterId;

use crate::{
    prelude::{Navigator, RouterConfig, RouterContext},
    utils::use_router_internal::{provide_router_context, remove_router_context},
};

/// Owns the router state for everything rendered while it is alive.
///
/// Creating a provider reads the initial path from the history provider, starts listening for
/// back/forward navigation and makes the router available to
/// [`use_router`](crate::hooks::use_router) on this thread. Dropping it undoes all three.
///
/// Providers nest: the most recently mounted one shadows the others until it is dropped.
///
/// ```rust
/// # use std::rc::Rc;
/// # use katas_router::prelude::*;
/// let history = Rc::new(MemoryHistory::with_initial_path("/jsx-basics"));
/// let provider = RouterProvider::new(RouterConfig::default().history(history));
///
/// assert_eq!(use_router().current_path(), "/jsx-basics");
/// drop(provider);
/// assert!(try_use_router().is_err());
/// ```
pub struct RouterProvider {
    context: RouterContext,
    updater: UpdaterId,
}

impl RouterProvider {
    /// Mount a router configured by `config`.
    pub fn new(config: RouterConfig) -> Self {
        let context = RouterContext::new(config);
        let updater = context.listen();

        tracing::debug!(path = %context.current_path(), "router provider mounted");

        // registered first so on_update can already reach this router through use_router
        provide_router_context(context.clone());
        // the initial location goes through on_update as well
        context.update();

        Self { context, updater }
    }

    /// The router this provider owns, for passing to components explicitly.
    #[must_use]
    pub fn context(&self) -> RouterContext {
        self.context.clone()
    }

    /// A navigation-only handle to the router.
    #[must_use]
    pub fn navigator(&self) -> Navigator {
        self.context.navigator()
    }
}

impl Default for RouterProvider {
    fn default() -> Self {
        Self::new(RouterConfig::default())
    }
}

impl Drop for RouterProvider {
    fn drop(&mut self) {
        self.context.unlisten(self.updater);
        remove_router_context(&self.context);
        tracing::debug!("router provider unmounted");
    }
}
