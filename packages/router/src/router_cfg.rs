use std::rc::Rc;

use katas_history::History;

use crate::prelude::RouterContext;

/// A callback run after every routing update. Returning a path redirects to it.
pub(crate) type RoutingCallback = Rc<dyn Fn(&RouterContext) -> Option<String>>;

/// Global configuration options for the router.
///
/// This implements [`Default`] and follows the builder pattern, so you can use it like this:
/// ```rust
/// # use std::rc::Rc;
/// # use katas_router::prelude::*;
/// let history = Rc::new(MemoryHistory::with_initial_path("/jsx-basics"));
/// let cfg = RouterConfig::default()
///     .history(history)
///     .active_class("sidebar-link--active");
/// ```
#[derive(Default)]
pub struct RouterConfig {
    pub(crate) history: Option<Rc<dyn History>>,
    pub(crate) active_class: Option<String>,
    pub(crate) on_update: Option<RoutingCallback>,
}

impl RouterConfig {
    /// The history provider the router reads and writes the location through.
    ///
    /// Defaults to a [`WebHistory`](katas_history::WebHistory) when the `web` feature is enabled
    /// and to a [`MemoryHistory`](katas_history::MemoryHistory) starting at `/` otherwise.
    pub fn history(self, history: Rc<dyn History>) -> Self {
        Self {
            history: Some(history),
            ..self
        }
    }

    /// The class added to every [`Link`](crate::components::Link) whose target is the current
    /// path. A link's own active class takes precedence.
    ///
    /// Defaults to [`None`].
    pub fn active_class(self, class: impl Into<String>) -> Self {
        Self {
            active_class: Some(class.into()),
            ..self
        }
    }

    /// A function to be called whenever the routing is updated.
    ///
    /// The callback is invoked after the state is updated, but before subscribers are notified.
    /// If it returns a path, the router replaces the current location with it.
    ///
    /// The callback is called no more than once per update, so a redirect does not trigger it
    /// again.
    ///
    /// Defaults to [`None`].
    pub fn on_update(self, callback: impl Fn(&RouterContext) -> Option<String> + 'static) -> Self {
        Self {
            on_update: Some(Rc::new(callback)),
            ..self
        }
    }

    pub(crate) fn take_history(&mut self) -> Rc<dyn History> {
        self.history.take().unwrap_or_else(default_history)
    }
}

#[cfg(feature = "web")]
fn default_history() -> Rc<dyn History> {
    Rc::new(katas_history::WebHistory::default())
}

#[cfg(not(feature = "web"))]
fn default_history() -> Rc<dyn History> {
    Rc::new(katas_history::MemoryHistory::default())
}
