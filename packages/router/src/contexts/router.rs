use std::{
    cell::{Cell, RefCell},
    collections::BTreeMap,
    rc::{Rc, Weak},
};

use katas_history::{History, UpdaterId};
use slab::Slab;

use crate::{
    prelude::{Navigator, RouterConfig},
    router_cfg::RoutingCallback,
    state::RouterState,
};

/// A callback notified with the new state after every routing update.
pub type Subscriber = Rc<dyn Fn(&RouterState)>;

struct RouterContextInner {
    state: RefCell<RouterState>,
    history: Rc<dyn History>,
    subscribers: RefCell<Slab<Subscriber>>,
    active_class: Option<String>,
    routing_callback: Option<RoutingCallback>,
    // bumped by every update; a notification round stops once a newer one started
    generation: Cell<u64>,
}

/// A handle to a mounted router.
///
/// This is what [`use_router`](crate::hooks::use_router) returns, and what components receive
/// when the router is passed to them explicitly. Cloning it is cheap; all clones share the same
/// state.
#[derive(Clone)]
pub struct RouterContext {
    inner: Rc<RouterContextInner>,
}

impl PartialEq for RouterContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for RouterContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterContext")
            .field("state", &*self.inner.state.borrow())
            .field("active_class", &self.inner.active_class)
            .finish_non_exhaustive()
    }
}

impl RouterContext {
    pub(crate) fn new(mut cfg: RouterConfig) -> Self {
        let history = cfg.take_history();
        let state = RouterState::read(&*history);

        Self {
            inner: Rc::new(RouterContextInner {
                state: RefCell::new(state),
                history,
                subscribers: RefCell::new(Slab::new()),
                active_class: cfg.active_class,
                routing_callback: cfg.on_update,
                generation: Cell::new(0),
            }),
        }
    }

    /// The current path.
    #[must_use]
    pub fn current_path(&self) -> String {
        self.inner.state.borrow().path.clone()
    }

    /// Parameters read from the current path. Always empty.
    #[must_use]
    pub fn params(&self) -> BTreeMap<String, String> {
        self.inner.state.borrow().params.clone()
    }

    /// The prefix the site is mounted under, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<String> {
        self.inner.state.borrow().prefix.clone()
    }

    /// A snapshot of the full routing state.
    #[must_use]
    pub fn state(&self) -> RouterState {
        self.inner.state.borrow().clone()
    }

    /// Checks if `to` is exactly the current path.
    #[must_use]
    pub fn is_active(&self, to: &str) -> bool {
        self.inner.state.borrow().is_active(to)
    }

    /// The router-wide class for active links.
    #[must_use]
    pub fn active_class(&self) -> Option<&str> {
        self.inner.active_class.as_deref()
    }

    /// The history provider backing this router.
    #[must_use]
    pub fn history(&self) -> Rc<dyn History> {
        self.inner.history.clone()
    }

    /// A navigation-only handle to this router.
    #[must_use]
    pub fn navigator(&self) -> Navigator {
        Navigator(self.clone())
    }

    /// Check whether there is a previous page to navigate back to.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.inner.state.borrow().can_go_back
    }

    /// Check whether there is a future page to navigate forward to.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.inner.state.borrow().can_go_forward
    }

    /// Push a new history entry for `path` and make it the current path.
    ///
    /// The path is not validated, and navigating to the current path still pushes an entry.
    pub fn navigate(&self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(%path, "navigating");
        self.inner.history.push(path);
        self.update();
    }

    /// Replace the current history entry with `path`.
    pub fn replace(&self, path: impl Into<String>) {
        let path = path.into();
        tracing::debug!(%path, "replacing current entry");
        self.inner.history.replace(path);
        self.update();
    }

    /// Go back to the previous page.
    ///
    /// The state follows once the history provider reports the new location.
    pub fn go_back(&self) {
        tracing::debug!("going back");
        self.inner.history.go_back();
    }

    /// Go forward to the next page.
    ///
    /// The state follows once the history provider reports the new location.
    pub fn go_forward(&self) {
        tracing::debug!("going forward");
        self.inner.history.go_forward();
    }

    /// Call `callback` with the new state after every routing update, until the returned
    /// [`Subscription`] is dropped.
    ///
    /// Updates are not deduplicated: every navigation notifies every subscriber, even if the path
    /// did not change.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&RouterState) + 'static) -> Subscription {
        let key = self.inner.subscribers.borrow_mut().insert(Rc::new(callback));
        Subscription {
            router: Rc::downgrade(&self.inner),
            key,
        }
    }

    /// The number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Start following location changes the history provider reports.
    pub(crate) fn listen(&self) -> UpdaterId {
        let router = Rc::downgrade(&self.inner);
        self.inner.history.updater(Rc::new(move || {
            if let Some(inner) = router.upgrade() {
                let router = RouterContext { inner };
                tracing::debug!(path = %router.inner.history.current_route(), "location changed");
                router.update();
            }
        }))
    }

    pub(crate) fn unlisten(&self, id: UpdaterId) {
        self.inner.history.remove_updater(id);
    }

    /// Re-read the location, give the routing callback a chance to redirect, then notify.
    pub(crate) fn update(&self) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        self.refresh();

        if let Some(callback) = self.inner.routing_callback.clone() {
            if let Some(target) = callback(self) {
                if target == self.current_path() {
                    tracing::warn!(%target, "on_update redirected to the current path");
                } else {
                    tracing::debug!(%target, "on_update redirect");
                    self.inner.history.replace(target);
                    self.refresh();
                }
            }
        }

        self.notify(generation);
    }

    fn refresh(&self) {
        let next = RouterState::read(&*self.inner.history);
        *self.inner.state.borrow_mut() = next;
    }

    /// Hand the current state to every subscriber. If a subscriber navigates, the nested update
    /// delivers the newer state to everyone and this round ends early.
    fn notify(&self, generation: u64) {
        let state = self.state();
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();

        tracing::trace!(subscribers = subscribers.len(), path = %state.path, "notifying subscribers");
        for subscriber in subscribers {
            if self.inner.generation.get() != generation {
                tracing::trace!(path = %state.path, "newer update delivered, dropping stale state");
                break;
            }
            subscriber(&state);
        }
    }
}

/// Keeps a [`RouterContext::subscribe`] callback registered. Dropping it unsubscribes.
pub struct Subscription {
    router: Weak<RouterContextInner>,
    key: usize,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(router) = self.router.upgrade() {
            let mut subscribers = router.subscribers.borrow_mut();
            if subscribers.contains(self.key) {
                subscribers.remove(self.key);
            }
        }
    }
}
