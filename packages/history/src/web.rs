use std::cell::RefCell;

use gloo::events::EventListener;
use slab::Slab;
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::{strip_prefix, History, UpdateCallback, UpdaterId};

/// A [`History`] provider that integrates with a browser via the
/// [History API](https://developer.mozilla.org/en-US/docs/Web/API/History_API).
///
/// # Prefix
/// This provider supports a prefix, which can be used for sites that aren't located at the root of
/// their domain (the katas are usually served from `/react-katas`).
///
/// Application developers are responsible for ensuring that right after the prefix comes a `/`,
/// and for not mounting the router if the prefix is not present in the URL.
pub struct WebHistory {
    history: web_sys::History,
    listeners: RefCell<Slab<EventListener>>,
    prefix: Option<String>,
    window: Window,
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new(None)
    }
}

impl WebHistory {
    /// Create a new [`WebHistory`].
    pub fn new(prefix: Option<String>) -> Self {
        let window = web_sys::window().expect("access to `window`");
        let history = window.history().expect("`window` has access to `history`");

        Self {
            history,
            listeners: RefCell::new(Slab::new()),
            prefix,
            window,
        }
    }

    fn full_path(&self, path: &str) -> String {
        match &self.prefix {
            None => path.to_string(),
            Some(prefix) => format!("{prefix}{path}"),
        }
    }
}

impl History for WebHistory {
    fn current_route(&self) -> String {
        let path = self
            .window
            .location()
            .pathname()
            .unwrap_or_else(|_| String::from("/"));

        strip_prefix(&path, self.prefix.as_deref())
    }

    fn current_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            tracing::error!(?err, "failed to go back");
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            tracing::error!(?err, "failed to go forward");
        }
    }

    fn push(&self, path: String) {
        let url = self.full_path(&path);
        if let Err(err) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            tracing::error!(?err, %url, "failed to push state");
        }
    }

    fn replace(&self, path: String) {
        let url = self.full_path(&path);
        if let Err(err) = self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            tracing::error!(?err, %url, "failed to replace state");
        }
    }

    fn updater(&self, callback: UpdateCallback) -> UpdaterId {
        let listener = EventListener::new(&self.window, "popstate", move |_| callback());
        UpdaterId(self.listeners.borrow_mut().insert(listener))
    }

    fn remove_updater(&self, id: UpdaterId) {
        let mut listeners = self.listeners.borrow_mut();
        // dropping the listener detaches it from the window
        if listeners.contains(id.0) {
            drop(listeners.remove(id.0));
        }
    }
}
