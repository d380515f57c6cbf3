use std::cell::RefCell;

use slab::Slab;

use crate::{History, UpdateCallback, UpdaterId};

struct MemoryHistoryState {
    current: String,
    history: Vec<String>,
    future: Vec<String>,
    pushed: Vec<String>,
}

/// A [`History`] provider that stores all navigation information in memory.
///
/// Back and forward navigation notify the registered updaters the same way a browser fires
/// `popstate`. [`MemoryHistory::set_location`] and [`MemoryHistory::dispatch_popstate`] let tests
/// drive the provider like a user editing the address bar.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    updaters: RefCell<Slab<UpdateCallback>>,
    base_path: Option<String>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use katas_history::{History, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/jsx-basics");
    /// assert_eq!(history.current_route(), "/jsx-basics");
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        let path = path.to_string();
        Self {
            state: MemoryHistoryState {
                current: path.clone(),
                history: Vec::new(),
                future: Vec::new(),
                pushed: vec![path],
            }
            .into(),
            updaters: RefCell::new(Slab::new()),
            base_path: None,
        }
    }

    /// Set the base path for the history. All routes will be prefixed with this path when rendered.
    ///
    /// ```rust
    /// # use katas_history::*;
    /// let history = MemoryHistory::default().with_prefix("/react-katas");
    /// assert_eq!(history.current_prefix(), Some("/react-katas".to_string()));
    /// ```
    pub fn with_prefix(mut self, prefix: impl ToString) -> Self {
        self.base_path = Some(prefix.to_string());
        self
    }

    /// Every path that became the current location through construction or [`History::push`], in
    /// order. The length is one more than the number of pushed entries.
    pub fn entries(&self) -> Vec<String> {
        self.state.borrow().pushed.clone()
    }

    /// The number of updaters currently registered.
    pub fn updater_count(&self) -> usize {
        self.updaters.borrow().len()
    }

    /// Change the current location without recording an entry or notifying anyone, like editing
    /// `window.location` before the browser fires `popstate`.
    pub fn set_location(&self, path: impl ToString) {
        self.state.borrow_mut().current = path.to_string();
    }

    /// Notify every registered updater, like the browser firing `popstate`.
    pub fn dispatch_popstate(&self) {
        // collect first so callbacks may read or register updaters
        let callbacks: Vec<UpdateCallback> = self
            .updaters
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        tracing::trace!(listeners = callbacks.len(), "dispatching popstate");
        for callback in callbacks {
            callback();
        }
    }
}

impl History for MemoryHistory {
    fn current_prefix(&self) -> Option<String> {
        self.base_path.clone()
    }

    fn current_route(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        let moved = {
            let mut write = self.state.borrow_mut();
            match write.history.pop() {
                Some(last) => {
                    let old = std::mem::replace(&mut write.current, last);
                    write.future.push(old);
                    true
                }
                None => false,
            }
        };
        if moved {
            self.dispatch_popstate();
        }
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        let moved = {
            let mut write = self.state.borrow_mut();
            match write.future.pop() {
                Some(next) => {
                    let old = std::mem::replace(&mut write.current, next);
                    write.history.push(old);
                    true
                }
                None => false,
            }
        };
        if moved {
            self.dispatch_popstate();
        }
    }

    fn push(&self, new: String) {
        let mut write = self.state.borrow_mut();
        write.pushed.push(new.clone());
        let old = std::mem::replace(&mut write.current, new);
        write.history.push(old);
        write.future.clear();
    }

    fn replace(&self, path: String) {
        let mut write = self.state.borrow_mut();
        write.current = path;
    }

    fn updater(&self, callback: UpdateCallback) -> UpdaterId {
        UpdaterId(self.updaters.borrow_mut().insert(callback))
    }

    fn remove_updater(&self, id: UpdaterId) {
        let mut updaters = self.updaters.borrow_mut();
        if updaters.contains(id.0) {
            updaters.remove(id.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn push_records_duplicates() {
        let history = MemoryHistory::default();
        history.push("/about".to_string());
        history.push("/about".to_string());

        assert_eq!(history.entries(), vec!["/", "/about", "/about"]);
        assert_eq!(history.current_route(), "/about");
        assert!(history.can_go_back());
    }

    #[test]
    fn push_clears_future() {
        let history = MemoryHistory::default();
        history.push("/a".to_string());
        history.go_back();
        assert!(history.can_go_forward());

        history.push("/b".to_string());
        assert!(!history.can_go_forward());
        assert_eq!(history.current_route(), "/b");
    }

    #[test]
    fn back_and_forward_notify_updaters() {
        let history = MemoryHistory::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        history.updater(Rc::new(move || counter.set(counter.get() + 1)));

        history.push("/a".to_string());
        assert_eq!(calls.get(), 0);

        history.go_back();
        assert_eq!(history.current_route(), "/");
        assert_eq!(calls.get(), 1);

        history.go_forward();
        assert_eq!(history.current_route(), "/a");
        assert_eq!(calls.get(), 2);

        // nothing left to go forward to
        history.go_forward();
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn removed_updater_is_not_called() {
        let history = MemoryHistory::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let id = history.updater(Rc::new(move || counter.set(counter.get() + 1)));

        history.remove_updater(id);
        history.remove_updater(id);
        history.dispatch_popstate();

        assert_eq!(calls.get(), 0);
        assert_eq!(history.updater_count(), 0);
    }

    #[test]
    fn updater_can_read_history() {
        let history = Rc::new(MemoryHistory::default());
        let seen = Rc::new(RefCell::new(String::new()));
        let (h, s) = (history.clone(), seen.clone());
        history.updater(Rc::new(move || *s.borrow_mut() = h.current_route()));

        history.set_location("/file-explorer");
        assert_eq!(*seen.borrow(), "");

        history.dispatch_popstate();
        assert_eq!(*seen.borrow(), "/file-explorer");
    }
}
