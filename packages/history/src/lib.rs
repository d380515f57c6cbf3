#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use std::rc::Rc;

mod memory;
pub use memory::*;

mod prefix;
pub use prefix::strip_prefix;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// A callback a [`History`] provider calls when the location changes without the router asking for
/// it, e.g. when the user presses the browser's back button.
pub type UpdateCallback = Rc<dyn Fn()>;

/// Identifies a callback registered with [`History::updater`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UpdaterId(pub usize);

/// An integration with some kind of navigation history.
///
/// Depending on your use case, your implementation may deviate from the described procedure. This
/// is fine, as long as `current_route` keeps the described format. The described behaviors are
/// designed to mimic a web browser, which most users should already know.
pub trait History {
    /// Get the path of the current URL.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix.
    ///
    /// ```rust
    /// # use katas_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// assert_eq!(history.current_route(), "/");
    ///
    /// history.push(String::from("/state-management"));
    /// assert_eq!(history.current_route(), "/state-management");
    /// ```
    #[must_use]
    fn current_route(&self) -> String;

    /// Get the current path prefix of the URL.
    ///
    /// Not all providers need a prefix. It is meant for sites that are not served from `/`. The
    /// provider removes the prefix from [`History::current_route`] and adds it back in during
    /// navigation. The router only uses the value to build `href`s.
    #[must_use]
    fn current_prefix(&self) -> Option<String> {
        None
    }

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a provider cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page.
    ///
    /// If there is no previous page this does nothing. Registered updaters are notified once the
    /// location changed.
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a provider cannot know this, it should return [`true`].
    #[must_use]
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page.
    ///
    /// If there is no future page this does nothing. Registered updaters are notified once the
    /// location changed.
    fn go_forward(&self);

    /// Go to another page.
    ///
    /// This should do three things:
    /// 1. Make `path` the current location.
    /// 2. Add the previous location to the navigation history.
    /// 3. Clear the navigation future.
    ///
    /// Pushing the current path again still adds an entry. Updaters are **not** notified, the
    /// caller already knows where it navigated to.
    ///
    /// ```rust
    /// # use katas_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// history.push(String::from("/accessibility"));
    /// assert_eq!(history.current_route(), "/accessibility");
    /// assert!(history.can_go_back());
    /// ```
    fn push(&self, path: String);

    /// Replace the current page with another one.
    ///
    /// In contrast to [`History::push`], the navigation history and future stay untouched.
    ///
    /// ```rust
    /// # use katas_history::{History, MemoryHistory};
    /// let history = MemoryHistory::default();
    /// history.replace(String::from("/accessibility"));
    /// assert_eq!(history.current_route(), "/accessibility");
    /// assert!(!history.can_go_back());
    /// ```
    fn replace(&self, path: String);

    /// Register a callback to be called whenever the location changes from outside the router.
    ///
    /// The returned id must be handed to [`History::remove_updater`] once the caller goes away.
    fn updater(&self, callback: UpdateCallback) -> UpdaterId;

    /// Remove a callback registered with [`History::updater`]. Unknown ids are ignored.
    fn remove_updater(&self, id: UpdaterId);
}
