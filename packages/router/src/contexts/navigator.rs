use crate::prelude::RouterContext;

/// A handle that changes the router history without reading the route.
///
/// Obtained from [`use_navigator`](crate::hooks::use_navigator) or
/// [`RouterContext::navigator`]. Components that only trigger navigation (buttons, keyboard
/// shortcuts in the lesson sidebar) should hold this instead of the full context.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigator(pub(crate) RouterContext);

impl Navigator {
    /// Check whether there is a previous page to navigate back to.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.0.can_go_back()
    }

    /// Check whether there is a future page to navigate forward to.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.0.can_go_forward()
    }

    /// Go back to the previous location.
    pub fn go_back(&self) {
        self.0.go_back();
    }

    /// Go forward to the next location.
    pub fn go_forward(&self) {
        self.0.go_forward();
    }

    /// Push a new location. See [`RouterContext::navigate`].
    pub fn push(&self, path: impl Into<String>) {
        self.0.navigate(path);
    }

    /// Replace the current location.
    pub fn replace(&self, path: impl Into<String>) {
        self.0.replace(path);
    }
}
