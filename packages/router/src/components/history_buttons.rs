use std::fmt;

use crate::{
    prelude::{ClickEvent, RouterContext},
    utils::{html::escape, use_router_internal::consume_router},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Back,
    Forward,
}

/// A button that navigates back in the history, e.g. "Previous lesson".
///
/// The rendered button is disabled while there is no previous page.
#[derive(Clone, Debug, Default)]
pub struct GoBackButton {
    children: String,
}

impl GoBackButton {
    /// A button showing `children`.
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
        }
    }

    /// Render against the innermost router.
    ///
    /// # Panics
    /// Panics when no [`RouterProvider`](super::RouterProvider) is mounted.
    #[track_caller]
    #[must_use]
    pub fn render(&self) -> HistoryButton {
        match consume_router("GoBackButton") {
            Ok(router) => self.render_with(&router),
            Err(err) => panic!("{err}"),
        }
    }

    /// Render against an explicitly passed router.
    #[must_use]
    pub fn render_with(&self, router: &RouterContext) -> HistoryButton {
        HistoryButton {
            disabled: !router.can_go_back(),
            children: self.children.clone(),
            direction: Direction::Back,
            router: router.clone(),
        }
    }
}

/// A button that navigates forward in the history.
///
/// The rendered button is disabled while there is no future page.
#[derive(Clone, Debug, Default)]
pub struct GoForwardButton {
    children: String,
}

impl GoForwardButton {
    /// A button showing `children`.
    pub fn new(children: impl Into<String>) -> Self {
        Self {
            children: children.into(),
        }
    }

    /// Render against the innermost router.
    ///
    /// # Panics
    /// Panics when no [`RouterProvider`](super::RouterProvider) is mounted.
    #[track_caller]
    #[must_use]
    pub fn render(&self) -> HistoryButton {
        match consume_router("GoForwardButton") {
            Ok(router) => self.render_with(&router),
            Err(err) => panic!("{err}"),
        }
    }

    /// Render against an explicitly passed router.
    #[must_use]
    pub fn render_with(&self, router: &RouterContext) -> HistoryButton {
        HistoryButton {
            disabled: !router.can_go_forward(),
            children: self.children.clone(),
            direction: Direction::Forward,
            router: router.clone(),
        }
    }
}

/// A rendered [`GoBackButton`] or [`GoForwardButton`].
#[derive(Clone, Debug)]
pub struct HistoryButton {
    disabled: bool,
    children: String,
    direction: Direction,
    router: RouterContext,
}

impl HistoryButton {
    /// Whether there was nowhere to go when the button was rendered.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Handle a click. Disabled buttons only prevent the default action.
    pub fn click(&self, event: &mut ClickEvent) {
        event.prevent_default();
        if self.disabled {
            return;
        }

        match self.direction {
            Direction::Back => self.router.go_back(),
            Direction::Forward => self.router.go_forward(),
        }
    }
}

impl fmt::Display for HistoryButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.disabled {
            true => write!(f, "<button disabled>{}</button>", escape(&self.children)),
            false => write!(f, "<button>{}</button>", escape(&self.children)),
        }
    }
}
