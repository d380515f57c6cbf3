use std::{fmt, rc::Rc};

use crate::{
    prelude::RouterContext,
    utils::{html::escape, use_router_internal::consume_router},
};

/// A handler the caller can attach to a [`Link`]. It runs after the router navigated.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent)>;

/// The click a user performed on a rendered [`Anchor`] or [`HistoryButton`](super::HistoryButton).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    /// A fresh click whose default action has not been prevented.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the browser from performing its default action (following the `href`).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether [`ClickEvent::prevent_default`] was called.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// A link to another lesson page.
///
/// Clicking the rendered anchor navigates through the router instead of loading a new page. While
/// the link's target is the current path, the active class is added to its class list.
///
/// ```rust
/// # use std::rc::Rc;
/// # use katas_router::prelude::*;
/// let provider = RouterProvider::new(
///     RouterConfig::default().history(Rc::new(MemoryHistory::default())),
/// );
///
/// let about = Link::new("/about")
///     .class("nav-link")
///     .active_class("nav-link--active")
///     .children("About");
///
/// assert_eq!(
///     about.render_with(&provider.context()).to_string(),
///     r#"<a href="/about" class="nav-link">About</a>"#
/// );
/// ```
#[derive(Clone, Default)]
pub struct Link {
    to: String,
    class: Option<String>,
    active_class: Option<String>,
    attributes: Vec<(String, String)>,
    onclick: Option<ClickHandler>,
    children: String,
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("to", &self.to)
            .field("class", &self.class)
            .field("active_class", &self.active_class)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl Link {
    /// A link to `to`. The path is used verbatim, both for navigation and for the active check.
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            ..Default::default()
        }
    }

    /// The class the anchor always carries.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// The class added while the link is active. Overrides
    /// [`RouterConfig::active_class`](crate::prelude::RouterConfig::active_class).
    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = Some(class.into());
        self
    }

    /// Any other attribute to render on the anchor, such as `id`, `title` or `aria-label`.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// A handler called after the router navigated.
    pub fn onclick(mut self, handler: impl Fn(&mut ClickEvent) + 'static) -> Self {
        self.onclick = Some(Rc::new(handler));
        self
    }

    /// The text inside the anchor.
    pub fn children(mut self, children: impl Into<String>) -> Self {
        self.children = children.into();
        self
    }

    /// The path this link navigates to.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Render against the innermost router.
    ///
    /// # Panics
    /// Panics when no [`RouterProvider`](super::RouterProvider) is mounted.
    #[track_caller]
    #[must_use]
    pub fn render(&self) -> Anchor {
        match consume_router("Link") {
            Ok(router) => self.render_with(&router),
            Err(err) => panic!("{err}"),
        }
    }

    /// Render against an explicitly passed router.
    #[must_use]
    pub fn render_with(&self, router: &RouterContext) -> Anchor {
        let state = router.state();
        let active = state.is_active(&self.to);

        let active_class = self.active_class.as_deref().or(router.active_class());
        let classes: Vec<&str> = self
            .class
            .as_deref()
            .into_iter()
            .chain(active_class.filter(|_| active))
            .filter(|class| !class.is_empty())
            .collect();

        Anchor {
            href: state.href(&self.to),
            class: (!classes.is_empty()).then(|| classes.join(" ")),
            active,
            attributes: self.attributes.clone(),
            children: self.children.clone(),
            to: self.to.clone(),
            onclick: self.onclick.clone(),
            router: router.clone(),
        }
    }
}

/// A rendered [`Link`]: the anchor as it should appear right now, plus its click behavior.
///
/// An anchor is a snapshot. After navigating, render the link again to pick up the new active
/// state. Its [`Display`](fmt::Display) implementation writes the anchor as HTML.
#[derive(Clone)]
pub struct Anchor {
    href: String,
    class: Option<String>,
    active: bool,
    attributes: Vec<(String, String)>,
    children: String,
    to: String,
    onclick: Option<ClickHandler>,
    router: RouterContext,
}

impl Anchor {
    /// The `href` attribute, including the router prefix.
    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The full class list, if any.
    #[must_use]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Whether the link pointed at the current path when it was rendered.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The pass-through attributes, in the order they were added.
    #[must_use]
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// The text inside the anchor.
    #[must_use]
    pub fn children(&self) -> &str {
        &self.children
    }

    /// Handle a click: prevent the page load, navigate, then run the caller's handler.
    pub fn click(&self, event: &mut ClickEvent) {
        event.prevent_default();
        self.router.navigate(self.to.clone());
        if let Some(onclick) = &self.onclick {
            onclick(event);
        }
    }
}

impl fmt::Debug for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Anchor")
            .field("href", &self.href)
            .field("class", &self.class)
            .field("active", &self.active)
            .field("attributes", &self.attributes)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"<a href="{}""#, escape(&self.href))?;
        if let Some(class) = &self.class {
            write!(f, r#" class="{}""#, escape(class))?;
        }
        for (name, value) in &self.attributes {
            write!(f, r#" {}="{}""#, escape(name), escape(value))?;
        }
        write!(f, ">{}</a>", escape(&self.children))
    }
}
