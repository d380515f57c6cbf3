use std::{cell::Cell, rc::Rc};

use katas_router::prelude::*;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn mount(history: &Rc<MemoryHistory>) -> RouterProvider {
    init_logging();
    RouterProvider::new(RouterConfig::default().history(history.clone()))
}

#[test]
fn basic() {
    let history = Rc::new(MemoryHistory::default());
    let _provider = mount(&history);

    assert_eq!(
        Link::new("/").children("Home").render().to_string(),
        r#"<a href="/">Home</a>"#
    );
}

#[test]
fn with_attributes() {
    let history = Rc::new(MemoryHistory::default());
    let _provider = mount(&history);

    let anchor = Link::new("/accessibility/focus")
        .attribute("id", "focus_link")
        .attribute("title", "Focus management")
        .children("Focus")
        .render();

    assert_eq!(
        anchor.to_string(),
        r#"<a href="/accessibility/focus" id="focus_link" title="Focus management">Focus</a>"#
    );
}

#[test]
fn about_scenario() {
    let history = Rc::new(MemoryHistory::default());
    let _provider = mount(&history);

    let link = Link::new("/about")
        .class("nav")
        .active_class("active")
        .children("About");

    let anchor = link.render();
    assert!(!anchor.is_active());
    assert_eq!(anchor.class(), Some("nav"));

    let mut event = ClickEvent::new();
    anchor.click(&mut event);

    assert!(event.default_prevented());
    assert_eq!(history.entries(), vec!["/", "/about"]);

    let anchor = link.render();
    assert!(anchor.is_active());
    assert_eq!(
        anchor.to_string(),
        r#"<a href="/about" class="nav active">About</a>"#
    );
}

#[test]
fn click_pushes_exactly_one_entry() {
    let history = Rc::new(MemoryHistory::default());
    let _provider = mount(&history);

    let before = history.entries().len();
    Link::new("/x").render().click(&mut ClickEvent::new());

    assert_eq!(history.entries().len(), before + 1);
    assert_eq!(history.current_route(), "/x");
}

#[test]
fn clicking_the_active_link_still_pushes() {
    let history = Rc::new(MemoryHistory::with_initial_path("/x"));
    let _provider = mount(&history);

    let anchor = Link::new("/x").render();
    assert!(anchor.is_active());
    anchor.click(&mut ClickEvent::new());

    assert_eq!(history.entries(), vec!["/x", "/x"]);
    assert!(history.can_go_back());
}

#[test]
fn onclick_runs_after_navigation() {
    let history = Rc::new(MemoryHistory::default());
    let provider = mount(&history);

    let router = provider.context();
    let seen = Rc::new(Cell::new(false));
    let seen_in_handler = seen.clone();
    let link = Link::new("/hooks/use-reducer").onclick(move |event| {
        assert!(event.default_prevented());
        assert_eq!(router.current_path(), "/hooks/use-reducer");
        seen_in_handler.set(true);
    });

    link.render().click(&mut ClickEvent::new());
    assert!(seen.get());
}

#[test]
fn active_is_exact() {
    let history = Rc::new(MemoryHistory::with_initial_path("/lessons/"));
    let _provider = mount(&history);

    let active = |to: &str| {
        Link::new(to)
            .active_class("active")
            .render()
            .class()
            .map(str::to_owned)
    };

    assert_eq!(active("/lessons/"), Some("active".to_string()));
    // trailing slashes matter
    assert_eq!(active("/lessons"), None);
    // no prefix matching
    assert_eq!(active("/"), None);
    assert_eq!(active("/lessons/jsx"), None);
}

#[test]
fn router_active_class() {
    let history = Rc::new(MemoryHistory::default());
    init_logging();
    let _provider = RouterProvider::new(
        RouterConfig::default()
            .history(history.clone())
            .active_class("active_router"),
    );

    assert_eq!(
        Link::new("/")
            .class("test_class")
            .children("Test Link")
            .render()
            .to_string(),
        r#"<a href="/" class="test_class active_router">Test Link</a>"#
    );
}

#[test]
fn link_active_class_overrides_router() {
    let history = Rc::new(MemoryHistory::default());
    init_logging();
    let _provider = RouterProvider::new(
        RouterConfig::default()
            .history(history.clone())
            .active_class("active_router"),
    );

    let anchor = Link::new("/")
        .class("test_class")
        .active_class("active_link")
        .children("Test Link")
        .render();

    assert_eq!(
        anchor.to_string(),
        r#"<a href="/" class="test_class active_link">Test Link</a>"#
    );
}

#[test]
fn prefix_is_added_to_href() {
    let history = Rc::new(MemoryHistory::default().with_prefix("/react-katas"));
    let _provider = mount(&history);

    let anchor = Link::new("/machine-coding/virtualization").render();
    assert_eq!(anchor.href(), "/react-katas/machine-coding/virtualization");

    anchor.click(&mut ClickEvent::new());
    // the router works on unprefixed paths
    assert_eq!(use_route(), "/machine-coding/virtualization");
}

#[test]
fn explicit_router_ignores_ambient_one() {
    let outer_history = Rc::new(MemoryHistory::with_initial_path("/outer"));
    let outer = mount(&outer_history);
    let inner_history = Rc::new(MemoryHistory::with_initial_path("/inner"));
    let _inner = mount(&inner_history);

    let anchor = Link::new("/outer").render_with(&outer.context());
    assert!(anchor.is_active());

    anchor.click(&mut ClickEvent::new());
    assert_eq!(outer_history.entries().len(), 2);
    assert_eq!(inner_history.entries().len(), 1);
}

#[test]
#[should_panic(expected = "`Link` must be called in a descendant of a RouterProvider")]
fn outside_provider_panics() {
    let _ = Link::new("/about").render();
}
