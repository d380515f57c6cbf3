use std::rc::Rc;

use katas_router::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn disabled_until_there_is_somewhere_to_go() {
    let history = Rc::new(MemoryHistory::default());
    let _provider = RouterProvider::new(RouterConfig::default().history(history.clone()));

    let back = GoBackButton::new("Previous lesson");
    let forward = GoForwardButton::new("Next lesson");

    assert_eq!(back.render().to_string(), "<button disabled>Previous lesson</button>");
    assert_eq!(forward.render().to_string(), "<button disabled>Next lesson</button>");

    use_navigator().push("/jsx");
    assert!(!back.render().is_disabled());
    assert!(forward.render().is_disabled());

    back.render().click(&mut ClickEvent::new());
    assert_eq!(use_route(), "/");
    assert!(back.render().is_disabled());
    assert_eq!(forward.render().to_string(), "<button>Next lesson</button>");

    forward.render().click(&mut ClickEvent::new());
    assert_eq!(use_route(), "/jsx");
}

#[test]
fn disabled_click_only_prevents_default() {
    let history = Rc::new(MemoryHistory::with_initial_path("/composition"));
    let provider = RouterProvider::new(RouterConfig::default().history(history.clone()));

    let mut event = ClickEvent::new();
    GoBackButton::new("Back")
        .render_with(&provider.context())
        .click(&mut event);

    assert!(event.default_prevented());
    assert_eq!(history.current_route(), "/composition");
}

#[test]
#[should_panic(expected = "`GoForwardButton` must be called in a descendant of a RouterProvider")]
fn outside_provider_panics() {
    let _ = GoForwardButton::new("Next").render();
}
