//! Renders the lesson sidebar, clicks through a few lessons and walks back again.
//!
//! Every navigation is logged at debug level.

use std::rc::Rc;

use katas_router::prelude::*;

const LESSONS: &[(&str, &str)] = &[
    ("/", "Introduction"),
    ("/jsx-basics", "JSX basics"),
    ("/composition", "Component composition"),
    ("/machine-coding/autocomplete", "Autocomplete"),
];

fn sidebar() -> Vec<Link> {
    LESSONS
        .iter()
        .map(|(to, title)| {
            Link::new(*to)
                .class("sidebar-link")
                .active_class("sidebar-link--active")
                .children(*title)
        })
        .collect()
}

fn print_sidebar(links: &[Link]) {
    for link in links {
        println!("  {}", link.render());
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let history = Rc::new(MemoryHistory::default().with_prefix("/react-katas"));
    let provider = RouterProvider::new(RouterConfig::default().history(history.clone()));

    let _logger = provider
        .context()
        .subscribe(|state| println!("now showing {}", state.path));

    let links = sidebar();
    print_sidebar(&links);

    for link in &links[1..] {
        link.render().click(&mut ClickEvent::new());
        print_sidebar(&links);
    }

    let back = GoBackButton::new("Previous lesson");
    while !back.render().is_disabled() {
        back.render().click(&mut ClickEvent::new());
    }

    println!("pushed entries: {:?}", history.entries());
}
