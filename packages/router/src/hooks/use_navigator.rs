use crate::{prelude::Navigator, utils::use_router_internal::consume_router};

/// A hook that provides access to the navigator to change the router history. Unlike
/// [`use_router`](crate::hooks::use_router), the returned handle cannot read the route.
///
/// ```rust
/// # use katas_router::prelude::*;
/// let provider = RouterProvider::default();
///
/// let navigator = use_navigator();
/// navigator.push("/machine-coding/autocomplete");
///
/// assert_eq!(use_route(), "/machine-coding/autocomplete");
/// ```
///
/// # Panics
/// Panics when no [`RouterProvider`](crate::components::RouterProvider) is mounted.
#[track_caller]
#[must_use]
pub fn use_navigator() -> Navigator {
    match consume_router("use_navigator") {
        Ok(router) => router.navigator(),
        Err(err) => panic!("{err}"),
    }
}
