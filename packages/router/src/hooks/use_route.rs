use crate::utils::use_router_internal::consume_router;

/// A hook that returns the current path of the innermost router.
///
/// # Panics
/// Panics when no [`RouterProvider`](crate::components::RouterProvider) is mounted.
#[track_caller]
#[must_use]
pub fn use_route() -> String {
    match consume_router("use_route") {
        Ok(router) => router.current_path(),
        Err(err) => panic!("{err}"),
    }
}
