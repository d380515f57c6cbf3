/// Errors surfaced by the router hooks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RouterError {
    /// A hook looked for a router but no [`RouterProvider`](crate::components::RouterProvider) is
    /// mounted on this thread.
    #[error("`{hook}` must be called in a descendant of a RouterProvider")]
    OutsideProvider {
        /// The hook or component that was called.
        hook: &'static str,
    },
}
