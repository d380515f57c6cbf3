#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

mod error;
pub use error::RouterError;

pub mod state;

/// Components interacting with the router.
pub mod components {
    mod history_buttons;
    pub use history_buttons::*;

    mod link;
    pub use link::*;

    mod router;
    pub use router::*;
}

mod contexts {
    pub(crate) mod navigator;
    pub(crate) mod router;
    pub use navigator::*;
    pub use router::*;
}

mod router_cfg;

/// Hooks for interacting with the router.
pub mod hooks {
    mod use_router;
    pub use use_router::*;

    mod use_route;
    pub use use_route::*;

    mod use_navigator;
    pub use use_navigator::*;
}

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::contexts::*;
    pub use crate::error::RouterError;
    pub use crate::hooks::*;
    pub use crate::router_cfg::RouterConfig;
    pub use crate::state::RouterState;
    pub use katas_history::{History, MemoryHistory};

    #[cfg(feature = "web")]
    pub use katas_history::WebHistory;
}

mod utils {
    pub(crate) mod html;
    pub(crate) mod use_router_internal;
}
