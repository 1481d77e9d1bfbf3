//! # tagwise - Tag-Dispatched Customization Points
//!
//! `tagwise` lets a crate name an operation with an empty **tag** type and
//! lets any other crate attach behavior to that tag for its own value types.
//! Resolution is entirely static: the most specific applicable handler wins,
//! an ambiguous or unhandled call is a build error, and every call
//! monomorphizes to a direct invocation.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagwise::prelude::*;
//! use tagwise::{Unchanged, wrap};
//!
//! struct Add;
//! impl Tag for Add {}
//!
//! impl Handle<Add, i32> for i32 {
//!     type Output = Unchanged;
//!     fn handle(&mut self, _tag: Add, delta: i32) -> Unchanged {
//!         *self += delta;
//!         Unchanged
//!     }
//! }
//!
//! let n = wrap(5).apply(Add, 4).apply(Add, 1).unwrapped();
//! assert_eq!(n, 10);
//! ```
//!
//! Ready-made tags for common operations live in [`std_tags`]; the
//! `macros` feature adds `#[derive(Tag)]`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Tags
pub use tagwise_core::{AllTypes, Tag};

// Declaration traits
pub use tagwise_core::{Handle, HandleAll, Intercept, InterceptAll, TryHandle};

// Outcomes
pub use tagwise_core::{Outcome, Produced, Unchanged};

// Chain entry points, links, and slots
pub use tagwise_core::{
    ApplyBlanket, ApplyFallback, ApplyHandle, ApplyIntercept, BlanketLink, Borrowed, Fallible,
    FallbackLink, Link, LiveSlot, Owned, Slot, Wrapped, wrap, wrap_mut,
};

// Error types and the out-parameter bridge
pub use tagwise_core::{BoxError, ErrorSlot, OperationFailed, error_adapter, translate_errors};

/// Ready-made tags from `tagwise-std`, grouped by concern.
pub mod std_tags {
    pub use tagwise_std::algs::{Dedup, Reverse, Sort};
    pub use tagwise_std::each::ForEach;
    pub use tagwise_std::io::{Lines, Print};
    pub use tagwise_std::tuple::Get;
}

#[cfg(feature = "macros")]
pub use tagwise_macros::Tag;

/// Traits that must be in scope to declare handlers and drive chains.
pub mod prelude {
    pub use tagwise_core::prelude::{
        ApplyBlanket, ApplyFallback, ApplyHandle, ApplyIntercept, Handle, HandleAll, Intercept,
        InterceptAll, Tag, TryHandle,
    };
}
