//! # tagwise-core
//!
//! Core traits and chain machinery for the tagwise customization-point
//! mechanism.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that declare tags and handlers without needing the ready-made
//! operations in `tagwise-std`.
//!
//! # Dispatch Model
//!
//! An operation is named by an empty [`Tag`] type. Behavior is attached by
//! implementing one of four declaration traits, and the trait chosen decides
//! how widely the declaration applies:
//!
//! 1. [`Handle`] - one value type, one tag. The most specific tier.
//! 2. [`Intercept`] - one value type, any tag it is implemented for.
//! 3. [`HandleAll`] - one tag, any value type. Implemented on the tag.
//! 4. [`InterceptAll`] - any value type, any tag. Implemented on
//!    [`AllTypes`].
//!
//! A call site picks the most specific applicable declaration; a call with
//! no applicable declaration, or two equally specific ones, fails to
//! compile. Resolution work happens entirely at build time and monomorphizes
//! to direct calls.
//!
//! # Chaining
//!
//! [`wrap`] (owning) or [`wrap_mut`] (borrowing) starts a chain;
//! [`apply`](Wrapped::apply) queues one call per link and
//! [`unwrapped`](Wrapped::unwrapped) takes the value back out:
//!
//! ```
//! use tagwise_core::prelude::*;
//! use tagwise_core::{wrap, Produced, Unchanged};
//!
//! struct Trim;
//! impl Tag for Trim {}
//!
//! struct Len;
//! impl Tag for Len {}
//!
//! impl Handle<Trim> for String {
//!     type Output = Unchanged;
//!     fn handle(&mut self, _tag: Trim, _args: ()) -> Unchanged {
//!         self.truncate(self.trim_end().len());
//!         Unchanged
//!     }
//! }
//!
//! impl Handle<Len> for String {
//!     type Output = Produced<usize>;
//!     fn handle(&mut self, _tag: Len, _args: ()) -> Produced<usize> {
//!         Produced(self.len())
//!     }
//! }
//!
//! let n = wrap("tag  ".to_string()).apply(Trim, ()).apply(Len, ()).unwrapped();
//! assert_eq!(n, 3);
//! ```
//!
//! A handler returning [`Unchanged`] keeps the held type; one returning
//! [`Produced`] replaces it, retyping the rest of the chain. Wrapping either
//! in a `Result<_, OperationFailed>` makes the chain fallible: later links
//! are skipped once a failure is recorded and `unwrapped` yields a `Result`.
//!
//! # Error Types
//!
//! - [`OperationFailed`] - a handler reported failure mid-chain
//! - [`ErrorSlot`] / [`error_adapter!`] - the out-parameter bridge for
//!   handler families that do not return `Result`

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod adapter;
mod chain;
mod error;
mod handler;
mod outcome;
mod slot;
mod tag;

pub use adapter::translate_errors;
pub use chain::{
    ApplyBlanket, ApplyFallback, ApplyHandle, ApplyIntercept, BlanketLink, FallbackLink, Link,
    Wrapped, wrap, wrap_mut,
};
pub use error::{BoxError, ErrorSlot, OperationFailed};
pub use handler::{Handle, HandleAll, Intercept, InterceptAll, TryHandle};
pub use outcome::{Outcome, Produced, Unchanged};
pub use slot::{Borrowed, Fallible, LiveSlot, Owned, Slot};
pub use tag::{AllTypes, Tag};

/// Traits that must be in scope to declare handlers and drive chains.
pub mod prelude {
    pub use crate::chain::{ApplyBlanket, ApplyFallback, ApplyHandle, ApplyIntercept};
    pub use crate::handler::{Handle, HandleAll, Intercept, InterceptAll, TryHandle};
    pub use crate::tag::Tag;
}
