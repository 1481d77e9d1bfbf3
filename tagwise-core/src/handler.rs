//! Handler declaration traits.
//!
//! Declaring a handler means implementing one of the four traits below; the
//! trait chosen *is* the handler's selector pair. No registration call
//! exists: visibility of the impl at the call site is sufficient, exactly
//! like any other trait impl.
//!
//! | trait | implemented for | applies to |
//! |---|---|---|
//! | [`Handle`] | the value type | one value type, one tag |
//! | [`Intercept`] | the value type | one value type, any tag |
//! | [`HandleAll`] | the tag | any value type, one tag |
//! | [`InterceptAll`] | [`AllTypes`] | any value type, any tag |
//!
//! Resolution ranks the four groups in the order listed: an exact handler
//! always beats an interceptor for the same value type, and anything
//! declared for the concrete value type beats an any-type declaration.
//! Within one group, a second overlapping impl is rejected by trait
//! coherence, so an ambiguous customization point is a build failure rather
//! than a silent pick:
//!
//! ```compile_fail
//! use tagwise_core::{AllTypes, InterceptAll, Produced, Tag};
//!
//! struct Nop;
//! impl Tag for Nop {}
//!
//! // Two universal handlers for the same tag: rejected (E0119).
//! impl<V> InterceptAll<Nop, V, ()> for AllTypes {
//!     type Output = Produced<u8>;
//!     fn intercept_all(self, _: Nop, _: &mut V, _: ()) -> Self::Output {
//!         Produced(1)
//!     }
//! }
//! impl<V> InterceptAll<Nop, V, ()> for AllTypes {
//!     type Output = Produced<u8>;
//!     fn intercept_all(self, _: Nop, _: &mut V, _: ()) -> Self::Output {
//!         Produced(2)
//!     }
//! }
//! ```
//!
//! [`AllTypes`]: crate::AllTypes

use crate::error::ErrorSlot;
use crate::tag::Tag;

/// An exact handler: one value type, one tag, one argument shape.
///
/// The handler receives the current value by mutable reference. Mutating
/// handlers return [`Unchanged`]; transforming handlers return
/// [`Produced`] with the replacement value.
///
/// [`Unchanged`]: crate::Unchanged
/// [`Produced`]: crate::Produced
#[diagnostic::on_unimplemented(
    message = "no applicable customization point: `{Self}` has no handler for this tag and argument shape",
    label = "missing `Handle` implementation",
    note = "declare `impl Handle<TheTag, Args> for {Self}`, or a broader handler via `Intercept`, `HandleAll`, or `InterceptAll`."
)]
pub trait Handle<T: Tag, A = ()> {
    /// [`Unchanged`], [`Produced`], or a `Result` of either.
    ///
    /// [`Unchanged`]: crate::Unchanged
    /// [`Produced`]: crate::Produced
    type Output;

    /// Execute the operation on the current value.
    fn handle(&mut self, tag: T, args: A) -> Self::Output;
}

/// An interceptor: one value type, any tag.
///
/// An `Intercept` impl is usually generic over the tag and wraps an inner
/// call; the error adapter (see [`error_adapter!`]) is declared this way.
/// It loses resolution to an exact [`Handle`] for the same value type.
///
/// [`error_adapter!`]: crate::error_adapter
#[diagnostic::on_unimplemented(
    message = "no applicable customization point: `{Self}` has no interceptor for this tag",
    label = "missing `Intercept` implementation"
)]
pub trait Intercept<T: Tag, A> {
    /// See [`Handle::Output`].
    type Output;

    /// Execute (or wrap) the operation on the current value.
    fn intercept(&mut self, tag: T, args: A) -> Self::Output;
}

/// An any-type handler: one tag, every value type its bounds admit.
///
/// Declared on the tag itself, which keeps the impl legal in the tag's own
/// crate no matter whose value types it covers.
#[diagnostic::on_unimplemented(
    message = "no applicable customization point: tag `{Self}` has no any-type handler for `{V}`",
    label = "missing `HandleAll` implementation",
    note = "declare `impl HandleAll<V, Args> for {Self}` (typically generic over the value type `V`)."
)]
pub trait HandleAll<V, A = ()>: Tag {
    /// See [`Handle::Output`].
    type Output;

    /// Execute the operation on the current value.
    fn handle_all(self, value: &mut V, args: A) -> Self::Output;
}

/// A universal handler: any value type, any tag it is declared for.
///
/// Declared on the [`AllTypes`] anchor. This is the last tier consulted,
/// the fallback when nothing narrower is in scope.
///
/// [`AllTypes`]: crate::AllTypes
#[diagnostic::on_unimplemented(
    message = "no applicable customization point: no universal handler covers this tag on `{V}`",
    label = "missing `InterceptAll` implementation for `AllTypes`"
)]
pub trait InterceptAll<T: Tag, V, A> {
    /// See [`Handle::Output`].
    type Output;

    /// Execute the operation on the current value.
    fn intercept_all(self, tag: T, value: &mut V, args: A) -> Self::Output;
}

/// A fallible handler using the out-parameter convention.
///
/// Instead of returning a `Result`, the handler reports failure by
/// populating the trailing [`ErrorSlot`]. `TryHandle` impls are not resolved
/// directly; the error adapter bridges them into [`Intercept`], translating
/// a populated slot into a chain-aborting [`OperationFailed`].
///
/// [`OperationFailed`]: crate::OperationFailed
pub trait TryHandle<T: Tag, A = ()> {
    /// [`Unchanged`] or [`Produced`]; the adapter wraps it in a `Result`.
    ///
    /// [`Unchanged`]: crate::Unchanged
    /// [`Produced`]: crate::Produced
    type Output;

    /// Execute the operation, reporting failure through `errors`.
    fn try_handle(&mut self, tag: T, args: A, errors: &mut ErrorSlot) -> Self::Output;
}
