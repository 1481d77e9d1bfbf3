//! Wrapper chains and dispatch-tier resolution.
//!
//! [`wrap`] and [`wrap_mut`] start a chain; each [`Wrapped::apply`] queues a
//! pending call as a [`Link`], and the link executes when the chain is next
//! extended or unwrapped. Which declaration trait a link runs through is
//! decided at the call site by method resolution over the link's receiver
//! chain:
//!
//! 1. a [`Handle`] impl on the held type takes the link by value,
//! 2. an [`Intercept`] impl takes it by `&mut`,
//! 3. a [`HandleAll`] impl on the tag is found one deref step down,
//! 4. an [`InterceptAll`] impl on [`AllTypes`] is found two steps down.
//!
//! Earlier candidates shadow later ones, so a type-exact declaration always
//! beats a catch-all and a handler always beats an interceptor for the same
//! selector. A call with no matching declaration at any tier does not
//! compile.

use std::ops::{Deref, DerefMut};

use crate::handler::{Handle, HandleAll, Intercept, InterceptAll};
use crate::outcome::Outcome;
use crate::slot::{Borrowed, LiveSlot, Owned, Slot};
use crate::tag::{AllTypes, Tag};

/// Start an owning chain: the value moves into the wrapper and comes back
/// out of [`unwrapped`](ApplyHandle::unwrapped).
///
/// ```
/// use tagwise_core::prelude::*;
/// use tagwise_core::{wrap, Unchanged};
///
/// struct Negate;
/// impl Tag for Negate {}
///
/// impl Handle<Negate> for i32 {
///     type Output = Unchanged;
///     fn handle(&mut self, _tag: Negate, _args: ()) -> Unchanged {
///         *self = -*self;
///         Unchanged
///     }
/// }
///
/// assert_eq!(wrap(3).apply(Negate, ()).unwrapped(), -3);
/// ```
pub fn wrap<V>(value: V) -> Wrapped<Owned<V>> {
    Wrapped {
        slot: Owned::new(value),
    }
}

/// Start a borrowing chain: handlers mutate the caller's value in place.
pub fn wrap_mut<V>(value: &mut V) -> Wrapped<Borrowed<'_, V>> {
    Wrapped {
        slot: Borrowed::new(value),
    }
}

/// A value mid-chain, between links.
#[derive(Debug)]
pub struct Wrapped<S: Slot> {
    slot: S,
}

impl<S: Slot> Wrapped<S> {
    pub(crate) fn from_slot(slot: S) -> Self {
        Wrapped { slot }
    }

    /// Queue a customization-point call. The call does not run until the
    /// returned link is extended with another `apply`, forced with
    /// [`run`](ApplyHandle::run), or unwrapped.
    pub fn apply<T: Tag, A>(self, tag: T, args: A) -> Link<S, T, A> {
        Link {
            inner: BlanketLink {
                inner: FallbackLink {
                    pending: Some(PendingCall {
                        slot: self.slot,
                        tag,
                        args,
                    }),
                },
            },
        }
    }

    /// End the chain and take the value back (or the failure, once the chain
    /// has passed through a fallible link).
    pub fn unwrapped(self) -> S::Finish {
        self.slot.finish()
    }
}

struct PendingCall<S, T, A> {
    slot: S,
    tag: T,
    args: A,
}

/// A queued customization-point call.
///
/// Nothing has run yet; the four `Apply*` traits decide which declaration
/// executes it. Dropping a link without forcing it silently discards the
/// whole chain, hence the lint.
#[must_use = "a queued call does nothing until the chain is extended, run, or unwrapped"]
pub struct Link<S: Slot, T: Tag, A> {
    inner: BlanketLink<S, T, A>,
}

/// Receiver for catch-all handler resolution; reached from [`Link`] by deref.
pub struct BlanketLink<S: Slot, T: Tag, A> {
    inner: FallbackLink<S, T, A>,
}

/// Receiver for catch-all interceptor resolution; the last deref step.
pub struct FallbackLink<S: Slot, T: Tag, A> {
    pending: Option<PendingCall<S, T, A>>,
}

impl<S: Slot, T: Tag, A> Deref for Link<S, T, A> {
    type Target = BlanketLink<S, T, A>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S: Slot, T: Tag, A> DerefMut for Link<S, T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<S: Slot, T: Tag, A> Deref for BlanketLink<S, T, A> {
    type Target = FallbackLink<S, T, A>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<S: Slot, T: Tag, A> DerefMut for BlanketLink<S, T, A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<S: Slot, T: Tag, A> FallbackLink<S, T, A> {
    fn take_pending(&mut self) -> PendingCall<S, T, A> {
        self.pending.take().expect("chain link already executed")
    }
}

/// Executes a link through a type-exact [`Handle`] declaration.
#[diagnostic::on_unimplemented(
    message = "no applicable customization point for `{Self}`",
    note = "the held type declares no `Handle`, `Intercept`, `HandleAll`, or `InterceptAll` matching this tag and argument list"
)]
pub trait ApplyHandle {
    /// Slot kind after the pending call runs.
    type NextSlot: Slot;

    /// Execute the pending call now.
    fn run(self) -> Wrapped<Self::NextSlot>;

    /// Execute the pending call and queue the next one.
    fn apply<T2: Tag, A2>(self, tag: T2, args: A2) -> Link<Self::NextSlot, T2, A2>
    where
        Self: Sized,
    {
        self.run().apply(tag, args)
    }

    /// Execute the pending call and end the chain.
    fn unwrapped(self) -> <Self::NextSlot as Slot>::Finish
    where
        Self: Sized,
    {
        self.run().unwrapped()
    }
}

/// Executes a link through a type-exact [`Intercept`] declaration.
pub trait ApplyIntercept {
    /// Slot kind after the pending call runs.
    type NextSlot: Slot;

    /// Execute the pending call now.
    fn run(&mut self) -> Wrapped<Self::NextSlot>;

    /// Execute the pending call and queue the next one.
    fn apply<T2: Tag, A2>(&mut self, tag: T2, args: A2) -> Link<Self::NextSlot, T2, A2> {
        self.run().apply(tag, args)
    }

    /// Execute the pending call and end the chain.
    fn unwrapped(&mut self) -> <Self::NextSlot as Slot>::Finish {
        self.run().unwrapped()
    }
}

/// Executes a link through a catch-all [`HandleAll`] declaration on the tag.
pub trait ApplyBlanket {
    /// Slot kind after the pending call runs.
    type NextSlot: Slot;

    /// Execute the pending call now.
    fn run(&mut self) -> Wrapped<Self::NextSlot>;

    /// Execute the pending call and queue the next one.
    fn apply<T2: Tag, A2>(&mut self, tag: T2, args: A2) -> Link<Self::NextSlot, T2, A2> {
        self.run().apply(tag, args)
    }

    /// Execute the pending call and end the chain.
    fn unwrapped(&mut self) -> <Self::NextSlot as Slot>::Finish {
        self.run().unwrapped()
    }
}

/// Executes a link through a catch-all [`InterceptAll`] declaration on
/// [`AllTypes`].
pub trait ApplyFallback {
    /// Slot kind after the pending call runs.
    type NextSlot: Slot;

    /// Execute the pending call now.
    fn run(&mut self) -> Wrapped<Self::NextSlot>;

    /// Execute the pending call and queue the next one.
    fn apply<T2: Tag, A2>(&mut self, tag: T2, args: A2) -> Link<Self::NextSlot, T2, A2> {
        self.run().apply(tag, args)
    }

    /// Execute the pending call and end the chain.
    fn unwrapped(&mut self) -> <Self::NextSlot as Slot>::Finish {
        self.run().unwrapped()
    }
}

impl<S, T, A> ApplyHandle for Link<S, T, A>
where
    S: Slot,
    T: Tag,
    S::Value: Handle<T, A>,
    <S::Value as Handle<T, A>>::Output: Outcome<S>,
{
    type NextSlot = <<S::Value as Handle<T, A>>::Output as Outcome<S>>::NextSlot;

    fn run(mut self) -> Wrapped<Self::NextSlot> {
        let PendingCall { slot, tag, args } = self.inner.inner.take_pending();
        #[cfg(feature = "tracing")]
        tracing::trace!(tag = T::name(), tier = "handle");
        match slot.into_live() {
            Ok(mut live) => {
                let output = live.value_mut().handle(tag, args);
                <<S::Value as Handle<T, A>>::Output as Outcome<S>>::chain(output, live)
            }
            Err(failure) => <<S::Value as Handle<T, A>>::Output as Outcome<S>>::carry(failure),
        }
    }
}

impl<S, T, A> ApplyIntercept for Link<S, T, A>
where
    S: Slot,
    T: Tag,
    S::Value: Intercept<T, A>,
    <S::Value as Intercept<T, A>>::Output: Outcome<S>,
{
    type NextSlot = <<S::Value as Intercept<T, A>>::Output as Outcome<S>>::NextSlot;

    fn run(&mut self) -> Wrapped<Self::NextSlot> {
        let PendingCall { slot, tag, args } = self.inner.inner.take_pending();
        #[cfg(feature = "tracing")]
        tracing::trace!(tag = T::name(), tier = "intercept");
        match slot.into_live() {
            Ok(mut live) => {
                let output = live.value_mut().intercept(tag, args);
                <<S::Value as Intercept<T, A>>::Output as Outcome<S>>::chain(output, live)
            }
            Err(failure) => <<S::Value as Intercept<T, A>>::Output as Outcome<S>>::carry(failure),
        }
    }
}

impl<S, T, A> ApplyBlanket for BlanketLink<S, T, A>
where
    S: Slot,
    T: Tag + HandleAll<S::Value, A>,
    <T as HandleAll<S::Value, A>>::Output: Outcome<S>,
{
    type NextSlot = <<T as HandleAll<S::Value, A>>::Output as Outcome<S>>::NextSlot;

    fn run(&mut self) -> Wrapped<Self::NextSlot> {
        let PendingCall { slot, tag, args } = self.inner.take_pending();
        #[cfg(feature = "tracing")]
        tracing::trace!(tag = T::name(), tier = "handle_all");
        match slot.into_live() {
            Ok(mut live) => {
                let output = tag.handle_all(live.value_mut(), args);
                <<T as HandleAll<S::Value, A>>::Output as Outcome<S>>::chain(output, live)
            }
            Err(failure) => <<T as HandleAll<S::Value, A>>::Output as Outcome<S>>::carry(failure),
        }
    }
}

impl<S, T, A> ApplyFallback for FallbackLink<S, T, A>
where
    S: Slot,
    T: Tag,
    AllTypes: InterceptAll<T, S::Value, A>,
    <AllTypes as InterceptAll<T, S::Value, A>>::Output: Outcome<S>,
{
    type NextSlot = <<AllTypes as InterceptAll<T, S::Value, A>>::Output as Outcome<S>>::NextSlot;

    fn run(&mut self) -> Wrapped<Self::NextSlot> {
        let PendingCall { slot, tag, args } = self.take_pending();
        #[cfg(feature = "tracing")]
        tracing::trace!(tag = T::name(), tier = "intercept_all");
        match slot.into_live() {
            Ok(mut live) => {
                let output = AllTypes.intercept_all(tag, live.value_mut(), args);
                <<AllTypes as InterceptAll<T, S::Value, A>>::Output as Outcome<S>>::chain(
                    output, live,
                )
            }
            Err(failure) => {
                <<AllTypes as InterceptAll<T, S::Value, A>>::Output as Outcome<S>>::carry(failure)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OperationFailed;
    use crate::outcome::{Produced, Unchanged};

    struct Double;
    impl Tag for Double {}

    impl Handle<Double> for i32 {
        type Output = Unchanged;
        fn handle(&mut self, _tag: Double, _args: ()) -> Unchanged {
            *self *= 2;
            Unchanged
        }
    }

    struct Stringify;
    impl Tag for Stringify {}

    impl Handle<Stringify> for i32 {
        type Output = Produced<String>;
        fn handle(&mut self, _tag: Stringify, _args: ()) -> Produced<String> {
            Produced(self.to_string())
        }
    }

    struct Bang;
    impl Tag for Bang {}

    impl Handle<Bang> for String {
        type Output = Unchanged;
        fn handle(&mut self, _tag: Bang, _args: ()) -> Unchanged {
            self.push('!');
            Unchanged
        }
    }

    struct Bump;
    impl Tag for Bump {}

    #[derive(Debug, PartialEq)]
    struct Counter {
        hits: u32,
    }

    impl Intercept<Bump, u32> for Counter {
        type Output = Unchanged;
        fn intercept(&mut self, _tag: Bump, by: u32) -> Unchanged {
            self.hits += by;
            Unchanged
        }
    }

    struct Clear;
    impl Tag for Clear {}

    impl<E> HandleAll<Vec<E>> for Clear {
        type Output = Unchanged;
        fn handle_all(self, value: &mut Vec<E>, _args: ()) -> Unchanged {
            value.clear();
            Unchanged
        }
    }

    struct Audit;
    impl Tag for Audit {}

    impl<'l, V: std::fmt::Debug> InterceptAll<Audit, V, &'l mut Vec<String>> for AllTypes {
        type Output = Unchanged;
        fn intercept_all(
            self,
            _tag: Audit,
            value: &mut V,
            log: &'l mut Vec<String>,
        ) -> Unchanged {
            log.push(format!("{value:?}"));
            Unchanged
        }
    }

    // Scale has both a type-exact handler on i32 and a catch-all; the two
    // disagree on purpose so precedence is observable.
    struct Scale;
    impl Tag for Scale {}

    impl Handle<Scale, i32> for i32 {
        type Output = Unchanged;
        fn handle(&mut self, _tag: Scale, factor: i32) -> Unchanged {
            *self *= factor;
            Unchanged
        }
    }

    impl<V> HandleAll<V, i32> for Scale {
        type Output = Unchanged;
        fn handle_all(self, _value: &mut V, _factor: i32) -> Unchanged {
            Unchanged
        }
    }

    struct Risky;
    impl Tag for Risky {}

    impl Intercept<Risky, bool> for i32 {
        type Output = Result<Unchanged, OperationFailed>;
        fn intercept(&mut self, _tag: Risky, fail: bool) -> Self::Output {
            if fail {
                Err(OperationFailed::new::<Risky>("forced failure".into()))
            } else {
                *self += 1;
                Ok(Unchanged)
            }
        }
    }

    #[test]
    fn owned_chain_mutates_in_order() {
        let out = wrap(3).apply(Double, ()).apply(Double, ()).unwrapped();
        assert_eq!(out, 12);
    }

    #[test]
    fn borrowed_chain_writes_through() {
        let mut v = 5;
        wrap_mut(&mut v).apply(Double, ()).run();
        assert_eq!(v, 10);
    }

    #[test]
    fn transforming_link_replaces_held_type() {
        let out = wrap(7).apply(Stringify, ()).apply(Bang, ()).unwrapped();
        assert_eq!(out, "7!");
    }

    #[test]
    fn intercept_runs_when_no_handler_declared() {
        let out = wrap(Counter { hits: 0 })
            .apply(Bump, 2)
            .apply(Bump, 3)
            .unwrapped();
        assert_eq!(out, Counter { hits: 5 });
    }

    #[test]
    fn catch_all_handler_covers_every_element_type() {
        assert_eq!(wrap(vec![1, 2, 3]).apply(Clear, ()).unwrapped(), Vec::<i32>::new());
        let out = wrap(vec!["a".to_string()]).apply(Clear, ()).unwrapped();
        assert!(out.is_empty());
    }

    #[test]
    fn fallback_interceptor_sees_any_held_type() {
        let mut log = Vec::new();
        let out = wrap(9).apply(Audit, &mut log).unwrapped();
        assert_eq!(out, 9);
        wrap("x").apply(Audit, &mut log).run();
        assert_eq!(log, ["9", "\"x\""]);
    }

    #[test]
    fn type_exact_handler_beats_catch_all() {
        assert_eq!(wrap(4).apply(Scale, 10).unwrapped(), 40);
        // No exact handler for u8, so the catch-all (a no-op) runs.
        assert_eq!(wrap(4u8).apply(Scale, 10).unwrapped(), 4u8);
    }

    #[test]
    fn fallible_chain_yields_ok_when_every_link_succeeds() {
        let out = wrap(0)
            .apply(Risky, false)
            .apply(Risky, false)
            .unwrapped();
        assert_eq!(out.unwrap(), 2);
    }

    #[test]
    fn failure_is_sticky_and_names_its_operation() {
        let out = wrap(0)
            .apply(Risky, false)
            .apply(Risky, true)
            .apply(Risky, false)
            .unwrapped();
        let err = out.unwrap_err();
        assert_eq!(err.operation(), std::any::type_name::<Risky>());
        assert_eq!(err.detail().to_string(), "forced failure");
    }

    #[test]
    fn infallible_links_after_a_failure_carry_it() {
        let out = wrap(1)
            .apply(Risky, true)
            .apply(Double, ())
            .unwrapped();
        assert!(out.is_err());
    }
}
