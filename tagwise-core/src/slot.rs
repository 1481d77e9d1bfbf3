//! Value slots held by a [`Wrapped`] chain.
//!
//! A slot is the storage strategy behind a wrapper: [`Owned`] moves the value
//! in, [`Borrowed`] holds a `&mut` into caller storage, and [`Fallible`]
//! wraps either of those once a chain has gained a failure path. The trait is
//! sealed; downstream code interacts with slots only through the wrapper API.
//!
//! [`Wrapped`]: crate::chain::Wrapped

use std::convert::Infallible;

use crate::error::OperationFailed;

mod sealed {
    pub trait Sealed {}
    impl<V> Sealed for super::Owned<V> {}
    impl<V> Sealed for super::Borrowed<'_, V> {}
    impl<S: super::LiveSlot> Sealed for super::Fallible<S> {}
}

/// Storage strategy of a wrapper.
///
/// `Rebind` names the slot kind after an infallible link and `RebindTry` the
/// kind after a fallible one; both are identity-like for [`Fallible`], so a
/// chain that has gone fallible stays fallible.
pub trait Slot: Sized + sealed::Sealed {
    /// Held value type.
    type Value;
    /// The not-yet-failed form of this slot.
    type Live: Slot<Value = Self::Value> + LiveSlot;
    /// Failure a link must carry past this slot. [`Infallible`] for plain
    /// slots, so infallible chains pay nothing for the failure path.
    type Failure: Into<OperationFailed>;
    /// What unwrapping yields.
    type Finish;
    /// Slot kind after an infallible link leaves live storage `N`.
    type Rebind<N: LiveSlot>: Slot;
    /// Slot kind after a fallible link leaves live storage `N`.
    type RebindTry<N: LiveSlot>: Slot;

    /// Split into the live slot or the failure already carried.
    fn into_live(self) -> Result<Self::Live, Self::Failure>;

    /// Wrap live storage in this slot family's infallible form.
    fn rebind_live<N: LiveSlot>(live: N) -> Self::Rebind<N>;

    /// Thread a captured failure through an infallible link.
    fn rebind_failed<N: LiveSlot>(failure: Self::Failure) -> Self::Rebind<N>;

    /// Wrap live storage in this slot family's fallible form.
    fn try_live<N: LiveSlot>(live: N) -> Self::RebindTry<N>;

    /// Record a failure in this slot family's fallible form.
    fn try_failed<N: LiveSlot>(failure: OperationFailed) -> Self::RebindTry<N>;

    /// Surrender the stored value (or the failure, for fallible slots).
    fn finish(self) -> Self::Finish;
}

/// A slot that is definitely holding a value.
pub trait LiveSlot: Slot {
    /// Mutable access for handlers.
    fn value_mut(&mut self) -> &mut Self::Value;
}

/// Slot that owns its value. Produced by [`wrap`](crate::chain::wrap) and by
/// every transforming link.
#[derive(Debug)]
pub struct Owned<V>(V);

impl<V> Owned<V> {
    pub(crate) fn new(value: V) -> Self {
        Owned(value)
    }
}

impl<V> Slot for Owned<V> {
    type Value = V;
    type Live = Self;
    type Failure = Infallible;
    type Finish = V;
    type Rebind<N: LiveSlot> = N;
    type RebindTry<N: LiveSlot> = Fallible<N>;

    fn into_live(self) -> Result<Self::Live, Self::Failure> {
        Ok(self)
    }

    fn rebind_live<N: LiveSlot>(live: N) -> Self::Rebind<N> {
        live
    }

    fn rebind_failed<N: LiveSlot>(failure: Self::Failure) -> Self::Rebind<N> {
        match failure {}
    }

    fn try_live<N: LiveSlot>(live: N) -> Self::RebindTry<N> {
        Fallible(Ok(live))
    }

    fn try_failed<N: LiveSlot>(failure: OperationFailed) -> Self::RebindTry<N> {
        Fallible(Err(failure))
    }

    fn finish(self) -> Self::Finish {
        self.0
    }
}

impl<V> LiveSlot for Owned<V> {
    fn value_mut(&mut self) -> &mut Self::Value {
        &mut self.0
    }
}

/// Slot that borrows caller storage. Produced by
/// [`wrap_mut`](crate::chain::wrap_mut); mutations land in the caller's
/// value, so transforming links on a borrowed chain produce an [`Owned`]
/// slot instead of rebinding the borrow.
#[derive(Debug)]
pub struct Borrowed<'a, V>(&'a mut V);

impl<'a, V> Borrowed<'a, V> {
    pub(crate) fn new(value: &'a mut V) -> Self {
        Borrowed(value)
    }
}

impl<'a, V> Slot for Borrowed<'a, V> {
    type Value = V;
    type Live = Self;
    type Failure = Infallible;
    type Finish = &'a mut V;
    type Rebind<N: LiveSlot> = N;
    type RebindTry<N: LiveSlot> = Fallible<N>;

    fn into_live(self) -> Result<Self::Live, Self::Failure> {
        Ok(self)
    }

    fn rebind_live<N: LiveSlot>(live: N) -> Self::Rebind<N> {
        live
    }

    fn rebind_failed<N: LiveSlot>(failure: Self::Failure) -> Self::Rebind<N> {
        match failure {}
    }

    fn try_live<N: LiveSlot>(live: N) -> Self::RebindTry<N> {
        Fallible(Ok(live))
    }

    fn try_failed<N: LiveSlot>(failure: OperationFailed) -> Self::RebindTry<N> {
        Fallible(Err(failure))
    }

    fn finish(self) -> Self::Finish {
        self.0
    }
}

impl<V> LiveSlot for Borrowed<'_, V> {
    fn value_mut(&mut self) -> &mut Self::Value {
        &mut *self.0
    }
}

/// Slot of a chain that has passed through a fallible link.
///
/// Sticky: once a failure is recorded, later links skip their handlers and
/// carry the failure to the unwrap site, which yields it as an `Err`.
#[derive(Debug)]
pub struct Fallible<S: LiveSlot>(Result<S, OperationFailed>);

impl<S: LiveSlot> Slot for Fallible<S> {
    type Value = S::Value;
    type Live = S;
    type Failure = OperationFailed;
    type Finish = Result<S::Finish, OperationFailed>;
    type Rebind<N: LiveSlot> = Fallible<N>;
    type RebindTry<N: LiveSlot> = Fallible<N>;

    fn into_live(self) -> Result<Self::Live, Self::Failure> {
        self.0
    }

    fn rebind_live<N: LiveSlot>(live: N) -> Self::Rebind<N> {
        Fallible(Ok(live))
    }

    fn rebind_failed<N: LiveSlot>(failure: Self::Failure) -> Self::Rebind<N> {
        Fallible(Err(failure))
    }

    fn try_live<N: LiveSlot>(live: N) -> Self::RebindTry<N> {
        Fallible(Ok(live))
    }

    fn try_failed<N: LiveSlot>(failure: OperationFailed) -> Self::RebindTry<N> {
        Fallible(Err(failure))
    }

    fn finish(self) -> Self::Finish {
        self.0.map(S::finish)
    }
}
