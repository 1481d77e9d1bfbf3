//! Handler outcome types.
//!
//! A handler's return type decides what happens to the wrapper's slot: an
//! [`Unchanged`] keeps it (in-place mutation), a [`Produced`] replaces it
//! (transformation), and a `Result` of either makes the rest of the chain
//! fallible. This pins the mutating/transforming distinction in the type
//! system instead of inferring it from a void return.

use crate::chain::Wrapped;
use crate::error::OperationFailed;
use crate::slot::{Owned, Slot};

/// Mutating-shape outcome: the wrapper keeps its current slot.
///
/// The held type after the link is exactly the held type before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchanged;

/// Transforming-shape outcome: the wrapper's slot is replaced.
///
/// The held type after the link is `U`; the previous value is dropped (or,
/// for a borrowing wrapper, simply left behind in the caller's storage).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Produced<U>(pub U);

/// Maps a handler output onto the next wrapper in the chain.
///
/// Implemented for the two outcome shapes and their fallible `Result`
/// counterparts; `carry` threads an already-failed chain past a link without
/// running its handler.
pub trait Outcome<S: Slot>: Sized {
    /// Slot kind of the wrapper produced by this outcome.
    type NextSlot: Slot;

    /// Build the next wrapper from this outcome and the live slot.
    fn chain(self, live: S::Live) -> Wrapped<Self::NextSlot>;

    /// Build the next wrapper from a failure captured earlier in the chain.
    fn carry(failure: S::Failure) -> Wrapped<Self::NextSlot>;
}

impl<S: Slot> Outcome<S> for Unchanged {
    type NextSlot = S::Rebind<S::Live>;

    fn chain(self, live: S::Live) -> Wrapped<Self::NextSlot> {
        Wrapped::from_slot(S::rebind_live(live))
    }

    fn carry(failure: S::Failure) -> Wrapped<Self::NextSlot> {
        Wrapped::from_slot(S::rebind_failed(failure))
    }
}

impl<S: Slot, U> Outcome<S> for Produced<U> {
    type NextSlot = S::Rebind<Owned<U>>;

    fn chain(self, _replaced: S::Live) -> Wrapped<Self::NextSlot> {
        Wrapped::from_slot(S::rebind_live(Owned::new(self.0)))
    }

    fn carry(failure: S::Failure) -> Wrapped<Self::NextSlot> {
        Wrapped::from_slot(S::rebind_failed(failure))
    }
}

impl<S: Slot> Outcome<S> for Result<Unchanged, OperationFailed> {
    type NextSlot = S::RebindTry<S::Live>;

    fn chain(self, live: S::Live) -> Wrapped<Self::NextSlot> {
        match self {
            Ok(Unchanged) => Wrapped::from_slot(S::try_live(live)),
            Err(failure) => Wrapped::from_slot(S::try_failed(failure)),
        }
    }

    fn carry(failure: S::Failure) -> Wrapped<Self::NextSlot> {
        Wrapped::from_slot(S::try_failed(failure.into()))
    }
}

impl<S: Slot, U> Outcome<S> for Result<Produced<U>, OperationFailed> {
    type NextSlot = S::RebindTry<Owned<U>>;

    fn chain(self, _replaced: S::Live) -> Wrapped<Self::NextSlot> {
        match self {
            Ok(Produced(value)) => Wrapped::from_slot(S::try_live(Owned::new(value))),
            Err(failure) => Wrapped::from_slot(S::try_failed(failure)),
        }
    }

    fn carry(failure: S::Failure) -> Wrapped<Self::NextSlot> {
        Wrapped::from_slot(S::try_failed(failure.into()))
    }
}
