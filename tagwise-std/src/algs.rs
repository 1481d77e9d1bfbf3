//! In-place sequence operations.
//!
//! Each tag is declared with a [`HandleAll`] over `Vec<E>`, so it applies to
//! every element type its bounds admit while remaining open to narrower
//! [`Handle`] impls downstream.
//!
//! [`Handle`]: tagwise_core::Handle

use tagwise_core::{HandleAll, Tag, Unchanged};

/// Sort the held `Vec` in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort;

impl Tag for Sort {}

impl<E: Ord> HandleAll<Vec<E>> for Sort {
    type Output = Unchanged;

    fn handle_all(self, value: &mut Vec<E>, _args: ()) -> Unchanged {
        value.sort();
        Unchanged
    }
}

/// Drop consecutive duplicate elements. Usually chained after [`Sort`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Dedup;

impl Tag for Dedup {}

impl<E: PartialEq> HandleAll<Vec<E>> for Dedup {
    type Output = Unchanged;

    fn handle_all(self, value: &mut Vec<E>, _args: ()) -> Unchanged {
        value.dedup();
        Unchanged
    }
}

/// Reverse the held `Vec` in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl Tag for Reverse {}

impl<E> HandleAll<Vec<E>> for Reverse {
    type Output = Unchanged;

    fn handle_all(self, value: &mut Vec<E>, _args: ()) -> Unchanged {
        value.reverse();
        Unchanged
    }
}
