//! Per-element dispatch.

use tagwise_core::{HandleAll, Tag, Unchanged};

/// Apply an inner tag to every element of the held `Vec`.
///
/// The inner tag is resolved per element through the same declaration
/// traits, so `ForEach(Negate)` on a `Vec<i32>` runs whatever handler
/// `Negate` has for `i32`. Only mutating inner tags are accepted; a
/// transforming inner tag would retype elements individually, which a
/// homogeneous `Vec` cannot represent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForEach<F>(pub F);

impl<F: Tag> Tag for ForEach<F> {}

impl<F, E, A> HandleAll<Vec<E>, A> for ForEach<F>
where
    F: Tag + Copy + HandleAll<E, A, Output = Unchanged>,
    A: Clone,
{
    type Output = Unchanged;

    fn handle_all(self, value: &mut Vec<E>, args: A) -> Unchanged {
        for element in value.iter_mut() {
            self.0.handle_all(element, args.clone());
        }
        Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwise_core::wrap;
    use tagwise_core::prelude::*;

    #[derive(Clone, Copy)]
    struct AddTo;
    impl Tag for AddTo {}

    impl HandleAll<i32, i32> for AddTo {
        type Output = Unchanged;
        fn handle_all(self, value: &mut i32, delta: i32) -> Unchanged {
            *value += delta;
            Unchanged
        }
    }

    #[test]
    fn for_each_runs_the_inner_tag_per_element() {
        let out = wrap(vec![1, 2, 3]).apply(ForEach(AddTo), 10).unwrapped();
        assert_eq!(out, [11, 12, 13]);
    }
}
