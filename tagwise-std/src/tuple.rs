//! Positional tuple access.

use tagwise_core::{HandleAll, Produced, Tag};

/// Replace the held tuple with a clone of its `I`th field.
///
/// Implemented for tuples of arity 2 through 4.
#[derive(Debug, Clone, Copy, Default)]
pub struct Get<const I: usize>;

impl<const I: usize> Tag for Get<I> {}

macro_rules! impl_tuple_get {
    ($index:tt -> $out:ident; $($ty:ident),+) => {
        impl<$($ty,)+> HandleAll<($($ty,)+)> for Get<$index>
        where
            $out: Clone,
        {
            type Output = Produced<$out>;

            fn handle_all(self, value: &mut ($($ty,)+), _args: ()) -> Produced<$out> {
                Produced(value.$index.clone())
            }
        }
    };
}

impl_tuple_get!(0 -> T0; T0, T1);
impl_tuple_get!(1 -> T1; T0, T1);
impl_tuple_get!(0 -> T0; T0, T1, T2);
impl_tuple_get!(1 -> T1; T0, T1, T2);
impl_tuple_get!(2 -> T2; T0, T1, T2);
impl_tuple_get!(0 -> T0; T0, T1, T2, T3);
impl_tuple_get!(1 -> T1; T0, T1, T2, T3);
impl_tuple_get!(2 -> T2; T0, T1, T2, T3);
impl_tuple_get!(3 -> T3; T0, T1, T2, T3);

#[cfg(test)]
mod tests {
    use super::*;
    use tagwise_core::prelude::*;
    use tagwise_core::wrap;

    #[test]
    fn get_projects_one_field() {
        let out = wrap((1u8, "two", 3.0f32)).apply(Get::<1>, ()).unwrapped();
        assert_eq!(out, "two");
    }
}
