//! Bridging out-parameter handlers into the chain.
//!
//! Some handler families report failure by writing into an [`ErrorSlot`]
//! rather than returning a `Result`. [`translate_errors`] runs one such call
//! and converts a populated slot into an [`OperationFailed`];
//! [`error_adapter!`] stamps out the [`Intercept`] impl that routes every
//! tag a type [`TryHandle`]s through that translation.
//!
//! [`Intercept`]: crate::Intercept
//! [`TryHandle`]: crate::TryHandle

use crate::error::{ErrorSlot, OperationFailed};
use crate::handler::TryHandle;
use crate::tag::Tag;

/// Run one out-parameter call and lift its error slot into a `Result`.
///
/// The handler's return value is discarded when the slot was populated; by
/// the out-parameter convention it is meaningless on failure.
pub fn translate_errors<H, T, A>(
    handler: &mut H,
    tag: T,
    args: A,
) -> Result<H::Output, OperationFailed>
where
    H: TryHandle<T, A> + ?Sized,
    T: Tag,
{
    let mut errors = ErrorSlot::new();
    let output = handler.try_handle(tag, args, &mut errors);
    match errors.take() {
        Some(detail) => Err(OperationFailed::new::<T>(detail)),
        None => Ok(output),
    }
}

/// Declare a type's [`TryHandle`] impls as its interceptor.
///
/// Expands to a tag-generic [`Intercept`] impl for `$ty` that forwards every
/// tag the type has a [`TryHandle`] impl for through [`translate_errors`].
/// Chains touching the type become fallible from that link on.
///
/// ```
/// use tagwise_core::prelude::*;
/// use tagwise_core::{error_adapter, wrap, ErrorSlot, Unchanged};
///
/// struct Probe;
/// impl Tag for Probe {}
///
/// #[derive(Debug)]
/// struct Device {
///     online: bool,
/// }
///
/// impl TryHandle<Probe> for Device {
///     type Output = Unchanged;
///     fn try_handle(&mut self, _tag: Probe, _args: (), errors: &mut ErrorSlot) -> Unchanged {
///         if !self.online {
///             errors.set("device offline");
///         }
///         Unchanged
///     }
/// }
///
/// error_adapter!(Device);
///
/// let ok = wrap(Device { online: true }).apply(Probe, ()).unwrapped();
/// assert!(ok.is_ok());
///
/// let err = wrap(Device { online: false }).apply(Probe, ()).unwrapped();
/// assert!(err.unwrap_err().to_string().contains("device offline"));
/// ```
///
/// [`Intercept`]: crate::Intercept
/// [`TryHandle`]: crate::TryHandle
#[macro_export]
macro_rules! error_adapter {
    ($ty:ty) => {
        impl<T, A> $crate::Intercept<T, A> for $ty
        where
            T: $crate::Tag,
            $ty: $crate::TryHandle<T, A>,
        {
            type Output = ::core::result::Result<
                <$ty as $crate::TryHandle<T, A>>::Output,
                $crate::OperationFailed,
            >;

            fn intercept(&mut self, tag: T, args: A) -> Self::Output {
                $crate::translate_errors(self, tag, args)
            }
        }
    };
}
