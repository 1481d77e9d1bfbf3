//! Operation tags.
//!
//! A tag is an empty type naming one operation. Tags carry no data and no
//! behavior of their own; handlers attach behavior to them through the
//! declaration traits, and the same tag can be handled differently by every
//! value type it is applied to.

/// Marker for an operation name.
///
/// Implementing `Tag` is the whole definition of a new customization point:
///
/// ```
/// use tagwise_core::Tag;
///
/// struct Flush;
/// impl Tag for Flush {}
///
/// assert!(Flush::name().ends_with("Flush"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an operation tag",
    label = "not a tag",
    note = "add `impl Tag for {Self} {{}}` (or derive it) to use this type in `apply`."
)]
pub trait Tag {
    /// Diagnostic name of the operation. Defaults to the type name.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Anchor type for universal handlers.
///
/// [`InterceptAll`] impls are written for `AllTypes` rather than for a
/// blanket `V`, which keeps them coherent and lets downstream crates declare
/// universal handlers for their own tags.
///
/// [`InterceptAll`]: crate::InterceptAll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllTypes;
