//! Procedural macros backing the `typekey` crate.
//!
//! `strong!` is the user-facing declaration macro, re-exported from
//! `typekey`; `impl_tuple_fields!` is internal codegen invoked once by the
//! `typekey` crate itself and is not part of the public API.

use proc_macro::TokenStream;

mod fields;
mod strong;

/// Declares strong aliases: a `<Name>Tag` uninhabited enum plus
/// `type <Name> = Strong<.., <Name>Tag>;` per declaration.
///
/// ```ignore
/// typekey::strong! {
///     /// Vehicle speed in metres per second.
///     pub type Velocity = f64;
///     pub type Acceleration = f64;
/// }
/// ```
#[proc_macro]
pub fn strong(input: TokenStream) -> TokenStream {
    strong::expand(input.into())
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}

/// Generates the tuple-to-list conversions and the per-position slot
/// accessors for every tuple arity up to the given maximum.
#[doc(hidden)]
#[proc_macro]
pub fn impl_tuple_fields(input: TokenStream) -> TokenStream {
    fields::expand(input.into())
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
