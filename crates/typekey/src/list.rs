//! Inductive type lists and the index machinery behind [`Keyed`](crate::Keyed).
//!
//! Flat tuples are the external interface; recursion happens on the list
//! form. [`Tuple`] converts one into the other (impls are generated per
//! arity by `typekey-macros`), and [`Without`] removes a single type from a
//! type-level list, which is what makes a repeated argument type fail to
//! resolve instead of silently overwriting a slot.

use core::marker::PhantomData;

/// The empty list.
pub struct Nil;

/// A list cell: one value, then the rest.
pub struct Cons<H, T>(pub H, pub T);

/// Index of the first slot.
pub struct Z;

/// Index one past `I`.
pub struct S<I>(PhantomData<I>);

/// A flat tuple convertible into its inductive list form.
pub trait Tuple {
    /// `(A, B, C)` becomes `Cons<A, Cons<B, Cons<C, Nil>>>`.
    type AsList;

    fn into_list(self) -> Self::AsList;
}

/// Type-level removal of `T` from a list, at the position picked by `I`.
///
/// `I` is inferred. A list that does not contain `T` has no impl at all,
/// and a list that contains `T` twice leaves `I` ambiguous; both misuses
/// surface as type errors at the call site that needed the removal.
pub trait Without<T, I> {
    /// The list with that occurrence of `T` taken out.
    type Rest;
}

impl<T, Tail> Without<T, Z> for Cons<T, Tail> {
    type Rest = Tail;
}

impl<T, H, Tail, I> Without<T, S<I>> for Cons<H, Tail>
where
    Tail: Without<T, I>,
{
    type Rest = Cons<H, <Tail as Without<T, I>>::Rest>;
}
