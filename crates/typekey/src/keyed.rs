use crate::list::{Cons, Nil, Tuple, Without};

/// Access to the slot holding an `F` inside a larger product type.
///
/// `I` is the slot's position index and is always inferred; it exists so
/// that a product declared with the same type at two positions has two
/// competing impls, which makes any by-type access to that type ambiguous
/// instead of silently picking one.
///
/// Impls for [`Keyed`] over tuples up to arity 12 are generated by
/// `typekey-macros`.
pub trait Slot<F, I> {
    fn slot(&self) -> &F;

    fn slot_mut(&mut self) -> &mut F;
}

/// Folds a list of field values into `target`, one slot per value.
///
/// `Set` is the list of field types still unclaimed by earlier values.
/// Each step removes the head value's type from `Set`, so a second value
/// of the same type, or a value whose type is not a field at all, has
/// nothing to resolve against and fails to compile.
pub trait Fill<Target, Set, Indices> {
    fn fill(self, target: &mut Target);
}

impl<Target, Set> Fill<Target, Set, Nil> for Nil {
    fn fill(self, _target: &mut Target) {}
}

impl<H, Rest, Target, Set, I, K, Indices> Fill<Target, Set, Cons<(I, K), Indices>> for Cons<H, Rest>
where
    Target: Slot<H, I>,
    Set: Without<H, K>,
    Rest: Fill<Target, <Set as Without<H, K>>::Rest, Indices>,
{
    fn fill(self, target: &mut Target) {
        let Cons(value, rest) = self;
        *<Target as Slot<H, I>>::slot_mut(target) = value;
        rest.fill(target);
    }
}

/// A product type keyed by field *type* instead of position or name.
///
/// `T` is a tuple of pairwise distinct types, typically
/// [`Strong`](crate::Strong) aliases so that every field is independently
/// addressable:
///
/// ```
/// use typekey::Keyed;
///
/// typekey::strong! {
///     type UseCache = bool;
///     type CacheSize = i32;
///     type AutoCommit = bool;
/// }
///
/// type DbOptions = Keyed<(UseCache, CacheSize, AutoCommit)>;
///
/// // Any subset of the fields, in any order; the rest are defaulted.
/// let db = DbOptions::new((CacheSize::new(500), UseCache::new(true)));
/// assert_eq!(*db.get::<CacheSize, _>(), 500);
/// assert_eq!(*db.get::<AutoCommit, _>(), false);
/// ```
///
/// Storage is the flat tuple itself, so a `Keyed<T>` is exactly the size
/// of the equivalent plain struct.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(transparent)]
pub struct Keyed<T> {
    fields: T,
}

impl<T> Keyed<T> {
    /// Builds the aggregate from any subset of its field values, written
    /// in any order. Every omitted field is default-constructed.
    ///
    /// Each argument type may appear at most once and must be one of the
    /// fields:
    ///
    /// ```compile_fail
    /// use typekey::Keyed;
    ///
    /// typekey::strong! {
    ///     type Width = u32;
    ///     type Height = u32;
    /// }
    ///
    /// let _ = Keyed::<(Width, Height)>::new((Width::new(1), Width::new(2)));
    /// ```
    ///
    /// ```compile_fail
    /// use typekey::Keyed;
    ///
    /// typekey::strong! {
    ///     type Width = u32;
    ///     type Height = u32;
    ///     type Depth = u32;
    /// }
    ///
    /// let _ = Keyed::<(Width, Height)>::new((Depth::new(1),));
    /// ```
    pub fn new<Args, Indices>(args: Args) -> Self
    where
        T: Tuple + Default,
        Args: Tuple,
        Args::AsList: Fill<Self, T::AsList, Indices>,
    {
        let mut keyed = Keyed {
            fields: T::default(),
        };
        args.into_list().fill(&mut keyed);
        keyed
    }

    /// Builds the aggregate from the complete field tuple, in declared
    /// order.
    pub fn from_fields(fields: T) -> Self {
        Keyed { fields }
    }

    /// The complete field tuple, in declared order.
    pub fn into_fields(self) -> T {
        self.fields
    }

    /// The field of type `F`.
    ///
    /// `F` must be one of the aggregate's field types; there is no runtime
    /// "not found":
    ///
    /// ```compile_fail
    /// use typekey::Keyed;
    ///
    /// typekey::strong! {
    ///     type Width = u32;
    ///     type Height = u32;
    ///     type Depth = u32;
    /// }
    ///
    /// let frame = Keyed::<(Width, Height)>::default();
    /// let _ = frame.get::<Depth, _>();
    /// ```
    pub fn get<F, I>(&self) -> &F
    where
        Self: Slot<F, I>,
    {
        <Self as Slot<F, I>>::slot(self)
    }

    /// Mutable access to the field of type `F`.
    pub fn get_mut<F, I>(&mut self) -> &mut F
    where
        Self: Slot<F, I>,
    {
        <Self as Slot<F, I>>::slot_mut(self)
    }

    /// Replaces the field of type `F`, returning `self` for chaining.
    ///
    /// ```
    /// use typekey::Keyed;
    ///
    /// typekey::strong! {
    ///     type Width = u32;
    ///     type Height = u32;
    /// }
    ///
    /// let mut frame = Keyed::<(Width, Height)>::default();
    /// frame.set(Width::new(640)).set(Height::new(480));
    /// assert_eq!(*frame.get::<Width, _>(), 640);
    /// ```
    pub fn set<F, I>(&mut self, value: F) -> &mut Self
    where
        Self: Slot<F, I>,
    {
        *<Self as Slot<F, I>>::slot_mut(self) = value;
        self
    }

    /// Replaces the fields named by the argument tuple's types, in any
    /// order, and leaves every other field untouched.
    ///
    /// A duplicated argument type would make the outcome order-dependent,
    /// so it is rejected:
    ///
    /// ```compile_fail
    /// use typekey::Keyed;
    ///
    /// typekey::strong! {
    ///     type Width = u32;
    ///     type Height = u32;
    /// }
    ///
    /// let mut frame = Keyed::<(Width, Height)>::default();
    /// frame.update((Height::new(3), Height::new(4)));
    /// ```
    pub fn update<Args, Indices>(&mut self, args: Args)
    where
        T: Tuple,
        Args: Tuple,
        Args::AsList: Fill<Self, T::AsList, Indices>,
    {
        args.into_list().fill(self);
    }
}

typekey_macros::impl_tuple_fields!(12);
