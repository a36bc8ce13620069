//! Strong typedefs and type-keyed tuples.
//!
//! Two constructs, usable separately but designed to compose:
//!
//! - [`Strong<U, Tag>`](Strong) turns a plain value type into a distinct,
//!   non-interchangeable type. Two strong aliases of the same `U` cannot be
//!   compared, combined, or assigned to one another; the wrapper has the
//!   exact size and layout of `U` and forwards its operators.
//! - [`Keyed<T>`](Keyed) holds exactly one value of each type in the tuple
//!   `T` and is read and written by *type*, not by position. Construction
//!   takes any subset of the fields in any order and defaults the rest,
//!   which is what makes it work as an options bundle.
//!
//! Strong aliases exist precisely to give each aggregate field its own
//! type:
//!
//! ```
//! use typekey::Keyed;
//!
//! typekey::strong! {
//!     /// Pages held in the block cache.
//!     type CacheSize = i32;
//!     type UseCache = bool;
//!     type AutoCommit = bool;
//! }
//!
//! type DbOptions = Keyed<(UseCache, CacheSize, AutoCommit)>;
//!
//! let mut db = DbOptions::new((AutoCommit::new(true), CacheSize::new(500)));
//! assert_eq!(*db.get::<CacheSize, _>(), 500);
//! assert_eq!(*db.get::<UseCache, _>(), false);
//!
//! db.update((UseCache::new(true), CacheSize::new(250)));
//! assert_eq!(*db.get::<AutoCommit, _>(), true);
//!
//! // Same-tag arithmetic stays tagged; a ratio of two tagged values is a
//! // bare scalar again.
//! let headroom = CacheSize::new(500) - CacheSize::new(250);
//! assert_eq!(headroom / CacheSize::new(125), 2);
//! ```
//!
//! All misuse is rejected at compile time; neither construct has a runtime
//! failure mode or any storage overhead over the plain equivalents.

pub mod list;

mod keyed;
mod strong;

pub use keyed::{Fill, Keyed, Slot};
pub use list::Tuple;
pub use strong::Strong;

/// Declares strong aliases: one tag type plus one alias per line.
///
/// ```
/// typekey::strong! {
///     /// Vehicle speed in metres per second.
///     pub type Velocity = f64;
///     pub type Acceleration = f64;
/// }
///
/// let v = Velocity::new(27.0);
/// assert_eq!(*v, 27.0);
/// ```
///
/// Each declaration expands to an uninhabited `<Name>Tag` enum and
/// `type <Name> = Strong<<underlying>, <Name>Tag>;`, carrying attributes
/// and visibility through.
pub use typekey_macros::strong;
