//! The wrapper and the aggregate must cost nothing over their plain
//! equivalents.

use std::mem::size_of;
use std::sync::Arc;

use typekey::{Keyed, Strong};

enum SizeCheck {}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(dead_code)]
enum PlainEnum {
    First,
    Second,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[allow(dead_code)]
enum Ordinal {
    First = 1,
    Second = 2,
}

#[test]
fn wrapper_is_the_size_of_its_underlying_type() {
    assert_eq!(size_of::<Strong<i8, SizeCheck>>(), size_of::<i8>());
    assert_eq!(size_of::<Strong<i32, SizeCheck>>(), size_of::<i32>());
    assert_eq!(size_of::<Strong<i64, SizeCheck>>(), size_of::<i64>());
    assert_eq!(size_of::<Strong<u32, SizeCheck>>(), size_of::<u32>());
    assert_eq!(size_of::<Strong<f32, SizeCheck>>(), size_of::<f32>());
    assert_eq!(size_of::<Strong<f64, SizeCheck>>(), size_of::<f64>());
    assert_eq!(size_of::<Strong<bool, SizeCheck>>(), size_of::<bool>());
    assert_eq!(
        size_of::<Strong<*const i32, SizeCheck>>(),
        size_of::<*const i32>()
    );
    assert_eq!(size_of::<Strong<String, SizeCheck>>(), size_of::<String>());
    assert_eq!(
        size_of::<Strong<Arc<i32>, SizeCheck>>(),
        size_of::<Arc<i32>>()
    );
    assert_eq!(
        size_of::<Strong<PlainEnum, SizeCheck>>(),
        size_of::<PlainEnum>()
    );
    assert_eq!(size_of::<Strong<Ordinal, SizeCheck>>(), size_of::<Ordinal>());
}

typekey::strong! {
    type SmallInt = i8;
    type Int = i32;
    type Long = i64;
    type Unsigned = u32;
    type Single = f32;
    type Double = f64;
    type Flag = bool;
    type RawPtr = *const i32;
    type Text = String;
    type Shared = Arc<i32>;
    type Plain = PlainEnum;
    type Ordered = Ordinal;
}

type AllKinds = Keyed<(
    SmallInt,
    Int,
    Long,
    Unsigned,
    Single,
    Double,
    Flag,
    RawPtr,
    Text,
    Shared,
    Plain,
    Ordered,
)>;

#[allow(dead_code)]
struct PlainFields {
    small: i8,
    int: i32,
    long: i64,
    unsigned: u32,
    single: f32,
    double: f64,
    flag: bool,
    raw: *const i32,
    text: String,
    shared: Arc<i32>,
    plain: PlainEnum,
    ordered: Ordinal,
}

#[test]
fn aggregate_is_the_size_of_the_equivalent_plain_struct() {
    assert_eq!(size_of::<AllKinds>(), size_of::<PlainFields>());
}
