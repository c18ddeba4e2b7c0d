//! Built-in [`Printable`] and [`Describe`] implementations for leaves,
//! wrappers, sequences and JSON documents.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};
use serde_json::Value;

use crate::model::schema::{Describe, FieldDecl};
use crate::model::types::{Field, Printable, Shape};

macro_rules! display_leaf {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(
            impl Printable for $ty {
                fn type_name(&self) -> &'static str {
                    $name
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Leaf(self.to_string())
                }
            }

            impl Describe for $ty {}
        )*
    };
}

display_leaf! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    bool => "bool",
    char => "char",
    String => "String",
    &'static str => "str",
    NaiveDate => "NaiveDate",
    NaiveDateTime => "NaiveDateTime",
    NaiveTime => "NaiveTime",
    TimeDelta => "TimeDelta",
    serde_json::Number => "Number",
}

impl<Tz> Printable for DateTime<Tz>
where
    Tz: TimeZone + 'static,
    Tz::Offset: Display + 'static,
{
    fn type_name(&self) -> &'static str {
        "DateTime"
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(self.to_string())
    }
}

impl<Tz: TimeZone> Describe for DateTime<Tz> {}

// `Duration` has no `Display`; its `Debug` form (`1.5s`, `250ms`) is the canonical one.
impl Printable for std::time::Duration {
    fn type_name(&self) -> &'static str {
        "Duration"
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Leaf(format!("{:?}", self))
    }
}

impl Describe for std::time::Duration {}

impl<T: Printable> Printable for Option<T> {
    fn type_name(&self) -> &'static str {
        "Option"
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Some(value) => Shape::Transparent(value),
            None => Shape::Null,
        }
    }
}

macro_rules! transparent_wrapper {
    ($($wrapper:ident => $name:literal),* $(,)?) => {
        $(
            impl<T: Printable> Printable for $wrapper<T> {
                fn type_name(&self) -> &'static str {
                    $name
                }

                fn shape(&self) -> Shape<'_> {
                    Shape::Transparent(&**self)
                }
            }

            impl<T: Describe> Describe for $wrapper<T> {
                fn declared_fields() -> Vec<FieldDecl> {
                    T::declared_fields()
                }
            }
        )*
    };
}

transparent_wrapper! {
    Box => "Box",
    Rc => "Rc",
    Arc => "Arc",
}

impl<T: Describe> Describe for Option<T> {
    fn declared_fields() -> Vec<FieldDecl> {
        T::declared_fields()
    }
}

impl<T: Printable> Printable for Vec<T> {
    fn type_name(&self) -> &'static str {
        "Vec"
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Composite(
            self.iter()
                .enumerate()
                .map(|(index, item)| Field::element(index, item))
                .collect(),
        )
    }
}

// Items share the path of their container, so their fields are reachable
// through it.
impl<T: Describe> Describe for Vec<T> {
    fn declared_fields() -> Vec<FieldDecl> {
        T::declared_fields()
    }
}

impl<V: Printable> Printable for BTreeMap<String, V> {
    fn type_name(&self) -> &'static str {
        "BTreeMap"
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Composite(
            self.iter()
                .map(|(key, value)| Field::new(key.as_str(), value))
                .collect(),
        )
    }
}

impl<V> Describe for BTreeMap<String, V> {}

impl Printable for Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Number(_) => "Number",
            Value::String(_) => "String",
            Value::Array(_) => "Array",
            Value::Object(_) => "Object",
        }
    }

    fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Null,
            Value::Bool(flag) => Shape::Transparent(flag),
            Value::Number(number) => Shape::Transparent(number),
            Value::String(text) => Shape::Transparent(text),
            Value::Array(items) => Shape::Composite(
                items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| Field::element(index, item))
                    .collect(),
            ),
            Value::Object(map) => Shape::Composite(
                map.iter()
                    .map(|(key, value)| Field::new(key.as_str(), value))
                    .collect(),
            ),
        }
    }
}

impl Describe for Value {}
