// Typed projection of tree nodes onto native Rust types, and deep copies.
use serde_json::{Map, Value};

use crate::edit::JsonKind;
use crate::error::{Error, Result};

/// Conversion from a borrowed, non-null JSON node.
///
/// Container targets (`&Map`, `&Vec<Value>`) hand out a view of the node
/// itself; scalar targets copy the value out. Implementations never coerce
/// between kinds: a string holding digits is not a number.
pub trait FromNode<'a>: Sized {
    /// Human-readable target name used in error messages.
    const EXPECTED: &'static str;

    fn from_node(node: &'a Value) -> Result<Self>;

    /// The value an explicit JSON null maps to, if the target is nullable.
    fn from_null() -> Option<Self> {
        None
    }
}

fn mismatch(expected: &'static str, node: &Value) -> Error {
    Error::TypeMismatch {
        expected,
        found: JsonKind::of(node),
    }
}

impl<'a, T: FromNode<'a>> FromNode<'a> for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    fn from_node(node: &'a Value) -> Result<Self> {
        if node.is_null() {
            return Ok(None);
        }
        T::from_node(node).map(Some)
    }

    fn from_null() -> Option<Self> {
        Some(None)
    }
}

impl<'a> FromNode<'a> for bool {
    const EXPECTED: &'static str = "bool";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_bool().ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

macro_rules! from_node_signed {
    ($($t:ty),*) => {$(
        impl<'a> FromNode<'a> for $t {
            const EXPECTED: &'static str = stringify!($t);

            fn from_node(node: &'a Value) -> Result<Self> {
                node.as_i64()
                    .and_then(|n| <$t>::try_from(n).ok())
                    .ok_or_else(|| mismatch(Self::EXPECTED, node))
            }
        }
    )*};
}

macro_rules! from_node_unsigned {
    ($($t:ty),*) => {$(
        impl<'a> FromNode<'a> for $t {
            const EXPECTED: &'static str = stringify!($t);

            fn from_node(node: &'a Value) -> Result<Self> {
                node.as_u64()
                    .and_then(|n| <$t>::try_from(n).ok())
                    .ok_or_else(|| mismatch(Self::EXPECTED, node))
            }
        }
    )*};
}

from_node_signed!(i8, i16, i32, i64, isize);
from_node_unsigned!(u8, u16, u32, u64, usize);

impl<'a> FromNode<'a> for f64 {
    const EXPECTED: &'static str = "f64";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_f64().ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

impl<'a> FromNode<'a> for f32 {
    const EXPECTED: &'static str = "f32";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_f64()
            .map(|f| f as f32)
            // out of f32 range narrows to infinity
            .filter(|f| f.is_finite())
            .ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

impl<'a> FromNode<'a> for String {
    const EXPECTED: &'static str = "string";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

impl<'a> FromNode<'a> for &'a str {
    const EXPECTED: &'static str = "string";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_str().ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

impl<'a> FromNode<'a> for &'a Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_object().ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

impl<'a> FromNode<'a> for &'a Vec<Value> {
    const EXPECTED: &'static str = "array";

    fn from_node(node: &'a Value) -> Result<Self> {
        node.as_array().ok_or_else(|| mismatch(Self::EXPECTED, node))
    }
}

impl<'a> FromNode<'a> for Value {
    const EXPECTED: &'static str = "value";

    fn from_node(node: &'a Value) -> Result<Self> {
        Ok(node.clone())
    }
}

/// Converts a JSON array into a `Vec<T>`.
///
/// Null elements are always rejected with [`Error::NullElement`], even when
/// `T` is an `Option`; iterate the array yourself if nulls are expected.
/// Nothing is returned unless every element converts.
pub fn as_array<'a, T: FromNode<'a>>(node: &'a Value) -> Result<Vec<T>> {
    let items = node.as_array().ok_or(Error::NotAnArray {
        found: JsonKind::of(node),
    })?;
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        if item.is_null() {
            return Err(Error::NullElement { index });
        }
        out.push(T::from_node(item)?);
    }
    Ok(out)
}

/// Independent copy of a node, for reuse in another tree. `None` passes through.
pub fn deep_clone(node: Option<&Value>) -> Option<Value> {
    node.map(clone_value)
}

/// Copies an object; the copy has no tie to any file the original came from.
pub fn deep_clone_object(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(k, v)| (k.clone(), clone_value(v)))
        .collect()
}

fn clone_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => Value::Object(deep_clone_object(map)),
        Value::Array(items) => Value::Array(items.iter().map(clone_value).collect()),
        scalar => scalar.clone(),
    }
}
