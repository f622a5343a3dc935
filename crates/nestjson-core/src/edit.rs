use std::fmt;

use serde_json::{Map, Value};

use crate::convert::FromNode;
use crate::error::{Error, Result};
use crate::path::{PathOptions, PropertyPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind { Null, Bool, Number, String, Object, Array }

impl JsonKind {
    pub fn of(v: &Value) -> Self {
        match v {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Object(_) => JsonKind::Object,
            Value::Array(_) => JsonKind::Array,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "a boolean",
            JsonKind::Number => "a number",
            JsonKind::String => "a string",
            JsonKind::Object => "an object",
            JsonKind::Array => "an array",
        };
        f.write_str(s)
    }
}

fn blocked(segment: &str, path: &PropertyPath<'_>, found: &Value) -> Error {
    Error::NullIntermediate {
        segment: segment.to_string(),
        path: path.as_str().to_string(),
        found: JsonKind::of(found),
    }
}

fn not_found(segment: &str, path: &PropertyPath<'_>) -> Error {
    Error::PropertyNotFound {
        segment: segment.to_string(),
        path: path.as_str().to_string(),
    }
}

enum Walk<'v, 'p> {
    Found(&'v Map<String, Value>),
    Missing(&'p str),
}

/// Walks the parent segments of `path` without creating anything.
fn walk<'v, 'p>(root: &'v Map<String, Value>, path: &PropertyPath<'p>) -> Result<Walk<'v, 'p>> {
    let (parents, _) = path.split_last();
    let mut target = root;
    for segment in parents {
        match target.get(*segment) {
            None => return Ok(Walk::Missing(*segment)),
            Some(Value::Object(next)) => target = next,
            Some(other) => return Err(blocked(segment, path, other)),
        }
    }
    Ok(Walk::Found(target))
}

/// Mutable walk over the parent segments; absence is an error here.
fn walk_mut<'v>(
    root: &'v mut Map<String, Value>,
    path: &PropertyPath<'_>,
) -> Result<&'v mut Map<String, Value>> {
    let (parents, _) = path.split_last();
    let mut target = root;
    for segment in parents {
        target = match target.get_mut(*segment) {
            None => return Err(not_found(segment, path)),
            Some(Value::Object(next)) => next,
            Some(other) => return Err(blocked(segment, path, other)),
        };
    }
    Ok(target)
}

pub fn nested_set(root: &mut Map<String, Value>, path: &str, value: Value) -> Result<()> {
    nested_set_with(root, path, value, &PathOptions::default())
}

/// Assigns `value` at `path`, creating missing intermediate objects on the way.
///
/// An intermediate that exists but is not an object (null included) is never
/// replaced; the call fails with [`Error::NullIntermediate`] instead.
pub fn nested_set_with(
    root: &mut Map<String, Value>,
    path: &str,
    value: Value,
    opts: &PathOptions,
) -> Result<()> {
    let path = PropertyPath::parse(path, opts)?;
    let (parents, last) = path.split_last();
    let mut target = root;
    for segment in parents {
        let slot = target.entry(*segment).or_insert_with(|| {
            tracing::trace!(segment = *segment, path = path.as_str(), "creating intermediate object");
            Value::Object(Map::new())
        });
        target = match slot {
            Value::Object(next) => next,
            other => return Err(blocked(segment, &path, other)),
        };
    }
    target.insert(last.to_string(), value);
    Ok(())
}

pub fn nested_get<'v>(root: &'v Map<String, Value>, path: &str) -> Result<&'v Value> {
    nested_get_with(root, path, &PathOptions::default())
}

/// Returns the value stored at `path`. A property that is present but null
/// comes back as `Value::Null`; an absent one is [`Error::PropertyNotFound`].
pub fn nested_get_with<'v>(
    root: &'v Map<String, Value>,
    path: &str,
    opts: &PathOptions,
) -> Result<&'v Value> {
    let path = PropertyPath::parse(path, opts)?;
    let target = match walk(root, &path)? {
        Walk::Found(target) => target,
        Walk::Missing(segment) => return Err(not_found(segment, &path)),
    };
    let (_, last) = path.split_last();
    target.get(last).ok_or_else(|| not_found(last, &path))
}

pub fn nested_get_mut<'v>(root: &'v mut Map<String, Value>, path: &str) -> Result<&'v mut Value> {
    nested_get_mut_with(root, path, &PathOptions::default())
}

pub fn nested_get_mut_with<'v>(
    root: &'v mut Map<String, Value>,
    path: &str,
    opts: &PathOptions,
) -> Result<&'v mut Value> {
    let path = PropertyPath::parse(path, opts)?;
    let (_, last) = path.split_last();
    walk_mut(root, &path)?
        .get_mut(last)
        .ok_or_else(|| not_found(last, &path))
}

pub fn nested_get_as<'v, T: FromNode<'v>>(root: &'v Map<String, Value>, path: &str) -> Result<T> {
    nested_get_as_with(root, path, &PathOptions::default())
}

/// Typed get. Nullable targets (`Option<_>`) turn an explicit null into `None`;
/// any other target fails with [`Error::NullValue`].
pub fn nested_get_as_with<'v, T: FromNode<'v>>(
    root: &'v Map<String, Value>,
    path: &str,
    opts: &PathOptions,
) -> Result<T> {
    let value = nested_get_with(root, path, opts)?;
    if value.is_null() {
        return T::from_null().ok_or_else(|| Error::NullValue {
            path: path.to_string(),
            expected: T::EXPECTED,
        });
    }
    T::from_node(value)
}

pub fn nested_has(root: &Map<String, Value>, path: &str) -> Result<bool> {
    nested_has_with(root, path, &PathOptions::default())
}

/// Existence check. Absence anywhere along the path is `Ok(false)`, but a
/// present intermediate that is null or a scalar is still an error: that tree
/// has a different shape from one where the property is merely missing.
pub fn nested_has_with(root: &Map<String, Value>, path: &str, opts: &PathOptions) -> Result<bool> {
    let path = PropertyPath::parse(path, opts)?;
    match walk(root, &path)? {
        Walk::Found(target) => Ok(target.contains_key(path.split_last().1)),
        Walk::Missing(_) => Ok(false),
    }
}

pub fn nested_list(root: &Map<String, Value>) -> Vec<String> {
    nested_list_with(root, &PathOptions::default())
}

/// Lists the dotted path of every non-object value under `root`, in key
/// insertion order. Empty objects contribute nothing.
pub fn nested_list_with(root: &Map<String, Value>, opts: &PathOptions) -> Vec<String> {
    fn collect(map: &Map<String, Value>, prefix: Option<&str>, delimiter: char, out: &mut Vec<String>) {
        for (key, value) in map {
            let path = match prefix {
                Some(p) => format!("{p}{delimiter}{key}"),
                None => key.clone(),
            };
            match value {
                Value::Object(child) => collect(child, Some(&path), delimiter, out),
                _ => out.push(path),
            }
        }
    }

    let mut out = Vec::new();
    collect(root, None, opts.delimiter, &mut out);
    out
}

/// Removes the property at `path` and returns it. Parents are not pruned.
pub fn nested_remove(root: &mut Map<String, Value>, path: &str) -> Result<Value> {
    nested_remove_with(root, path, &PathOptions::default())
}

pub fn nested_remove_with(
    root: &mut Map<String, Value>,
    path: &str,
    opts: &PathOptions,
) -> Result<Value> {
    let path = PropertyPath::parse(path, opts)?;
    let (_, last) = path.split_last();
    // shift_remove keeps the order of the remaining keys
    walk_mut(root, &path)?
        .shift_remove(last)
        .ok_or_else(|| not_found(last, &path))
}
