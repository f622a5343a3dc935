// Reading and writing JSON object files.
// Input may carry comments and trailing commas (see `lenient`); output is
// pretty-printed with keys in insertion order and names left as they are.
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use serde_json::{Map, Value};

use crate::edit::JsonKind;
use crate::error::{Error, Result};
use crate::lenient::{self, Leniency};

#[derive(Debug, Clone, Copy)]
pub struct JsonOpts {
    pub allow_comments: bool,
    pub allow_trailing_commas: bool,
    pub pretty: bool,
}

impl Default for JsonOpts {
    fn default() -> Self {
        Self {
            allow_comments: true,
            allow_trailing_commas: true,
            pretty: true,
        }
    }
}

impl JsonOpts {
    fn leniency(&self) -> Leniency {
        Leniency {
            comments: self.allow_comments,
            trailing_commas: self.allow_trailing_commas,
        }
    }
}

/// Parses `text` as a single top-level JSON object. `origin` only labels errors.
pub fn parse_object_str(text: &str, origin: &Path, opts: JsonOpts) -> Result<Map<String, Value>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let cleaned = lenient::sanitize(text, opts.leniency());
    let value: Value = serde_json::from_str(&cleaned).map_err(|source| Error::Parse {
        path: origin.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject {
            path: origin.to_path_buf(),
            found: JsonKind::of(&other),
        }),
    }
}

pub fn read_object_file(path: &Path, opts: JsonOpts) -> Result<Map<String, Value>> {
    let mut bytes = Vec::new();
    {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        file.read_to_end(&mut bytes).map_err(|e| Error::io(path, e))?;
    }
    let text = std::str::from_utf8(&bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })?;
    parse_object_str(text, path, opts)
}

pub fn to_json_string(map: &Map<String, Value>, opts: JsonOpts) -> String {
    let res = if opts.pretty {
        serde_json::to_string_pretty(map)
    } else {
        serde_json::to_string(map)
    };
    // A map of `Value`s with string keys always serializes.
    res.unwrap_or_default()
}

/// Creates or truncates `path` and writes `map` to it.
pub fn write_json_to_file(path: &Path, map: &Map<String, Value>, opts: JsonOpts) -> Result<()> {
    let s = to_json_string(map, opts);
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut w = BufWriter::new(file);
    w.write_all(s.as_bytes()).map_err(|e| Error::io(path, e))?;
    w.flush().map_err(|e| Error::io(path, e))
}
