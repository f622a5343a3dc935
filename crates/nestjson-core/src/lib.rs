//! nestjson-core: dotted-path access to serde_json object trees
//!
//! This crate focuses on a small, well-factored surface:
//! - Nested get/set/has/remove by property path ("one.two.three") and
//!   listing of every leaf path
//! - Typed projection of nodes onto native types, and deep copies
//! - File-backed documents that remember where they were loaded from
//!
//! Keys containing the path delimiter cannot be addressed; switch the
//! delimiter through [`PathOptions`] for such trees.
//!
//! ```
//! use nestjson_core::{nested_get_as, nested_list, nested_set};
//! use serde_json::{Map, json};
//!
//! let mut obj = Map::new();
//! nested_set(&mut obj, "one.two.three.four", json!(5678)).unwrap();
//! assert_eq!(nested_get_as::<i32>(&obj, "one.two.three.four").unwrap(), 5678);
//! assert_eq!(nested_list(&obj), ["one.two.three.four"]);
//! ```
pub mod convert;
pub mod document;
pub mod edit;
pub mod error;
pub mod json;
pub mod lenient;
pub mod path;

pub use convert::{FromNode, as_array, deep_clone, deep_clone_object};
pub use document::{JsonDocument, create_new_file, read_from_file, save_to_file};
pub use edit::{
    JsonKind, nested_get, nested_get_as, nested_get_as_with, nested_get_mut, nested_get_mut_with,
    nested_get_with, nested_has, nested_has_with, nested_list, nested_list_with, nested_remove,
    nested_remove_with, nested_set, nested_set_with,
};
pub use error::{Error, Result};
pub use json::JsonOpts;
pub use path::{BlankSegments, DEFAULT_DELIMITER, PathOptions, PropertyPath};
