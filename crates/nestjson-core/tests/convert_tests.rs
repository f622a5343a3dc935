use nestjson_core::{
    Error, JsonKind, as_array, deep_clone, deep_clone_object, nested_get_as, nested_set,
};
use serde_json::{Map, Value, json};

#[test]
fn as_array_integers() {
    let arr = json!([1, 2, 3]);
    let v: Vec<i32> = as_array(&arr).unwrap();
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn as_array_strings() {
    let arr = json!(["one", "two", "three"]);
    assert_eq!(as_array::<String>(&arr).unwrap(), ["one", "two", "three"]);
    assert_eq!(as_array::<&str>(&arr).unwrap(), ["one", "two", "three"]);
}

#[test]
fn as_array_empty() {
    assert!(as_array::<f64>(&json!([])).unwrap().is_empty());
}

#[test]
fn as_array_rejects_non_arrays() {
    assert!(matches!(
        as_array::<i32>(&json!({"a": 1})).unwrap_err(),
        Error::NotAnArray { found: JsonKind::Object }
    ));
    assert!(matches!(
        as_array::<i32>(&Value::Null).unwrap_err(),
        Error::NotAnArray { found: JsonKind::Null }
    ));
}

#[test]
fn as_array_null_element_fails_even_for_nullable_targets() {
    let arr = json!([1, null, 3]);
    assert!(matches!(as_array::<i32>(&arr).unwrap_err(), Error::NullElement { index: 1 }));
    assert!(matches!(
        as_array::<Option<i32>>(&arr).unwrap_err(),
        Error::NullElement { index: 1 }
    ));
}

#[test]
fn as_array_element_type_mismatch() {
    let err = as_array::<i32>(&json!([1, "2", 3])).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "i32", found: JsonKind::String }));
    assert!(as_array::<u8>(&json!([1, 256])).unwrap_err().is_type_error());
}

#[test]
fn as_array_of_containers() {
    let arr = json!([{"a": 1}, {"b": 2}]);
    let objs: Vec<&Map<String, Value>> = as_array(&arr).unwrap();
    assert_eq!(objs[1]["b"], 2);
}

#[test]
fn clone_is_equal_and_independent() {
    let mut original = Map::new();
    original.insert("one".into(), json!(123));
    let mut copy = deep_clone_object(&original);
    assert_eq!(copy, original);

    copy.insert("one".into(), json!(456));
    assert_eq!(original["one"], 123);
}

#[test]
fn clone_deep_paths() {
    for (path, value) in [("one.two", 123), ("one.two.three", 456), ("one.two.three.four", 789)] {
        let mut original = Map::new();
        nested_set(&mut original, path, json!(value)).unwrap();
        let node = Value::Object(original.clone());

        let mut copy = deep_clone(Some(&node)).unwrap();
        assert_eq!(copy, node);
        assert_eq!(
            serde_json::to_string(&copy).unwrap(),
            serde_json::to_string(&node).unwrap()
        );

        nested_set(copy.as_object_mut().unwrap(), path, json!("changed")).unwrap();
        assert_eq!(nested_get_as::<i32>(&original, path).unwrap(), value);
        assert_ne!(copy, node);
    }
}

#[test]
fn clone_of_none_and_null() {
    assert_eq!(deep_clone(None), None);
    assert_eq!(deep_clone(Some(&Value::Null)), Some(Value::Null));
}

#[test]
fn f32_out_of_range_is_a_type_error() {
    let root = json!({"big": 1e300, "small": 1.5});
    let root = root.as_object().unwrap();
    let err = nested_get_as::<f32>(root, "big").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: "f32", found: JsonKind::Number }));
    assert_eq!(nested_get_as::<f32>(root, "small").unwrap(), 1.5);
    assert_eq!(nested_get_as::<f64>(root, "big").unwrap(), 1e300);
}
