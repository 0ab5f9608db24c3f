// Copyright 2025 Cowboy AI, LLC.

use cim_repository::{
    ArgumentsMapper, CanonicalArgs, Constructible, ConstructorMapper, MapOptions, Mapper,
    MapperError,
};
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};
use test_case::test_case;

#[derive(Debug, PartialEq, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

impl Constructible for Point {
    const FIELDS: &'static [&'static str] = &["x", "y"];
}

#[test_case(json!({ "x": 3 }), vec![], json!({ "x": 3 }) ; "mapping becomes keywords")]
#[test_case(json!([3]), vec![json!(3)], json!({}) ; "list becomes positional")]
#[test_case(json!([1, "a", null]), vec![json!(1), json!("a"), Value::Null], json!({}) ; "positional order is kept")]
#[test_case(json!({}), vec![], json!({}) ; "empty mapping")]
#[test_case(json!([]), vec![], json!({}) ; "empty list")]
fn normalizes_supported_shapes(input: Value, args: Vec<Value>, kwargs: Value) {
    let normalized = ArgumentsMapper.apply(input).unwrap();
    assert_eq!(normalized.args, args);
    assert_eq!(Value::Object(normalized.kwargs), kwargs);
}

#[test_case(json!("x"), "string" ; "string is rejected")]
#[test_case(json!(3), "number" ; "number is rejected")]
#[test_case(json!(true), "boolean" ; "boolean is rejected")]
#[test_case(Value::Null, "null" ; "null is rejected")]
fn rejects_other_shapes(input: Value, found: &str) {
    let err = ArgumentsMapper.apply(input).unwrap_err();
    assert_eq!(err, MapperError::type_mismatch("object or array", found));
}

#[test]
fn defaults_become_keywords() {
    let options = MapOptions::new().with_default("x", json!(2));
    let CanonicalArgs { args, kwargs } = ArgumentsMapper.map(json!([3]), &options).unwrap();
    assert_eq!(args, vec![json!(3)]);
    assert_eq!(kwargs["x"], json!(2));
}

#[test_case(CanonicalArgs::positional([json!(4), json!(5)]) ; "all positional")]
#[test_case(CanonicalArgs::positional([json!(4)]).with_kwarg("y", json!(5)) ; "mixed")]
#[test_case(CanonicalArgs::default().with_kwarg("y", json!(5)).with_kwarg("x", json!(4)) ; "all keyword")]
fn constructor_builds_equal_values(args: CanonicalArgs) {
    let mapper = ConstructorMapper::<Point>::new();
    assert_eq!(mapper.apply(args).unwrap(), Point { x: 4, y: 5 });
}

#[test_case(CanonicalArgs::default().with_kwarg("x", json!(4)).with_kwarg("y", json!(5)).with_kwarg("z", json!(6)), "Point got an unexpected keyword argument 'z'" ; "unknown keyword")]
#[test_case(CanonicalArgs::positional([json!(1), json!(2), json!(3)]), "Point takes 2 positional arguments but 3 were given" ; "too many positional")]
#[test_case(CanonicalArgs::positional([json!(1)]).with_kwarg("x", json!(2)), "Point got multiple values for argument 'x'" ; "duplicate value")]
fn constructor_rejects_bad_bindings(args: CanonicalArgs, message: &str) {
    let err = ConstructorMapper::<Point>::new().apply(args).unwrap_err();
    assert_eq!(err, MapperError::InvalidArguments(message.to_string()));
}

#[test]
fn stray_defaults_are_not_dropped() {
    let mapper = ArgumentsMapper.chain(ConstructorMapper::<Point>::new());
    let options = MapOptions::new().with_default("colour", json!("red"));

    let err = mapper.map(json!({ "x": 1, "y": 2 }), &options).unwrap_err();
    assert_eq!(
        err,
        MapperError::InvalidArguments(
            "Point got an unexpected keyword argument 'colour'".to_string()
        )
    );
}

#[test]
fn normalizer_feeds_constructor() {
    let mapper = ArgumentsMapper.chain(ConstructorMapper::<Point>::new());
    let options = MapOptions::new().with_default("y", json!(0));

    assert_eq!(mapper.map(json!([7]), &options).unwrap(), Point { x: 7, y: 0 });
    assert_eq!(
        mapper.map(json!({ "x": 1, "y": 2 }), &options).unwrap(),
        Point { x: 1, y: 2 }
    );

    // A positional value and a default for the same parameter collide
    let err = mapper.map(json!([1, 2]), &options).unwrap_err();
    assert!(matches!(err, MapperError::InvalidArguments(_)));
}

#[test]
fn constructor_chain_has_no_reverse() {
    let mapper = ArgumentsMapper.chain(ConstructorMapper::<Point>::new());
    let err = mapper
        .reverse_map(Point { x: 1, y: 1 }, &MapOptions::default())
        .unwrap_err();
    assert_eq!(err, MapperError::not_supported("ConstructorMapper<Point>"));
}
