// Copyright 2025 Cowboy AI, LLC.

//! Construction of typed values from canonical call arguments

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{short_type_name, CanonicalArgs, Mapper};
use crate::errors::{MapperError, MapperResult};
use crate::options::MapOptions;

/// A type that can be built from [`CanonicalArgs`].
///
/// `FIELDS` lists the constructor parameters in declaration order; positional
/// arguments bind to them by index. Keywords outside `FIELDS` are rejected.
pub trait Constructible: Sized {
    /// Constructor parameter names, in positional order
    const FIELDS: &'static [&'static str];
}

/// Builds a `T` from canonical arguments
///
/// ```
/// use cim_repository::{CanonicalArgs, Constructible, ConstructorMapper, Mapper};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, Deserialize)]
/// struct Point { x: i32, y: i32 }
///
/// impl Constructible for Point {
///     const FIELDS: &'static [&'static str] = &["x", "y"];
/// }
///
/// let mapper = ConstructorMapper::<Point>::new();
/// let args = CanonicalArgs::positional([json!(4)]).with_kwarg("y", json!(5));
/// assert_eq!(mapper.apply(args).unwrap(), Point { x: 4, y: 5 });
/// ```
pub struct ConstructorMapper<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> ConstructorMapper<T>
where
    T: Constructible + DeserializeOwned,
{
    /// Create a mapper for `T`
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Bind positional and keyword arguments to `T::FIELDS`
    fn bind(args: CanonicalArgs) -> MapperResult<Map<String, Value>> {
        let CanonicalArgs { args, kwargs } = args;
        if args.len() > T::FIELDS.len() {
            return Err(MapperError::InvalidArguments(format!(
                "{} takes {} positional arguments but {} were given",
                type_label::<T>(),
                T::FIELDS.len(),
                args.len()
            )));
        }

        let mut bound = Map::new();
        for (field, value) in T::FIELDS.iter().zip(args) {
            bound.insert((*field).to_string(), value);
        }
        for (key, value) in kwargs {
            if !T::FIELDS.contains(&key.as_str()) {
                return Err(MapperError::InvalidArguments(format!(
                    "{} got an unexpected keyword argument '{key}'",
                    type_label::<T>()
                )));
            }
            if bound.contains_key(&key) {
                return Err(MapperError::InvalidArguments(format!(
                    "{} got multiple values for argument '{key}'",
                    type_label::<T>()
                )));
            }
            bound.insert(key, value);
        }
        Ok(bound)
    }
}

impl<T> Default for ConstructorMapper<T>
where
    T: Constructible + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mapper for ConstructorMapper<T>
where
    T: Constructible + DeserializeOwned,
{
    type Input = CanonicalArgs;
    type Output = T;

    fn map(&self, item: CanonicalArgs, _options: &MapOptions) -> MapperResult<T> {
        let bound = Self::bind(item)?;
        serde_json::from_value(Value::Object(bound))
            .map_err(|e| MapperError::InvalidArguments(format!("{}: {e}", type_label::<T>())))
    }

    fn name(&self) -> String {
        format!("ConstructorMapper<{}>", type_label::<T>())
    }
}

fn type_label<T>() -> String {
    short_type_name(std::any::type_name::<T>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Constructible for Point {
        const FIELDS: &'static [&'static str] = &["x", "y"];
    }

    #[test]
    fn test_positional_keyword_and_mixed_agree() {
        let mapper = ConstructorMapper::<Point>::new();
        let expected = Point { x: 4, y: 5 };

        let positional = CanonicalArgs::positional([json!(4), json!(5)]);
        let mixed = CanonicalArgs::positional([json!(4)]).with_kwarg("y", json!(5));
        let keywords = CanonicalArgs::default()
            .with_kwarg("y", json!(5))
            .with_kwarg("x", json!(4));

        assert_eq!(mapper.apply(positional).unwrap(), expected);
        assert_eq!(mapper.apply(mixed).unwrap(), expected);
        assert_eq!(mapper.apply(keywords).unwrap(), expected);
    }

    #[test]
    fn test_too_many_positional_arguments() {
        let mapper = ConstructorMapper::<Point>::new();
        let err = mapper
            .apply(CanonicalArgs::positional([json!(1), json!(2), json!(3)]))
            .unwrap_err();
        assert_eq!(
            err,
            MapperError::InvalidArguments(
                "Point takes 2 positional arguments but 3 were given".to_string()
            )
        );
    }

    #[test]
    fn test_duplicate_argument() {
        let mapper = ConstructorMapper::<Point>::new();
        let args = CanonicalArgs::positional([json!(1)]).with_kwarg("x", json!(2));
        let err = mapper.apply(args).unwrap_err();
        assert!(err.to_string().contains("multiple values for argument 'x'"));
    }

    #[test]
    fn test_unknown_keyword_is_rejected() {
        let mapper = ConstructorMapper::<Point>::new();
        let args = CanonicalArgs::default()
            .with_kwarg("x", json!(4))
            .with_kwarg("y", json!(5))
            .with_kwarg("z", json!(6));
        let err = mapper.apply(args).unwrap_err();
        assert_eq!(
            err,
            MapperError::InvalidArguments(
                "Point got an unexpected keyword argument 'z'".to_string()
            )
        );
    }

    #[test]
    fn test_missing_field() {
        let mapper = ConstructorMapper::<Point>::new();
        let err = mapper
            .apply(CanonicalArgs::positional([json!(1)]))
            .unwrap_err();
        assert!(matches!(err, MapperError::InvalidArguments(_)));
        assert!(err.to_string().contains("y"));
    }

    #[test]
    fn test_no_reverse_mapping() {
        let mapper = ConstructorMapper::<Point>::new();
        let err = mapper
            .reverse_map(Point { x: 1, y: 2 }, &MapOptions::default())
            .unwrap_err();
        assert_eq!(err, MapperError::not_supported("ConstructorMapper<Point>"));
    }
}
