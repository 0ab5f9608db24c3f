// Copyright 2025 Cowboy AI, LLC.

//! Normalization of payloads into canonical call arguments

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Mapper;
use crate::errors::{MapperError, MapperResult};
use crate::options::MapOptions;

/// A normalized constructor invocation: positional values plus keyword values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalArgs {
    /// Positional arguments, in call order
    pub args: Vec<Value>,
    /// Keyword arguments
    pub kwargs: Map<String, Value>,
}

impl CanonicalArgs {
    /// Create canonical arguments from both parts
    pub fn new(args: Vec<Value>, kwargs: Map<String, Value>) -> Self {
        Self { args, kwargs }
    }

    /// Positional arguments only
    pub fn positional(args: impl IntoIterator<Item = Value>) -> Self {
        Self {
            args: args.into_iter().collect(),
            kwargs: Map::new(),
        }
    }

    /// Keyword arguments only
    pub fn keywords(kwargs: Map<String, Value>) -> Self {
        Self {
            args: Vec::new(),
            kwargs,
        }
    }

    /// Add a keyword argument
    pub fn with_kwarg(mut self, key: impl Into<String>, value: Value) -> Self {
        self.kwargs.insert(key.into(), value);
        self
    }
}

/// Maps a JSON object or array onto [`CanonicalArgs`].
///
/// - An object becomes keyword arguments, merged over `options.defaults`.
/// - An array becomes positional arguments in element order, with
///   `options.defaults` as the keyword part.
/// - Anything else is a [`MapperError::TypeMismatch`].
///
/// Unordered collections have no JSON form of their own; they arrive as
/// arrays in whatever order their producer iterated, so the resulting
/// positional order is indeterminate for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsMapper;

impl ArgumentsMapper {
    /// Create a new arguments mapper
    pub fn new() -> Self {
        Self
    }
}

impl Mapper for ArgumentsMapper {
    type Input = Value;
    type Output = CanonicalArgs;

    fn map(&self, item: Value, options: &MapOptions) -> MapperResult<CanonicalArgs> {
        let mut kwargs = options.defaults.clone();
        match item {
            Value::Object(fields) => {
                kwargs.extend(fields);
                Ok(CanonicalArgs::new(Vec::new(), kwargs))
            }
            Value::Array(elements) => Ok(CanonicalArgs::new(elements, kwargs)),
            other => Err(MapperError::type_mismatch(
                "object or array",
                json_kind(&other),
            )),
        }
    }

    fn name(&self) -> String {
        "ArgumentsMapper".to_string()
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
