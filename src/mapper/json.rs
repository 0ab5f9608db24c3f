// Copyright 2025 Cowboy AI, LLC.

//! Serde-backed model mappers

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::arguments::json_kind;
use super::{short_type_name, Mapper};
use crate::errors::{MapperError, MapperResult};
use crate::options::MapOptions;

/// Maps a model to its JSON object form and back
pub struct JsonObjectMapper<T> {
    _phantom: PhantomData<fn(T) -> T>,
}

impl<T> JsonObjectMapper<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a new object mapper
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for JsonObjectMapper<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mapper for JsonObjectMapper<T>
where
    T: Serialize + DeserializeOwned,
{
    type Input = T;
    type Output = Map<String, Value>;

    fn map(&self, item: T, _options: &MapOptions) -> MapperResult<Map<String, Value>> {
        match serde_json::to_value(&item)? {
            Value::Object(fields) => Ok(fields),
            other => Err(MapperError::type_mismatch("object", json_kind(&other))),
        }
    }

    fn reverse_map(&self, output: Map<String, Value>, _options: &MapOptions) -> MapperResult<T> {
        Ok(serde_json::from_value(Value::Object(output))?)
    }

    fn name(&self) -> String {
        format!(
            "JsonObjectMapper<{}>",
            short_type_name(std::any::type_name::<T>())
        )
    }
}

/// Maps an arbitrary JSON value onto a model and back
pub struct JsonValueMapper<T> {
    _phantom: PhantomData<fn(T) -> T>,
}

impl<T> JsonValueMapper<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Create a new value mapper
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for JsonValueMapper<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Mapper for JsonValueMapper<T>
where
    T: Serialize + DeserializeOwned,
{
    type Input = Value;
    type Output = T;

    fn map(&self, item: Value, _options: &MapOptions) -> MapperResult<T> {
        Ok(serde_json::from_value(item)?)
    }

    fn reverse_map(&self, output: T, _options: &MapOptions) -> MapperResult<Value> {
        Ok(serde_json::to_value(&output)?)
    }

    fn name(&self) -> String {
        format!(
            "JsonValueMapper<{}>",
            short_type_name(std::any::type_name::<T>())
        )
    }
}
