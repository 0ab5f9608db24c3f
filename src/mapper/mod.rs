// Copyright 2025 Cowboy AI, LLC.

//! Mapper algebra
//!
//! A [`Mapper`] is a one-way, optionally reversible transform from an input
//! type to an output type. Mappers compose with [`Mapper::chain`] into a
//! [`DecoratedMapper`], a binary node whose forward direction applies the
//! first mapper and then the second, and whose reverse direction undoes them
//! in the opposite order. Deep chains are nested trees of that node and obey
//! the same laws at every depth.
//!
//! Leaf mappers:
//! - [`FnMapper`]: closure with an optional inverse closure
//! - [`ArgumentsMapper`]: normalizes a JSON object or array into [`CanonicalArgs`]
//! - [`ConstructorMapper`]: builds a [`Constructible`] type from [`CanonicalArgs`]
//! - [`JsonObjectMapper`] / [`JsonValueMapper`]: serde model conversions
//! - [`IdentityMapper`]: the unit of composition

mod arguments;
mod constructor;
mod decorated;
mod function;
mod json;

pub use arguments::{ArgumentsMapper, CanonicalArgs};
pub use constructor::{Constructible, ConstructorMapper};
pub use decorated::DecoratedMapper;
pub use function::FnMapper;
pub use json::{JsonObjectMapper, JsonValueMapper};

use std::marker::PhantomData;
use std::sync::Arc;

use crate::errors::{MapperError, MapperResult};
use crate::options::MapOptions;

/// A type-erased mapper
pub type BoxedMapper<In, Out> = Box<dyn Mapper<Input = In, Output = Out>>;

/// A transform from [`Mapper::Input`] to [`Mapper::Output`]
pub trait Mapper: Send + Sync {
    /// Type accepted by the forward direction
    type Input;

    /// Type produced by the forward direction
    type Output;

    /// Map an item to its output representation
    fn map(&self, item: Self::Input, options: &MapOptions) -> MapperResult<Self::Output>;

    /// Reverse the mapping.
    ///
    /// Mappers without an inverse keep this default and fail with
    /// [`MapperError::NotSupported`].
    fn reverse_map(&self, _output: Self::Output, _options: &MapOptions) -> MapperResult<Self::Input> {
        Err(MapperError::not_supported(self.name()))
    }

    /// Human-readable name used in errors and logs
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>())
    }

    /// Map with empty options
    fn apply(&self, item: Self::Input) -> MapperResult<Self::Output> {
        self.map(item, &MapOptions::default())
    }

    /// Chain another mapper after this one
    fn chain<M>(self, next: M) -> DecoratedMapper<Self, M>
    where
        Self: Sized,
        M: Mapper<Input = Self::Output>,
    {
        DecoratedMapper::new(self, next)
    }

    /// Chain the mapper built by `factory` after this one.
    ///
    /// The factory runs once, here; arguments it needs are captured.
    fn chain_with<F, M>(self, factory: F) -> DecoratedMapper<Self, M>
    where
        Self: Sized,
        F: FnOnce() -> M,
        M: Mapper<Input = Self::Output>,
    {
        DecoratedMapper::new(self, factory())
    }

    /// Chain the mapper built by a fallible `factory` after this one
    fn try_chain_with<F, M>(self, factory: F) -> MapperResult<DecoratedMapper<Self, M>>
    where
        Self: Sized,
        F: FnOnce() -> MapperResult<M>,
        M: Mapper<Input = Self::Output>,
    {
        Ok(DecoratedMapper::new(self, factory()?))
    }

    /// Erase the concrete mapper type
    fn boxed(self) -> BoxedMapper<Self::Input, Self::Output>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<M: Mapper + ?Sized> Mapper for Box<M> {
    type Input = M::Input;
    type Output = M::Output;

    fn map(&self, item: Self::Input, options: &MapOptions) -> MapperResult<Self::Output> {
        (**self).map(item, options)
    }

    fn reverse_map(&self, output: Self::Output, options: &MapOptions) -> MapperResult<Self::Input> {
        (**self).reverse_map(output, options)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

impl<M: Mapper + ?Sized> Mapper for Arc<M> {
    type Input = M::Input;
    type Output = M::Output;

    fn map(&self, item: Self::Input, options: &MapOptions) -> MapperResult<Self::Output> {
        (**self).map(item, options)
    }

    fn reverse_map(&self, output: Self::Output, options: &MapOptions) -> MapperResult<Self::Input> {
        (**self).reverse_map(output, options)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Identity mapper - returns its input unchanged in both directions
pub struct IdentityMapper<T> {
    _phantom: PhantomData<fn(T) -> T>,
}

impl<T> IdentityMapper<T> {
    /// Create a new identity mapper
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for IdentityMapper<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for IdentityMapper<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Mapper for IdentityMapper<T> {
    type Input = T;
    type Output = T;

    fn map(&self, item: T, _options: &MapOptions) -> MapperResult<T> {
        Ok(item)
    }

    fn reverse_map(&self, output: T, _options: &MapOptions) -> MapperResult<T> {
        Ok(output)
    }

    fn name(&self) -> String {
        "identity".to_string()
    }
}

// Strips module paths from every segment: `a::b::Foo<c::Bar>` -> `Foo<Bar>`.
pub(crate) fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        match ch {
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' => {
                out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
                segment.clear();
                out.push(ch);
            }
            _ => segment.push(ch),
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
    out
}
