// Copyright 2025 Cowboy AI, LLC.

//! Binary composition node for mappers

use super::Mapper;
use crate::errors::MapperResult;
use crate::options::MapOptions;

/// Composition of two mappers.
///
/// Forward applies `first` then `second`; reverse applies
/// `second.reverse_map` then `first.reverse_map`. Nesting this node builds
/// arbitrarily deep chains with the same laws at every level.
///
/// ```
/// use cim_repository::{DecoratedMapper, FnMapper, Mapper, MapOptions};
///
/// let left = FnMapper::reversible(|x: f64| x * 2.0, |x: f64| x / 2.0);
/// let right = FnMapper::reversible(|x: f64| x * 3.0, |x: f64| x / 3.0);
/// let decorated = DecoratedMapper::new(left, right);
///
/// assert_eq!(decorated.apply(2.0).unwrap(), 12.0);
/// assert_eq!(decorated.reverse_map(12.0, &MapOptions::default()).unwrap(), 2.0);
/// ```
#[derive(Clone)]
pub struct DecoratedMapper<F, G> {
    first: F,
    second: G,
}

impl<F, G> DecoratedMapper<F, G>
where
    F: Mapper,
    G: Mapper<Input = F::Output>,
{
    /// Create a new composed mapper `second ∘ first`
    ///
    /// # Arguments
    /// * `first` - The mapper to apply first
    /// * `second` - The mapper to apply to the output of `first`
    pub fn new(first: F, second: G) -> Self {
        Self { first, second }
    }

    /// The mapper applied first
    pub fn first(&self) -> &F {
        &self.first
    }

    /// The mapper applied second
    pub fn second(&self) -> &G {
        &self.second
    }

    /// Split back into the two operands
    pub fn into_parts(self) -> (F, G) {
        (self.first, self.second)
    }
}

impl<F, G> Mapper for DecoratedMapper<F, G>
where
    F: Mapper,
    G: Mapper<Input = F::Output>,
{
    type Input = F::Input;
    type Output = G::Output;

    fn map(&self, item: Self::Input, options: &MapOptions) -> MapperResult<Self::Output> {
        let intermediate = self.first.map(item, options)?;
        self.second.map(intermediate, options)
    }

    fn reverse_map(&self, output: Self::Output, options: &MapOptions) -> MapperResult<Self::Input> {
        let intermediate = self.second.reverse_map(output, options)?;
        self.first.reverse_map(intermediate, options)
    }

    fn name(&self) -> String {
        format!("{} ∘ {}", self.second.name(), self.first.name())
    }
}
