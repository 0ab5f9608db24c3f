// Copyright 2025 Cowboy AI, LLC.

//! Closure-backed mapper

use std::sync::Arc;

use super::Mapper;
use crate::errors::{MapperError, MapperResult};
use crate::options::MapOptions;

// Type aliases for the held closures
type Forward<In, Out> = Arc<dyn Fn(In) -> Out + Send + Sync>;
type Reverse<In, Out> = Arc<dyn Fn(Out) -> In + Send + Sync>;

/// A mapper powered by a forward closure and an optional reverse closure
///
/// ```
/// use cim_repository::{FnMapper, Mapper, MapOptions};
///
/// let mapper = FnMapper::reversible(|x: i64| x * 3, |x: i64| x / 3);
/// assert_eq!(mapper.apply(4).unwrap(), 12);
/// assert_eq!(mapper.reverse_map(15, &MapOptions::default()).unwrap(), 5);
///
/// let one_way = FnMapper::new(|x: i64| x * 3);
/// assert!(one_way.reverse_map(3, &MapOptions::default()).is_err());
/// ```
pub struct FnMapper<In, Out> {
    forward: Forward<In, Out>,
    reverse: Option<Reverse<In, Out>>,
}

impl<In, Out> FnMapper<In, Out> {
    /// Create a one-way mapper
    pub fn new<F>(forward: F) -> Self
    where
        F: Fn(In) -> Out + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            reverse: None,
        }
    }

    /// Create a mapper with both directions
    pub fn reversible<F, R>(forward: F, reverse: R) -> Self
    where
        F: Fn(In) -> Out + Send + Sync + 'static,
        R: Fn(Out) -> In + Send + Sync + 'static,
    {
        Self {
            forward: Arc::new(forward),
            reverse: Some(Arc::new(reverse)),
        }
    }

    /// Attach a reverse closure
    pub fn with_reverse<R>(mut self, reverse: R) -> Self
    where
        R: Fn(Out) -> In + Send + Sync + 'static,
    {
        self.reverse = Some(Arc::new(reverse));
        self
    }

    /// Whether a reverse closure is present
    pub fn is_reversible(&self) -> bool {
        self.reverse.is_some()
    }
}

impl<In, Out> Clone for FnMapper<In, Out> {
    fn clone(&self) -> Self {
        Self {
            forward: Arc::clone(&self.forward),
            reverse: self.reverse.clone(),
        }
    }
}

impl<In, Out> Mapper for FnMapper<In, Out> {
    type Input = In;
    type Output = Out;

    fn map(&self, item: In, _options: &MapOptions) -> MapperResult<Out> {
        Ok((self.forward)(item))
    }

    fn reverse_map(&self, output: Out, _options: &MapOptions) -> MapperResult<In> {
        match &self.reverse {
            Some(reverse) => Ok(reverse(output)),
            None => Err(MapperError::not_supported(self.name())),
        }
    }

    fn name(&self) -> String {
        "FnMapper".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse() {
        let mapper = FnMapper::reversible(|x: f64| x * 3.0, |x: f64| x / 3.0);
        assert_eq!(mapper.apply(4.0).unwrap(), 12.0);
        assert_eq!(
            mapper.reverse_map(15.0, &MapOptions::default()).unwrap(),
            5.0
        );
        assert!(mapper.is_reversible());
    }

    #[test]
    fn test_one_way_mapper_fails_only_in_reverse() {
        let mapper = FnMapper::new(|x: i32| x.to_string());
        assert_eq!(mapper.apply(3).unwrap(), "3");
        assert!(!mapper.is_reversible());

        let err = mapper
            .reverse_map("3".to_string(), &MapOptions::default())
            .unwrap_err();
        assert_eq!(err, MapperError::not_supported("FnMapper"));
    }

    #[test]
    fn test_with_reverse_and_clone() {
        let mapper = FnMapper::new(|s: String| s.len()).with_reverse(|n: usize| "x".repeat(n));
        let cloned = mapper.clone();
        assert_eq!(cloned.apply("abcd".to_string()).unwrap(), 4);
        assert_eq!(
            cloned.reverse_map(2, &MapOptions::default()).unwrap(),
            "xx"
        );
    }
}
