// Copyright 2025 Cowboy AI, LLC.

//! Option structures threaded through mappers and repository operations

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Backend-defined filter predicates, passed through opaquely
pub type QueryFilters = HashMap<String, Value>;

/// Context handed to every mapper call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    /// Default keyword values a constructor-style mapper should apply
    #[serde(default)]
    pub defaults: Map<String, Value>,
    /// Anything else a mapper may want to read
    #[serde(default)]
    pub extra: HashMap<String, Value>,
}

impl MapOptions {
    /// Create empty mapper options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a default keyword value
    pub fn with_default(mut self, key: impl Into<String>, value: Value) -> Self {
        self.defaults.insert(key.into(), value);
        self
    }

    /// Add an extra context value
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Open options forwarded to single-item repository operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestOptions {
    /// Backend-specific options
    #[serde(default)]
    pub extra: HashMap<String, Value>,
}

impl RequestOptions {
    /// Create empty request options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a backend-specific option
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Look up a backend-specific option
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Paging and filtering for list operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Number of results to skip
    pub offset: Option<usize>,
    /// Maximum number of results
    pub size: Option<usize>,
    /// Filter conditions
    #[serde(default)]
    pub filters: QueryFilters,
}

impl ListOptions {
    /// Create list options with no paging and no filters
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building list options
    pub fn builder() -> ListOptionsBuilder {
        ListOptionsBuilder::default()
    }
}

/// Builder for list options
#[derive(Debug, Default)]
pub struct ListOptionsBuilder {
    options: ListOptions,
}

impl ListOptionsBuilder {
    /// Set the offset
    pub fn offset(mut self, offset: usize) -> Self {
        self.options.offset = Some(offset);
        self
    }

    /// Set the page size
    pub fn size(mut self, size: usize) -> Self {
        self.options.size = Some(size);
        self
    }

    /// Add a filter condition
    pub fn filter(mut self, field: impl Into<String>, value: Value) -> Self {
        self.options.filters.insert(field.into(), value);
        self
    }

    /// Build the list options
    pub fn build(self) -> ListOptions {
        self.options
    }
}
