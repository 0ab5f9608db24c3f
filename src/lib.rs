// Copyright 2025 Cowboy AI, LLC.

//! # CIM Repository
//!
//! A generic data-access abstraction for the Composable Information Machine.
//!
//! This crate provides two building blocks:
//! - **Repository**: an asynchronous CRUD contract (get by id, list, count,
//!   add, remove, update, replace) any backend can implement
//! - **Mapper**: a composable, optionally reversible type transform, with
//!   leaf mappers for closures, argument normalization, construction and
//!   serde models
//!
//! [`MappedRepository`] combines them: it presents a repository of external
//! types on top of a repository of internal types by mapping ids, payloads
//! and items, so CRUD logic is never rewritten per shape.
//!
//! ## Design Principles
//!
//! 1. **Closed composition**: mappers only compose with mappers, checked by the compiler
//! 2. **Mirrored reversal**: a chain reverses its steps in the opposite order
//! 3. **Transparent errors**: adapters never catch or translate failures
//! 4. **No hidden state**: adapters hold only construction-time references
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use cim_repository::{
//!     FnMapper, IdentityMapper, InMemoryRepository, MappedRepository, Record,
//!     Repository, RepositoryMappers, RequestOptions,
//! };
//! use serde_json::{json, Map, Value};
//!
//! fn to_fields(name: String) -> Map<String, Value> {
//!     let mut fields = Map::new();
//!     fields.insert("name".to_string(), json!(name));
//!     fields
//! }
//!
//! let backend = Arc::new(InMemoryRepository::default());
//! let names = MappedRepository::new(
//!     backend,
//!     RepositoryMappers {
//!         id: IdentityMapper::<uuid::Uuid>::new(),
//!         create: FnMapper::new(to_fields),
//!         update: FnMapper::new(to_fields),
//!         replace: FnMapper::new(to_fields),
//!         item: FnMapper::new(|record: Record| record.fields["name"].clone()),
//!     },
//! );
//!
//! tokio_test::block_on(async {
//!     let name = names.add("ada".to_string(), RequestOptions::default()).await.unwrap();
//!     assert_eq!(name, json!("ada"));
//! });
//! ```

#![warn(missing_docs)]

mod errors;
mod options;
pub mod mapper;
pub mod repository;

// Re-export core types
pub use errors::{CrudError, MapperError, MapperResult, RepositoryError, RepositoryResult};
pub use mapper::{
    ArgumentsMapper, BoxedMapper, CanonicalArgs, Constructible, ConstructorMapper,
    DecoratedMapper, FnMapper, IdentityMapper, JsonObjectMapper, JsonValueMapper, Mapper,
};
pub use options::{ListOptions, ListOptionsBuilder, MapOptions, QueryFilters, RequestOptions};
pub use repository::{
    InMemoryConfig, InMemoryRepository, MappedRepository, Record, Repository, RepositoryMappers,
};
