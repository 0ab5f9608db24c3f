// Copyright 2025 Cowboy AI, LLC.

//! # Repository Layer
//!
//! The CRUD contract every backend implements, and the adapters built on it.
//!
//! ## Components
//!
//! - **Repository**: the asynchronous CRUD capability (`get_by_id`,
//!   `get_list`, `get_count`, `add`, `remove`, `update`, `replace`)
//! - **MappedRepository**: presents a repository of external types over a
//!   repository of internal types by threading mappers around every call
//! - **InMemoryRepository**: a JSON-record backend for tests and examples

pub mod mapped;
pub mod memory;

pub use mapped::{MappedRepository, RepositoryMappers};
pub use memory::{InMemoryConfig, InMemoryRepository, Record};

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::RepositoryResult;
use crate::options::{ListOptions, QueryFilters, RequestOptions};

/// Base trait for all CRUD implementations.
///
/// Create, update and replace payloads are separate types: a full
/// replacement usually needs a complete payload while a partial update does
/// not.
#[async_trait]
pub trait Repository: Send + Sync {
    /// Item identifier
    type Id: Send + 'static;

    /// Payload used to add a new item
    type Create: Send + 'static;

    /// Payload used for a partial update
    type Update: Send + 'static;

    /// Payload used for a full replacement
    type Replace: Send + 'static;

    /// Item returned by read and write operations
    type Item: Send + 'static;

    /// Retrieve an item by its id.
    ///
    /// Fails with `ItemNotFound` if the item does not exist.
    async fn get_by_id(&self, id: Self::Id, options: RequestOptions) -> RepositoryResult<Self::Item>;

    /// Retrieve a page of items matching the filters in `options`
    async fn get_list(&self, options: ListOptions) -> RepositoryResult<Vec<Self::Item>>;

    /// Count the items matching `filters`
    async fn get_count(&self, filters: QueryFilters) -> RepositoryResult<u64>;

    /// Add a new item.
    ///
    /// Fails with `InvalidPayload` if the payload is not valid.
    async fn add(&self, payload: Self::Create, options: RequestOptions) -> RepositoryResult<Self::Item>;

    /// Remove the item identified by `id`.
    ///
    /// Fails with `ItemNotFound` if the item does not exist.
    async fn remove(&self, id: Self::Id, options: RequestOptions) -> RepositoryResult<()>;

    /// Apply a partial modification to an item
    async fn update(
        &self,
        id: Self::Id,
        payload: Self::Update,
        options: RequestOptions,
    ) -> RepositoryResult<Self::Item>;

    /// Replace an item wholesale
    async fn replace(
        &self,
        id: Self::Id,
        payload: Self::Replace,
        options: RequestOptions,
    ) -> RepositoryResult<Self::Item>;
}

#[async_trait]
impl<R: Repository + ?Sized> Repository for Arc<R> {
    type Id = R::Id;
    type Create = R::Create;
    type Update = R::Update;
    type Replace = R::Replace;
    type Item = R::Item;

    async fn get_by_id(&self, id: Self::Id, options: RequestOptions) -> RepositoryResult<Self::Item> {
        (**self).get_by_id(id, options).await
    }

    async fn get_list(&self, options: ListOptions) -> RepositoryResult<Vec<Self::Item>> {
        (**self).get_list(options).await
    }

    async fn get_count(&self, filters: QueryFilters) -> RepositoryResult<u64> {
        (**self).get_count(filters).await
    }

    async fn add(&self, payload: Self::Create, options: RequestOptions) -> RepositoryResult<Self::Item> {
        (**self).add(payload, options).await
    }

    async fn remove(&self, id: Self::Id, options: RequestOptions) -> RepositoryResult<()> {
        (**self).remove(id, options).await
    }

    async fn update(
        &self,
        id: Self::Id,
        payload: Self::Update,
        options: RequestOptions,
    ) -> RepositoryResult<Self::Item> {
        (**self).update(id, payload, options).await
    }

    async fn replace(
        &self,
        id: Self::Id,
        payload: Self::Replace,
        options: RequestOptions,
    ) -> RepositoryResult<Self::Item> {
        (**self).replace(id, payload, options).await
    }
}
