// Copyright 2025 Cowboy AI, LLC.

//! Mapped repository adapter
//!
//! Implements the repository interface over an underlying repository by
//! mapping the id, the three payloads and the returned items.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::Repository;
use crate::errors::RepositoryResult;
use crate::mapper::Mapper;
use crate::options::{ListOptions, MapOptions, QueryFilters, RequestOptions};

/// The five mapper bindings a [`MappedRepository`] threads around its calls.
///
/// All five are mandatory; pass an [`IdentityMapper`](crate::IdentityMapper)
/// explicitly where no transformation is needed.
#[derive(Debug, Clone)]
pub struct RepositoryMappers<I, C, U, P, T> {
    /// Maps external ids to backend ids
    pub id: I,
    /// Maps external create payloads to backend create payloads
    pub create: C,
    /// Maps external update payloads to backend update payloads
    pub update: U,
    /// Maps external replace payloads to backend replace payloads
    pub replace: P,
    /// Maps backend items to external items
    pub item: T,
}

/// A repository of external types backed by a repository of internal types.
///
/// Every argument goes through its mapper in the forward direction, the call
/// is delegated once, and returned items go through the item mapper. Errors
/// from mappers and from the backend are returned as they are.
pub struct MappedRepository<R, I, C, U, P, T>
where
    R: Repository + ?Sized,
{
    repository: Arc<R>,
    mappers: RepositoryMappers<I, C, U, P, T>,
    map_options: MapOptions,
}

impl<R, I, C, U, P, T> MappedRepository<R, I, C, U, P, T>
where
    R: Repository + ?Sized,
    I: Mapper<Output = R::Id>,
    C: Mapper<Output = R::Create>,
    U: Mapper<Output = R::Update>,
    P: Mapper<Output = R::Replace>,
    T: Mapper<Input = R::Item>,
{
    /// Create a new mapped repository
    ///
    /// # Arguments
    /// * `repository` - The underlying repository, shared with other holders
    /// * `mappers` - The id, payload and item mappers
    pub fn new(repository: Arc<R>, mappers: RepositoryMappers<I, C, U, P, T>) -> Self {
        Self {
            repository,
            mappers,
            map_options: MapOptions::default(),
        }
    }

    /// Set the options every mapper call receives
    pub fn with_map_options(mut self, map_options: MapOptions) -> Self {
        self.map_options = map_options;
        self
    }

    /// Get the underlying repository
    pub fn inner(&self) -> &Arc<R> {
        &self.repository
    }

    /// Get the mapper bindings
    pub fn mappers(&self) -> &RepositoryMappers<I, C, U, P, T> {
        &self.mappers
    }

    /// Get the options passed to mappers
    pub fn map_options(&self) -> &MapOptions {
        &self.map_options
    }
}

impl<R, I, C, U, P, T> Clone for MappedRepository<R, I, C, U, P, T>
where
    R: Repository + ?Sized,
    RepositoryMappers<I, C, U, P, T>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            mappers: self.mappers.clone(),
            map_options: self.map_options.clone(),
        }
    }
}

#[async_trait]
impl<R, I, C, U, P, T> Repository for MappedRepository<R, I, C, U, P, T>
where
    R: Repository + ?Sized,
    I: Mapper<Output = R::Id>,
    I::Input: Send + 'static,
    C: Mapper<Output = R::Create>,
    C::Input: Send + 'static,
    U: Mapper<Output = R::Update>,
    U::Input: Send + 'static,
    P: Mapper<Output = R::Replace>,
    P::Input: Send + 'static,
    T: Mapper<Input = R::Item>,
    T::Output: Send + 'static,
{
    type Id = I::Input;
    type Create = C::Input;
    type Update = U::Input;
    type Replace = P::Input;
    type Item = T::Output;

    async fn get_by_id(&self, id: Self::Id, options: RequestOptions) -> RepositoryResult<Self::Item> {
        let id = self.mappers.id.map(id, &self.map_options)?;
        debug!("Mapped get_by_id via {}", self.mappers.id.name());
        let item = self.repository.get_by_id(id, options).await?;
        Ok(self.mappers.item.map(item, &self.map_options)?)
    }

    async fn get_list(&self, options: ListOptions) -> RepositoryResult<Vec<Self::Item>> {
        debug!(
            "Mapped get_list offset={:?} size={:?} filters={}",
            options.offset,
            options.size,
            options.filters.len()
        );
        let items = self.repository.get_list(options).await?;
        let mapped = items
            .into_iter()
            .map(|item| self.mappers.item.map(item, &self.map_options))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(mapped)
    }

    async fn get_count(&self, filters: QueryFilters) -> RepositoryResult<u64> {
        self.repository.get_count(filters).await
    }

    async fn add(&self, payload: Self::Create, options: RequestOptions) -> RepositoryResult<Self::Item> {
        let payload = self.mappers.create.map(payload, &self.map_options)?;
        debug!("Mapped add via {}", self.mappers.create.name());
        let item = self.repository.add(payload, options).await?;
        Ok(self.mappers.item.map(item, &self.map_options)?)
    }

    async fn remove(&self, id: Self::Id, options: RequestOptions) -> RepositoryResult<()> {
        let id = self.mappers.id.map(id, &self.map_options)?;
        debug!("Mapped remove via {}", self.mappers.id.name());
        self.repository.remove(id, options).await
    }

    async fn update(
        &self,
        id: Self::Id,
        payload: Self::Update,
        options: RequestOptions,
    ) -> RepositoryResult<Self::Item> {
        let id = self.mappers.id.map(id, &self.map_options)?;
        let payload = self.mappers.update.map(payload, &self.map_options)?;
        debug!("Mapped update via {}", self.mappers.update.name());
        let item = self.repository.update(id, payload, options).await?;
        Ok(self.mappers.item.map(item, &self.map_options)?)
    }

    async fn replace(
        &self,
        id: Self::Id,
        payload: Self::Replace,
        options: RequestOptions,
    ) -> RepositoryResult<Self::Item> {
        let id = self.mappers.id.map(id, &self.map_options)?;
        let payload = self.mappers.replace.map(payload, &self.map_options)?;
        debug!("Mapped replace via {}", self.mappers.replace.name());
        let item = self.repository.replace(id, payload, options).await?;
        Ok(self.mappers.item.map(item, &self.map_options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{MapperError, MapperResult, RepositoryError};
    use crate::mapper::{FnMapper, IdentityMapper};
    use crate::repository::{InMemoryRepository, Record};
    use serde_json::{json, Map, Value};
    use uuid::Uuid;

    // Parses external string ids into backend uuids
    struct UuidParser;

    impl Mapper for UuidParser {
        type Input = String;
        type Output = Uuid;

        fn map(&self, item: String, _options: &MapOptions) -> MapperResult<Uuid> {
            Uuid::parse_str(&item).map_err(|_| MapperError::type_mismatch("uuid", item))
        }
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn names_repository(
        backend: Arc<InMemoryRepository>,
    ) -> MappedRepository<
        InMemoryRepository,
        UuidParser,
        FnMapper<String, Map<String, Value>>,
        FnMapper<String, Map<String, Value>>,
        FnMapper<String, Map<String, Value>>,
        FnMapper<Record, (String, String)>,
    > {
        let to_fields = FnMapper::new(|name: String| fields(json!({ "name": name })));
        MappedRepository::new(
            backend,
            RepositoryMappers {
                id: UuidParser,
                create: to_fields.clone(),
                update: to_fields.clone(),
                replace: to_fields,
                item: FnMapper::new(|record: Record| {
                    let name = record
                        .fields
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or_default()
                        .to_string();
                    (record.id.to_string(), name)
                }),
            },
        )
    }

    #[tokio::test]
    async fn test_crud_through_mappers() {
        let backend = Arc::new(InMemoryRepository::default());
        let repo = names_repository(Arc::clone(&backend));

        let (id, name) = repo
            .add("ada".to_string(), RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(name, "ada");

        let (_, fetched) = repo
            .get_by_id(id.clone(), RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(fetched, "ada");

        let (_, updated) = repo
            .update(id.clone(), "grace".to_string(), RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(updated, "grace");

        repo.remove(id.clone(), RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(repo.get_count(QueryFilters::new()).await.unwrap(), 0);
        assert_eq!(backend.len().await, 0);
    }

    #[tokio::test]
    async fn test_mapper_failure_aborts_before_delegation() {
        let backend = Arc::new(InMemoryRepository::default());
        let repo = names_repository(Arc::clone(&backend));

        let err = repo
            .get_by_id("not-a-uuid".to_string(), RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RepositoryError::Mapping(MapperError::type_mismatch("uuid", "not-a-uuid"))
        );
    }

    #[tokio::test]
    async fn test_not_found_passes_through() {
        let backend = Arc::new(InMemoryRepository::default());
        let repo = names_repository(backend);
        let missing = Uuid::new_v4();

        let err = repo
            .remove(missing.to_string(), RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err, RepositoryError::not_found(missing));
    }

    #[tokio::test]
    async fn test_identity_mappers_are_transparent() {
        let backend = Arc::new(InMemoryRepository::default());
        let repo = MappedRepository::new(
            Arc::clone(&backend),
            RepositoryMappers {
                id: IdentityMapper::<Uuid>::new(),
                create: IdentityMapper::<Map<String, Value>>::new(),
                update: IdentityMapper::<Map<String, Value>>::new(),
                replace: IdentityMapper::<Map<String, Value>>::new(),
                item: IdentityMapper::<Record>::new(),
            },
        );

        let direct = backend
            .add(fields(json!({ "k": 1 })), RequestOptions::default())
            .await
            .unwrap();
        let through = repo
            .get_by_id(direct.id, RequestOptions::default())
            .await
            .unwrap();
        assert_eq!(through, direct);
        assert_eq!(repo.inner().get_count(QueryFilters::new()).await.unwrap(), 1);
        assert_eq!(repo.mappers().item.name(), "identity");
        assert_eq!(repo.map_options(), &MapOptions::default());
    }
}
