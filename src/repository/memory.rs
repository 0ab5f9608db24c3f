// Copyright 2025 Cowboy AI, LLC.

//! In-memory repository of JSON records

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use super::Repository;
use crate::errors::{RepositoryError, RepositoryResult};
use crate::options::{ListOptions, QueryFilters, RequestOptions};

/// Field name reserved for the record id
const ID_FIELD: &str = "id";

/// Configuration for the in-memory repository
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InMemoryConfig {
    /// Name used in log output
    pub name: String,
    /// Fields every created or replaced record must carry
    pub required_fields: Vec<String>,
    /// Page size used when a list request sets none (None = unbounded)
    pub default_page_size: Option<usize>,
}

impl Default for InMemoryConfig {
    fn default() -> Self {
        Self {
            name: "memory".to_string(),
            required_fields: Vec::new(),
            default_page_size: None,
        }
    }
}

impl InMemoryConfig {
    /// Set the repository name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Require a field on create and replace payloads
    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.required_fields.push(field.into());
        self
    }

    /// Set the default page size
    pub fn default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = Some(size);
        self
    }
}

/// A stored record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The record's unique identifier
    pub id: Uuid,
    /// The record's fields
    pub fields: Map<String, Value>,
    /// When the record was created
    pub created_at: DateTime<Utc>,
    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Record {
    fn matches(&self, filters: &QueryFilters) -> bool {
        filters
            .iter()
            .all(|(field, expected)| self.fields.get(field) == Some(expected))
    }
}

/// Repository keeping JSON records in insertion order
pub struct InMemoryRepository {
    config: InMemoryConfig,
    records: RwLock<IndexMap<Uuid, Record>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new(InMemoryConfig::default())
    }
}

impl InMemoryRepository {
    /// Create a new in-memory repository
    pub fn new(config: InMemoryConfig) -> Self {
        Self {
            config,
            records: RwLock::new(IndexMap::new()),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &InMemoryConfig {
        &self.config
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no records are stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn validate(&self, payload: &Map<String, Value>, complete: bool) -> RepositoryResult<()> {
        if payload.contains_key(ID_FIELD) {
            return Err(RepositoryError::invalid_payload(format!(
                "field '{ID_FIELD}' is reserved"
            )));
        }
        if complete {
            if let Some(missing) = self
                .config
                .required_fields
                .iter()
                .find(|field| !payload.contains_key(field.as_str()))
            {
                return Err(RepositoryError::invalid_payload(format!(
                    "missing required field '{missing}'"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    type Id = Uuid;
    type Create = Map<String, Value>;
    type Update = Map<String, Value>;
    type Replace = Map<String, Value>;
    type Item = Record;

    async fn get_by_id(&self, id: Uuid, _options: RequestOptions) -> RepositoryResult<Record> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(id))
    }

    async fn get_list(&self, options: ListOptions) -> RepositoryResult<Vec<Record>> {
        let records = self.records.read().await;
        let size = options
            .size
            .or(self.config.default_page_size)
            .unwrap_or(usize::MAX);
        Ok(records
            .values()
            .filter(|record| record.matches(&options.filters))
            .skip(options.offset.unwrap_or(0))
            .take(size)
            .cloned()
            .collect())
    }

    async fn get_count(&self, filters: QueryFilters) -> RepositoryResult<u64> {
        let records = self.records.read().await;
        Ok(records.values().filter(|record| record.matches(&filters)).count() as u64)
    }

    async fn add(&self, payload: Map<String, Value>, _options: RequestOptions) -> RepositoryResult<Record> {
        self.validate(&payload, true)?;
        let now = Utc::now();
        let record = Record {
            id: Uuid::new_v4(),
            fields: payload,
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.insert(record.id, record.clone());
        info!("{}: added record {}", self.config.name, record.id);
        Ok(record)
    }

    async fn remove(&self, id: Uuid, _options: RequestOptions) -> RepositoryResult<()> {
        match self.records.write().await.shift_remove(&id) {
            Some(_) => {
                debug!("{}: removed record {}", self.config.name, id);
                Ok(())
            }
            None => Err(RepositoryError::not_found(id)),
        }
    }

    async fn update(
        &self,
        id: Uuid,
        payload: Map<String, Value>,
        _options: RequestOptions,
    ) -> RepositoryResult<Record> {
        self.validate(&payload, false)?;
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(id))?;
        record.fields.extend(payload);
        record.updated_at = Utc::now();
        debug!("{}: updated record {}", self.config.name, id);
        Ok(record.clone())
    }

    async fn replace(
        &self,
        id: Uuid,
        payload: Map<String, Value>,
        _options: RequestOptions,
    ) -> RepositoryResult<Record> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(id))?;
        self.validate(&payload, true)?;
        record.fields = payload;
        record.updated_at = Utc::now();
        debug!("{}: replaced record {}", self.config.name, id);
        Ok(record.clone())
    }
}
