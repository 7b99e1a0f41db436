//! Entity-kind-agnostic store contract shared by every repository.

use async_trait::async_trait;

use crate::errors::ServiceError;

/// The capability set every entity store provides. `Draft` is the validated,
/// fully-defaulted record shape: everything except the store-assigned
/// identifier and bookkeeping columns.
///
/// Soft-deleted rows are invisible to every operation here.
#[async_trait]
pub trait Crud: Send + Sync {
    type Entity: Send + Sync;
    type Draft: Send;

    /// All live rows in identifier order.
    async fn list(&self) -> Result<Vec<Self::Entity>, ServiceError>;

    async fn get(&self, id: i32) -> Result<Option<Self::Entity>, ServiceError>;

    /// Persists a new row, assigning its identifier.
    async fn insert(&self, draft: Self::Draft) -> Result<Self::Entity, ServiceError>;

    /// Overwrites every mutable field of an existing row, preserving the
    /// identifier and server-assigned creation data. `None` when the id has
    /// no live row.
    async fn replace(&self, id: i32, draft: Self::Draft) -> Result<Option<Self::Entity>, ServiceError>;

    /// Marks the row deleted; returns whether a live row was removed.
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;

    async fn exists(&self, id: i32) -> Result<bool, ServiceError>;
}

/// Fetch a row or translate the legitimate absence into `NotFound` for the
/// caller to classify.
pub async fn require<R>(repo: &R, kind: &'static str, id: i32) -> Result<R::Entity, ServiceError>
where
    R: Crud + ?Sized,
{
    repo.get(id).await?.ok_or_else(|| ServiceError::not_found(kind, id))
}
