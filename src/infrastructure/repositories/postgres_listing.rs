// src/infrastructure/repositories/postgres_listing.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{
    Listing, ListingDraft, ListingId, ListingReadRepository, ListingSlug, ListingWriteRepository,
    SlugScope,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool, types::Json};

#[derive(Clone)]
pub struct PostgresListingWriteRepository {
    pool: PgPool,
}

impl PostgresListingWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresListingReadRepository {
    pool: PgPool,
}

impl PostgresListingReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ListingRow {
    id: i64,
    display_name: String,
    slug: String,
    attributes: Json<Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ListingRow {
    fn into_listing(self, scope: &SlugScope) -> DomainResult<Listing> {
        Ok(Listing {
            id: ListingId::new(self.id)?,
            scope: scope.clone(),
            display_name: self.display_name,
            slug: ListingSlug::new(self.slug)?,
            attributes: self.attributes.0,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl ListingWriteRepository for PostgresListingWriteRepository {
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing> {
        let slug = ListingSlug::new(draft.slug.clone().unwrap_or_default())?;
        let scope = draft.scope.name();

        let row = match draft.id {
            None => sqlx::query_as::<_, ListingRow>(
                "INSERT INTO listings (scope, display_name, slug, attributes, created_at, updated_at)
                 VALUES ($1, $2, $3, $4, $5, $5)
                 RETURNING id, display_name, slug, attributes, created_at, updated_at",
            )
            .bind(scope)
            .bind(&draft.display_name)
            .bind(slug.as_str())
            .bind(Json(&draft.attributes))
            .bind(draft.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| map_sqlx(err, slug.as_str()))?,
            Some(id) => sqlx::query_as::<_, ListingRow>(
                "UPDATE listings
                 SET display_name = $1, slug = $2, attributes = $3, updated_at = $4
                 WHERE id = $5 AND scope = $6
                 RETURNING id, display_name, slug, attributes, created_at, updated_at",
            )
            .bind(&draft.display_name)
            .bind(slug.as_str())
            .bind(Json(&draft.attributes))
            .bind(draft.updated_at)
            .bind(i64::from(id))
            .bind(scope)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| map_sqlx(err, slug.as_str()))?
            .ok_or_else(|| DomainError::NotFound("listing not found".into()))?,
        };

        row.into_listing(&draft.scope)
    }
}

#[async_trait]
impl ListingReadRepository for PostgresListingReadRepository {
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM listings
                 WHERE scope = $1 AND slug = $2 AND ($3::BIGINT IS NULL OR id <> $3)
             )",
        )
        .bind(scope.name())
        .bind(slug)
        .bind(exclude.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_sqlx(err, slug))
    }

    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(
            "SELECT id, display_name, slug, attributes, created_at, updated_at
             FROM listings WHERE scope = $1 AND id = $2",
        )
        .bind(scope.name())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_sqlx(err, ""))?;

        row.map(|row| row.into_listing(scope)).transpose()
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        let row = sqlx::query_as::<_, ListingRow>(
            "SELECT id, display_name, slug, attributes, created_at, updated_at
             FROM listings WHERE scope = $1 AND slug = $2",
        )
        .bind(scope.name())
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| map_sqlx(err, slug.as_str()))?;

        row.map(|row| row.into_listing(scope)).transpose()
    }
}
