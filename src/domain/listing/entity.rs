// src/domain/listing/entity.rs
use crate::domain::listing::value_objects::{ListingId, ListingSlug, SlugScope};
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A committed record in one of the listing collections.
#[derive(Debug, Clone)]
pub struct Listing {
    pub id: ListingId,
    pub scope: SlugScope,
    pub display_name: String,
    pub slug: ListingSlug,
    /// Every other collection field, stored as an opaque document.
    pub attributes: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An in-flight record on its way to the store.
///
/// `id` is present when the draft updates an existing listing and absent on
/// create. `slug` may be empty until allocation fills it.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub id: Option<ListingId>,
    pub scope: SlugScope,
    pub display_name: String,
    pub slug: Option<String>,
    pub attributes: Value,
    pub updated_at: DateTime<Utc>,
}

impl ListingDraft {
    pub fn new(scope: SlugScope, display_name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            scope,
            display_name: display_name.into(),
            slug: None,
            attributes: Value::Object(serde_json::Map::new()),
            updated_at: now,
        }
    }

    pub fn with_id(mut self, id: ListingId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Value) -> Self {
        self.attributes = attributes;
        self
    }

    /// True when the draft carries a non-blank slug.
    pub fn has_slug(&self) -> bool {
        self.slug
            .as_deref()
            .is_some_and(|slug| !slug.trim().is_empty())
    }

    pub fn set_slug(&mut self, slug: ListingSlug) {
        self.slug = Some(slug.into_inner());
    }
}
