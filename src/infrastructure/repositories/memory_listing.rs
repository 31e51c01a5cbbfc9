// src/infrastructure/repositories/memory_listing.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{
    Listing, ListingDraft, ListingId, ListingReadRepository, ListingSlug, ListingWriteRepository,
    SlugScope,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Default)]
struct MemoryState {
    last_id: i64,
    rows: BTreeMap<ListingId, Listing>,
}

impl MemoryState {
    fn slug_holder(&self, scope: &SlugScope, slug: &str) -> Option<ListingId> {
        self.rows
            .values()
            .find(|row| row.scope.name() == scope.name() && row.slug.as_str() == slug)
            .map(|row| row.id)
    }
}

/// Process-local listing store.
///
/// Every commit runs under one lock, so the `(scope, slug)` uniqueness check
/// and the write are atomic just like a database unique constraint.
#[derive(Clone, Default)]
pub struct InMemoryListingStore {
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryListingStore {
    fn lock(&self) -> DomainResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| DomainError::Persistence("listing store lock poisoned".into()))
    }

    /// All listings in `scope`, ordered by id.
    pub fn listings(&self, scope: &SlugScope) -> DomainResult<Vec<Listing>> {
        Ok(self
            .lock()?
            .rows
            .values()
            .filter(|row| row.scope.name() == scope.name())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ListingWriteRepository for InMemoryListingStore {
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing> {
        let slug = ListingSlug::new(draft.slug.clone().unwrap_or_default())?;
        let mut state = self.lock()?;

        if let Some(holder) = state.slug_holder(&draft.scope, slug.as_str())
            && Some(holder) != draft.id
        {
            return Err(DomainError::SlugTaken(slug.into_inner()));
        }

        let listing = match draft.id {
            Some(id) => {
                let existing = state
                    .rows
                    .get(&id)
                    .filter(|row| row.scope.name() == draft.scope.name())
                    .ok_or_else(|| DomainError::NotFound("listing not found".into()))?;
                Listing {
                    id,
                    scope: draft.scope.clone(),
                    display_name: draft.display_name.clone(),
                    slug,
                    attributes: draft.attributes.clone(),
                    created_at: existing.created_at,
                    updated_at: draft.updated_at,
                }
            }
            None => {
                state.last_id += 1;
                Listing {
                    id: ListingId::new(state.last_id)?,
                    scope: draft.scope.clone(),
                    display_name: draft.display_name.clone(),
                    slug,
                    attributes: draft.attributes.clone(),
                    created_at: draft.updated_at,
                    updated_at: draft.updated_at,
                }
            }
        };

        state.rows.insert(listing.id, listing.clone());
        Ok(listing)
    }
}

#[async_trait]
impl ListingReadRepository for InMemoryListingStore {
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        let state = self.lock()?;
        Ok(state
            .slug_holder(scope, slug)
            .is_some_and(|holder| Some(holder) != exclude))
    }

    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>> {
        let state = self.lock()?;
        Ok(state
            .rows
            .get(&id)
            .filter(|row| row.scope.name() == scope.name())
            .cloned())
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        let state = self.lock()?;
        Ok(state
            .slug_holder(scope, slug.as_str())
            .and_then(|id| state.rows.get(&id))
            .cloned())
    }
}
