// tests/support/mocks/stores.rs
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Barrier, Notify};

use lintas_core::domain::errors::{DomainError, DomainResult};
use lintas_core::domain::listing::{
    Listing, ListingDraft, ListingId, ListingReadRepository, ListingSlug, ListingWriteRepository,
    SlugScope,
};
use lintas_core::infrastructure::repositories::InMemoryListingStore;

/* -------------------------------- RacingStore -------------------------------- */

/// 最初の `racers` 回の存在確認をバリアで揃え、全員が同じ候補を「空き」と
/// 観測してからコミットさせる。check-then-act の競合を確実に再現する。
pub struct RacingStore<S> {
    inner: S,
    gate: Barrier,
    gated_checks: AtomicUsize,
    racers: usize,
}

impl<S> RacingStore<S> {
    pub fn new(inner: S, racers: usize) -> Self {
        Self {
            inner,
            gate: Barrier::new(racers),
            gated_checks: AtomicUsize::new(0),
            racers,
        }
    }
}

#[async_trait]
impl<S> ListingReadRepository for RacingStore<S>
where
    S: ListingReadRepository,
{
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        let taken = self.inner.exists(scope, slug, exclude).await?;
        if self.gated_checks.fetch_add(1, Ordering::SeqCst) < self.racers {
            self.gate.wait().await;
        }
        Ok(taken)
    }

    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>> {
        self.inner.find_by_id(scope, id).await
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        self.inner.find_by_slug(scope, slug).await
    }
}

#[async_trait]
impl<S> ListingWriteRepository for RacingStore<S>
where
    S: ListingWriteRepository,
{
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing> {
        self.inner.commit(draft).await
    }
}

/* -------------------------------- NaiveStore -------------------------------- */

/// 一意制約を持たないストア。競合時に重複スラッグが保存されることを示すためのもの。
#[derive(Default)]
pub struct NaiveStore {
    rows: Mutex<Vec<Listing>>,
}

impl NaiveStore {
    pub fn slugs(&self, scope: &SlugScope) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.scope == *scope)
            .map(|row| row.slug.as_str().to_string())
            .collect()
    }
}

#[async_trait]
impl ListingReadRepository for NaiveStore {
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|row| {
            row.scope == *scope && row.slug.as_str() == slug && Some(row.id) != exclude
        }))
    }

    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.scope == *scope && row.id == id)
            .cloned())
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.scope == *scope && row.slug == *slug)
            .cloned())
    }
}

#[async_trait]
impl ListingWriteRepository for NaiveStore {
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing> {
        let slug = ListingSlug::new(draft.slug.clone().unwrap_or_default())?;
        let mut rows = self.rows.lock().unwrap();
        let id = ListingId::new(rows.len() as i64 + 1)?;
        let listing = Listing {
            id,
            scope: draft.scope.clone(),
            display_name: draft.display_name.clone(),
            slug,
            attributes: draft.attributes.clone(),
            created_at: draft.updated_at,
            updated_at: draft.updated_at,
        };
        rows.push(listing.clone());
        Ok(listing)
    }
}

/* -------------------------------- CountingStore -------------------------------- */

/// 存在確認された候補を順番に記録するストア
pub struct CountingStore {
    pub inner: InMemoryListingStore,
    checked: Mutex<Vec<String>>,
    commits: AtomicUsize,
}

impl CountingStore {
    pub fn new(inner: InMemoryListingStore) -> Self {
        Self {
            inner,
            checked: Mutex::new(Vec::new()),
            commits: AtomicUsize::new(0),
        }
    }

    pub fn checked(&self) -> Vec<String> {
        self.checked.lock().unwrap().clone()
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingReadRepository for CountingStore {
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        self.checked.lock().unwrap().push(slug.to_string());
        self.inner.exists(scope, slug, exclude).await
    }

    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>> {
        self.inner.find_by_id(scope, id).await
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        self.inner.find_by_slug(scope, slug).await
    }
}

#[async_trait]
impl ListingWriteRepository for CountingStore {
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing> {
        self.commits.fetch_add(1, Ordering::SeqCst);
        self.inner.commit(draft).await
    }
}

/* -------------------------------- UnavailableStore -------------------------------- */

/// すべての呼び出しが接続エラーになるストア
#[derive(Default)]
pub struct UnavailableStore {
    calls: AtomicUsize,
}

impl UnavailableStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("connection refused".into()))
    }
}

#[async_trait]
impl ListingReadRepository for UnavailableStore {
    async fn exists(
        &self,
        _scope: &SlugScope,
        _slug: &str,
        _exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        self.fail()
    }

    async fn find_by_id(
        &self,
        _scope: &SlugScope,
        _id: ListingId,
    ) -> DomainResult<Option<Listing>> {
        self.fail()
    }

    async fn find_by_slug(
        &self,
        _scope: &SlugScope,
        _slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        self.fail()
    }
}

#[async_trait]
impl ListingWriteRepository for UnavailableStore {
    async fn commit(&self, _draft: &ListingDraft) -> DomainResult<Listing> {
        self.fail()
    }
}

/* -------------------------------- GatedCommitStore -------------------------------- */

/// `release` が通知されるまでコミットを保留するストア。キャンセル検証用。
pub struct GatedCommitStore {
    pub inner: InMemoryListingStore,
    pub release: Notify,
}

impl GatedCommitStore {
    pub fn new(inner: InMemoryListingStore) -> Self {
        Self {
            inner,
            release: Notify::new(),
        }
    }
}

#[async_trait]
impl ListingReadRepository for GatedCommitStore {
    async fn exists(
        &self,
        scope: &SlugScope,
        slug: &str,
        exclude: Option<ListingId>,
    ) -> DomainResult<bool> {
        self.inner.exists(scope, slug, exclude).await
    }

    async fn find_by_id(&self, scope: &SlugScope, id: ListingId) -> DomainResult<Option<Listing>> {
        self.inner.find_by_id(scope, id).await
    }

    async fn find_by_slug(
        &self,
        scope: &SlugScope,
        slug: &ListingSlug,
    ) -> DomainResult<Option<Listing>> {
        self.inner.find_by_slug(scope, slug).await
    }
}

#[async_trait]
impl ListingWriteRepository for GatedCommitStore {
    async fn commit(&self, draft: &ListingDraft) -> DomainResult<Listing> {
        self.release.notified().await;
        self.inner.commit(draft).await
    }
}
