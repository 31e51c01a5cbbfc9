// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use serde_json::Value;

use lintas_core::application::ports::{time::Clock, util::SlugGenerator};
use lintas_core::application::services::ApplicationServices;
use lintas_core::domain::listing::services::{SlugAllocator, SlugNormalizer, SlugResolver};
use lintas_core::domain::listing::{
    Listing, ListingDraft, ListingReadRepository, ListingWriteRepository, SlugScope,
};
use lintas_core::infrastructure::repositories::InMemoryListingStore;
use lintas_core::infrastructure::util::DefaultSlugGenerator;
use lintas_core::presentation::http::{routes::build_router, state::HttpState};

use super::mocks;

pub const TEST_MAX_ATTEMPTS: u32 = 1000;

/// 任意のストアの上にアプリケーションサービスを組み立てる
pub fn build_services<S>(store: Arc<S>, max_attempts: u32) -> Arc<ApplicationServices>
where
    S: ListingReadRepository + ListingWriteRepository + 'static,
{
    let read_repo: Arc<dyn ListingReadRepository> = store.clone();
    let write_repo: Arc<dyn ListingWriteRepository> = store;
    let clock: Arc<dyn Clock> = Arc::new(mocks::DummyClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    Arc::new(ApplicationServices::new(
        read_repo,
        write_repo,
        clock,
        slugger,
        max_attempts,
    ))
}

/// 任意のストアの上にアロケータだけを組み立てる
pub fn build_allocator<S>(store: Arc<S>, max_attempts: u32) -> SlugAllocator
where
    S: ListingReadRepository + ListingWriteRepository + 'static,
{
    let read_repo: Arc<dyn ListingReadRepository> = store.clone();
    let write_repo: Arc<dyn ListingWriteRepository> = store;
    SlugAllocator::new(
        SlugNormalizer::new(Arc::new(DefaultSlugGenerator)),
        SlugResolver::new(read_repo, max_attempts),
        write_repo,
    )
}

/// インメモリストアを使ったテスト用ルーター
pub fn make_test_router() -> (axum::Router, InMemoryListingStore) {
    let store = InMemoryListingStore::default();
    let services = build_services(Arc::new(store.clone()), TEST_MAX_ATTEMPTS);
    (build_router(HttpState { services }), store)
}

/// 指定したスラッグをそのまま保存する
pub async fn seed(store: &InMemoryListingStore, scope: &SlugScope, slug: &str) -> Listing {
    let draft = ListingDraft::new(scope.clone(), slug, mocks::fixed_now()).with_slug(slug);
    store.commit(&draft).await.expect("seed listing")
}

pub fn slugs_in(store: &InMemoryListingStore, scope: &SlugScope) -> Vec<String> {
    store
        .listings(scope)
        .expect("read listings")
        .into_iter()
        .map(|listing| listing.slug.into_inner())
        .collect()
}

pub fn json_request(method: Method, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// ステータスを確認して JSON ボディを返す
pub async fn read_json(resp: Response, expected_status: StatusCode) -> Value {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    if status != expected_status {
        let s = String::from_utf8_lossy(&body_bytes);
        panic!("expected {expected_status}, got {status}: {s}");
    }
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    serde_json::from_slice(&body_bytes).expect("expected valid json body")
}

/// エラーレスポンスの形式を検証する
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    let json = read_json(resp, expected_status).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field");
}
