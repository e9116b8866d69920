use super::*;

// =============================================================================
// cache_key
// =============================================================================

#[test]
fn cache_key_without_query_is_path() {
    assert_eq!(cache_key("/api/transaction/price/total", &[]), "/api/transaction/price/total");
}

#[test]
fn cache_key_includes_query_pairs() {
    let query = vec![("date_param".to_owned(), "2025-03-13".to_owned())];
    assert_eq!(
        cache_key("/api/transaction/price/total", &query),
        "/api/transaction/price/total?date_param=2025-03-13"
    );
}

// =============================================================================
// ResponseCache
// =============================================================================

#[tokio::test]
async fn disabled_cache_never_hits() {
    let cache = ResponseCache::disabled();
    cache.insert("/k".into(), Arc::from("1"), cache.generation()).await;
    assert!(cache.get("/k").await.is_none());
    assert!(!cache.is_enabled());
}

#[tokio::test]
async fn enabled_cache_returns_inserted_body() {
    let cache = ResponseCache::new(Some(Duration::from_secs(30)));
    cache.insert("/k".into(), Arc::from("1234.5"), cache.generation()).await;
    assert_eq!(cache.get("/k").await.as_deref(), Some("1234.5"));
}

#[tokio::test]
async fn entries_expire_after_ttl() {
    let cache = ResponseCache::new(Some(Duration::from_millis(50)));
    cache.insert("/k".into(), Arc::from("v"), cache.generation()).await;
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(cache.get("/k").await.is_none());
}

#[tokio::test]
async fn invalidate_all_drops_entries() {
    let cache = ResponseCache::new(Some(Duration::from_secs(30)));
    cache.insert("/a".into(), Arc::from("1"), cache.generation()).await;
    cache.insert("/b".into(), Arc::from("2"), cache.generation()).await;
    cache.invalidate_all();
    assert!(cache.get("/a").await.is_none());
    assert!(cache.get("/b").await.is_none());
}

#[tokio::test]
async fn invalidate_all_starts_new_generation() {
    let cache = ResponseCache::new(Some(Duration::from_secs(30)));
    let before = cache.generation();
    cache.invalidate_all();
    assert_eq!(cache.generation(), before + 1);
}

#[tokio::test]
async fn body_read_before_invalidation_is_not_stored() {
    let cache = ResponseCache::new(Some(Duration::from_secs(30)));
    let read_started = cache.generation();
    cache.invalidate_all();
    cache.insert("/k".into(), Arc::from("stale"), read_started).await;
    assert!(cache.get("/k").await.is_none());

    cache.insert("/k".into(), Arc::from("fresh"), cache.generation()).await;
    assert_eq!(cache.get("/k").await.as_deref(), Some("fresh"));
}
